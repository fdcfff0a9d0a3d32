//! Walk a finished schedule and feed its rows to an [`OutputWriter`].

use fly_core::{HubId, LinkId, Site, Turn};
use fly_fleet::FleetOutcome;
use fly_network::NetworkModel;

use crate::writer::OutputWriter;
use crate::{OccupancyRow, OutputResult, PathRow};

/// Export the complete schedule: every (site, turn, occupant) triple from the
/// ledger, then every step of every drone's path, then [`finish`] the writer.
///
/// Rows come out in a fixed order (hubs before links, both in arena order,
/// turns ascending) so repeated exports of the same outcome are identical.
///
/// [`finish`]: OutputWriter::finish
pub fn export_outcome<W: OutputWriter>(
    writer: &mut W,
    net: &NetworkModel,
    outcome: &FleetOutcome,
) -> OutputResult<()> {
    let mut rows = Vec::new();

    for i in 0..net.hub_count() {
        collect_site(&mut rows, net, outcome, Site::Hub(HubId(i as u32)), "hub");
    }
    for i in 0..net.link_count() {
        collect_site(&mut rows, net, outcome, Site::Link(LinkId(i as u32)), "link");
    }
    writer.write_occupancy(&rows)?;

    let mut rows = Vec::new();
    for (&drone, path) in outcome.drones.iter().zip(&outcome.paths) {
        for (t, &site) in path.steps().iter().enumerate() {
            rows.push(PathRow {
                drone: drone.0,
                turn:  t as u32,
                site:  net.site_name(site),
            });
        }
    }
    writer.write_paths(&rows)?;

    writer.finish()
}

fn collect_site(
    rows: &mut Vec<OccupancyRow>,
    net: &NetworkModel,
    outcome: &FleetOutcome,
    site: Site,
    kind: &'static str,
) {
    let name = net.site_name(site);
    for t in 0..outcome.turn_count {
        for &drone in outcome.ledger.occupants(site, Turn(t)) {
            rows.push(OccupancyRow {
                kind,
                site: name.clone(),
                turn: t,
                drone: drone.0,
            });
        }
    }
}
