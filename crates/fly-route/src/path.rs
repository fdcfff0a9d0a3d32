//! `FlightPath` — one drone's schedule, one site per turn.

use fly_core::{DroneId, Site, Turn};
use fly_network::NetworkModel;
use fly_occupancy::OccupancyLedger;

/// The finalized path of a single drone.
///
/// `steps[t]` is the site the drone occupies at turn `t`.  The path opens
/// with a run of the start hub — turn 0 plus one repeat per turn of start
/// delay — and then alternates hubs and gate links until the end hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightPath {
    steps: Vec<Site>,
}

impl FlightPath {
    /// Wrap a finalized step sequence.
    ///
    /// # Panics
    /// Panics in debug mode if `steps` is empty or does not begin at a hub.
    pub fn new(steps: Vec<Site>) -> Self {
        debug_assert!(!steps.is_empty(), "a path covers at least turn 0");
        debug_assert!(steps[0].is_hub(), "a path departs from a hub");
        Self { steps }
    }

    /// Number of turns the path spans (start delay included).
    #[inline]
    pub fn len(&self) -> u32 {
        self.steps.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps in turn order.
    pub fn steps(&self) -> &[Site] {
        &self.steps
    }

    /// The site occupied at `turn`, or `None` past the end of the path.
    #[inline]
    pub fn site_at(&self, turn: Turn) -> Option<Site> {
        self.steps.get(turn.index()).copied()
    }

    /// The site occupied at `turn`, clamped to the final step.
    ///
    /// Past the end of the path the drone sits absorbed at the end hub, so
    /// the final step is the correct answer for any later turn.
    #[inline]
    pub fn position_at(&self, turn: Turn) -> Site {
        self.steps
            .get(turn.index())
            .or_else(|| self.steps.last())
            .copied()
            .expect("path is never empty")
    }

    /// Turns spent waiting at the departure hub before the first move.
    pub fn delay(&self) -> u32 {
        let first = self.steps[0];
        self.steps.iter().take_while(|&&s| s == first).count() as u32 - 1
    }

    // ── Booking ───────────────────────────────────────────────────────────

    /// Book every hop of this path into the ledger.
    ///
    /// Turn 0 is skipped — the fleet scheduler places every drone on the
    /// start hub when the fleet is created.  From turn 1 on:
    /// - a waiting turn books the start hub again;
    /// - a hub-to-hub hop books the traversed link *and* the arrival hub at
    ///   the arrival turn;
    /// - a gate hop books the link at its own turn, and the hub follows at
    ///   the next turn as a plain step.
    pub fn book(&self, net: &NetworkModel, ledger: &mut OccupancyLedger, drone: DroneId) {
        for t in 1..self.steps.len() {
            let here = self.steps[t];
            let prev = self.steps[t - 1];
            let turn = Turn(t as u32);

            ledger.commit(here, turn, drone);

            if let (Site::Hub(a), Site::Hub(b)) = (prev, here) {
                if a != b {
                    let link = net
                        .link_between(a, b)
                        .expect("consecutive path hubs are adjacent");
                    ledger.commit(Site::Link(link), turn, drone);
                }
            }
        }
    }
}
