//! The occupancy ledger.
//!
//! # Data layout
//!
//! Two `Vec<TurnSeries>` run parallel to the network's hub and link arenas,
//! so a `Site` resolves to its series by direct index.  Each series is a
//! growable `Vec` of per-turn occupant lists: turns are contiguous from 0,
//! and any turn past the end of a series reads as empty.  This makes
//! arbitrary look-ahead probes during the time-expanded search cheap — no
//! entry is materialized until something is actually booked.

use fly_core::{DroneId, HubId, Site, Turn};
use fly_network::NetworkModel;

const NO_OCCUPANTS: &[DroneId] = &[];

// ── TurnSeries ────────────────────────────────────────────────────────────────

/// Occupant lists for one site, indexed by turn.
#[derive(Debug, Clone, Default)]
pub struct TurnSeries {
    turns: Vec<Vec<DroneId>>,
}

impl TurnSeries {
    /// Occupants at `turn`; empty for any turn never booked.
    #[inline]
    pub fn occupants(&self, turn: Turn) -> &[DroneId] {
        self.turns.get(turn.index()).map_or(NO_OCCUPANTS, Vec::as_slice)
    }

    /// Append `drone` to the occupant list at `turn`, growing the series
    /// with empty turns as needed.
    pub fn commit(&mut self, turn: Turn, drone: DroneId) {
        if self.turns.len() <= turn.index() {
            self.turns.resize_with(turn.index() + 1, Vec::new);
        }
        self.turns[turn.index()].push(drone);
    }

    /// Number of turns with a materialized (possibly empty) entry.
    #[inline]
    pub fn turn_len(&self) -> usize {
        self.turns.len()
    }

    /// Extend with empty occupant lists so every turn in `0..turn_count`
    /// has an entry.
    pub fn pad_to(&mut self, turn_count: u32) {
        if self.turns.len() < turn_count as usize {
            self.turns.resize_with(turn_count as usize, Vec::new);
        }
    }
}

// ── OccupancyLedger ───────────────────────────────────────────────────────────

/// Mapping from (site, turn) to the drones occupying that site at that turn.
///
/// Invariants maintained by the planning pipeline:
/// - occupant count never exceeds the site's declared capacity;
/// - blocked hubs are never occupied;
/// - once a drone occupies the end hub it occupies it at every later turn
///   (applied once, by [`absorb_at_end`](Self::absorb_at_end)).
#[derive(Debug, Clone)]
pub struct OccupancyLedger {
    hubs:  Vec<TurnSeries>,
    links: Vec<TurnSeries>,
}

impl OccupancyLedger {
    /// An empty ledger sized for `net`'s arenas.
    pub fn new(net: &NetworkModel) -> Self {
        Self {
            hubs:  vec![TurnSeries::default(); net.hub_count()],
            links: vec![TurnSeries::default(); net.link_count()],
        }
    }

    #[inline]
    fn series(&self, site: Site) -> &TurnSeries {
        match site {
            Site::Hub(h)  => &self.hubs[h.index()],
            Site::Link(l) => &self.links[l.index()],
        }
    }

    #[inline]
    fn series_mut(&mut self, site: Site) -> &mut TurnSeries {
        match site {
            Site::Hub(h)  => &mut self.hubs[h.index()],
            Site::Link(l) => &mut self.links[l.index()],
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Occupants of `site` at `turn`.
    #[inline]
    pub fn occupants(&self, site: Site, turn: Turn) -> &[DroneId] {
        self.series(site).occupants(turn)
    }

    /// Can one more drone occupy `site` at `turn`?
    ///
    /// Always false for blocked hubs, whatever their declared capacity.
    pub fn is_available(&self, net: &NetworkModel, site: Site, turn: Turn) -> bool {
        if let Site::Hub(h) = site {
            if net.is_blocked(h) {
                return false;
            }
        }
        (self.series(site).occupants(turn).len() as u32) < net.capacity(site)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Book `drone` onto `site` at `turn`.  Append-only.
    pub fn commit(&mut self, site: Site, turn: Turn, drone: DroneId) {
        self.series_mut(site).commit(turn, drone);
    }

    /// Materialize empty entries so every site covers `0..turn_count`.
    ///
    /// Run once after all drones are routed, so consumers can index any
    /// (site, turn) pair without bounds surprises.
    pub fn pad_to(&mut self, turn_count: u32) {
        for series in self.hubs.iter_mut().chain(self.links.iter_mut()) {
            series.pad_to(turn_count);
        }
    }

    /// Terminal absorption at the end hub: every occupant present at
    /// turn t−1 is carried into turn t if not already there, for
    /// t in 1..turn_count.
    ///
    /// Run once, after all drones are individually routed.  End hub only —
    /// no other site is sticky.
    pub fn absorb_at_end(&mut self, end: HubId, turn_count: u32) {
        let series = &mut self.hubs[end.index()];
        series.pad_to(turn_count);
        for t in 1..turn_count as usize {
            let carried: Vec<DroneId> = series.turns[t - 1]
                .iter()
                .copied()
                .filter(|d| !series.turns[t].contains(d))
                .collect();
            series.turns[t].extend(carried);
        }
    }
}
