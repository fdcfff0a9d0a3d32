//! The `Planner` trait and the default time-expanded BFS implementation.
//!
//! # Search space
//!
//! Vertices are [`Site`]s: hubs, plus links acting as transient gate vertices
//! while a drone clears entry into a restricted hub.  Hop count doubles as
//! relative time — a vertex reached at hop `h` is occupied at turn
//! `delay + h`, so availability is probed against the ledger at the arrival
//! turn while expanding.
//!
//! # Tie-break bookkeeping
//!
//! Edge weights are uniform, so a FIFO frontier visits vertices in
//! non-decreasing hop order.  Instead of a single best predecessor, each
//! vertex keeps the whole tie set of minimum-hop predecessors with the
//! priority score achieved through each; a vertex re-enters the frontier
//! when a same-hop predecessor strictly improves its best score, so improved
//! scores propagate before reconstruction.  Once the end hub is popped its
//! hop count becomes a ceiling: deeper vertices are discarded unexpanded,
//! while queued vertices at or below the ceiling still run to complete the
//! tie sets at the final level.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use fly_core::{DroneId, Site, Turn, Zone};
use fly_network::NetworkModel;
use fly_occupancy::OccupancyLedger;

use crate::{FlightPath, RouteError, RouteResult};

/// Upper bound on the start delay tried before a drone is declared
/// unroutable.
pub const MAX_START_DELAY: u32 = 10_000;

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable single-drone route search.
///
/// The fleet scheduler invokes `plan` once per drone, in creation order,
/// against the ledger state left by all previously planned drones.
pub trait Planner {
    /// Find a start-to-end path for `drone` that respects every booking
    /// already in `ledger`, or fail naming the drone.
    fn plan(
        &self,
        net: &NetworkModel,
        ledger: &OccupancyLedger,
        drone: DroneId,
    ) -> RouteResult<FlightPath>;
}

// ── BfsPlanner ────────────────────────────────────────────────────────────────

/// Default planner: time-expanded BFS with wait-and-retry.
///
/// Tries start delay 0 first; whenever the frontier drains without reaching
/// the end hub, the whole search restarts with one more waiting turn at the
/// start hub, up to [`MAX_START_DELAY`].
pub struct BfsPlanner;

impl Planner for BfsPlanner {
    fn plan(
        &self,
        net: &NetworkModel,
        ledger: &OccupancyLedger,
        drone: DroneId,
    ) -> RouteResult<FlightPath> {
        for delay in 0..=MAX_START_DELAY {
            if let Some(steps) = search(net, ledger, delay) {
                return Ok(FlightPath::new(steps));
            }
        }
        Err(RouteError::NoRoute { drone, max_delay: MAX_START_DELAY })
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// Per-vertex search bookkeeping.
struct VertexRec {
    /// Minimum hop count from the start hub.
    step: u32,
    /// Highest priority score among the tie-set predecessors.
    best_score: u32,
    /// Every minimum-hop predecessor, with the score achieved through it.
    parents: Vec<(Site, u32)>,
}

/// One BFS pass at a fixed start delay.  Returns the full per-turn step
/// sequence (waiting run included), or `None` if the end hub is unreachable
/// under the current ledger.
fn search(net: &NetworkModel, ledger: &OccupancyLedger, delay: u32) -> Option<Vec<Site>> {
    let start = Site::Hub(net.start_hub());
    let goal  = Site::Hub(net.end_hub());

    let mut recs: FxHashMap<Site, VertexRec> = FxHashMap::default();
    recs.insert(start, VertexRec { step: 0, best_score: 0, parents: Vec::new() });

    let mut frontier: VecDeque<Site> = VecDeque::new();
    frontier.push_back(start);

    let mut ceiling: Option<u32> = None;

    while let Some(vertex) = frontier.pop_front() {
        let (step, score) = {
            let rec = &recs[&vertex];
            (rec.step, rec.best_score)
        };

        if vertex == goal {
            // First pop fixes the hop ceiling; the goal itself never expands.
            if ceiling.is_none() {
                ceiling = Some(step);
            }
            continue;
        }
        if ceiling.is_some_and(|c| step > c) {
            continue;
        }

        // The turn at which a successor of this vertex would be occupied.
        let arrival = Turn(delay + step + 1);

        match vertex {
            Site::Hub(hub) => {
                for link in net.links_of(hub) {
                    if !ledger.is_available(net, Site::Link(link), arrival) {
                        continue;
                    }
                    let other = net.other_endpoint(link, hub);
                    if net.zone(other) == Zone::Restricted {
                        // Wait at the gate: the link becomes the frontier
                        // vertex and the hub's availability is judged only
                        // when the gate itself expands, one turn later.
                        relax(&mut recs, &mut frontier, Site::Link(link), vertex, step + 1, score);
                    } else {
                        if !ledger.is_available(net, Site::Hub(other), arrival) {
                            continue;
                        }
                        let entered = score + zone_bonus(net.zone(other));
                        relax(&mut recs, &mut frontier, Site::Hub(other), vertex, step + 1, entered);
                    }
                }
            }
            Site::Link(link) => {
                // Both endpoints are probed, including the hub the drone
                // came from; the origin contact sits above that hub's
                // recorded minimum hop, so relax discards it and only the
                // far endpoint can extend the path.
                for hub in net.link(link).endpoints() {
                    if !ledger.is_available(net, Site::Hub(hub), arrival) {
                        continue;
                    }
                    let entered = score + zone_bonus(net.zone(hub));
                    relax(&mut recs, &mut frontier, Site::Hub(hub), vertex, step + 1, entered);
                }
            }
        }
    }

    if !recs.contains_key(&goal) {
        return None;
    }
    Some(reconstruct(&recs, start, goal, delay))
}

#[inline]
fn zone_bonus(zone: Zone) -> u32 {
    (zone == Zone::Priority) as u32
}

/// Record `pred → vertex` at hop `step` with `score`.
///
/// First contact enqueues the vertex.  A repeat contact at the same hop
/// extends the tie set, and re-enqueues only when the score strictly beats
/// the best already recorded — that re-expansion is what propagates improved
/// scores through vertices processed earlier at this level.  Contacts at any
/// other hop count are ignored; the tie set belongs to the minimum level.
fn relax(
    recs: &mut FxHashMap<Site, VertexRec>,
    frontier: &mut VecDeque<Site>,
    vertex: Site,
    pred: Site,
    step: u32,
    score: u32,
) {
    use std::collections::hash_map::Entry;

    match recs.entry(vertex) {
        Entry::Vacant(slot) => {
            slot.insert(VertexRec {
                step,
                best_score: score,
                parents: vec![(pred, score)],
            });
            frontier.push_back(vertex);
        }
        Entry::Occupied(mut slot) => {
            let rec = slot.get_mut();
            if rec.step != step {
                return;
            }
            rec.parents.push((pred, score));
            if score > rec.best_score {
                rec.best_score = score;
                frontier.push_back(vertex);
            }
        }
    }
}

/// Walk backward from the goal taking the strictly highest-scoring
/// predecessor at each vertex (earliest recorded wins a score tie), then
/// reverse and prepend the waiting run at the start hub.
fn reconstruct(
    recs: &FxHashMap<Site, VertexRec>,
    start: Site,
    goal: Site,
    delay: u32,
) -> Vec<Site> {
    let mut rev = vec![goal];
    let mut cur = goal;
    loop {
        let rec = &recs[&cur];
        if rec.parents.is_empty() {
            break; // the start vertex
        }
        let mut best = rec.parents[0];
        for &candidate in &rec.parents[1..] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        cur = best.0;
        rev.push(cur);
    }
    rev.reverse();

    let mut steps = vec![start; delay as usize];
    steps.extend(rev);
    steps
}
