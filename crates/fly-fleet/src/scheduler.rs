//! The `FleetScheduler` and its run loop.

use fly_core::{DroneId, DroneSeq, Site, Turn};
use fly_network::NetworkModel;
use fly_occupancy::OccupancyLedger;
use fly_route::{FlightPath, Planner};

use crate::{FleetObserver, FleetResult};

// ── FleetOutcome ──────────────────────────────────────────────────────────────

/// The finished schedule, handed to the rendering and logging collaborators.
#[derive(Debug)]
pub struct FleetOutcome {
    /// Every drone in creation (= planning) order.
    pub drones: Vec<DroneId>,

    /// One path per drone, parallel to `drones`.
    pub paths: Vec<FlightPath>,

    /// The complete occupancy ledger, padded and absorbed.
    pub ledger: OccupancyLedger,

    /// Number of turns the schedule spans; valid turns are
    /// `0..turn_count`.
    pub turn_count: u32,
}

impl FleetOutcome {
    /// The path of `drone`, if it belongs to this fleet.
    pub fn path_of(&self, drone: DroneId) -> Option<&FlightPath> {
        self.drones
            .iter()
            .position(|&d| d == drone)
            .map(|i| &self.paths[i])
    }
}

// ── FleetScheduler ────────────────────────────────────────────────────────────

/// Drives fleet creation and sequential per-drone planning.
///
/// # Type parameter
///
/// `P` must implement [`Planner`] (e.g. [`fly_route::BfsPlanner`]).  Swap it
/// at compile time for a different search strategy with no runtime overhead.
pub struct FleetScheduler<P: Planner> {
    network: NetworkModel,
    planner: P,
}

impl<P: Planner> FleetScheduler<P> {
    pub fn new(network: NetworkModel, planner: P) -> Self {
        Self { network, planner }
    }

    pub fn network(&self) -> &NetworkModel {
        &self.network
    }

    /// Plan the whole fleet and produce the finished schedule.
    ///
    /// Drone ids come from `seq`, which the caller owns — two fleets given
    /// independent sequences never share a counter.  Drones are planned
    /// strictly in creation order (FIFO, no reordering): each drone's search
    /// sees every previously committed booking and none of the future ones.
    ///
    /// Fails the moment any drone exhausts the planner's retry ceiling; the
    /// partial schedule is discarded with the error.
    pub fn run<O: FleetObserver>(
        &self,
        seq: &mut DroneSeq,
        observer: &mut O,
    ) -> FleetResult<FleetOutcome> {
        let start = Site::Hub(self.network.start_hub());
        let mut ledger = OccupancyLedger::new(&self.network);

        // ── Fleet creation: everyone on the start hub at turn 0 ───────────
        let drones: Vec<DroneId> = (0..self.network.fleet_size())
            .map(|_| seq.next_id())
            .collect();
        for &drone in &drones {
            ledger.commit(start, Turn::ZERO, drone);
        }

        // ── Sequential planning ───────────────────────────────────────────
        let mut paths: Vec<FlightPath> = Vec::with_capacity(drones.len());
        let mut turn_count = 0u32;

        for &drone in &drones {
            let path = self.planner.plan(&self.network, &ledger, drone)?;
            path.book(&self.network, &mut ledger, drone);
            turn_count = turn_count.max(path.len());
            observer.on_drone_routed(drone, &path);
            paths.push(path);
        }

        // ── Finalize the ledger ───────────────────────────────────────────
        ledger.pad_to(turn_count);
        ledger.absorb_at_end(self.network.end_hub(), turn_count);

        // ── Per-turn change log ───────────────────────────────────────────
        for t in 1..turn_count {
            let moved: Vec<DroneId> = drones
                .iter()
                .zip(&paths)
                .filter(|(_, path)| path.position_at(Turn(t)) != path.position_at(Turn(t - 1)))
                .map(|(&drone, _)| drone)
                .collect();
            observer.on_turn_changes(Turn(t), &moved);
        }
        observer.on_complete(turn_count);

        Ok(FleetOutcome {
            drones,
            paths,
            ledger,
            turn_count,
        })
    }
}
