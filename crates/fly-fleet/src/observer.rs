//! Fleet observer trait for progress reporting and change logging.

use fly_core::{DroneId, Turn};
use fly_route::FlightPath;

/// Callbacks invoked by [`FleetScheduler::run`][crate::FleetScheduler::run]
/// at key points of the scheduling loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — movement printer
///
/// ```rust,ignore
/// struct MovementPrinter;
///
/// impl FleetObserver for MovementPrinter {
///     fn on_turn_changes(&mut self, turn: Turn, moved: &[DroneId]) {
///         println!("{turn}: {} drones moved", moved.len());
///     }
/// }
/// ```
pub trait FleetObserver {
    /// Called once per drone, right after its path is booked.
    fn on_drone_routed(&mut self, _drone: DroneId, _path: &FlightPath) {}

    /// Called once per turn (from turn 1), with the drones whose location
    /// changed since the previous turn.  Absorbed drones sitting at the end
    /// hub no longer appear.
    fn on_turn_changes(&mut self, _turn: Turn, _moved: &[DroneId]) {}

    /// Called once after absorption, with the final schedule span.
    fn on_complete(&mut self, _turn_count: u32) {}
}

/// A [`FleetObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
