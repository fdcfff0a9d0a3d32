//! `fly-fleet` — the fleet-wide scheduling loop.
//!
//! # The sequential contract
//!
//! ```text
//! create fleet  → every drone on the start hub at turn 0
//! for each drone, in creation order:
//!   ① plan     — time-expanded search against all bookings so far
//!   ② book     — commit every hop of the path into the ledger
//! pad ledger    → empty entries up to turn_count − 1
//! absorb        → end-hub occupants carry forward turn by turn
//! observe       → per-turn changed-drone sets, final turn_count
//! ```
//!
//! Planning is never parallelized: committing one drone's bookings before
//! the next drone is planned is the mechanism that enforces capacity across
//! the fleet.  The ledger has exactly one writer at a time, by construction.

pub mod error;
pub mod observer;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{FleetError, FleetResult};
pub use observer::{FleetObserver, NoopObserver};
pub use scheduler::{FleetOutcome, FleetScheduler};
