//! `fly-route` — one drone's path through the occupied network.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`path`]    | `FlightPath` (one site per turn) and its booking pass   |
//! | [`planner`] | `Planner` trait, `BfsPlanner` time-expanded search      |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                          |
//!
//! # Pluggability
//!
//! The fleet scheduler calls planning via the [`Planner`] trait, so
//! applications can swap in custom implementations (joint multi-drone
//! optimizers, heuristic searches) without touching the fleet loop.  The
//! default [`BfsPlanner`] is a greedy wait-and-retry breadth-first search.

pub mod error;
pub mod path;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use path::FlightPath;
pub use planner::{BfsPlanner, Planner, MAX_START_DELAY};
