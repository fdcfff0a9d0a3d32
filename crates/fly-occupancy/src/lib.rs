//! `fly-occupancy` — the per-(site, turn) occupant ledger.
//!
//! The ledger is the single source of truth for "who is where, when".  It is
//! written by exactly one planner at a time (fleet planning is strictly
//! sequential) and grows monotonically: occupants are appended, never
//! removed.
//!
//! | Module     | Contents                                |
//! |------------|-----------------------------------------|
//! | [`ledger`] | `OccupancyLedger`, `TurnSeries`         |

pub mod ledger;


pub use ledger::{OccupancyLedger, TurnSeries};
