//! `fly-output` — export a computed schedule for downstream consumers.
//!
//! The rendering collaborator indexes occupancy by the displayed turn, and
//! the log collaborator replays per-drone paths; both are served by two flat
//! tables written through the [`OutputWriter`] trait.
//!
//! | Module     | Contents                                    |
//! |------------|---------------------------------------------|
//! | [`row`]    | `OccupancyRow`, `PathRow`                   |
//! | [`writer`] | `OutputWriter` trait                        |
//! | [`csv`]    | `CsvWriter` backend                         |
//! | [`export`] | `export_outcome` — outcome → rows → writer  |
//! | [`error`]  | `OutputError`, `OutputResult<T>`            |

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::export_outcome;
pub use row::{OccupancyRow, PathRow};
pub use writer::OutputWriter;
