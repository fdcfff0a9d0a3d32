//! The `OutputWriter` trait implemented by backend writers.

use crate::{OccupancyRow, OutputResult, PathRow};

/// Trait implemented by schedule output backends.
pub trait OutputWriter {
    /// Write a batch of occupancy rows.
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()>;

    /// Write a batch of per-drone path rows.
    fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
