//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `occupancy.csv` — one row per (site, turn, occupant)
//! - `paths.csv` — one row per (drone, turn)

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OccupancyRow, OutputResult, PathRow};

/// Writes schedule output to two CSV files.
pub struct CsvWriter {
    occupancy: Writer<File>,
    paths:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut occupancy = Writer::from_path(dir.join("occupancy.csv"))?;
        occupancy.write_record(["kind", "site", "turn", "drone"])?;

        let mut paths = Writer::from_path(dir.join("paths.csv"))?;
        paths.write_record(["drone", "turn", "site"])?;

        Ok(Self {
            occupancy,
            paths,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()> {
        for row in rows {
            self.occupancy.write_record([
                row.kind.to_string(),
                row.site.clone(),
                row.turn.to_string(),
                row.drone.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        for row in rows {
            self.paths.write_record([
                row.drone.to_string(),
                row.turn.to_string(),
                row.site.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.occupancy.flush()?;
        self.paths.flush()?;
        Ok(())
    }
}
