//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `visits.csv`
//! - `tick_summaries.csv`
//!
//! Absent optional values are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, VisitRow};

/// Writes the visit stream to two CSV files.
pub struct CsvWriter {
    visits:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut visits = Writer::from_path(dir.join("visits.csv"))?;
        visits.write_record(["tick", "doctor", "earliest", "monk", "forwarded_to", "slot_cleared"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "admissions"])?;

        Ok(Self {
            visits,
            summaries,
            finished: false,
        })
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_visit(&mut self, row: &VisitRow) -> OutputResult<()> {
        self.visits.write_record(&[
            row.tick.to_string(),
            row.doctor.to_string(),
            opt(row.earliest),
            opt(row.monk),
            opt(row.forwarded_to),
            (row.slot_cleared as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[row.tick.to_string(), row.admissions.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.visits.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
