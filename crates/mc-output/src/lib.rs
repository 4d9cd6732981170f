//! `mc-output` — writes the scheduler's visit stream to disk.
//!
//! | Backend | Files created                           |
//! |---------|-----------------------------------------|
//! | CSV     | `visits.csv`, `tick_summaries.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `mc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{TickSummaryRow, VisitRow};
pub use writer::OutputWriter;
