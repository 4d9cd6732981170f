//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use mc_core::Tick;
use mc_sim::{SimObserver, VisitEvent};

use crate::row::{TickSummaryRow, VisitRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every visit event and tick summary to an
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows:       0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Visit rows handed to the writer so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_visit(&mut self, event: &VisitEvent) {
        let result = self.writer.write_visit(&VisitRow::from(event));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: Tick, admitted: usize) {
        let row = TickSummaryRow { tick: tick.0, admissions: admitted as u64 };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
