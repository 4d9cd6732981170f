//! Plain data row types written by output backends.

use mc_sim::VisitEvent;

/// One doctor's processing attempt in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitRow {
    pub tick:         u64,
    pub doctor:       u32,
    /// Earliest waiting slot; `None` if the schedule was empty.
    pub earliest:     Option<u64>,
    /// Admitted monk, if any.
    pub monk:         Option<u32>,
    /// Next doctor of the admitted monk; `None` if nobody was admitted or
    /// the monk finished.
    pub forwarded_to: Option<u32>,
    pub slot_cleared: bool,
}

impl From<&VisitEvent> for VisitRow {
    fn from(event: &VisitEvent) -> Self {
        let admission = event.admission.as_ref();
        Self {
            tick:         event.tick.0,
            doctor:       event.doctor.0,
            earliest:     event.earliest.map(|t| t.0),
            monk:         admission.map(|a| a.monk.0),
            forwarded_to: admission.and_then(|a| a.forwarded_to).map(|d| d.0),
            slot_cleared: admission.is_some_and(|a| a.slot_cleared),
        }
    }
}

/// Summary of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    pub admissions: u64,
}
