//! Diagnostic records emitted once per doctor per tick.

use mc_core::{DoctorId, MonkId, Tick};

/// One doctor's processing attempt during one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitEvent {
    pub doctor:    DoctorId,
    pub tick:      Tick,
    /// Earliest slot in the doctor's schedule, `None` if it was empty.
    pub earliest:  Option<Tick>,
    /// Set when a monk was admitted.
    pub admission: Option<Admission>,
}

/// A monk admitted by a doctor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Admission {
    pub monk:         MonkId,
    /// Arrival tick of the slot the monk was taken from.
    pub slot:         Tick,
    /// Doctor the monk was forwarded to, `None` if its itinerary is done.
    pub forwarded_to: Option<DoctorId>,
    /// `true` if this admission emptied (and erased) the slot.
    pub slot_cleared: bool,
}

impl VisitEvent {
    /// `true` if a slot existed but its arrival tick is still in the future.
    pub fn not_arrived(&self) -> bool {
        self.admission.is_none() && self.earliest.is_some_and(|t| t > self.tick)
    }
}
