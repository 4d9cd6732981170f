//! Monk records and itinerary advancement.

use std::collections::VecDeque;

use mc_core::{DoctorId, MonkId, Tick};

// ── Itinerary ─────────────────────────────────────────────────────────────────

/// The ordered doctors a monk still has to visit after its current stop.
///
/// The stop a monk is currently waiting for is not part of its itinerary: it
/// is implied by which doctor's schedule holds the monk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Itinerary {
    stops: VecDeque<DoctorId>,
}

impl Itinerary {
    pub fn new(stops: impl IntoIterator<Item = DoctorId>) -> Self {
        Self { stops: stops.into_iter().collect() }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// The next doctor without consuming it.
    pub fn peek(&self) -> Option<DoctorId> {
        self.stops.front().copied()
    }

    /// Remove and return the next doctor.
    pub fn pop_next(&mut self) -> Option<DoctorId> {
        self.stops.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = DoctorId> + '_ {
        self.stops.iter().copied()
    }
}

// ── Monk ──────────────────────────────────────────────────────────────────────

/// Identity plus remaining itinerary.  Moved between schedules by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monk {
    pub id:        MonkId,
    pub itinerary: Itinerary,
}

/// Where a monk must be inserted: `doctor`'s schedule at `tick`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub doctor: DoctorId,
    pub tick:   Tick,
    pub monk:   Monk,
}

/// Result of advancing a monk after an admission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The monk has another stop and must be re-enqueued.
    Forward(Placement),
    /// The itinerary is exhausted; the monk is no longer tracked.
    Done(MonkId),
}

impl Monk {
    pub fn new(id: MonkId, itinerary: Itinerary) -> Self {
        Self { id, itinerary }
    }

    /// Advance after being admitted at `now`: the next doctor, if any, is
    /// due at `now + 1`.
    pub fn advance(mut self, now: Tick) -> Advance {
        match self.itinerary.pop_next() {
            Some(doctor) => Advance::Forward(Placement {
                doctor,
                tick: now.next(),
                monk: self,
            }),
            None => Advance::Done(self.id),
        }
    }
}

// ── MonkPlan ──────────────────────────────────────────────────────────────────

/// One monk's full itinerary as read from input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonkPlan {
    /// Tick at which the monk arrives at its first doctor.
    pub arrival: Tick,
    /// Every doctor to visit, in order.
    pub stops:   Vec<DoctorId>,
}

impl MonkPlan {
    pub fn new(arrival: Tick, stops: Vec<DoctorId>) -> Self {
        Self { arrival, stops }
    }

    /// Total number of admissions this monk will need.
    pub fn visit_count(&self) -> usize {
        self.stops.len()
    }

    /// Consume the first stop to produce the monk's initial placement.
    ///
    /// Returns `None` for an empty plan: such a monk completes immediately
    /// and is never scheduled.
    pub fn into_placement(self, id: MonkId) -> Option<Placement> {
        let mut stops = self.stops.into_iter();
        let doctor = stops.next()?;
        Some(Placement {
            doctor,
            tick: self.arrival,
            monk: Monk::new(id, Itinerary::new(stops)),
        })
    }
}
