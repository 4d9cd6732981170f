//! The `Sim` struct and its tick loop.

use mc_core::{AdmissionPolicy, DoctorId, SimClock, SimConfig, Tick};
use mc_schedule::{Advance, Clinic};

use crate::{Admission, SimError, SimObserver, SimResult, VisitEvent};

/// Driver state.  `Finished` is entered when a tick would start with every
/// schedule empty; the clock no longer advances after that.  `Failed` is
/// entered when a tick aborts part-way; it is terminal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimState {
    Running,
    Finished,
    Failed,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The scheduler driver.
///
/// `Sim` exclusively owns every doctor schedule and the clock.  Each tick it
/// visits doctors in ascending id order; a visited doctor admits the
/// lowest-id monk from its earliest slot if that slot's tick is not in the
/// future, and the admitted monk is forwarded to its next doctor at
/// `now + 1`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (admission policy, tick limit, start tick).
    pub config: SimConfig,

    /// Tracks the current tick.
    pub clock: SimClock,

    /// Per-doctor schedules, indexed by `DoctorId`.
    pub clinic: Clinic,

    state:      SimState,
    /// Admissions performed so far.
    admissions: u64,
    /// Monks whose itineraries are exhausted.
    completed:  usize,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, clinic: Clinic, completed: usize) -> Self {
        Self {
            clock: config.make_clock(),
            config,
            clinic,
            state: SimState::Running,
            admissions: 0,
            completed,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every schedule is empty and return the final tick.
    ///
    /// The returned tick is one past the last tick in which any admission
    /// happened (the start tick for an empty population).
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Tick> {
        loop {
            if let Some(limit) = self.config.max_ticks {
                if self.clock.elapsed() >= limit && !self.clinic.is_idle() {
                    return Err(SimError::TickLimitExceeded {
                        limit,
                        waiting: self.clinic.waiting(),
                    });
                }
            }
            if self.step(observer)?.is_none() {
                break;
            }
        }
        let end = self.clock.current_tick;
        observer.on_sim_end(end);
        Ok(end)
    }

    /// Execute exactly one tick and return the number of admissions.
    ///
    /// Returns `None` without advancing the clock if every schedule is
    /// empty; the driver is then `Finished`.  An error leaves the driver
    /// `Failed`, and every later `step` or `run` returns `SimError::Halted`.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<usize>> {
        if self.state == SimState::Failed {
            return Err(SimError::Halted { tick: self.clock.current_tick });
        }
        let result = self.process_tick(observer);
        if result.is_err() {
            self.state = SimState::Failed;
        }
        result
    }

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<usize>> {
        if self.clinic.is_idle() {
            self.state = SimState::Finished;
            return Ok(None);
        }

        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let mut admitted = 0;
        for doctor in self.clinic.doctors() {
            admitted += self.process_doctor(doctor, now, observer)?;
        }

        observer.on_tick_end(now, admitted);
        self.clock.advance();
        Ok(Some(admitted))
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    /// Monks currently waiting in any schedule.
    pub fn waiting(&self) -> usize {
        self.clinic.waiting()
    }

    pub fn admissions(&self) -> u64 {
        self.admissions
    }

    /// Monks that have left the system, including those with empty plans.
    pub fn completed(&self) -> usize {
        self.completed
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Let `doctor` admit from its earliest slot.  Emits exactly one
    /// `VisitEvent` per admission, or one if nobody was admitted.
    fn process_doctor<O: SimObserver>(
        &mut self,
        doctor:   DoctorId,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<usize> {
        let mut admitted = 0;

        loop {
            let schedule = self.clinic.schedule_mut(doctor)?;
            let earliest = schedule.peek_earliest();

            let slot = match earliest {
                Some(slot) if slot <= now => slot,
                _ => {
                    if admitted == 0 {
                        observer.on_visit(&VisitEvent { doctor, tick: now, earliest, admission: None });
                    }
                    return Ok(admitted);
                }
            };

            let Some(monk) = schedule.pop_highest_priority(slot) else {
                return Ok(admitted);
            };
            let slot_cleared = !schedule.has_slot(slot);
            let id = monk.id;

            // Insertion key is now + 1, so a forwarded monk is never
            // re-admitted in the same tick, even by this doctor.
            let forwarded_to = match monk.advance(now) {
                Advance::Forward(placement) => {
                    let next = placement.doctor;
                    self.clinic.insert(placement)?;
                    Some(next)
                }
                Advance::Done(_) => {
                    self.completed += 1;
                    None
                }
            };

            admitted += 1;
            self.admissions += 1;
            observer.on_visit(&VisitEvent {
                doctor,
                tick: now,
                earliest,
                admission: Some(Admission { monk: id, slot, forwarded_to, slot_cleared }),
            });

            if self.config.admission == AdmissionPolicy::OnePerTick {
                return Ok(admitted);
            }
        }
    }
}
