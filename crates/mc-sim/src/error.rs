use mc_core::{CoreError, Tick};
use mc_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid configuration or a roster too large to number.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Insertion into a doctor's schedule failed (e.g. out-of-range doctor).
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("simulation still has {waiting} waiting monks after {limit} ticks")]
    TickLimitExceeded {
        limit:   u64,
        waiting: usize,
    },

    /// An earlier tick failed part-way; the schedules are no longer
    /// consistent and the run cannot continue.
    #[error("simulation halted by an earlier error at {tick}")]
    Halted {
        tick: Tick,
    },
}

impl SimError {
    /// `true` if this error reports an out-of-range doctor id.
    pub fn is_invalid_doctor(&self) -> bool {
        matches!(
            self,
            SimError::Core(CoreError::InvalidDoctorId { .. })
                | SimError::Schedule(ScheduleError::Core(CoreError::InvalidDoctorId { .. }))
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;
