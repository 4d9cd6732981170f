//! Run configuration.

use crate::{CoreError, CoreResult, SimClock, Tick};

/// How many eligible monks a doctor admits in one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdmissionPolicy {
    /// At most one admission per doctor per tick.  An eligible backlog drains
    /// one monk per tick.
    #[default]
    OnePerTick,
    /// Admit every monk whose arrival tick is at or before the current tick,
    /// earliest slot first, lowest id first within a slot.
    DrainEligible,
}

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Tick at which the driver starts.  Default: `Tick::ZERO`.
    pub start_tick: Tick,

    /// Abort the run if it has not finished after this many ticks.
    /// `None` runs until every schedule is empty.
    pub max_ticks: Option<u64>,

    /// Admissions per doctor per tick.
    pub admission: AdmissionPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_tick: Tick::ZERO,
            max_ticks:  None,
            admission:  AdmissionPolicy::OnePerTick,
        }
    }
}

impl SimConfig {
    /// Reject configurations the driver cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_ticks == Some(0) {
            return Err(CoreError::Config("max_ticks must be at least 1".into()));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_tick)
    }
}
