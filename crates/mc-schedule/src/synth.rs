//! Seeded synthetic rosters for stress runs and property tests.
//!
//! The same `SyntheticConfig` always yields the same roster: all randomness
//! comes from one `SmallRng` seeded with `config.seed`, consumed in monk
//! order.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use mc_core::{CoreError, DoctorId, Tick};

use crate::{MonkPlan, Roster, ScheduleResult};

/// Shape of a generated roster.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    pub monk_count:   usize,
    pub doctor_count: usize,
    /// Each monk gets `1..=max_stops` stops (0 if `max_stops` is 0).
    pub max_stops:    usize,
    /// Initial arrivals are drawn from `0..=max_arrival`.
    pub max_arrival:  u64,
    pub seed:         u64,
}

/// Generate a roster whose doctor ids are all within `1..=doctor_count`.
pub fn synthetic_roster(config: &SyntheticConfig) -> ScheduleResult<Roster> {
    if config.doctor_count == 0 && config.max_stops > 0 {
        return Err(CoreError::Config("synthetic roster needs at least one doctor".into()).into());
    }
    let doctor_count = u32::try_from(config.doctor_count)
        .map_err(|_| CoreError::Config(format!("doctor_count {} exceeds u32", config.doctor_count)))?;

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let plans = (0..config.monk_count)
        .map(|_| {
            let arrival = Tick(rng.gen_range(0..=config.max_arrival));
            let visits = if config.max_stops == 0 { 0 } else { rng.gen_range(1..=config.max_stops) };
            let stops = (0..visits)
                .map(|_| DoctorId(rng.gen_range(1..=doctor_count)))
                .collect();
            MonkPlan::new(arrival, stops)
        })
        .collect();

    Ok(Roster::new(config.doctor_count, plans))
}
