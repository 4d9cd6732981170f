//! Fluent builder for constructing a [`Sim`].

use mc_core::{AdmissionPolicy, CoreError, MonkId, SimConfig};
use mc_schedule::{Clinic, MonkPlan, Roster};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - the doctor count (valid doctors are `1..=doctor_count`)
/// - one [`MonkPlan`] per monk; `plans[i]` becomes `MonkId(i + 1)`
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                         |
/// |-------------------|---------------------------------|
/// | `.config(c)`      | `SimConfig::default()`          |
/// | `.admission(p)`   | `AdmissionPolicy::OnePerTick`   |
/// | `.max_ticks(n)`   | unlimited                       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(2, plans)
///     .max_ticks(10_000)
///     .build()?;
/// let end = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    doctor_count: usize,
    plans:        Vec<MonkPlan>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(doctor_count: usize, plans: Vec<MonkPlan>) -> Self {
        Self {
            config: SimConfig::default(),
            doctor_count,
            plans,
        }
    }

    pub fn from_roster(roster: Roster) -> Self {
        Self::new(roster.doctor_count, roster.plans)
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn admission(mut self, policy: AdmissionPolicy) -> Self {
        self.config.admission = policy;
        self
    }

    /// Fail the run with `SimError::TickLimitExceeded` if it needs more than
    /// `n` ticks.
    pub fn max_ticks(mut self, n: u64) -> Self {
        self.config.max_ticks = Some(n);
        self
    }

    /// Validate the configuration, place every monk at its first doctor, and
    /// return a ready-to-run [`Sim`].
    ///
    /// Monks with empty plans complete immediately and are never scheduled.
    /// A first stop outside `1..=doctor_count` fails with `InvalidDoctorId`.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut clinic = Clinic::new(self.doctor_count);
        let mut completed = 0;

        for (i, plan) in self.plans.into_iter().enumerate() {
            let id = MonkId::try_from(i + 1)
                .map_err(|_| CoreError::Config(format!("monk {} exceeds the MonkId range", i + 1)))?;
            match plan.into_placement(id) {
                Some(placement) => clinic.insert(placement)?,
                None => completed += 1,
            }
        }

        Ok(Sim::new(self.config, clinic, completed))
    }
}
