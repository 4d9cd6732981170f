//! `Clinic` — the schedules of every doctor, indexed by 1-based `DoctorId`.

use mc_core::{CoreError, DoctorId};

use crate::{DoctorSchedule, Placement, ScheduleResult};

/// Fixed-size, bounds-checked collection of doctor schedules.
///
/// Doctor `d` lives at `schedules[d - 1]`.  `DoctorId(0)` and ids above the
/// doctor count are rejected with [`CoreError::InvalidDoctorId`].
#[derive(Debug)]
pub struct Clinic {
    schedules: Vec<DoctorSchedule>,
}

impl Clinic {
    pub fn new(doctor_count: usize) -> Self {
        Self {
            schedules: (0..doctor_count).map(|_| DoctorSchedule::new()).collect(),
        }
    }

    pub fn doctor_count(&self) -> usize {
        self.schedules.len()
    }

    /// All doctor ids in processing order (ascending).
    pub fn doctors(&self) -> impl Iterator<Item = DoctorId> + use<> {
        (1..=self.schedules.len() as u32).map(DoctorId)
    }

    pub fn schedule(&self, doctor: DoctorId) -> ScheduleResult<&DoctorSchedule> {
        let slot = self.slot(doctor)?;
        Ok(&self.schedules[slot])
    }

    pub fn schedule_mut(&mut self, doctor: DoctorId) -> ScheduleResult<&mut DoctorSchedule> {
        let slot = self.slot(doctor)?;
        Ok(&mut self.schedules[slot])
    }

    /// Insert a placement into its doctor's schedule.
    pub fn insert(&mut self, placement: Placement) -> ScheduleResult<()> {
        self.schedule_mut(placement.doctor)?
            .insert(placement.tick, placement.monk);
        Ok(())
    }

    /// `true` when every doctor's schedule is empty.
    pub fn is_idle(&self) -> bool {
        self.schedules.iter().all(DoctorSchedule::is_empty)
    }

    /// Total monks waiting across all doctors.
    pub fn waiting(&self) -> usize {
        self.schedules.iter().map(DoctorSchedule::len).sum()
    }

    fn slot(&self, doctor: DoctorId) -> Result<usize, CoreError> {
        if doctor == DoctorId::RESERVED || doctor.index() > self.schedules.len() {
            return Err(CoreError::InvalidDoctorId {
                doctor,
                doctor_count: self.schedules.len(),
            });
        }
        Ok(doctor.index() - 1)
    }
}
