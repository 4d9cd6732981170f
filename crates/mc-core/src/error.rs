//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` via `From`.

use thiserror::Error;

use crate::DoctorId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A doctor id of 0 or above the declared doctor count.
    #[error("{doctor} is out of range: valid doctors are 1..={doctor_count}")]
    InvalidDoctorId {
        doctor:       DoctorId,
        doctor_count: usize,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
