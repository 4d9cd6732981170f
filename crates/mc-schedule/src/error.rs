use mc_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Malformed or incomplete roster input.
    #[error("roster parse error: {0}")]
    Parse(String),

    /// Out-of-range doctor id or bad generator configuration.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
