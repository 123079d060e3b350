use thiserror::Error;

/// Construction-time validation failures.
///
/// Step-time conditions (out-of-range positions, re-stepping a revealed
/// cell) are routine interactive play and come back as `StepOutcome`
/// values, never through this type.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CreateError {
    #[error("rows must be between 2 and 50")]
    InvalidRows,
    #[error("columns must be between 2 and 50")]
    InvalidColumns,
    #[error("mine density must be between 1 and 99 percent")]
    InvalidMineDensity,
}

pub type Result<T> = core::result::Result<T, CreateError>;
