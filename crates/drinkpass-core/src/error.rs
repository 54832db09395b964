use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Day {day} is outside the cruise (1-{length})")]
    DayOutOfRange { day: usize, length: usize },
}
