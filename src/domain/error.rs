use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} must not be empty")]
    MissingField(&'static str),
    #[error("{field} must be HH:MM, got '{value}'")]
    InvalidTime { field: &'static str, value: String },
    #[error("end time {end} must be after start time {start}")]
    InvalidTimeRange { start: String, end: String },
    #[error("task not found: {0}")]
    TaskNotFound(String),
    #[error("a study session is already active")]
    SessionAlreadyActive,
    #[error("no study session is active")]
    NoActiveSession,
    #[error("a pomodoro leg is already active")]
    LegAlreadyActive,
    #[error("no pomodoro leg is active")]
    NoActiveLeg,
    #[error("timer is not running")]
    NotRunning,
    #[error("timer is not paused")]
    NotPaused,
    #[error("invalid pomodoro settings: {0}")]
    InvalidSettings(String),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
