pub mod calendar;
pub mod error;
pub mod format;
pub mod ids;
pub mod models;
pub mod pomodoro;
pub mod schedule;
pub mod study_session;
