use crate::domain::error::DomainError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBJECT: &str = "General";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#10B981",
            Self::Medium => "#F59E0B",
            Self::High => "#EF4444",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    #[default]
    Study,
    Assignment,
    Exam,
    Review,
    Break,
}

impl TaskType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Assignment => "assignment",
            Self::Exam => "exam",
            Self::Review => "review",
            Self::Break => "break",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Study => "#8B5CF6",
            Self::Assignment => "#06B6D4",
            Self::Exam => "#EF4444",
            Self::Review => "#F59E0B",
            Self::Break => "#10B981",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub completed: bool,
    pub priority: TaskPriority,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub color: String,
    pub description: Option<String>,
}

impl Task {
    pub fn validate(&self) -> Result<(), String> {
        validate_non_empty(&self.id, "task.id")?;
        validate_non_empty(&self.title, "task.title")?;
        let start =
            parse_hhmm(&self.start_time, "task.start_time").map_err(|error| error.to_string())?;
        let end =
            parse_hhmm(&self.end_time, "task.end_time").map_err(|error| error.to_string())?;
        if end <= start {
            return Err("task.end_time must be after task.start_time".to_string());
        }
        if self.duration_minutes != minutes_between(start, end) {
            return Err("task.duration_minutes must equal end_time - start_time".to_string());
        }
        Ok(())
    }
}

/// Raw field values as typed into the add/edit task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub priority: TaskPriority,
    pub task_type: TaskType,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudySession {
    pub id: String,
    pub task_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_seconds: u64,
    pub completed: bool,
}

impl StudySession {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_non_empty(&self.id, "study_session.id")?;
        validate_non_empty(&self.task_id, "study_session.task_id")?;
        if let Some(end_time) = self.end_time {
            if end_time < self.start_time {
                return Err(
                    "study_session.end_time must be >= study_session.start_time".to_string(),
                );
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PomodoroLegType {
    Work,
    ShortBreak,
    LongBreak,
}

impl PomodoroLegType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::ShortBreak => "shortBreak",
            Self::LongBreak => "longBreak",
        }
    }

    pub fn is_break(self) -> bool {
        !matches!(self, Self::Work)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PomodoroSession {
    pub id: String,
    pub leg_type: PomodoroLegType,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_seconds: u32,
    pub completed: bool,
    pub task_id: Option<String>,
}

impl PomodoroSession {
    pub fn validate(&self) -> Result<(), String> {
        validate_non_empty(&self.id, "pomodoro.id")?;
        if let Some(end_time) = self.end_time {
            if end_time < self.start_time {
                return Err("pomodoro.end_time must be >= pomodoro.start_time".to_string());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PomodoroSettings {
    pub work_duration: u32,
    pub short_break_duration: u32,
    pub long_break_duration: u32,
    pub auto_start_breaks: bool,
    pub auto_start_work: bool,
    /// Reserved for an audio cue; the engine never reads it.
    pub sound_enabled: bool,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_duration: 25 * 60,
            short_break_duration: 5 * 60,
            long_break_duration: 15 * 60,
            auto_start_breaks: true,
            auto_start_work: false,
            sound_enabled: true,
        }
    }
}

impl PomodoroSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.work_duration == 0 {
            return Err("pomodoro.workDuration must be > 0".to_string());
        }
        if self.short_break_duration == 0 {
            return Err("pomodoro.shortBreakDuration must be > 0".to_string());
        }
        if self.long_break_duration == 0 {
            return Err("pomodoro.longBreakDuration must be > 0".to_string());
        }
        Ok(())
    }

    pub fn duration_for(&self, leg_type: PomodoroLegType) -> u32 {
        match leg_type {
            PomodoroLegType::Work => self.work_duration,
            PomodoroLegType::ShortBreak => self.short_break_duration,
            PomodoroLegType::LongBreak => self.long_break_duration,
        }
    }
}

/// Parses a zero-padded 24-hour "HH:MM" value.
///
/// The fixed width is what keeps lexicographic ordering of stored start times
/// identical to chronological ordering.
pub fn parse_hhmm(value: &str, field: &'static str) -> Result<NaiveTime, DomainError> {
    let invalid = || DomainError::InvalidTime {
        field,
        value: value.to_string(),
    };
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    if !bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| invalid())
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes()
}

fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field_name} must not be empty"));
    }
    Ok(())
}
