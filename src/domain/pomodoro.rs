//! The Pomodoro cycle: work legs alternate with short breaks, and every
//! fourth completed work leg is followed by a long break instead.
//!
//! The engine is driven by whole-second ticks. It never reads a clock itself;
//! callers pass `now` for the timestamps recorded on each leg.

use crate::domain::error::DomainError;
use crate::domain::ids::IdGenerator;
use crate::domain::models::{PomodoroLegType, PomodoroSession, PomodoroSettings};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

pub const LONG_BREAK_INTERVAL: u32 = 4;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "status", content = "leg", rename_all = "snake_case")]
pub enum PomodoroState {
    Idle,
    Running(PomodoroLegType),
    Paused(PomodoroLegType),
}

impl PomodoroState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running(_) => "running",
            Self::Paused(_) => "paused",
        }
    }

    pub fn leg_type(self) -> Option<PomodoroLegType> {
        match self {
            Self::Idle => None,
            Self::Running(leg_type) | Self::Paused(leg_type) => Some(leg_type),
        }
    }
}

/// A finished leg and whatever leg the auto-advance policy started after it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LegCompletion {
    pub completed: PomodoroSession,
    pub next: Option<PomodoroLegType>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct FocusStats {
    pub work_sessions: u32,
    pub total_focus_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct PomodoroEngine {
    settings: PomodoroSettings,
    state: PomodoroState,
    active: Option<PomodoroSession>,
    elapsed_seconds: u32,
    completed_work_legs: u32,
    history: Vec<PomodoroSession>,
    ids: IdGenerator,
}

impl PomodoroEngine {
    pub fn new(settings: PomodoroSettings) -> Self {
        Self {
            settings,
            state: PomodoroState::Idle,
            active: None,
            elapsed_seconds: 0,
            completed_work_legs: 0,
            history: Vec::new(),
            ids: IdGenerator::new("pom"),
        }
    }

    pub fn settings(&self) -> &PomodoroSettings {
        &self.settings
    }

    pub fn update_settings(&mut self, settings: PomodoroSettings) -> Result<(), DomainError> {
        settings.validate().map_err(DomainError::InvalidSettings)?;
        self.settings = settings;
        Ok(())
    }

    pub fn state(&self) -> PomodoroState {
        self.state
    }

    pub fn active(&self) -> Option<&PomodoroSession> {
        self.active.as_ref()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, PomodoroState::Running(_))
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn completed_work_legs(&self) -> u32 {
        self.completed_work_legs
    }

    pub fn history(&self) -> &[PomodoroSession] {
        &self.history
    }

    /// Configured length of the open leg, or of a work leg when idle.
    pub fn current_duration(&self) -> u32 {
        let leg_type = self.state.leg_type().unwrap_or(PomodoroLegType::Work);
        self.settings.duration_for(leg_type)
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.current_duration().saturating_sub(self.elapsed_seconds)
    }

    pub fn progress(&self) -> f64 {
        let duration = self.current_duration();
        if duration == 0 {
            return 0.0;
        }
        (f64::from(self.elapsed_seconds) / f64::from(duration)).clamp(0.0, 1.0)
    }

    pub fn start(
        &mut self,
        leg_type: PomodoroLegType,
        task_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<&PomodoroSession, DomainError> {
        if self.state != PomodoroState::Idle {
            return Err(DomainError::LegAlreadyActive);
        }
        Ok(self.open_leg(leg_type, task_id, now))
    }

    pub fn pause(&mut self) -> Result<(), DomainError> {
        let PomodoroState::Running(leg_type) = self.state else {
            return Err(DomainError::NotRunning);
        };
        self.state = PomodoroState::Paused(leg_type);
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), DomainError> {
        let PomodoroState::Paused(leg_type) = self.state else {
            return Err(DomainError::NotPaused);
        };
        self.state = PomodoroState::Running(leg_type);
        Ok(())
    }

    /// Single pause/resume control.
    pub fn toggle_pause(&mut self) -> Result<PomodoroState, DomainError> {
        match self.state {
            PomodoroState::Running(_) => self.pause()?,
            PomodoroState::Paused(_) => self.resume()?,
            PomodoroState::Idle => return Err(DomainError::NoActiveLeg),
        }
        Ok(self.state)
    }

    /// Abandons the open leg. Nothing is added to history.
    pub fn stop(&mut self) -> Result<PomodoroSession, DomainError> {
        let abandoned = self.active.take().ok_or(DomainError::NoActiveLeg)?;
        self.state = PomodoroState::Idle;
        self.elapsed_seconds = 0;
        Ok(abandoned)
    }

    /// Completes the open leg immediately, crediting the time actually elapsed.
    pub fn skip(&mut self, now: DateTime<Utc>) -> Result<LegCompletion, DomainError> {
        if self.active.is_none() {
            return Err(DomainError::NoActiveLeg);
        }
        self.complete_leg(now)
    }

    /// One second of wall time. Only a running leg advances.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<LegCompletion> {
        let PomodoroState::Running(leg_type) = self.state else {
            return None;
        };
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        if self.elapsed_seconds < self.settings.duration_for(leg_type) {
            return None;
        }
        self.complete_leg(now).ok()
    }

    /// Completed work legs started on `date` in `timezone`, with their focus time.
    pub fn focus_stats_for(&self, date: NaiveDate, timezone: Tz) -> FocusStats {
        self.history
            .iter()
            .filter(|session| session.completed && session.leg_type == PomodoroLegType::Work)
            .filter(|session| session.start_time.with_timezone(&timezone).date_naive() == date)
            .fold(FocusStats::default(), |mut stats, session| {
                stats.work_sessions += 1;
                stats.total_focus_seconds += u64::from(session.duration_seconds);
                stats
            })
    }

    fn open_leg(
        &mut self,
        leg_type: PomodoroLegType,
        task_id: Option<String>,
        now: DateTime<Utc>,
    ) -> &PomodoroSession {
        self.state = PomodoroState::Running(leg_type);
        self.elapsed_seconds = 0;
        self.active.insert(PomodoroSession {
            id: self.ids.next_id(),
            leg_type,
            start_time: now,
            end_time: None,
            duration_seconds: 0,
            completed: false,
            task_id,
        })
    }

    fn complete_leg(&mut self, now: DateTime<Utc>) -> Result<LegCompletion, DomainError> {
        let mut finished = self.active.clone().ok_or(DomainError::NoActiveLeg)?;
        finished.end_time = Some(now.max(finished.start_time));
        finished.duration_seconds = self.elapsed_seconds;
        finished.completed = true;
        finished.validate().map_err(DomainError::InvalidRecord)?;
        self.active = None;
        self.history.push(finished.clone());

        let next = match finished.leg_type {
            PomodoroLegType::Work => {
                self.completed_work_legs += 1;
                self.settings.auto_start_breaks.then(|| {
                    if self.completed_work_legs % LONG_BREAK_INTERVAL == 0 {
                        PomodoroLegType::LongBreak
                    } else {
                        PomodoroLegType::ShortBreak
                    }
                })
            }
            PomodoroLegType::ShortBreak | PomodoroLegType::LongBreak => self
                .settings
                .auto_start_work
                .then_some(PomodoroLegType::Work),
        };

        match next {
            Some(leg_type) => {
                self.open_leg(leg_type, None, now);
            }
            None => {
                self.state = PomodoroState::Idle;
                self.elapsed_seconds = 0;
            }
        }

        Ok(LegCompletion {
            completed: finished,
            next,
        })
    }
}
