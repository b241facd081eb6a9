use crate::domain::error::DomainError;
use crate::domain::ids::IdGenerator;
use crate::domain::models::StudySession;
use chrono::{DateTime, Utc};

/// Manual study timing. At most one session is open at a time.
#[derive(Debug, Clone)]
pub struct StudySessionTracker {
    active: Option<StudySession>,
    history: Vec<StudySession>,
    elapsed_seconds: u64,
    ids: IdGenerator,
}

impl Default for StudySessionTracker {
    fn default() -> Self {
        Self {
            active: None,
            history: Vec::new(),
            elapsed_seconds: 0,
            ids: IdGenerator::new("std"),
        }
    }
}

impl StudySessionTracker {
    pub fn active(&self) -> Option<&StudySession> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn history(&self) -> &[StudySession] {
        &self.history
    }

    pub fn start_session(
        &mut self,
        task_id: &str,
        now: DateTime<Utc>,
    ) -> Result<StudySession, DomainError> {
        if self.active.is_some() {
            return Err(DomainError::SessionAlreadyActive);
        }

        let session = StudySession {
            id: self.ids.next_id(),
            task_id: task_id.to_string(),
            start_time: now,
            end_time: None,
            duration_seconds: 0,
            completed: false,
        };
        self.active = Some(session.clone());
        self.elapsed_seconds = 0;
        Ok(session)
    }

    pub fn end_session(&mut self, now: DateTime<Utc>) -> Result<StudySession, DomainError> {
        let mut session = self.active.clone().ok_or(DomainError::NoActiveSession)?;
        let elapsed = (now - session.start_time).num_seconds().max(0);
        session.end_time = Some(now.max(session.start_time));
        session.duration_seconds = u64::try_from(elapsed).unwrap_or_default();
        session.completed = true;
        session.validate().map_err(DomainError::InvalidRecord)?;

        self.active = None;
        self.history.push(session.clone());
        self.elapsed_seconds = 0;
        Ok(session)
    }

    /// Advances the display counter. Returns false when no session is open.
    pub fn tick(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    pub fn total_seconds_for_task(&self, task_id: &str) -> u64 {
        self.history
            .iter()
            .filter(|session| session.task_id == task_id)
            .map(|session| session.duration_seconds)
            .sum()
    }
}
