use crate::application::bootstrap::bootstrap_workspace;
use crate::domain::calendar::{NavigationDirection, ViewMode};
use crate::domain::format::{format_duration, format_time_of_day};
use crate::domain::models::{
    PomodoroLegType, PomodoroSession, PomodoroSettings, StudySession, Task, TaskForm,
    TaskPriority, TaskType,
};
use crate::domain::pomodoro::{FocusStats, LegCompletion, PomodoroEngine, PomodoroState};
use crate::domain::schedule::{DaySchedule, DaySummary, ScheduleStore};
use crate::domain::study_session::StudySessionTracker;
use crate::domain::error::DomainError;
use crate::infrastructure::config::save_pomodoro_settings;
use crate::infrastructure::error::InfraError;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;

type NowProvider = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Which timed activity a clock tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickTarget {
    StudySession,
    Pomodoro,
}

impl TickTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StudySession => "study_session",
            Self::Pomodoro => "pomodoro",
        }
    }
}

pub struct AppState {
    config_dir: PathBuf,
    timezone: Tz,
    runtime: Mutex<RuntimeState>,
    study_activity: Arc<Notify>,
    pomodoro_activity: Arc<Notify>,
    now_provider: NowProvider,
}

impl AppState {
    pub fn new(workspace_root: PathBuf) -> Result<Self, InfraError> {
        let bootstrap = bootstrap_workspace(&workspace_root)?;
        let settings = bootstrap.configs.pomodoro_settings()?;
        let timezone = bootstrap.configs.timezone()?;
        let today = Utc::now().with_timezone(&timezone).date_naive();

        Ok(Self {
            config_dir: bootstrap.config_dir,
            timezone,
            runtime: Mutex::new(RuntimeState {
                schedule: ScheduleStore::new(today),
                study: StudySessionTracker::default(),
                pomodoro: PomodoroEngine::new(settings),
            }),
            study_activity: Arc::new(Notify::new()),
            pomodoro_activity: Arc::new(Notify::new()),
            now_provider: Arc::new(Utc::now),
        })
    }

    /// Replaces the clock. The schedule cursor moves to the new clock's today.
    pub fn with_now_provider(mut self, now_provider: NowProvider) -> Self {
        self.now_provider = now_provider;
        let today = self.today();
        if let Ok(runtime) = self.runtime.get_mut() {
            runtime.schedule.go_to_today(today);
        }
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.now_provider)()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().with_timezone(&self.timezone).date_naive()
    }

    /// Signalled whenever the target's activity starts or resumes.
    pub fn activity(&self, target: TickTarget) -> Arc<Notify> {
        match target {
            TickTarget::StudySession => Arc::clone(&self.study_activity),
            TickTarget::Pomodoro => Arc::clone(&self.pomodoro_activity),
        }
    }

    pub fn command_error(&self, command: &str, error: &InfraError) -> String {
        tracing::warn!(command, %error, "command failed");
        error.to_string()
    }
}

#[derive(Debug)]
struct RuntimeState {
    schedule: ScheduleStore,
    study: StudySessionTracker,
    pomodoro: PomodoroEngine,
}

/// Task form fields as the presentation layer sends them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFormRequest {
    pub title: String,
    #[serde(default)]
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, rename = "type")]
    pub task_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A task with its display strings resolved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaskCardResponse {
    pub task: Task,
    pub start_display: String,
    pub end_display: String,
    pub duration_display: String,
    pub priority_color: String,
    pub tracked_seconds: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScheduleViewResponse {
    pub selected_date: NaiveDate,
    pub view_mode: ViewMode,
    pub days: Vec<DaySchedule>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StudySessionStateResponse {
    pub active: Option<StudySession>,
    pub elapsed_seconds: u64,
    pub elapsed_display: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PomodoroStateResponse {
    pub state: PomodoroState,
    pub current_session_id: Option<String>,
    pub current_task_id: Option<String>,
    pub start_time: Option<String>,
    pub elapsed_seconds: u32,
    pub duration_seconds: u32,
    pub remaining_seconds: u32,
    pub remaining_display: String,
    pub progress: f64,
    pub completed_work_legs: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FocusStatsResponse {
    pub date: NaiveDate,
    pub work_sessions: u32,
    pub total_focus_seconds: u64,
    pub total_focus_display: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TickReport {
    pub study_session_advanced: bool,
    pub pomodoro_completion: Option<LegCompletion>,
}

// Schedule

pub fn add_task_impl(state: &AppState, request: TaskFormRequest) -> Result<Task, InfraError> {
    let form = to_task_form(request)?;
    let task = {
        let mut runtime = lock_runtime(state)?;
        runtime.schedule.add_task(&form)?
    };

    tracing::info!(
        command = "add_task",
        task_id = %task.id,
        date = %task.date,
        kind = task.task_type.as_str(),
        priority = task.priority.as_str(),
        "created task"
    );
    Ok(task)
}

pub fn update_task_impl(
    state: &AppState,
    task_id: String,
    request: TaskFormRequest,
) -> Result<Task, InfraError> {
    let task_id = required_id(&task_id, "task_id")?;
    let form = to_task_form(request)?;
    let task = {
        let mut runtime = lock_runtime(state)?;
        runtime.schedule.update_task(task_id, &form)?
    };

    tracing::info!(command = "update_task", task_id, "updated task");
    Ok(task)
}

pub fn delete_task_impl(state: &AppState, task_id: String) -> Result<bool, InfraError> {
    let task_id = required_id(&task_id, "task_id")?;
    let removed = lock_runtime(state)?.schedule.delete_task(task_id);
    if removed {
        tracing::info!(command = "delete_task", task_id, "deleted task");
    }
    Ok(removed)
}

pub fn toggle_task_completion_impl(state: &AppState, task_id: String) -> Result<Task, InfraError> {
    let task_id = required_id(&task_id, "task_id")?;
    let task = lock_runtime(state)?.schedule.toggle_completion(task_id)?;
    tracing::info!(
        command = "toggle_task_completion",
        task_id,
        completed = task.completed,
        "toggled task completion"
    );
    Ok(task)
}

pub fn list_tasks_for_date_impl(
    state: &AppState,
    date: Option<String>,
) -> Result<Vec<Task>, InfraError> {
    let runtime = lock_runtime(state)?;
    let date = resolve_date(date, runtime.schedule.selected_date())?;
    Ok(runtime.schedule.tasks_for_date(date))
}

pub fn list_task_cards_for_date_impl(
    state: &AppState,
    date: Option<String>,
) -> Result<Vec<TaskCardResponse>, InfraError> {
    let runtime = lock_runtime(state)?;
    let date = resolve_date(date, runtime.schedule.selected_date())?;
    runtime
        .schedule
        .tasks_for_date(date)
        .into_iter()
        .map(|task| to_task_card_response(task, &runtime.study))
        .collect()
}

pub fn list_tasks_for_week_impl(
    state: &AppState,
    date: Option<String>,
) -> Result<Vec<DaySchedule>, InfraError> {
    let runtime = lock_runtime(state)?;
    let date = resolve_date(date, runtime.schedule.selected_date())?;
    Ok(runtime.schedule.tasks_for_week(date))
}

pub fn list_tasks_for_month_impl(
    state: &AppState,
    date: Option<String>,
) -> Result<Vec<DaySchedule>, InfraError> {
    let runtime = lock_runtime(state)?;
    let date = resolve_date(date, runtime.schedule.selected_date())?;
    Ok(runtime.schedule.tasks_for_month(date))
}

pub fn get_schedule_view_impl(state: &AppState) -> Result<ScheduleViewResponse, InfraError> {
    let runtime = lock_runtime(state)?;
    Ok(to_schedule_view_response(&runtime.schedule))
}

pub fn select_date_impl(
    state: &AppState,
    date: String,
) -> Result<ScheduleViewResponse, InfraError> {
    let date = parse_date_input(&date, "date")?;
    let mut runtime = lock_runtime(state)?;
    runtime.schedule.select_date(date);
    Ok(to_schedule_view_response(&runtime.schedule))
}

pub fn set_view_mode_impl(
    state: &AppState,
    view_mode: String,
) -> Result<ScheduleViewResponse, InfraError> {
    let view_mode = parse_view_mode(&view_mode)?;
    let mut runtime = lock_runtime(state)?;
    runtime.schedule.set_view_mode(view_mode);
    Ok(to_schedule_view_response(&runtime.schedule))
}

pub fn navigate_schedule_impl(
    state: &AppState,
    direction: String,
) -> Result<ScheduleViewResponse, InfraError> {
    let direction = parse_direction(&direction)?;
    let mut runtime = lock_runtime(state)?;
    runtime.schedule.navigate(direction);
    Ok(to_schedule_view_response(&runtime.schedule))
}

pub fn go_to_today_impl(state: &AppState) -> Result<ScheduleViewResponse, InfraError> {
    let today = state.today();
    let mut runtime = lock_runtime(state)?;
    runtime.schedule.go_to_today(today);
    Ok(to_schedule_view_response(&runtime.schedule))
}

/// Defaults to today rather than the selected date.
pub fn get_day_summary_impl(
    state: &AppState,
    date: Option<String>,
) -> Result<DaySummary, InfraError> {
    let date = resolve_date(date, state.today())?;
    Ok(lock_runtime(state)?.schedule.day_summary(date))
}

// Study sessions

pub fn start_study_session_impl(
    state: &AppState,
    task_id: String,
) -> Result<StudySessionStateResponse, InfraError> {
    let task_id = required_id(&task_id, "task_id")?;
    let now = state.now();
    let response = {
        let mut runtime = lock_runtime(state)?;
        if !runtime.schedule.contains(task_id) {
            return Err(InfraError::InvalidInput(format!("task not found: {task_id}")));
        }
        runtime.study.start_session(task_id, now)?;
        to_study_session_state_response(&runtime.study)
    };

    state.study_activity.notify_one();
    tracing::info!(command = "start_study_session", task_id, "started study session");
    Ok(response)
}

pub fn end_study_session_impl(state: &AppState) -> Result<StudySession, InfraError> {
    let now = state.now();
    let session = lock_runtime(state)?.study.end_session(now)?;
    tracing::info!(
        command = "end_study_session",
        session_id = %session.id,
        task_id = %session.task_id,
        duration_seconds = session.duration_seconds,
        "ended study session"
    );
    Ok(session)
}

pub fn get_study_session_state_impl(
    state: &AppState,
) -> Result<StudySessionStateResponse, InfraError> {
    let runtime = lock_runtime(state)?;
    Ok(to_study_session_state_response(&runtime.study))
}

pub fn list_study_sessions_impl(state: &AppState) -> Result<Vec<StudySession>, InfraError> {
    Ok(lock_runtime(state)?.study.history().to_vec())
}

// Pomodoro

pub fn start_pomodoro_impl(
    state: &AppState,
    leg_type: Option<String>,
    task_id: Option<String>,
) -> Result<PomodoroStateResponse, InfraError> {
    let leg_type = match leg_type {
        Some(raw) => parse_leg_type(&raw)?,
        None => PomodoroLegType::Work,
    };
    let task_id = task_id
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned);
    let now = state.now();

    let response = {
        let mut runtime = lock_runtime(state)?;
        if let Some(task_id) = task_id.as_deref() {
            if !runtime.schedule.contains(task_id) {
                return Err(InfraError::InvalidInput(format!("task not found: {task_id}")));
            }
        }
        runtime.pomodoro.start(leg_type, task_id, now)?;
        to_pomodoro_state_response(&runtime.pomodoro)
    };

    state.pomodoro_activity.notify_one();
    tracing::info!(command = "start_pomodoro", leg = leg_type.as_str(), "started pomodoro leg");
    Ok(response)
}

pub fn pause_pomodoro_impl(state: &AppState) -> Result<PomodoroStateResponse, InfraError> {
    let mut runtime = lock_runtime(state)?;
    runtime.pomodoro.pause()?;
    tracing::info!(command = "pause_pomodoro", "paused pomodoro leg");
    Ok(to_pomodoro_state_response(&runtime.pomodoro))
}

pub fn resume_pomodoro_impl(state: &AppState) -> Result<PomodoroStateResponse, InfraError> {
    let response = {
        let mut runtime = lock_runtime(state)?;
        runtime.pomodoro.resume()?;
        to_pomodoro_state_response(&runtime.pomodoro)
    };
    state.pomodoro_activity.notify_one();
    tracing::info!(command = "resume_pomodoro", "resumed pomodoro leg");
    Ok(response)
}

pub fn toggle_pomodoro_pause_impl(state: &AppState) -> Result<PomodoroStateResponse, InfraError> {
    let (response, resumed) = {
        let mut runtime = lock_runtime(state)?;
        let toggled = runtime.pomodoro.toggle_pause()?;
        (
            to_pomodoro_state_response(&runtime.pomodoro),
            matches!(toggled, PomodoroState::Running(_)),
        )
    };
    if resumed {
        state.pomodoro_activity.notify_one();
    }
    tracing::info!(
        command = "toggle_pomodoro_pause",
        state = response.state.as_str(),
        "toggled pomodoro pause"
    );
    Ok(response)
}

pub fn stop_pomodoro_impl(state: &AppState) -> Result<PomodoroStateResponse, InfraError> {
    let mut runtime = lock_runtime(state)?;
    let abandoned = runtime.pomodoro.stop()?;
    tracing::info!(
        command = "stop_pomodoro",
        session_id = %abandoned.id,
        leg = abandoned.leg_type.as_str(),
        "abandoned pomodoro leg"
    );
    Ok(to_pomodoro_state_response(&runtime.pomodoro))
}

pub fn skip_pomodoro_impl(state: &AppState) -> Result<PomodoroStateResponse, InfraError> {
    let now = state.now();
    let (response, completion) = {
        let mut runtime = lock_runtime(state)?;
        let completion = runtime.pomodoro.skip(now)?;
        (to_pomodoro_state_response(&runtime.pomodoro), completion)
    };
    // An auto-started leg gets a fresh clock phase.
    if completion.next.is_some() {
        state.pomodoro_activity.notify_one();
    }
    log_leg_completion("skip_pomodoro", &completion);
    Ok(response)
}

pub fn get_pomodoro_state_impl(state: &AppState) -> Result<PomodoroStateResponse, InfraError> {
    let runtime = lock_runtime(state)?;
    Ok(to_pomodoro_state_response(&runtime.pomodoro))
}

pub fn list_pomodoro_sessions_impl(state: &AppState) -> Result<Vec<PomodoroSession>, InfraError> {
    Ok(lock_runtime(state)?.pomodoro.history().to_vec())
}

pub fn get_today_focus_stats_impl(state: &AppState) -> Result<FocusStatsResponse, InfraError> {
    let today = state.today();
    let stats = lock_runtime(state)?
        .pomodoro
        .focus_stats_for(today, state.timezone);
    Ok(to_focus_stats_response(today, stats))
}

pub fn get_pomodoro_settings_impl(state: &AppState) -> Result<PomodoroSettings, InfraError> {
    Ok(lock_runtime(state)?.pomodoro.settings().clone())
}

/// Writes new settings to `pomodoro.json`, then applies them to the running engine.
/// A failed write leaves the engine untouched.
pub fn update_pomodoro_settings_impl(
    state: &AppState,
    settings: PomodoroSettings,
) -> Result<PomodoroSettings, InfraError> {
    {
        let mut runtime = lock_runtime(state)?;
        settings.validate().map_err(DomainError::InvalidSettings)?;
        save_pomodoro_settings(&state.config_dir, &settings)?;
        runtime.pomodoro.update_settings(settings.clone())?;
    }
    tracing::info!(
        command = "update_pomodoro_settings",
        work_duration = settings.work_duration,
        short_break_duration = settings.short_break_duration,
        long_break_duration = settings.long_break_duration,
        "updated pomodoro settings"
    );
    Ok(settings)
}

// Clock

pub fn tick_study_session_impl(state: &AppState) -> Result<bool, InfraError> {
    Ok(lock_runtime(state)?.study.tick())
}

pub fn tick_pomodoro_impl(state: &AppState) -> Result<Option<LegCompletion>, InfraError> {
    let now = state.now();
    let completion = lock_runtime(state)?.pomodoro.tick(now);
    if let Some(completion) = completion.as_ref() {
        log_leg_completion("tick", completion);
    }
    Ok(completion)
}

pub fn tick_target_impl(state: &AppState, target: TickTarget) -> Result<(), InfraError> {
    match target {
        TickTarget::StudySession => tick_study_session_impl(state).map(|_| ()),
        TickTarget::Pomodoro => tick_pomodoro_impl(state).map(|_| ()),
    }
}

/// Advances both timers by one second under a single lock.
pub fn tick_impl(state: &AppState) -> Result<TickReport, InfraError> {
    let now = state.now();
    let report = {
        let mut runtime = lock_runtime(state)?;
        TickReport {
            study_session_advanced: runtime.study.tick(),
            pomodoro_completion: runtime.pomodoro.tick(now),
        }
    };
    if let Some(completion) = report.pomodoro_completion.as_ref() {
        log_leg_completion("tick", completion);
    }
    Ok(report)
}

fn log_leg_completion(command: &str, completion: &LegCompletion) {
    tracing::info!(
        command,
        session_id = %completion.completed.id,
        leg = completion.completed.leg_type.as_str(),
        is_break = completion.completed.leg_type.is_break(),
        duration_seconds = completion.completed.duration_seconds,
        next = completion.next.map(PomodoroLegType::as_str).unwrap_or("idle"),
        "completed pomodoro leg"
    );
}

fn lock_runtime(state: &AppState) -> Result<MutexGuard<'_, RuntimeState>, InfraError> {
    state
        .runtime
        .lock()
        .map_err(|error| InfraError::LockPoisoned(format!("runtime lock poisoned: {error}")))
}

fn to_schedule_view_response(schedule: &ScheduleStore) -> ScheduleViewResponse {
    ScheduleViewResponse {
        selected_date: schedule.selected_date(),
        view_mode: schedule.view_mode(),
        days: schedule.visible_schedule(),
    }
}

fn to_task_card_response(
    task: Task,
    study: &StudySessionTracker,
) -> Result<TaskCardResponse, InfraError> {
    // Minutes fit in u64 once end > start has been enforced.
    let duration_seconds = u64::try_from(task.duration_minutes).unwrap_or_default() * 60;
    Ok(TaskCardResponse {
        start_display: format_time_of_day(&task.start_time)?,
        end_display: format_time_of_day(&task.end_time)?,
        duration_display: format_duration(duration_seconds),
        priority_color: task.priority.color().to_string(),
        tracked_seconds: study.total_seconds_for_task(&task.id),
        task,
    })
}

fn to_study_session_state_response(study: &StudySessionTracker) -> StudySessionStateResponse {
    StudySessionStateResponse {
        active: study.active().cloned(),
        elapsed_seconds: study.elapsed_seconds(),
        elapsed_display: format_duration(study.elapsed_seconds()),
    }
}

fn to_pomodoro_state_response(engine: &PomodoroEngine) -> PomodoroStateResponse {
    let active = engine.active();
    PomodoroStateResponse {
        state: engine.state(),
        current_session_id: active.map(|session| session.id.clone()),
        current_task_id: active.and_then(|session| session.task_id.clone()),
        start_time: active.map(|session| session.start_time.to_rfc3339()),
        elapsed_seconds: engine.elapsed_seconds(),
        duration_seconds: engine.current_duration(),
        remaining_seconds: engine.remaining_seconds(),
        remaining_display: format_duration(u64::from(engine.remaining_seconds())),
        progress: engine.progress(),
        completed_work_legs: engine.completed_work_legs(),
    }
}

fn to_focus_stats_response(date: NaiveDate, stats: FocusStats) -> FocusStatsResponse {
    FocusStatsResponse {
        date,
        work_sessions: stats.work_sessions,
        total_focus_seconds: stats.total_focus_seconds,
        total_focus_display: format_duration(stats.total_focus_seconds),
    }
}

fn to_task_form(request: TaskFormRequest) -> Result<TaskForm, InfraError> {
    let priority = match request.priority.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_task_priority(raw)?,
        _ => TaskPriority::default(),
    };
    let task_type = match request.task_type.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_task_type(raw)?,
        _ => TaskType::default(),
    };
    Ok(TaskForm {
        title: request.title,
        subject: request.subject,
        start_time: request.start_time,
        end_time: request.end_time,
        priority,
        task_type,
        description: request.description.unwrap_or_default(),
    })
}

fn required_id<'a>(value: &'a str, field_name: &str) -> Result<&'a str, InfraError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InfraError::InvalidInput(format!("{field_name} must not be empty")));
    }
    Ok(value)
}

fn resolve_date(value: Option<String>, fallback: NaiveDate) -> Result<NaiveDate, InfraError> {
    match value.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_date_input(raw, "date"),
        _ => Ok(fallback),
    }
}

fn parse_date_input(value: &str, field_name: &str) -> Result<NaiveDate, InfraError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|error| {
        InfraError::InvalidInput(format!("{field_name} must be YYYY-MM-DD: {error}"))
    })
}

fn parse_task_priority(value: &str) -> Result<TaskPriority, InfraError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "low" => Ok(TaskPriority::Low),
        "medium" => Ok(TaskPriority::Medium),
        "high" => Ok(TaskPriority::High),
        other => Err(InfraError::InvalidInput(format!(
            "unsupported task priority: {other}"
        ))),
    }
}

fn parse_task_type(value: &str) -> Result<TaskType, InfraError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "study" => Ok(TaskType::Study),
        "assignment" => Ok(TaskType::Assignment),
        "exam" => Ok(TaskType::Exam),
        "review" => Ok(TaskType::Review),
        "break" => Ok(TaskType::Break),
        other => Err(InfraError::InvalidInput(format!("unsupported task type: {other}"))),
    }
}

fn parse_leg_type(value: &str) -> Result<PomodoroLegType, InfraError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "work" => Ok(PomodoroLegType::Work),
        "shortbreak" | "short_break" | "short-break" => Ok(PomodoroLegType::ShortBreak),
        "longbreak" | "long_break" | "long-break" => Ok(PomodoroLegType::LongBreak),
        other => Err(InfraError::InvalidInput(format!(
            "unsupported pomodoro leg type: {other}"
        ))),
    }
}

fn parse_view_mode(value: &str) -> Result<ViewMode, InfraError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "day" => Ok(ViewMode::Day),
        "week" => Ok(ViewMode::Week),
        "month" => Ok(ViewMode::Month),
        other => Err(InfraError::InvalidInput(format!("unsupported view mode: {other}"))),
    }
}

fn parse_direction(value: &str) -> Result<NavigationDirection, InfraError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "prev" | "previous" => Ok(NavigationDirection::Previous),
        "next" => Ok(NavigationDirection::Next),
        other => Err(InfraError::InvalidInput(format!(
            "unsupported navigation direction: {other}"
        ))),
    }
}
