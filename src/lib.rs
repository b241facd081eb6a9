pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::bootstrap::{BootstrapResult, bootstrap_workspace};
pub use application::commands::{
    AppState, FocusStatsResponse, PomodoroStateResponse, ScheduleViewResponse,
    StudySessionStateResponse, TaskCardResponse, TaskFormRequest, TickReport, TickTarget,
};
pub use application::ticker::{ClockTicker, spawn_clock_ticker, spawn_clock_tickers};
pub use domain::error::DomainError;
pub use domain::models::{
    PomodoroLegType, PomodoroSession, PomodoroSettings, StudySession, Task, TaskPriority,
    TaskType,
};
pub use infrastructure::error::InfraError;

use std::path::PathBuf;
use std::sync::Arc;

/// Log level comes from `RAFIQ_LOG`, defaulting to `info`. Safe to call twice.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RAFIQ_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// A bootstrapped workspace with both clocks running.
pub struct Runtime {
    pub state: Arc<AppState>,
    pub tickers: [ClockTicker; 2],
}

impl Runtime {
    /// Stops both clocks. State stays readable through any other `Arc` clones.
    pub async fn shutdown(self) {
        for ticker in self.tickers {
            ticker.shutdown().await;
        }
        tracing::info!("study tracker stopped");
    }
}

/// Bootstraps `workspace_root` and spawns the clock tickers on the current tokio runtime.
pub fn start(workspace_root: PathBuf) -> Result<Runtime, InfraError> {
    let state = Arc::new(AppState::new(workspace_root)?);
    let tickers = spawn_clock_tickers(&state);
    tracing::info!(
        config_dir = %state.config_dir().display(),
        timezone = %state.timezone(),
        "study tracker started"
    );
    Ok(Runtime { state, tickers })
}
