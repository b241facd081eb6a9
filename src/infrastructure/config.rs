use crate::domain::models::PomodoroSettings;
use crate::infrastructure::error::InfraError;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const APP_JSON: &str = "app.json";
const POMODORO_JSON: &str = "pomodoro.json";
const SCHEMA_VERSION: u64 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigBundle {
    pub app: serde_json::Value,
    pub pomodoro: serde_json::Value,
}

fn default_files() -> HashMap<&'static str, serde_json::Value> {
    let settings = PomodoroSettings::default();
    HashMap::from([
        (
            APP_JSON,
            serde_json::json!({
                "schema": SCHEMA_VERSION,
                "appName": "Rafiq",
                "timezone": "UTC"
            }),
        ),
        (
            POMODORO_JSON,
            serde_json::json!({
                "schema": SCHEMA_VERSION,
                "workDuration": settings.work_duration,
                "shortBreakDuration": settings.short_break_duration,
                "longBreakDuration": settings.long_break_duration,
                "autoStartBreaks": settings.auto_start_breaks,
                "autoStartWork": settings.auto_start_work,
                "soundEnabled": settings.sound_enabled
            }),
        ),
    ])
}

pub fn ensure_default_configs(config_dir: &Path) -> Result<(), InfraError> {
    for (name, value) in default_files() {
        let path = config_dir.join(name);
        if !path.exists() {
            write_config(&path, &value)?;
        }
    }
    Ok(())
}

fn write_config(path: &Path, value: &serde_json::Value) -> Result<(), InfraError> {
    let formatted = serde_json::to_string_pretty(value)?;
    fs::write(path, format!("{formatted}\n"))?;
    Ok(())
}

fn read_config(path: &Path) -> Result<serde_json::Value, InfraError> {
    let raw = fs::read_to_string(path)?;
    let parsed: serde_json::Value = serde_json::from_str(&raw)?;
    let schema = parsed
        .get("schema")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| InfraError::InvalidConfig(format!("missing schema in {}", path.display())))?;
    if schema != SCHEMA_VERSION {
        return Err(InfraError::InvalidConfig(format!(
            "unsupported schema {} in {}",
            schema,
            path.display()
        )));
    }
    Ok(parsed)
}

pub fn load_configs(config_dir: &Path) -> Result<ConfigBundle, InfraError> {
    Ok(ConfigBundle {
        app: read_config(&config_dir.join(APP_JSON))?,
        pomodoro: read_config(&config_dir.join(POMODORO_JSON))?,
    })
}

impl ConfigBundle {
    /// Timezone that decides where "today" starts and ends. Defaults to UTC.
    pub fn timezone(&self) -> Result<Tz, InfraError> {
        let Some(name) = self
            .app
            .get("timezone")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
        else {
            return Ok(Tz::UTC);
        };
        name.parse::<Tz>().map_err(|error| {
            InfraError::InvalidConfig(format!("unknown timezone '{name}' in {APP_JSON}: {error}"))
        })
    }

    /// Missing keys fall back to the defaults.
    pub fn pomodoro_settings(&self) -> Result<PomodoroSettings, InfraError> {
        let settings = PomodoroSettings::deserialize(&self.pomodoro)?;
        settings
            .validate()
            .map_err(|message| InfraError::InvalidConfig(format!("{message} in {POMODORO_JSON}")))?;
        Ok(settings)
    }
}

pub fn save_pomodoro_settings(
    config_dir: &Path,
    settings: &PomodoroSettings,
) -> Result<(), InfraError> {
    settings.validate().map_err(InfraError::InvalidConfig)?;

    let path = config_dir.join(POMODORO_JSON);
    let mut value = serde_json::to_value(settings)?;
    let object = value.as_object_mut().ok_or_else(|| {
        InfraError::InvalidConfig(format!("invalid object structure for {}", path.display()))
    })?;
    object.insert("schema".to_string(), serde_json::Value::from(SCHEMA_VERSION));
    write_config(&path, &value)
}
