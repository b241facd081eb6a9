use crate::infrastructure::config::{ConfigBundle, ensure_default_configs, load_configs};
use crate::infrastructure::error::InfraError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct BootstrapResult {
    pub workspace_root: PathBuf,
    pub config_dir: PathBuf,
    pub configs: ConfigBundle,
}

pub fn bootstrap_workspace(workspace_root: &Path) -> Result<BootstrapResult, InfraError> {
    let config_dir = workspace_root.join("config");
    fs::create_dir_all(&config_dir)?;

    ensure_default_configs(&config_dir)?;
    let configs = load_configs(&config_dir)?;

    Ok(BootstrapResult {
        workspace_root: workspace_root.to_path_buf(),
        config_dir,
        configs,
    })
}
