use dirs::home_dir;
use std::{env, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".cashflow_core";
const PROFILE_DIR: &str = "profiles";
const BACKUP_DIR: &str = "backups";
const CONFIG_FILE: &str = "config.json";
const CONFIG_BACKUP_DIR: &str = "config_backups";
const STATE_FILE: &str = "state.json";

/// Returns the application data directory, defaulting to `~/.cashflow_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("CASHFLOW_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn profiles_dir_in(root: &Path) -> PathBuf {
    root.join(PROFILE_DIR)
}

pub fn backups_dir_in(root: &Path) -> PathBuf {
    root.join(BACKUP_DIR)
}

pub fn config_file_in(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn config_backups_dir_in(root: &Path) -> PathBuf {
    root.join(CONFIG_BACKUP_DIR)
}

pub fn state_file_in(root: &Path) -> PathBuf {
    root.join(STATE_FILE)
}
