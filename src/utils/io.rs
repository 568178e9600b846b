// src/utils/io.rs
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "password-meter.log";

/// Get the application data directory
pub fn get_app_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "password-meter", "password-meter")
        .map(|proj_dirs| proj_dirs.data_local_dir().to_path_buf())
}

/// Default log location; the directory is created when logging starts.
pub fn default_log_file() -> PathBuf {
    get_app_data_dir()
        .unwrap_or_else(|| PathBuf::from("logs"))
        .join(LOG_FILE_NAME)
}
