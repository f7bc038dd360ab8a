mod config;
pub mod database;
pub mod kv;
pub mod session_store;

pub use config::{CategoriesConfig, Config, NotificationsConfig, TimerConfig};
pub use database::Database;
pub use kv::KvStore;
pub use session_store::{SessionStore, SESSIONS_KEY};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory, creating it if needed.
///
/// `FOCUSLOG_DATA_DIR` wins when set. Otherwise `~/.config/focuslog[-dev]/`,
/// with `FOCUSLOG_ENV=dev` selecting the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("FOCUSLOG_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("FOCUSLOG_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("focuslog-dev")
            } else {
                base_dir.join("focuslog")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
