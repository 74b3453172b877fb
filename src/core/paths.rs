// src/core/paths.rs

use crate::constants::{CONFIG_FILENAME, TASKS_FILENAME, TODO_DIR};
use lazy_static::lazy_static;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

lazy_static! {
    static ref TODO_DATA_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
}

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find the user's home directory.")]
    HomeDirNotFound,
    #[error("Could not create data directory at '{path}': {source}")]
    DataDirCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Returns the path to the todo data directory (`~/.todo`).
/// Creates it if it doesn't exist.
///
/// This function is memoized: the first call computes and caches the path,
/// subsequent calls return the cached value instantly.
pub fn get_todo_data_dir() -> Result<PathBuf, PathError> {
    let mut cached_path_guard = TODO_DATA_DIR.lock().unwrap();

    if let Some(path) = &*cached_path_guard {
        return Ok(path.clone());
    }

    let data_path = dirs::home_dir()
        .ok_or(PathError::HomeDirNotFound)?
        .join(TODO_DIR);

    if !data_path.exists() {
        fs::create_dir_all(&data_path).map_err(|e| PathError::DataDirCreation {
            path: data_path.display().to_string(),
            source: e,
        })?;
    }

    *cached_path_guard = Some(data_path.clone());

    Ok(data_path)
}

/// Returns the default path of the configuration file (`~/.todo/config.json`).
pub fn default_config_path() -> Result<PathBuf, PathError> {
    get_todo_data_dir().map(|dir| dir.join(CONFIG_FILENAME))
}

/// Returns the default path of the task collection file (`~/.todo/tasks.json`).
pub fn default_tasks_path() -> Result<PathBuf, PathError> {
    get_todo_data_dir().map(|dir| dir.join(TASKS_FILENAME))
}
