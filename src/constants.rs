// src/constants.rs

/// The name of the directory holding all todo state (under the home directory).
pub const TODO_DIR: &str = ".todo";

/// The name of the configuration file (inside ~/.todo/).
pub const CONFIG_FILENAME: &str = "config.json";

/// The default name of the task collection file (inside ~/.todo/).
pub const TASKS_FILENAME: &str = "tasks.json";

/// Identifier of the JSON file backend in the registry and in config files.
pub const JSON_BACKEND: &str = "json";
