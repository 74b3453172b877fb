// src/cli/handlers/config.rs

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use serde_json::{Map, Value};

use crate::core::config_manager::ConfigManager;
use crate::core::{paths, registry};
use crate::models::{ConfigDocument, UseSection};

/// Interactive backend selection and configuration (`todo config storage`).
pub fn handle_storage() -> Result<()> {
    let manager = ConfigManager::default_location()?;

    // 1. Pick the backend type.
    let backends = registry::available_backends();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Storage backend")
        .items(&backends)
        .default(0)
        .interact()?;
    let backend_type = backends.get(selection).copied().unwrap_or(registry::DEFAULT_BACKEND);

    // 2. Collect that backend's parameters from the user.
    let params = match backend_type {
        "json" => prompt_json_params()?,
        other => {
            // Unreachable while json is the only registered backend, but a
            // new registry entry must get a prompt here before release.
            anyhow::bail!("No interactive configuration available for '{other}'.");
        }
    };

    // 3. Build the candidate document and apply it (validated, all-or-nothing).
    let mut backends_section = Map::new();
    backends_section.insert(backend_type.to_string(), Value::Object(params));
    let candidate = ConfigDocument {
        active: UseSection {
            storage: backend_type.to_string(),
        },
        backends: backends_section,
    };
    manager.update_config(&candidate)?;

    println!(
        "{} Storage backend set to '{}'.",
        "✔".green().bold(),
        backend_type.cyan()
    );
    Ok(())
}

/// Prints the current configuration document (`todo config show`).
pub fn handle_show() -> Result<()> {
    let manager = ConfigManager::default_location()?;
    let config = manager.load_config()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn prompt_json_params() -> Result<Map<String, Value>> {
    let default_path = paths::default_tasks_path()?.display().to_string();

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Task file location")
        .items(&[
            format!("Use default path ({default_path})"),
            "Provide a custom path".to_string(),
        ])
        .default(0)
        .interact()?;

    let path = if choice == 0 {
        default_path
    } else {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Storage path")
            .interact_text()?
    };

    let mut params = Map::new();
    params.insert("path".to_string(), Value::String(path));
    Ok(params)
}
