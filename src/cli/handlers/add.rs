// src/cli/handlers/add.rs

use anyhow::Result;
use colored::Colorize;

use crate::cli::handlers;

pub fn handle(title: String, description: Option<String>) -> Result<()> {
    if title.trim().is_empty() {
        anyhow::bail!("Task title cannot be empty.");
    }
    let service = handlers::build_service()?;
    let task = service.create_task(title, description)?;

    println!(
        "{} Task {} created: {}",
        "✔".green().bold(),
        task.id.to_string().cyan(),
        task.title
    );
    Ok(())
}
