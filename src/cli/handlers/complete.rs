// src/cli/handlers/complete.rs

use anyhow::Result;
use colored::Colorize;

use crate::cli::handlers;

pub fn handle(id: u64) -> Result<()> {
    let service = handlers::build_service()?;
    let task = service.complete_task(id)?;

    println!(
        "{} Task {} completed: {}",
        "✔".green().bold(),
        task.id.to_string().cyan(),
        task.title
    );
    Ok(())
}
