// src/cli/handlers/delete.rs

use anyhow::Result;
use colored::Colorize;

use crate::cli::handlers;

pub fn handle(id: u64) -> Result<()> {
    let service = handlers::build_service()?;
    service.delete_task(id)?;

    println!("{} Task {} deleted.", "✔".green().bold(), id);
    Ok(())
}
