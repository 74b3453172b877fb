// src/cli/handlers/list.rs

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::cli::handlers;
use crate::models::{Task, TaskStatus};

pub fn handle() -> Result<()> {
    let service = handlers::build_service()?;
    let tasks = service.list_tasks()?;

    if tasks.is_empty() {
        println!("No tasks yet. Add one with {}.", "todo add <title>".cyan());
        return Ok(());
    }

    print_task_table(&tasks);
    Ok(())
}

fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}

fn print_task_table(tasks: &[Task]) {
    // Column widths adapt to content; timestamps are fixed-width.
    let title_width = tasks
        .iter()
        .map(|t| t.title.chars().count())
        .chain(std::iter::once("Title".len()))
        .max()
        .unwrap_or(5);

    let header = format!(
        "{:<20} {:<title_width$} {:<11} {:<16} {:<16}",
        "ID", "Title", "Status", "Created", "Completed",
    );
    println!("{}", header.bold());

    for task in tasks {
        // Plain labels here: ANSI escapes inside a padded column break alignment.
        let status_label = match task.status {
            TaskStatus::Pending => "open",
            TaskStatus::Completed => "completed",
        };
        let row = format!(
            "{:<20} {:<title_width$} {:<11} {:<16} {:<16}",
            task.id,
            task.title,
            status_label,
            format_timestamp(Some(task.created_at)),
            format_timestamp(task.completed_at),
        );
        if task.status == TaskStatus::Completed {
            println!("{}", row.dimmed());
        } else {
            println!("{row}");
        }
        if let Some(description) = &task.description {
            println!("{:<20} {}", "", description.dimmed());
        }
    }
}
