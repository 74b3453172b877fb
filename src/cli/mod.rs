// src/cli/mod.rs

use clap::{Parser, Subcommand};

pub mod handlers;

/// todo: a small personal task tracker.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Title of the task.
        title: String,
        /// Optional longer description.
        #[arg(long, short)]
        description: Option<String>,
    },
    /// List all tasks.
    #[command(alias = "ls")]
    List,
    /// Mark a task as completed.
    #[command(alias = "done")]
    Complete {
        /// Id of the task to complete.
        id: u64,
    },
    /// Delete a task.
    #[command(alias = "rm")]
    Delete {
        /// Id of the task to delete.
        id: u64,
    },
    /// Inspect or change the application configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Interactively select and configure the storage backend.
    Storage,
    /// Print the current configuration document.
    Show,
}
