// src/bin/todo.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use todo_cli::cli::{Cli, Commands, ConfigCommands, handlers};

/// The main entry point of the `todo` application.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    match cli.command {
        Commands::Add { title, description } => handlers::add::handle(title, description),
        Commands::List => handlers::list::handle(),
        Commands::Complete { id } => handlers::complete::handle(id),
        Commands::Delete { id } => handlers::delete::handle(id),
        Commands::Config { command } => match command {
            ConfigCommands::Storage => handlers::config::handle_storage(),
            ConfigCommands::Show => handlers::config::handle_show(),
        },
    }
}
