mod cli;
mod commands;
mod config;
mod confirm;
mod envelope;
mod error;
mod lister;
mod ops;
mod path;
mod store;
mod sweep;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::DeleteAll { path } => commands::delete_all::run(&path)?,
        Command::Get { path } => commands::get::run(&path)?,
        Command::Set { path } => commands::set::run(&path)?,
        Command::Delete { path } => commands::delete::run(&path)?,
        Command::Exists { path } => commands::exists::run(&path)?,
        Command::List { path } => commands::list::run(&path)?,
    }

    Ok(())
}
