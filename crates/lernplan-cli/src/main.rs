//! Lernplan CLI Application
//!
//! Command-line interface for the Lernplan learning-plan wizard. Every
//! invocation resumes the persisted draft, applies one command, and writes
//! the draft back.

mod args;
mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use lernplan_core::{SqliteDraftStore, WizardBuilder};
use log::info;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, command } = Args::parse();

    let store = match database_file {
        Some(path) => SqliteDraftStore::new(path),
        None => SqliteDraftStore::at_default_path(),
    }
    .context("Failed to open draft store")?;

    let wizard = WizardBuilder::new()
        .with_draft_store(Arc::new(store))
        .build()
        .await
        .context("Failed to initialize wizard")?;

    info!("Lernplan started");

    let mut cli = Cli::new(wizard);

    match command {
        Some(Init(args)) => cli.handle_init(args.method.into()).await,
        Some(Set(args)) => cli.handle_set(args.into_patch()?).await,
        Some(Next(args)) => cli.handle_next(args.confirm).await,
        Some(Back) => cli.handle_back().await,
        Some(Goto(args)) => cli.handle_goto(args.step).await,
        Some(Preview) => cli.handle_preview(),
        Some(Discard) => cli.handle_discard().await,
        Some(Complete) => cli.handle_complete().await,
        Some(Status) | None => cli.handle_status(),
    }
}
