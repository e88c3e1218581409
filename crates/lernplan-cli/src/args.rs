//! Command-line argument definitions using clap's derive API.
//!
//! Argument structures stay free of core types where parsing can fail;
//! fallible conversions live in explicit `into_*` methods so that clap
//! concerns (flags, help text, value parsing) never leak into the core
//! parameter structures.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use lernplan_core::models::{CreationMethod, DistributionMode, StatePatch, Subject};

/// Main command-line interface for the Lernplan wizard
///
/// Lernplan walks you through creating a learning plan step by step. The
/// wizard run is persisted as a draft between invocations, so each command
/// resumes exactly where the previous one left off.
#[derive(Parser)]
#[command(version, about, name = "lern")]
pub struct Args {
    /// Path to the SQLite draft file. Defaults to
    /// $XDG_DATA_HOME/lernplan/drafts.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Lernplan CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start a new wizard run with the given creation method
    #[command(alias = "i")]
    Init(InitArgs),
    /// Update fields of the current draft
    Set(SetArgs),
    /// Show the current wizard position
    #[command(alias = "s")]
    Status,
    /// Advance to the next step
    #[command(alias = "n")]
    Next(NextArgs),
    /// Go back one step
    #[command(alias = "b")]
    Back,
    /// Jump to a specific step
    #[command(alias = "g")]
    Goto(GotoArgs),
    /// Show the calendar the current draft would produce
    #[command(alias = "p")]
    Preview,
    /// Throw the current draft away
    Discard,
    /// Create the plan from the finished draft
    #[command(alias = "c")]
    Complete,
}

/// Start a new wizard run
#[derive(ClapArgs)]
pub struct InitArgs {
    /// Creation method for the new plan
    #[arg(help = "Creation method: calendar, manual, automatic, template or ai")]
    pub method: MethodArg,
}

/// Update fields of the current draft
///
/// Every flag maps to one field of the draft; unset flags leave the
/// corresponding field untouched.
#[derive(ClapArgs)]
pub struct SetArgs {
    /// Name of the plan
    #[arg(long)]
    pub plan_name: Option<String>,
    /// First day of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<Date>,
    /// Last day of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<Date>,
    /// Number of buffer days at the end of the plan
    #[arg(long)]
    pub buffer_days: Option<u32>,
    /// Number of vacation days before the buffer
    #[arg(long)]
    pub vacation_days: Option<u32>,
    /// Number of learning blocks per day (1-4)
    #[arg(long)]
    pub blocks_per_day: Option<u8>,
    /// How content is distributed over the learning days
    #[arg(long)]
    pub distribution_mode: Option<ModeArg>,
    /// Subjects as id=weight pairs, comma-separated (weight optional)
    #[arg(
        long,
        value_delimiter = ',',
        help = "Subjects as id=weight pairs, e.g. zivilrecht=60,strafrecht=40"
    )]
    pub subject: Vec<String>,
}

impl SetArgs {
    /// Convert the parsed flags into a core state patch.
    pub fn into_patch(self) -> Result<StatePatch> {
        let subjects = if self.subject.is_empty() {
            None
        } else {
            Some(
                self.subject
                    .iter()
                    .map(|entry| parse_subject(entry))
                    .collect::<Result<Vec<_>>>()?,
            )
        };
        Ok(StatePatch {
            plan_name: self.plan_name,
            start_date: self.start_date,
            end_date: self.end_date,
            buffer_days: self.buffer_days,
            vacation_days: self.vacation_days,
            blocks_per_day: self.blocks_per_day,
            distribution_mode: self.distribution_mode.map(Into::into),
            subjects,
            ..Default::default()
        })
    }
}

fn parse_subject(entry: &str) -> Result<Subject> {
    let (id, weight) = match entry.split_once('=') {
        Some((id, weight)) => {
            let weight: u32 = weight
                .parse()
                .with_context(|| format!("Invalid weight for subject '{id}': '{weight}'"))?;
            (id, Some(weight))
        }
        None => (entry, None),
    };
    Ok(Subject {
        id: id.to_string(),
        name: id.to_string(),
        weight,
    })
}

/// Advance to the next step
#[derive(ClapArgs)]
pub struct NextArgs {
    /// Confirm leaving a subject loop with unconfigured subjects
    #[arg(long)]
    pub confirm: bool,
}

/// Jump to a specific step
#[derive(ClapArgs)]
pub struct GotoArgs {
    /// 1-based step number to jump to
    #[arg(help = "1-based step number; jumping backward resets dependent inputs")]
    pub step: u32,
}

/// Command-line argument representation of creation methods
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Pure calendar without subjects
    Calendar,
    /// Full manual configuration of subjects, themes and blocks
    Manual,
    /// Automatic allocation from subjects and weights
    Automatic,
    /// Start from a plan template
    Template,
    /// Assisted plan generation
    Ai,
}

impl From<MethodArg> for CreationMethod {
    fn from(val: MethodArg) -> Self {
        match val {
            MethodArg::Calendar => CreationMethod::Calendar,
            MethodArg::Manual => CreationMethod::Manual,
            MethodArg::Automatic => CreationMethod::Automatic,
            MethodArg::Template => CreationMethod::Template,
            MethodArg::Ai => CreationMethod::Ai,
        }
    }
}

/// Command-line argument representation of distribution modes
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Alternate subjects within a day
    Mixed,
    /// One subject per day
    Focused,
    /// Subjects strictly in declared order
    Sequential,
}

impl From<ModeArg> for DistributionMode {
    fn from(val: ModeArg) -> Self {
        match val {
            ModeArg::Mixed => DistributionMode::Mixed,
            ModeArg::Focused => DistributionMode::Focused,
            ModeArg::Sequential => DistributionMode::Sequential,
        }
    }
}
