//! Core library for the Lernplan learning-plan wizard.
//!
//! This crate turns a handful of user preferences — date range, buffer and
//! vacation days, daily block count, weekly working-day pattern, subject
//! weighting and user-authored content — into a fully populated calendar:
//! one entry per day containing typed time blocks, each optionally carrying
//! assigned content.
//!
//! # Architecture
//!
//! Two tightly coupled subsystems form the core:
//!
//! - the **step navigator** ([`navigator`]): a branching state machine that
//!   decides how many steps a creation method has, which step follows which,
//!   when a subject-by-subject sub-loop repeats, and which downstream state a
//!   backward navigation must cascade-reset;
//! - the **allocation engine** ([`schedule`]): a deterministic algorithm
//!   that partitions the date range into learning, vacation and buffer
//!   segments, converts percentage weights into slot quotas, and walks a
//!   FIFO queue of user-authored content onto calendar slots — or
//!   re-materializes a user-edited preview, which always wins over fresh
//!   generation.
//!
//! Around them sit the [`validation`] predicates gating forward navigation,
//! the [`draft`] persistence port with its debounced save discipline, and
//! the [`wizard`] orchestrator wiring everything to the external
//! collaborators defined in [`ports`].
//!
//! # Quick Start
//!
//! ```rust
//! use lernplan_core::{StatePatch, WizardBuilder};
//! use lernplan_core::models::CreationMethod;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new().build().await?;
//!
//! wizard.apply(StatePatch {
//!     creation_method: Some(CreationMethod::Calendar),
//!     start_date: Some(jiff::civil::date(2025, 1, 1)),
//!     end_date: Some(jiff::civil::date(2025, 1, 31)),
//!     ..Default::default()
//! });
//!
//! println!("{}", lernplan_core::display::WizardStatus(wizard.state()));
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod draft;
pub mod error;
pub mod models;
pub mod navigator;
pub mod ports;
pub mod schedule;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use display::{CalendarDays, OperationStatus, WizardStatus};
pub use draft::{Debouncer, DraftStore, MemoryDraftStore, SqliteDraftStore};
pub use error::{Result, WizardError};
pub use models::{
    BlockContent, BlockType, CalendarBlock, CalendarData, CreationMethod, DistributionMode,
    StatePatch, WizardState,
};
pub use navigator::{go_to, next, previous, total_steps, Advance, Transition};
pub use ports::{CalendarSink, PlanCreated, PlanMetadata, PlanRequest, PlanService};
pub use schedule::{allocate, DayKind, PeriodSpan};
pub use validation::is_step_valid;
pub use wizard::{Wizard, WizardAdvance, WizardBuilder};
