//! Data models for the learning plan wizard.
//!
//! This module contains the domain models the wizard core operates on: the
//! single mutable [`WizardState`] record, the user-authored content catalog,
//! the weekly structure, planned block content and the allocation engine's
//! [`CalendarBlock`] output. Display implementations live in
//! [`crate::display`] to keep data structures separate from presentation.

pub mod blocks;
pub mod catalog;
pub mod method;
pub mod navigation;
pub mod patch;
pub mod period;
pub mod preview;
pub mod state;
pub mod structure;


// Re-export all public types at the models level
pub use blocks::{BlockAssignments, BlockContent, CalendarBlock, CalendarData};
pub use catalog::{subject_themes, ContentId, SubArea, Subject, SubjectCatalog, TaskItem, Theme};
pub use method::{CreationMethod, DistributionMode};
pub use navigation::{LoopCursors, Navigation};
pub use patch::StatePatch;
pub use period::PlanPeriod;
pub use preview::{PreviewBlock, PreviewDay};
pub use state::WizardState;
pub use structure::{BlockType, DailyStructure, WeekPattern};
