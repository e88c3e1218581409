//! Preview calendar models.
//!
//! A preview is the user-reviewed materialization of the calendar before the
//! final commit. It may contain manual swaps and locks, so when present it is
//! authoritative over fresh generation.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::catalog::{ContentId, TaskItem};

/// One block of a preview day.
///
/// Content and lock state are preserved verbatim through re-materialization;
/// only the block *type* is re-derived from the current week pattern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreviewBlock {
    /// Display title of the block
    pub title: String,

    /// Tasks carried by the block
    #[serde(default)]
    pub tasks: Vec<TaskItem>,

    /// True when the user pinned this block during preview editing
    #[serde(default)]
    pub locked: bool,

    /// Owning subject, if the block carries content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<ContentId>,
}

/// One day of the preview calendar with its ordered blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreviewDay {
    /// Calendar day
    pub date: Date,

    /// Ordered blocks for the day
    pub blocks: Vec<PreviewBlock>,
}
