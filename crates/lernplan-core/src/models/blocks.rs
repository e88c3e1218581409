//! Planned block content and the allocation engine's output record.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::catalog::{ContentId, TaskItem, Theme};
use super::structure::BlockType;

/// Content of one planned block.
///
/// A block holds either one whole theme or a list of individually picked
/// tasks, never both; the tagged union makes the invalid "both set" state
/// unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BlockContent {
    /// Block reserved by the slot quota but not yet filled
    Empty,

    /// One whole theme, tasks denormalized for display
    Theme { theme: Theme },

    /// Individually picked tasks
    Tasks { tasks: Vec<TaskItem> },
}

impl BlockContent {
    /// True for [`BlockContent::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, BlockContent::Empty)
    }
}

/// Ordered planned blocks per subject id.
pub type BlockAssignments = BTreeMap<ContentId, Vec<BlockContent>>;

/// A single per-day, per-slot output record of the allocation engine.
///
/// Produced, never mutated; ownership transfers to the calendar collaborator
/// at hand-off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarBlock {
    /// Calendar day this block belongs to
    pub date: Date,

    /// Position of the block within its day (0-indexed)
    pub position: u32,

    /// Type of the block
    pub block_type: BlockType,

    /// Display title derived from the assigned content
    pub title: String,

    /// Tasks carried by the block
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskItem>,

    /// True when the user pinned this block in the preview step
    #[serde(default)]
    pub locked: bool,

    /// Owning subject, if the block carries content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<ContentId>,
}

impl CalendarBlock {
    /// A contentless block of the given type.
    pub fn sentinel(date: Date, position: u32, block_type: BlockType, title: &str) -> Self {
        Self {
            date,
            position,
            block_type,
            title: title.to_string(),
            tasks: Vec::new(),
            locked: false,
            subject_id: None,
        }
    }
}

/// The allocation engine's output: blocks grouped per day, days ascending.
pub type CalendarData = BTreeMap<Date, Vec<CalendarBlock>>;
