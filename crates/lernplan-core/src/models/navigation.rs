//! Navigation state: current step, totals and loop cursors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::ContentId;

/// Cursor and completion bookkeeping for the wizard's repeating sub-loops.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoopCursors {
    /// Index into the declared subject order for the active loop
    pub subject_index: usize,

    /// Subjects whose sub-area configuration is complete
    #[serde(default)]
    pub subarea_done: BTreeMap<ContentId, bool>,

    /// Subjects whose theme configuration is complete
    #[serde(default)]
    pub theme_done: BTreeMap<ContentId, bool>,
}

impl LoopCursors {
    /// Reset the sub-area loop phase.
    pub fn reset_subarea_phase(&mut self) {
        self.subject_index = 0;
        self.subarea_done.clear();
    }

    /// Reset the theme loop phase.
    pub fn reset_theme_phase(&mut self) {
        self.subject_index = 0;
        self.theme_done.clear();
    }
}

/// Step position within the active creation method's step graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Navigation {
    /// Current step, 1-based
    pub current_step: u32,

    /// Total steps for the active creation method
    pub total_steps: u32,

    /// Sub-loop cursors and completion flags
    #[serde(default)]
    pub loop_cursors: LoopCursors,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            current_step: 1,
            total_steps: 0,
            loop_cursors: LoopCursors::default(),
        }
    }
}
