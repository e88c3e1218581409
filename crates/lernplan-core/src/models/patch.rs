//! Merge-style state updates.
//!
//! Every wizard step mutates [`WizardState`] through exactly one operation,
//! [`WizardState::apply`], which merges the set fields of a [`StatePatch`]
//! into the state. Unset fields are left untouched.

use jiff::civil::Date;

use super::blocks::BlockAssignments;
use super::catalog::{Subject, SubjectCatalog};
use super::method::{CreationMethod, DistributionMode};
use super::preview::PreviewDay;
use super::state::WizardState;
use super::structure::WeekPattern;
use crate::navigator;

/// Partial update merged into [`WizardState`] by [`WizardState::apply`].
#[derive(Debug, Clone, Default)]
pub struct StatePatch {
    pub plan_name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub buffer_days: Option<u32>,
    pub vacation_days: Option<u32>,
    pub blocks_per_day: Option<u8>,
    pub week_pattern: Option<WeekPattern>,
    pub creation_method: Option<CreationMethod>,
    pub subjects: Option<Vec<Subject>>,
    pub subject_catalog: Option<SubjectCatalog>,
    pub block_assignments: Option<BlockAssignments>,
    pub distribution_mode: Option<DistributionMode>,
    pub preview_calendar: Option<Vec<PreviewDay>>,
}

impl WizardState {
    /// Merge the set fields of `patch` into the state.
    ///
    /// Setting a *different* creation method re-derives the step total and
    /// resets navigation to step one; re-applying the current method is a
    /// no-op for navigation.
    pub fn apply(&mut self, patch: StatePatch) {
        if let Some(method) = patch.creation_method {
            let changed = self.creation_method != Some(method);
            self.creation_method = Some(method);
            self.navigation.total_steps = navigator::total_steps(method);
            if changed {
                self.navigation.current_step = 1;
                self.navigation.loop_cursors = Default::default();
            }
        }
        if let Some(name) = patch.plan_name {
            self.plan_name = Some(name);
        }
        if let Some(date) = patch.start_date {
            self.period.start_date = Some(date);
        }
        if let Some(date) = patch.end_date {
            self.period.end_date = Some(date);
        }
        if let Some(days) = patch.buffer_days {
            self.period.buffer_days = Some(days);
        }
        if let Some(days) = patch.vacation_days {
            self.period.vacation_days = Some(days);
        }
        if let Some(blocks) = patch.blocks_per_day {
            self.daily_structure.blocks_per_day = blocks;
        }
        if let Some(pattern) = patch.week_pattern {
            self.daily_structure.week_pattern = pattern;
        }
        if let Some(subjects) = patch.subjects {
            self.subjects = subjects;
        }
        if let Some(catalog) = patch.subject_catalog {
            self.subject_catalog = catalog;
        }
        if let Some(assignments) = patch.block_assignments {
            self.block_assignments = assignments;
        }
        if let Some(mode) = patch.distribution_mode {
            self.distribution_mode = Some(mode);
        }
        if let Some(preview) = patch.preview_calendar {
            self.preview_calendar = Some(preview);
        }
    }
}
