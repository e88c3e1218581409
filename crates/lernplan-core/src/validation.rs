//! The validation engine: per-step predicates gating forward navigation.
//!
//! [`is_step_valid`] is a total, pure function of [`WizardState`]: it never
//! mutates state and never errors. Steps without a predicate validate
//! unconditionally. Display status and navigation gating both read the same
//! predicate.

use std::collections::HashSet;

use crate::models::{catalog, BlockContent, CreationMethod, WizardState};
use crate::navigator::steps::{automatic, calendar, manual, template};

/// True when the current step's inputs allow forward navigation.
pub fn is_step_valid(state: &WizardState) -> bool {
    let Some(method) = state.creation_method else {
        return false;
    };
    let step = state.navigation.current_step;

    match method {
        CreationMethod::Manual => manual_step_valid(state, step),
        CreationMethod::Calendar => calendar_step_valid(state, step),
        CreationMethod::Automatic => automatic_step_valid(state, step),
        CreationMethod::Template => {
            if step == template::PERIOD_DATES {
                state.period.has_valid_range()
            } else if step == template::NAME_AND_CONFIRM {
                plan_name_set(state)
            } else {
                true
            }
        }
        CreationMethod::Ai => {
            if step == crate::navigator::steps::ai::PERIOD_DATES {
                state.period.has_valid_range()
            } else {
                true
            }
        }
    }
}

fn manual_step_valid(state: &WizardState, step: u32) -> bool {
    match step {
        manual::PERIOD_DATES => state.period.has_valid_range(),
        manual::BUFFER_DAYS => state.period.buffer_days.is_some(),
        manual::VACATION_DAYS => state.period.vacation_days.is_some(),
        manual::BLOCKS_PER_DAY => (1..=4).contains(&state.daily_structure.blocks_per_day),
        manual::WEEK_PATTERN => state.daily_structure.week_pattern.is_complete(),
        manual::SUBJECT_SELECT => !state.subjects.is_empty(),
        manual::SUBAREA_CONFIGURE => current_subject_has_subareas(state),
        manual::WEIGHTING => weights_valid(state),
        manual::DISTRIBUTION_MODE => state.distribution_mode.is_some(),
        manual::BLOCK_ASSIGNMENT => block_assignment_valid(state),
        manual::NAME_AND_CONFIRM => plan_name_set(state),
        _ => true,
    }
}

fn calendar_step_valid(state: &WizardState, step: u32) -> bool {
    match step {
        calendar::PERIOD_DATES => state.period.has_valid_range(),
        calendar::RESERVE_DAYS => {
            state.period.buffer_days.is_some() && state.period.vacation_days.is_some()
        }
        calendar::BLOCKS_PER_DAY => (1..=4).contains(&state.daily_structure.blocks_per_day),
        calendar::WEEK_PATTERN => state.daily_structure.week_pattern.is_complete(),
        _ => true,
    }
}

fn automatic_step_valid(state: &WizardState, step: u32) -> bool {
    match step {
        automatic::PERIOD_DATES => state.period.has_valid_range(),
        automatic::SUBJECT_SELECT => !state.subjects.is_empty(),
        automatic::WEIGHTING => weights_valid(state),
        _ => true,
    }
}

fn plan_name_set(state: &WizardState) -> bool {
    state
        .plan_name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty())
}

fn current_subject_has_subareas(state: &WizardState) -> bool {
    state.current_loop_subject().is_some_and(|subject| {
        state
            .subject_catalog
            .get(subject)
            .is_some_and(|areas| !areas.is_empty())
    })
}

/// Every subject carries a weight and the weights sum to exactly 100.
///
/// Exact integer equality, not `<= 100` and not a rounding tolerance: the
/// floor-based slot conversion may leave slack even for valid weights, and
/// that slack is accepted.
pub fn weights_valid(state: &WizardState) -> bool {
    if state.subjects.is_empty() {
        return false;
    }
    let mut sum: u64 = 0;
    for subject in &state.subjects {
        match subject.weight {
            Some(weight) => sum += u64::from(weight),
            None => return false,
        }
    }
    sum == 100
}

/// The block-assignment rule: every theme is either assigned wholly to some
/// block, or every one of its tasks is individually assigned. A theme with
/// zero tasks is trivially satisfied. Partial task assignment of an
/// unassigned theme is invalid.
pub fn block_assignment_valid(state: &WizardState) -> bool {
    for subject in &state.subjects {
        let mut whole_themes: HashSet<&str> = HashSet::new();
        let mut loose_tasks: HashSet<&str> = HashSet::new();
        if let Some(blocks) = state.block_assignments.get(&subject.id) {
            for block in blocks {
                match block {
                    BlockContent::Theme { theme } => {
                        whole_themes.insert(theme.id.as_str());
                    }
                    BlockContent::Tasks { tasks } => {
                        for task in tasks {
                            loose_tasks.insert(task.id.as_str());
                        }
                    }
                    BlockContent::Empty => {}
                }
            }
        }

        for theme in catalog::subject_themes(&state.subject_catalog, &subject.id) {
            if theme.tasks.is_empty() || whole_themes.contains(theme.id.as_str()) {
                continue;
            }
            let all_tasks_assigned = theme
                .tasks
                .iter()
                .all(|task| loose_tasks.contains(task.id.as_str()));
            if !all_tasks_assigned {
                return false;
            }
        }
    }
    true
}
