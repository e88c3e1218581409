//! Tests for the navigator module.

use jiff::civil::date;

use super::steps::manual;
use super::*;
use crate::models::{
    BlockContent, CreationMethod, DistributionMode, PreviewDay, StatePatch, SubArea, Subject,
    TaskItem, Theme,
};

fn subject(id: &str, weight: Option<u32>) -> Subject {
    Subject {
        id: id.to_string(),
        name: id.to_uppercase(),
        weight,
    }
}

fn theme(id: &str, task_ids: &[&str]) -> Theme {
    Theme {
        id: id.to_string(),
        name: format!("Theme {id}"),
        tasks: task_ids
            .iter()
            .map(|t| TaskItem {
                id: (*t).to_string(),
                name: format!("Task {t}"),
                priority: None,
                done: false,
            })
            .collect(),
    }
}

/// A manual-method state with three subjects, fully configured through the
/// preview step. The starting point for cascade tests.
fn configured_manual_state() -> WizardState {
    let mut state = WizardState::default();
    state.apply(StatePatch {
        creation_method: Some(CreationMethod::Manual),
        start_date: Some(date(2025, 1, 1)),
        end_date: Some(date(2025, 1, 31)),
        buffer_days: Some(2),
        vacation_days: Some(3),
        subjects: Some(vec![
            subject("zivilrecht", Some(40)),
            subject("strafrecht", Some(35)),
            subject("oeffrecht", Some(25)),
        ]),
        distribution_mode: Some(DistributionMode::Mixed),
        ..Default::default()
    });

    for id in ["zivilrecht", "strafrecht", "oeffrecht"] {
        let theme_id = format!("{id}-theme");
        let task_id = format!("{id}-task");
        state.subject_catalog.insert(
            id.to_string(),
            vec![SubArea {
                id: format!("{id}-area"),
                name: format!("{id} area"),
                themes: vec![theme(&theme_id, &[task_id.as_str()])],
            }],
        );
        state.block_assignments.insert(
            id.to_string(),
            vec![BlockContent::Theme {
                theme: theme(&theme_id, &[task_id.as_str()]),
            }],
        );
    }
    state.preview_calendar = Some(vec![PreviewDay {
        date: date(2025, 1, 2),
        blocks: vec![],
    }]);
    state
}

#[test]
fn test_total_steps_table() {
    assert_eq!(total_steps(CreationMethod::Calendar), 7);
    assert_eq!(total_steps(CreationMethod::Manual), 22);
    assert_eq!(total_steps(CreationMethod::Template), 9);
    assert_eq!(total_steps(CreationMethod::Ai), 8);
    assert_eq!(total_steps(CreationMethod::Automatic), 10);
}

#[test]
fn test_go_to_clamps_out_of_range_targets() {
    let state = configured_manual_state();
    let beyond = go_to(&state, total_steps(CreationMethod::Manual) + 1);
    assert_eq!(beyond, state);
    let zero = go_to(&state, 0);
    assert_eq!(zero, state);
}

#[test]
fn test_linear_advance() {
    let mut state = configured_manual_state();
    state.navigation.current_step = manual::INTRO;
    let Advance::Moved(next) = next(&state) else {
        panic!("expected a plain move");
    };
    assert_eq!(next.navigation.current_step, manual::PERIOD_DATES);
}

#[test]
fn test_previous_clamps_at_first_step() {
    let mut state = configured_manual_state();
    state.navigation.current_step = 1;
    assert_eq!(previous(&state), state);
}

#[test]
fn test_subarea_loop_visits_every_subject_once() {
    let mut state = configured_manual_state();
    state.navigation.current_step = manual::SUBAREA_CONFIGURE;
    state.navigation.loop_cursors.reset_subarea_phase();

    let mut visited = vec![state.current_loop_subject().map(str::to_string)];
    // N subjects leave the loop after exactly N calls.
    for _ in 0..3 {
        let Advance::Moved(moved) = next(&state) else {
            panic!("sub-area loop never needs confirmation");
        };
        state = moved;
        if state.navigation.current_step == manual::SUBAREA_CONFIGURE {
            visited.push(state.current_loop_subject().map(str::to_string));
        }
    }

    assert_eq!(state.navigation.current_step, manual::THEME_INTRO);
    assert_eq!(visited.len(), 3);
    let done = &state.navigation.loop_cursors.subarea_done;
    assert!(done.values().all(|v| *v));
    assert_eq!(done.len(), 3);
    // Cursor rewound for the theme phase.
    assert_eq!(state.navigation.loop_cursors.subject_index, 0);
}

#[test]
fn test_subarea_loop_scans_for_first_incomplete() {
    let mut state = configured_manual_state();
    state.navigation.current_step = manual::SUBAREA_CONFIGURE;
    state.navigation.loop_cursors.reset_subarea_phase();
    // The middle subject was completed out of order.
    state
        .navigation
        .loop_cursors
        .subarea_done
        .insert("strafrecht".to_string(), true);

    let Advance::Moved(moved) = next(&state) else {
        panic!("expected a move");
    };
    // Not index + 1: the scan skips the already-complete subject.
    assert_eq!(moved.navigation.current_step, manual::SUBAREA_CONFIGURE);
    assert_eq!(moved.current_loop_subject(), Some("oeffrecht"));
}

#[test]
fn test_theme_loop_is_strictly_sequential() {
    let mut state = configured_manual_state();
    state.navigation.current_step = manual::THEME_TASKS;
    state.navigation.loop_cursors.reset_theme_phase();

    let Advance::Moved(second) = next(&state) else {
        panic!("expected a move");
    };
    assert_eq!(second.navigation.current_step, manual::THEME_SELECT);
    assert_eq!(second.navigation.loop_cursors.subject_index, 1);

    let mut third = second.clone();
    third.navigation.current_step = manual::THEME_TASKS;
    let Advance::Moved(third) = next(&third) else {
        panic!("expected a move");
    };
    assert_eq!(third.navigation.loop_cursors.subject_index, 2);

    let mut last = third.clone();
    last.navigation.current_step = manual::THEME_TASKS;
    let Advance::Moved(exited) = next(&last) else {
        panic!("all subjects have themes, exit needs no confirmation");
    };
    assert_eq!(exited.navigation.current_step, manual::WEIGHTING);
}

#[test]
fn test_theme_loop_exit_requires_confirmation_when_incomplete() {
    let mut state = configured_manual_state();
    // Strip the last subject's themes.
    if let Some(areas) = state.subject_catalog.get_mut("oeffrecht") {
        for area in areas {
            area.themes.clear();
        }
    }
    state.navigation.current_step = manual::THEME_TASKS;
    state.navigation.loop_cursors.subject_index = 2;

    let before = state.clone();
    let Advance::ConfirmExit(carried) = next(&state) else {
        panic!("incomplete exit must ask for confirmation");
    };
    assert_eq!(carried.navigation.current_step, manual::WEIGHTING);
    // Cancelling means simply dropping the carried state.
    assert_eq!(state, before);
}

#[test]
fn test_terminal_step_advances_to_completion() {
    let mut state = configured_manual_state();
    state.navigation.current_step = manual::COMPLETION;
    assert_eq!(next(&state), Advance::Complete);
}

#[test]
fn test_next_without_method_is_noop() {
    let state = WizardState::default();
    assert_eq!(next(&state), Advance::Moved(state.clone()));
}

#[test]
fn test_cascade_leaving_weighting_clears_blocks_and_preview() {
    let mut state = configured_manual_state();
    state.navigation.current_step = manual::WEIGHTING;

    let back = previous(&state);
    assert_eq!(back.navigation.current_step, manual::THEME_TASKS);
    assert!(back.block_assignments.is_empty());
    assert!(back.preview_calendar.is_none());
    assert!(back.distribution_mode.is_none());
    // Weights, themes and sub-areas survive.
    assert!(back.subjects.iter().all(|s| s.weight.is_some()));
    assert!(!back.subject_catalog.is_empty());
    assert!(back.subject_catalog["zivilrecht"][0].themes.len() == 1);
}

#[test]
fn test_cascade_leaving_subarea_editing_preserves_subareas() {
    let mut state = configured_manual_state();
    state.navigation.current_step = manual::SUBAREA_CONFIGURE;

    let back = previous(&state);
    assert_eq!(back.navigation.current_step, manual::SUBAREA_INTRO);
    // Sub-area selection for visited subjects is preserved.
    assert_eq!(back.subject_catalog.len(), 3);
    // Themes, weights, blocks and the preview are gone.
    assert!(back.subject_catalog["zivilrecht"][0].themes.is_empty());
    assert!(back.subjects.iter().all(|s| s.weight.is_none()));
    assert!(back.block_assignments.is_empty());
    assert!(back.preview_calendar.is_none());
    assert!(back.distribution_mode.is_none());
}

#[test]
fn test_cascade_leaving_subject_selection_clears_everything_downstream() {
    let mut state = configured_manual_state();
    state.navigation.current_step = manual::SUBJECT_SELECT;

    let back = previous(&state);
    assert_eq!(back.navigation.current_step, manual::WEEK_PATTERN);
    assert!(back.subject_catalog.is_empty());
    assert!(back.block_assignments.is_empty());
    assert!(back.preview_calendar.is_none());
    assert!(back.distribution_mode.is_none());
    assert!(back.subjects.iter().all(|s| s.weight.is_none()));
    // The subject list itself remains valid at the destination step.
    assert_eq!(back.subjects.len(), 3);
    // Period and structure are untouched.
    assert_eq!(back.period, state.period);
    assert_eq!(back.daily_structure, state.daily_structure);
}

#[test]
fn test_cascade_never_leaves_dangling_assignments() {
    let mut state = configured_manual_state();
    state.navigation.current_step = manual::SUBAREA_CONFIGURE;

    let back = previous(&state);
    // Whenever themes are cleared, assignments referencing them are too.
    let themes_empty = back
        .subject_catalog
        .values()
        .all(|areas| areas.iter().all(|a| a.themes.is_empty()));
    assert!(themes_empty);
    assert!(back.block_assignments.is_empty());
}

#[test]
fn test_backward_jump_before_block_assignment_drops_preview_only() {
    let mut state = configured_manual_state();
    state.navigation.current_step = manual::PREVIEW_EDIT;

    let back = go_to(&state, manual::BLOCK_ASSIGNMENT);
    assert_eq!(back.navigation.current_step, manual::BLOCK_ASSIGNMENT);
    assert!(back.preview_calendar.is_none());
    assert_eq!(back.block_assignments, state.block_assignments);
    assert_eq!(back.distribution_mode, state.distribution_mode);
}

#[test]
fn test_forward_jump_resets_nothing() {
    let mut state = configured_manual_state();
    state.navigation.current_step = manual::WEIGHTING;

    let ahead = go_to(&state, manual::SUMMARY);
    assert_eq!(ahead.navigation.current_step, manual::SUMMARY);
    assert_eq!(ahead.block_assignments, state.block_assignments);
    assert_eq!(ahead.preview_calendar, state.preview_calendar);
}

#[test]
fn test_clear_set_union_over_crossed_boundaries() {
    let fields = clear_set(CreationMethod::Manual, manual::PREVIEW_EDIT, manual::INTRO);
    assert!(fields.contains(&ResetField::SubAreas));
    assert!(fields.contains(&ResetField::Themes));
    assert!(fields.contains(&ResetField::Weights));
    assert!(fields.contains(&ResetField::DistributionMode));
    assert!(fields.contains(&ResetField::Blocks));
    assert!(fields.contains(&ResetField::Preview));

    // No boundary crossed, nothing cleared.
    assert!(clear_set(CreationMethod::Manual, manual::SUMMARY, manual::PREVIEW_EDIT).is_empty());
    // Forward moves never clear.
    assert!(clear_set(CreationMethod::Manual, manual::INTRO, manual::SUMMARY).is_empty());
}
