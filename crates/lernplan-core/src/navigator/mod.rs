//! The step navigator: a branching state machine over wizard steps.
//!
//! Each creation method has a fixed step graph expressed as a declarative
//! transition table ([`transition`]) instead of inline step-number checks.
//! States are step numbers scoped to the method; transitions are
//! [`next`], [`previous`] and [`go_to`], all pure functions of
//! [`WizardState`]. The terminal state is not a step number but the
//! [`Advance::Complete`] transition, which the orchestration layer turns
//! into the allocation run and the calendar hand-off.
//!
//! The manual method contains two repeating sub-loops driven by
//! `loop_cursors.subject_index`:
//!
//! - the *sub-area loop* revisits the sub-area step once per subject using a
//!   first-incomplete scan, and
//! - the *theme loop* walks subjects strictly sequentially and exits after
//!   the last one regardless of completeness; an incomplete exit is
//!   surfaced as [`Advance::ConfirmExit`] so the caller can warn first.

pub mod reset;
pub mod steps;

#[cfg(test)]
mod tests;

use crate::models::{catalog, CreationMethod, WizardState};

pub use reset::{clear_set, ResetField};

/// Outcome of a forward navigation attempt.
///
/// Every variant that moves carries the successor state; the input state is
/// never mutated, so dropping the carried state (e.g. when the user cancels
/// a confirmation dialog) leaves everything untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Navigation moved to a new step (or stayed within a loop).
    Moved(WizardState),

    /// A loop's terminal exit with incomplete subjects; commit the carried
    /// state to proceed, drop it to cancel.
    ConfirmExit(WizardState),

    /// The terminal step was advanced past: hand off to completion.
    Complete,
}

/// One entry of the declarative step graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Plain advance to the given step
    Linear(u32),

    /// Repeat this step once per subject, scanning for the first subject not
    /// yet marked complete; leave to `exit` when all are complete.
    LoopFirstIncomplete { exit: u32 },

    /// Return to `body` for the next subject in declared order; leave to
    /// `exit` after the last subject regardless of completeness.
    LoopSequential { body: u32, exit: u32 },

    /// Completion hand-off
    Terminal,
}

/// Total number of steps for a creation method.
pub fn total_steps(method: CreationMethod) -> u32 {
    match method {
        CreationMethod::Calendar => 7,
        CreationMethod::Manual => 22,
        CreationMethod::Template => 9,
        CreationMethod::Ai => 8,
        CreationMethod::Automatic => 10,
    }
}

/// The step graph, keyed by `(method, step)`.
///
/// Steps outside `1..=total_steps(method)` resolve to [`Transition::Terminal`];
/// callers clamp before dispatching.
pub fn transition(method: CreationMethod, step: u32) -> Transition {
    let total = total_steps(method);
    if method == CreationMethod::Manual {
        use steps::manual;
        return match step {
            manual::SUBAREA_CONFIGURE => Transition::LoopFirstIncomplete {
                exit: manual::THEME_INTRO,
            },
            manual::THEME_TASKS => Transition::LoopSequential {
                body: manual::THEME_SELECT,
                exit: manual::WEIGHTING,
            },
            s if s < total => Transition::Linear(s + 1),
            _ => Transition::Terminal,
        };
    }
    if step < total {
        Transition::Linear(step + 1)
    } else {
        Transition::Terminal
    }
}

/// Advance one step, applying the loop rules of the active method.
pub fn next(state: &WizardState) -> Advance {
    let Some(method) = state.creation_method else {
        return Advance::Moved(state.clone());
    };

    match transition(method, state.navigation.current_step) {
        Transition::Linear(target) => {
            let mut next = state.clone();
            next.navigation.current_step = target.min(total_steps(method));
            Advance::Moved(next)
        }
        Transition::LoopFirstIncomplete { exit } => advance_subarea_loop(state, exit),
        Transition::LoopSequential { body, exit } => advance_theme_loop(state, body, exit),
        Transition::Terminal => Advance::Complete,
    }
}

/// Sub-area loop: mark the current subject complete, then jump to the first
/// incomplete subject (not simply `index + 1`). When every subject is
/// complete, leave the loop and rewind the cursor for the theme phase.
fn advance_subarea_loop(state: &WizardState, exit: u32) -> Advance {
    let mut next = state.clone();
    if let Some(current) = state.current_loop_subject() {
        next.navigation
            .loop_cursors
            .subarea_done
            .insert(current.to_string(), true);
    }

    let pending = next.subjects.iter().position(|s| {
        !next
            .navigation
            .loop_cursors
            .subarea_done
            .get(&s.id)
            .copied()
            .unwrap_or(false)
    });

    match pending {
        Some(index) => {
            next.navigation.loop_cursors.subject_index = index;
            Advance::Moved(next)
        }
        None => {
            next.navigation.current_step = exit;
            next.navigation.loop_cursors.reset_theme_phase();
            Advance::Moved(next)
        }
    }
}

/// Theme loop: strictly sequential over subjects. The exit after the last
/// subject is unconditional, but an exit with incomplete subjects is
/// surfaced as [`Advance::ConfirmExit`].
fn advance_theme_loop(state: &WizardState, body: u32, exit: u32) -> Advance {
    let mut next = state.clone();
    if let Some(current) = state.current_loop_subject() {
        let configured = catalog::subject_themes(&state.subject_catalog, current).count() > 0;
        next.navigation
            .loop_cursors
            .theme_done
            .insert(current.to_string(), configured);
    }

    let index = next.navigation.loop_cursors.subject_index;
    if index + 1 < next.subjects.len() {
        next.navigation.loop_cursors.subject_index = index + 1;
        next.navigation.current_step = body;
        return Advance::Moved(next);
    }

    next.navigation.current_step = exit;
    next.navigation.loop_cursors.subject_index = 0;

    let all_configured = next.subjects.iter().all(|s| {
        catalog::subject_themes(&next.subject_catalog, &s.id).count() > 0
    });
    if all_configured {
        Advance::Moved(next)
    } else {
        Advance::ConfirmExit(next)
    }
}

/// Move one step backward, applying the cascade-reset table.
///
/// Clamped at step one.
pub fn previous(state: &WizardState) -> WizardState {
    let from = state.navigation.current_step;
    if from <= 1 {
        return state.clone();
    }
    move_backward(state, from - 1)
}

/// Jump to an arbitrary step.
///
/// Out-of-range targets are clamped to a no-op. Backward jumps apply the
/// same cascade resets as [`previous`].
pub fn go_to(state: &WizardState, step: u32) -> WizardState {
    let Some(method) = state.creation_method else {
        return state.clone();
    };
    if step < 1 || step > total_steps(method) {
        return state.clone();
    }
    let current = state.navigation.current_step;
    if step < current {
        move_backward(state, step)
    } else {
        let mut next = state.clone();
        next.navigation.current_step = step;
        next
    }
}

fn move_backward(state: &WizardState, target: u32) -> WizardState {
    let mut next = state.clone();
    if let Some(method) = state.creation_method {
        let fields = reset::clear_set(method, state.navigation.current_step, target);
        reset::apply_resets(&mut next, &fields);
    }
    next.navigation.current_step = target;
    next
}
