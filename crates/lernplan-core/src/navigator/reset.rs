//! Backward-navigation cascade resets.
//!
//! Moving from step `S` to an earlier step must clear every field derived
//! from choices made at steps at or after the destination, while preserving
//! fields that remain valid there. The rule is expressed as a declarative
//! boundary table per method: crossing a boundary backward clears the listed
//! fields. This keeps the cascade exhaustively testable instead of being
//! re-derived at every call site.
//!
//! The table never clears a field its dependents survive: themes are always
//! cleared together with block assignments and the preview, so
//! `block_assignments` can never reference a theme or task id that no longer
//! exists in the catalog.

use crate::models::{CreationMethod, WizardState};

use super::steps::{automatic, manual};

/// State subsets cleared by backward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetField {
    /// All configured sub-areas (with their themes) and the sub-area loop flags
    SubAreas,

    /// Themes within the kept sub-areas and the theme loop flags
    Themes,

    /// Subject weights
    Weights,

    /// The chosen distribution mode
    DistributionMode,

    /// Planned block assignments
    Blocks,

    /// The edited preview calendar
    Preview,
}

/// `(boundary step, fields cleared when navigating backward past it)`.
type BoundaryTable = &'static [(u32, &'static [ResetField])];

const MANUAL_BOUNDARIES: BoundaryTable = &[
    (
        manual::SUBJECT_SELECT,
        &[
            ResetField::SubAreas,
            ResetField::Themes,
            ResetField::Weights,
            ResetField::DistributionMode,
            ResetField::Blocks,
            ResetField::Preview,
        ],
    ),
    (
        manual::SUBAREA_CONFIGURE,
        &[
            ResetField::Themes,
            ResetField::Weights,
            ResetField::DistributionMode,
            ResetField::Blocks,
            ResetField::Preview,
        ],
    ),
    (
        manual::WEIGHTING,
        &[
            ResetField::DistributionMode,
            ResetField::Blocks,
            ResetField::Preview,
        ],
    ),
    (manual::BLOCK_ASSIGNMENT, &[ResetField::Preview]),
];

const AUTOMATIC_BOUNDARIES: BoundaryTable = &[
    (
        automatic::SUBJECT_SELECT,
        &[ResetField::Weights, ResetField::Preview],
    ),
    (automatic::WEIGHTING, &[ResetField::Preview]),
];

fn boundaries(method: CreationMethod) -> BoundaryTable {
    match method {
        CreationMethod::Manual => MANUAL_BOUNDARIES,
        CreationMethod::Automatic => AUTOMATIC_BOUNDARIES,
        // The remaining methods carry no cross-step derived state.
        _ => &[],
    }
}

/// Fields to clear when navigating backward from `from` to `to`.
///
/// The result is the union over every boundary crossed, in table order.
pub fn clear_set(method: CreationMethod, from: u32, to: u32) -> Vec<ResetField> {
    let mut fields = Vec::new();
    if to >= from {
        return fields;
    }
    for (boundary, cleared) in boundaries(method) {
        if from >= *boundary && to < *boundary {
            for field in *cleared {
                if !fields.contains(field) {
                    fields.push(*field);
                }
            }
        }
    }
    fields
}

/// Apply a clear set to the state.
pub fn apply_resets(state: &mut WizardState, fields: &[ResetField]) {
    for field in fields {
        match field {
            ResetField::SubAreas => {
                state.subject_catalog.clear();
                state.navigation.loop_cursors.reset_subarea_phase();
            }
            ResetField::Themes => {
                for areas in state.subject_catalog.values_mut() {
                    for area in areas.iter_mut() {
                        area.themes.clear();
                    }
                }
                state.navigation.loop_cursors.reset_theme_phase();
            }
            ResetField::Weights => {
                for subject in state.subjects.iter_mut() {
                    subject.weight = None;
                }
            }
            ResetField::DistributionMode => {
                state.distribution_mode = None;
            }
            ResetField::Blocks => {
                state.block_assignments.clear();
            }
            ResetField::Preview => {
                state.preview_calendar = None;
            }
        }
    }
}
