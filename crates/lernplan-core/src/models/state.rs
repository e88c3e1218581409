//! The wizard's single mutable state record.

use serde::{Deserialize, Serialize};

use super::blocks::BlockAssignments;
use super::catalog::{Subject, SubjectCatalog};
use super::method::{CreationMethod, DistributionMode};
use super::navigation::Navigation;
use super::period::PlanPeriod;
use super::preview::PreviewDay;
use super::structure::DailyStructure;

/// The whole wizard state, the unit of persistence.
///
/// Created empty (or from a persisted draft) when the wizard mounts, mutated
/// by every step through [`WizardState::apply`], and cleared on successful
/// completion or explicit discard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WizardState {
    /// Name the finished plan will be created under
    pub plan_name: Option<String>,

    /// Date range and reserve-day counts
    #[serde(default)]
    pub period: PlanPeriod,

    /// Blocks per day and the weekly slot pattern
    #[serde(default)]
    pub daily_structure: DailyStructure,

    /// The active creation method; fixed for a wizard run except via reset
    pub creation_method: Option<CreationMethod>,

    /// Subjects in declared order, with their weights
    #[serde(default)]
    pub subjects: Vec<Subject>,

    /// User-authored content per subject
    #[serde(default)]
    pub subject_catalog: SubjectCatalog,

    /// Planned blocks per subject
    #[serde(default)]
    pub block_assignments: BlockAssignments,

    /// Advisory distribution mode
    pub distribution_mode: Option<DistributionMode>,

    /// User-edited preview; authoritative over fresh generation when present
    pub preview_calendar: Option<Vec<PreviewDay>>,

    /// Step position and loop cursors
    #[serde(default)]
    pub navigation: Navigation,
}

impl WizardState {
    /// The subject id at the active loop cursor, if any.
    pub fn current_loop_subject(&self) -> Option<&str> {
        self.subjects
            .get(self.navigation.loop_cursors.subject_index)
            .map(|s| s.id.as_str())
    }

    /// True when the state is still the blank initial state as far as
    /// progress is concerned.
    pub fn is_blank(&self) -> bool {
        self.navigation.current_step <= 1
    }
}
