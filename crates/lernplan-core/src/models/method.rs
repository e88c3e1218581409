//! Creation method and distribution mode enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan creation methods.
///
/// The method is fixed for the lifetime of a wizard run (except via explicit
/// reset) and determines both the step graph and which downstream fields of
/// [`crate::models::WizardState`] are meaningful.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CreationMethod {
    /// Quick calendar-only setup without content planning
    Calendar,

    /// Full manual planning including subjects, themes and block assignment
    Manual,

    /// Automatic distribution from a subject catalog
    Automatic,

    /// Plan derived from a predefined template
    Template,

    /// Plan generated by an external AI call returning the same data shape
    Ai,
}

impl FromStr for CreationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calendar" => Ok(CreationMethod::Calendar),
            "manual" => Ok(CreationMethod::Manual),
            "automatic" => Ok(CreationMethod::Automatic),
            "template" => Ok(CreationMethod::Template),
            "ai" => Ok(CreationMethod::Ai),
            _ => Err(format!("Invalid creation method: {s}")),
        }
    }
}

impl CreationMethod {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CreationMethod::Calendar => "calendar",
            CreationMethod::Manual => "manual",
            CreationMethod::Automatic => "automatic",
            CreationMethod::Template => "template",
            CreationMethod::Ai => "ai",
        }
    }
}

/// Advisory distribution mode chosen in the wizard.
///
/// The mode frames the preview narrative only; it never alters the
/// allocation engine's slot-count math.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DistributionMode {
    /// Subjects interleave across the week
    Mixed,

    /// One subject dominates each day
    Focused,

    /// Subjects are worked through one after another
    Sequential,
}

impl FromStr for DistributionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mixed" => Ok(DistributionMode::Mixed),
            "focused" => Ok(DistributionMode::Focused),
            "sequential" => Ok(DistributionMode::Sequential),
            _ => Err(format!("Invalid distribution mode: {s}")),
        }
    }
}

impl DistributionMode {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionMode::Mixed => "mixed",
            DistributionMode::Focused => "focused",
            DistributionMode::Sequential => "sequential",
        }
    }
}
