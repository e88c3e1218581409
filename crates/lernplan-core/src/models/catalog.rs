//! User-authored content catalog: subjects, sub-areas, themes and tasks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier type for subjects, sub-areas, themes and tasks.
///
/// The catalog is supplied by the surrounding UI; ids are opaque strings.
pub type ContentId = String;

/// A top-level content area (Rechtsgebiet) the user studies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subject {
    /// Unique identifier for the subject
    pub id: ContentId,

    /// Display name of the subject
    pub name: String,

    /// Percentage weight (0–100). When weights are set at all they must sum
    /// to exactly 100 across subjects.
    pub weight: Option<u32>,
}

/// A subdivision of a subject (Unterrechtsgebiet).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubArea {
    /// Unique identifier for the sub-area
    pub id: ContentId,

    /// Display name of the sub-area
    pub name: String,

    /// Ordered themes under this sub-area
    #[serde(default)]
    pub themes: Vec<Theme>,
}

/// A named unit of content under a sub-area, owning an ordered task list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    /// Unique identifier for the theme
    pub id: ContentId,

    /// Display name of the theme
    pub name: String,

    /// Ordered tasks owned by this theme
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
}

/// A single task within a theme.
///
/// User-authored content is immutable for the engine except for the
/// completion flag and priority.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskItem {
    /// Unique identifier for the task
    pub id: ContentId,

    /// Display name of the task
    pub name: String,

    /// Optional priority ranking (lower is more important)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    /// Completion flag
    #[serde(default)]
    pub done: bool,
}

/// Map of subject id to its ordered sub-areas.
pub type SubjectCatalog = BTreeMap<ContentId, Vec<SubArea>>;

/// Iterate all themes configured for one subject, in sub-area then theme
/// order.
pub fn subject_themes<'a>(
    catalog: &'a SubjectCatalog,
    subject_id: &str,
) -> impl Iterator<Item = &'a Theme> {
    catalog
        .get(subject_id)
        .into_iter()
        .flat_map(|areas| areas.iter())
        .flat_map(|area| area.themes.iter())
}
