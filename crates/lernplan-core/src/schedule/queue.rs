//! The content queue builder.
//!
//! Flattens `block_assignments` into one ordered queue for the whole
//! allocation run: subjects in declared order, blocks in order within each
//! subject. Empty blocks are skipped and do not reserve a queue position, so
//! unused weighting slack never punches holes into the generated calendar
//! content. The allocation engine consumes the queue strictly FIFO.

use std::collections::{HashSet, VecDeque};

use crate::models::{catalog, BlockContent, ContentId, TaskItem, Theme, WizardState};

/// One content-carrying block flattened out of the assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    /// Owning subject
    pub subject_id: ContentId,

    /// The whole theme, when the block holds one
    pub theme: Option<Theme>,

    /// Tasks carried by the block (denormalized from the theme, or the
    /// individually picked list)
    pub tasks: Vec<TaskItem>,
}

/// Build the run's FIFO queue.
///
/// Blocks referencing content absent from the catalog are a programming
/// error upstream (the cascade reset is supposed to make them impossible);
/// they are asserted against in debug builds and skipped in release builds.
pub fn build_queue(state: &WizardState) -> VecDeque<QueueEntry> {
    let mut queue = VecDeque::new();

    for subject in &state.subjects {
        let Some(blocks) = state.block_assignments.get(&subject.id) else {
            continue;
        };
        for block in blocks {
            match block {
                BlockContent::Empty => {}
                BlockContent::Theme { theme } => {
                    let known = catalog::subject_themes(&state.subject_catalog, &subject.id)
                        .any(|t| t.id == theme.id);
                    debug_assert!(known, "block references theme missing from catalog");
                    if !known {
                        log::warn!(
                            "skipping block for unknown theme '{}' of subject '{}'",
                            theme.id,
                            subject.id
                        );
                        continue;
                    }
                    queue.push_back(QueueEntry {
                        subject_id: subject.id.clone(),
                        theme: Some(theme.clone()),
                        tasks: theme.tasks.clone(),
                    });
                }
                BlockContent::Tasks { tasks } => {
                    let known_ids: HashSet<&str> =
                        catalog::subject_themes(&state.subject_catalog, &subject.id)
                            .flat_map(|t| t.tasks.iter())
                            .map(|t| t.id.as_str())
                            .collect();
                    let all_known = tasks.iter().all(|t| known_ids.contains(t.id.as_str()));
                    debug_assert!(all_known, "block references tasks missing from catalog");
                    if !all_known {
                        log::warn!("skipping block with unknown tasks of subject '{}'", subject.id);
                        continue;
                    }
                    queue.push_back(QueueEntry {
                        subject_id: subject.id.clone(),
                        theme: None,
                        tasks: tasks.clone(),
                    });
                }
            }
        }
    }

    queue
}
