//! Draft persistence port and implementations.
//!
//! The wizard persists its whole state blob through the narrow
//! [`DraftStore`] contract. Implementations must tolerate partial or stale
//! data; a draft that fails to deserialize is reported as absent, and save
//! failures are logged by the caller rather than propagated as fatal.

pub mod debounce;
pub mod sqlite;

use std::sync::{Mutex, PoisonError};

use crate::error::Result;
use crate::models::WizardState;

pub use debounce::Debouncer;
pub use sqlite::SqliteDraftStore;

/// Persistence port for the wizard's draft blob.
pub trait DraftStore: Send + Sync {
    /// Persist the full state blob, replacing any existing draft.
    fn save_draft(&self, state: &WizardState) -> Result<()>;

    /// Load the persisted draft, if any.
    fn load_draft(&self) -> Result<Option<WizardState>>;

    /// Remove the persisted draft.
    fn clear_draft(&self) -> Result<()>;

    /// True when a draft exists.
    fn has_draft(&self) -> Result<bool>;
}

/// In-memory draft store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    draft: Mutex<Option<String>>,
}

impl MemoryDraftStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn save_draft(&self, state: &WizardState) -> Result<()> {
        let payload = serde_json::to_string(state)?;
        *self.draft.lock().unwrap_or_else(PoisonError::into_inner) = Some(payload);
        Ok(())
    }

    fn load_draft(&self) -> Result<Option<WizardState>> {
        let guard = self.draft.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_deref() {
            Some(payload) => match serde_json::from_str(payload) {
                Ok(state) => Ok(Some(state)),
                Err(e) => {
                    // Stale or partial drafts count as absent.
                    log::warn!("discarding undeserializable draft: {e}");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    fn clear_draft(&self) -> Result<()> {
        *self.draft.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }

    fn has_draft(&self) -> Result<bool> {
        Ok(self.draft.lock().unwrap_or_else(PoisonError::into_inner).is_some())
    }
}
