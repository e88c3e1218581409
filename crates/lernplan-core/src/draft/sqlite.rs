//! SQLite-backed draft store.
//!
//! A single-row table holds the serialized state blob. The connection is
//! opened per operation; callers that care about blocking wrap the calls in
//! `tokio::task::spawn_blocking`.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use rusqlite::{Connection, OptionalExtension};

use crate::error::{DraftResultExt, Result, WizardError};
use crate::models::WizardState;

use super::DraftStore;

const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS drafts (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    payload TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// Draft store persisting to a SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteDraftStore {
    db_path: PathBuf,
}

impl SqliteDraftStore {
    /// Create a store for the given database file, initializing the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let store = Self { db_path };
        store.open()?;
        Ok(store)
    }

    /// Create a store at the default XDG data location.
    pub fn at_default_path() -> Result<Self> {
        let path = xdg::BaseDirectories::with_prefix("lernplan")
            .place_data_file("drafts.db")
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))?;
        Self::new(path)
    }

    fn open(&self) -> Result<Connection> {
        let connection = Connection::open(&self.db_path)
            .draft_context("Failed to open draft store connection")?;
        connection
            .execute_batch(SCHEMA_SQL)
            .draft_context("Failed to initialize draft store schema")?;
        Ok(connection)
    }
}

impl DraftStore for SqliteDraftStore {
    fn save_draft(&self, state: &WizardState) -> Result<()> {
        let payload = serde_json::to_string(state)?;
        let connection = self.open()?;
        connection
            .execute(
                "INSERT INTO drafts (id, payload, updated_at) VALUES (1, ?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET payload = ?1, updated_at = ?2",
                (&payload, Timestamp::now().to_string()),
            )
            .draft_context("Failed to save draft")?;
        Ok(())
    }

    fn load_draft(&self) -> Result<Option<WizardState>> {
        let connection = self.open()?;
        let payload: Option<String> = connection
            .query_row("SELECT payload FROM drafts WHERE id = 1", [], |row| {
                row.get(0)
            })
            .optional()
            .draft_context("Failed to load draft")?;

        match payload {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(state) => Ok(Some(state)),
                Err(e) => {
                    // A stale or partial draft counts as absent.
                    log::warn!("discarding undeserializable draft: {e}");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    fn clear_draft(&self) -> Result<()> {
        let connection = self.open()?;
        connection
            .execute("DELETE FROM drafts WHERE id = 1", [])
            .draft_context("Failed to clear draft")?;
        Ok(())
    }

    fn has_draft(&self) -> Result<bool> {
        let connection = self.open()?;
        let count: i64 = connection
            .query_row("SELECT COUNT(*) FROM drafts WHERE id = 1", [], |row| {
                row.get(0)
            })
            .draft_context("Failed to check for draft")?;
        Ok(count > 0)
    }
}
