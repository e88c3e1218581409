//! Builder for creating and configuring Wizard instances.

use std::sync::Arc;
use std::time::Duration;

use tokio::task;

use super::Wizard;
use crate::draft::{debounce::DEFAULT_SAVE_WINDOW, Debouncer, DraftStore, MemoryDraftStore};
use crate::error::{Result, WizardError};
use crate::models::WizardState;
use crate::ports::{CalendarSink, LocalPlanService, LoggingCalendarSink, PlanService};

/// Builder for creating and configuring Wizard instances.
pub struct WizardBuilder {
    store: Option<Arc<dyn DraftStore>>,
    plan_service: Option<Arc<dyn PlanService>>,
    calendar: Option<Arc<dyn CalendarSink>>,
    save_window: Duration,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            store: None,
            plan_service: None,
            calendar: None,
            save_window: DEFAULT_SAVE_WINDOW,
        }
    }

    /// Sets the draft store. Defaults to an in-memory store.
    pub fn with_draft_store(mut self, store: Arc<dyn DraftStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets the plan service. Defaults to [`LocalPlanService`].
    pub fn with_plan_service(mut self, service: Arc<dyn PlanService>) -> Self {
        self.plan_service = Some(service);
        self
    }

    /// Sets the calendar sink. Defaults to [`LoggingCalendarSink`].
    pub fn with_calendar_sink(mut self, sink: Arc<dyn CalendarSink>) -> Self {
        self.calendar = Some(sink);
        self
    }

    /// Sets the debounce window for draft saves.
    pub fn with_save_window(mut self, window: Duration) -> Self {
        self.save_window = window;
        self
    }

    /// Builds the wizard, resuming a persisted draft when one exists.
    pub async fn build(self) -> Result<Wizard> {
        let store: Arc<dyn DraftStore> = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryDraftStore::new()));
        let plan_service = self
            .plan_service
            .unwrap_or_else(|| Arc::new(LocalPlanService));
        let calendar = self
            .calendar
            .unwrap_or_else(|| Arc::new(LoggingCalendarSink));

        let load_store = Arc::clone(&store);
        let state = task::spawn_blocking(move || load_store.load_draft())
            .await
            .map_err(|e| WizardError::Configuration {
                message: format!("Task join error: {e}"),
            })??
            .unwrap_or_else(WizardState::default);

        Ok(Wizard::new(
            state,
            store,
            plan_service,
            calendar,
            Debouncer::new(self.save_window),
        ))
    }
}

impl Default for WizardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
