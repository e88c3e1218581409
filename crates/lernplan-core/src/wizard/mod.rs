//! High-level wizard orchestration.
//!
//! [`Wizard`] owns the shared [`WizardState`] and coordinates the pure
//! subsystems (navigator, validation engine, allocation engine) with the
//! external collaborators (draft store, plan service, calendar sink). Every
//! mutation schedules a debounced draft save; completion runs the strict
//! hand-off sequence of plan creation, allocation, calendar hand-off and
//! draft clearing.

pub mod builder;

use std::sync::Arc;

use tokio::task;

use crate::draft::{Debouncer, DraftStore};
use crate::error::{Result, WizardError};
use crate::models::{StatePatch, WizardState};
use crate::navigator::{self, Advance};
use crate::ports::{CalendarSink, PlanCreated, PlanMetadata, PlanRequest, PlanService};
use crate::schedule;
use crate::validation;

pub use builder::WizardBuilder;

/// Outcome of a forward navigation attempt through the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAdvance {
    /// The current step's validation predicate failed; navigation stays put.
    Blocked,

    /// Navigation moved.
    Moved,

    /// A loop exit needs user confirmation; call
    /// [`Wizard::confirm_exit`] or [`Wizard::cancel_exit`].
    AwaitingConfirmation,

    /// The terminal step was passed; call [`Wizard::complete`].
    ReadyToComplete,
}

/// The wizard orchestrator.
pub struct Wizard {
    state: WizardState,
    store: Arc<dyn DraftStore>,
    plan_service: Arc<dyn PlanService>,
    calendar: Arc<dyn CalendarSink>,
    debouncer: Debouncer,
    pending_exit: Option<WizardState>,
    remote_applied: bool,
}

impl Wizard {
    pub(crate) fn new(
        state: WizardState,
        store: Arc<dyn DraftStore>,
        plan_service: Arc<dyn PlanService>,
        calendar: Arc<dyn CalendarSink>,
        debouncer: Debouncer,
    ) -> Self {
        Self {
            state,
            store,
            plan_service,
            calendar,
            debouncer,
            pending_exit: None,
            remote_applied: false,
        }
    }

    /// Read access to the shared state.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// True when the current step's inputs allow forward navigation.
    pub fn is_current_step_valid(&self) -> bool {
        validation::is_step_valid(&self.state)
    }

    /// Merge a patch into the state and schedule a debounced save.
    pub fn apply(&mut self, patch: StatePatch) {
        self.pending_exit = None;
        self.state.apply(patch);
        self.schedule_save();
    }

    /// Attempt to advance one step.
    pub fn advance(&mut self) -> WizardAdvance {
        if !validation::is_step_valid(&self.state) {
            return WizardAdvance::Blocked;
        }
        match navigator::next(&self.state) {
            Advance::Moved(next) => {
                self.state = next;
                self.pending_exit = None;
                self.schedule_save();
                WizardAdvance::Moved
            }
            Advance::ConfirmExit(next) => {
                self.pending_exit = Some(next);
                WizardAdvance::AwaitingConfirmation
            }
            Advance::Complete => WizardAdvance::ReadyToComplete,
        }
    }

    /// Commit a pending loop exit. Returns false when none is pending.
    pub fn confirm_exit(&mut self) -> bool {
        match self.pending_exit.take() {
            Some(next) => {
                self.state = next;
                self.schedule_save();
                true
            }
            None => false,
        }
    }

    /// Drop a pending loop exit, leaving the state untouched.
    pub fn cancel_exit(&mut self) {
        self.pending_exit = None;
    }

    /// Move one step backward, applying the cascade resets.
    pub fn back(&mut self) {
        self.pending_exit = None;
        self.state = navigator::previous(&self.state);
        self.schedule_save();
    }

    /// Jump to a step; out-of-range targets are a no-op.
    pub fn jump_to(&mut self, step: u32) {
        self.pending_exit = None;
        self.state = navigator::go_to(&self.state, step);
        self.schedule_save();
    }

    /// Run the completion sequence.
    ///
    /// Order is fixed: (1) plan-creation call, (2) allocation, (3) calendar
    /// hand-off, (4) draft clear and state reset. Steps 2–4 only run after
    /// step 1 succeeds; on any failure the state is left untouched and the
    /// caller decides whether to retry.
    pub async fn complete(&mut self) -> Result<PlanCreated> {
        let request = PlanRequest::from_state(&self.state)?;
        let created = self.plan_service.create_plan(&request).await?;

        let blocks = schedule::allocate(&self.state);
        let metadata = PlanMetadata {
            plan_id: created.plan_id.clone(),
            name: request.name.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
        };
        self.calendar.set_calendar_data(&blocks, &metadata).await?;

        self.debouncer.cancel();
        self.pending_exit = None;
        if let Err(e) = self.run_store(|store| store.clear_draft()).await {
            // The plan and calendar exist; a lingering draft is not fatal.
            log::warn!("failed to clear draft after completion: {e}");
        }
        self.state = WizardState::default();
        Ok(created)
    }

    /// Discard the draft and reset the state.
    pub async fn discard(&mut self) -> Result<()> {
        self.debouncer.cancel();
        self.pending_exit = None;
        self.run_store(|store| store.clear_draft()).await?;
        self.state = WizardState::default();
        Ok(())
    }

    /// Offer a later-arriving remote draft.
    ///
    /// Applied at most once per session, and only while the local state is
    /// still blank and the remote draft shows actual progress. Returns true
    /// when the remote draft was applied.
    pub fn rehydrate_remote(&mut self, remote: WizardState) -> bool {
        if self.remote_applied {
            return false;
        }
        if !self.state.is_blank() || remote.is_blank() {
            return false;
        }
        self.remote_applied = true;
        self.state = remote;
        self.schedule_save();
        true
    }

    /// Cancel any pending debounced save and persist the state now.
    pub async fn flush_saves(&mut self) -> Result<()> {
        self.debouncer.cancel();
        let state = self.state.clone();
        self.run_store(move |store| store.save_draft(&state)).await
    }

    fn schedule_save(&self) {
        let store = Arc::clone(&self.store);
        let state = self.state.clone();
        self.debouncer.schedule(async move {
            let result = task::spawn_blocking(move || store.save_draft(&state)).await;
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => log::warn!("draft save failed: {e}"),
                Err(e) => log::warn!("draft save task failed: {e}"),
            }
        });
    }

    async fn run_store<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn DraftStore) -> Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| WizardError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}
