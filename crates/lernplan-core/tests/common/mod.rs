//! Shared fixtures for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use jiff::civil::date;
use lernplan_core::draft::DraftStore;
use lernplan_core::models::{
    BlockContent, CreationMethod, DistributionMode, StatePatch, SubArea, Subject, TaskItem, Theme,
    WizardState,
};
use lernplan_core::ports::{CalendarSink, PlanCreated, PlanMetadata, PlanRequest, PlanService};
use lernplan_core::{CalendarData, MemoryDraftStore, Result, WizardError};

pub fn subject(id: &str, weight: Option<u32>) -> Subject {
    Subject {
        id: id.to_string(),
        name: id.to_uppercase(),
        weight,
    }
}

pub fn theme_with_tasks(id: &str, task_count: usize) -> Theme {
    Theme {
        id: id.to_string(),
        name: format!("Theme {id}"),
        tasks: (1..=task_count)
            .map(|i| TaskItem {
                id: format!("{id}-task{i}"),
                name: format!("Task {i} of {id}"),
                priority: None,
                done: false,
            })
            .collect(),
    }
}

/// A manual-method state configured end to end over January 2025.
pub fn configured_manual_state() -> WizardState {
    let mut state = WizardState::default();
    state.apply(StatePatch {
        creation_method: Some(CreationMethod::Manual),
        plan_name: Some("Examensvorbereitung".to_string()),
        start_date: Some(date(2025, 1, 1)),
        end_date: Some(date(2025, 1, 31)),
        buffer_days: Some(2),
        vacation_days: Some(3),
        subjects: Some(vec![subject("zivilrecht", Some(60)), subject("strafrecht", Some(40))]),
        distribution_mode: Some(DistributionMode::Mixed),
        ..Default::default()
    });

    for id in ["zivilrecht", "strafrecht"] {
        let theme = theme_with_tasks(&format!("{id}-theme"), 2);
        state.subject_catalog.insert(
            id.to_string(),
            vec![SubArea {
                id: format!("{id}-area"),
                name: format!("Area of {id}"),
                themes: vec![theme.clone()],
            }],
        );
        state
            .block_assignments
            .insert(id.to_string(), vec![BlockContent::Theme { theme }]);
    }
    state
}

/// Draft store counting saves, for debounce assertions.
#[derive(Default)]
pub struct CountingDraftStore {
    inner: MemoryDraftStore,
    pub saves: AtomicUsize,
}

impl CountingDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl DraftStore for CountingDraftStore {
    fn save_draft(&self, state: &WizardState) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save_draft(state)
    }

    fn load_draft(&self) -> Result<Option<WizardState>> {
        self.inner.load_draft()
    }

    fn clear_draft(&self) -> Result<()> {
        self.inner.clear_draft()
    }

    fn has_draft(&self) -> Result<bool> {
        self.inner.has_draft()
    }
}

/// Plan service recording calls and returning a fixed id.
#[derive(Default)]
pub struct RecordingPlanService {
    pub calls: AtomicUsize,
}

#[async_trait]
impl PlanService for RecordingPlanService {
    async fn create_plan(&self, _request: &PlanRequest) -> Result<PlanCreated> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(PlanCreated {
            plan_id: "plan-1".to_string(),
        })
    }
}

/// Plan service that always fails.
#[derive(Default)]
pub struct FailingPlanService;

#[async_trait]
impl PlanService for FailingPlanService {
    async fn create_plan(&self, _request: &PlanRequest) -> Result<PlanCreated> {
        Err(WizardError::PlanCreation {
            message: "service unavailable".to_string(),
        })
    }
}

/// Calendar sink recording every hand-off.
#[derive(Default)]
pub struct RecordingCalendarSink {
    pub handoffs: Mutex<Vec<(CalendarData, PlanMetadata)>>,
}

impl RecordingCalendarSink {
    pub fn handoff_count(&self) -> usize {
        self.handoffs.lock().unwrap().len()
    }
}

#[async_trait]
impl CalendarSink for RecordingCalendarSink {
    async fn set_calendar_data(
        &self,
        blocks: &CalendarData,
        metadata: &PlanMetadata,
    ) -> Result<()> {
        self.handoffs
            .lock()
            .unwrap()
            .push((blocks.clone(), metadata.clone()));
        Ok(())
    }
}

/// Calendar sink that always fails.
#[derive(Default)]
pub struct FailingCalendarSink;

#[async_trait]
impl CalendarSink for FailingCalendarSink {
    async fn set_calendar_data(
        &self,
        _blocks: &CalendarData,
        _metadata: &PlanMetadata,
    ) -> Result<()> {
        Err(WizardError::CalendarHandoff {
            message: "calendar rejected the plan".to_string(),
        })
    }
}
