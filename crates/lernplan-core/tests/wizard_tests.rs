//! Integration tests for the wizard orchestration layer.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use common::*;
use jiff::civil::date;
use lernplan_core::models::{CreationMethod, StatePatch};
use lernplan_core::navigator::steps::manual;
use lernplan_core::{DraftStore, MemoryDraftStore, Wizard, WizardAdvance, WizardBuilder};

async fn test_wizard(store: Arc<dyn DraftStore>) -> Wizard {
    WizardBuilder::new()
        .with_draft_store(store)
        .with_save_window(Duration::from_millis(500))
        .build()
        .await
        .expect("failed to build wizard")
}

#[tokio::test(start_paused = true)]
async fn test_debounced_save_coalesces_mutations() {
    let store = Arc::new(CountingDraftStore::new());
    let mut wizard = test_wizard(Arc::clone(&store) as Arc<dyn DraftStore>).await;

    // Three mutations inside one quiescence window.
    for day in 1..=3 {
        wizard.apply(StatePatch {
            creation_method: Some(CreationMethod::Calendar),
            start_date: Some(date(2025, 1, day)),
            ..Default::default()
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(store.save_count(), 1);

    // The persisted draft is the final state, not an intermediate one.
    let draft = store.load_draft().unwrap().unwrap();
    assert_eq!(draft.period.start_date, Some(date(2025, 1, 3)));
}

#[tokio::test(start_paused = true)]
async fn test_no_save_before_quiescence_window() {
    let store = Arc::new(CountingDraftStore::new());
    let mut wizard = test_wizard(Arc::clone(&store) as Arc<dyn DraftStore>).await;

    wizard.apply(StatePatch {
        creation_method: Some(CreationMethod::Manual),
        ..Default::default()
    });
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(store.save_count(), 0);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(store.save_count(), 1);
}

#[tokio::test]
async fn test_flush_saves_persists_immediately() {
    let store = Arc::new(CountingDraftStore::new());
    let mut wizard = test_wizard(Arc::clone(&store) as Arc<dyn DraftStore>).await;

    wizard.apply(StatePatch {
        creation_method: Some(CreationMethod::Manual),
        ..Default::default()
    });
    wizard.flush_saves().await.expect("flush failed");
    assert_eq!(store.save_count(), 1);
    assert!(store.has_draft().unwrap());
}

#[tokio::test]
async fn test_builder_resumes_persisted_draft() {
    let store = Arc::new(MemoryDraftStore::new());
    let state = configured_manual_state();
    store.save_draft(&state).unwrap();

    let wizard = test_wizard(Arc::clone(&store) as Arc<dyn DraftStore>).await;
    assert_eq!(wizard.state(), &state);
}

#[tokio::test]
async fn test_advance_blocked_by_validation() {
    let store = Arc::new(MemoryDraftStore::new());
    let mut wizard = test_wizard(store).await;

    wizard.apply(StatePatch {
        creation_method: Some(CreationMethod::Manual),
        ..Default::default()
    });
    // Move to the date step with no dates set.
    assert_eq!(wizard.advance(), WizardAdvance::Moved);
    assert_eq!(wizard.state().navigation.current_step, manual::PERIOD_DATES);
    assert_eq!(wizard.advance(), WizardAdvance::Blocked);
    assert_eq!(wizard.state().navigation.current_step, manual::PERIOD_DATES);

    wizard.apply(StatePatch {
        start_date: Some(date(2025, 1, 1)),
        end_date: Some(date(2025, 1, 31)),
        ..Default::default()
    });
    assert_eq!(wizard.advance(), WizardAdvance::Moved);
}

#[tokio::test]
async fn test_confirmation_flow_on_incomplete_theme_exit() {
    let store = Arc::new(MemoryDraftStore::new());
    let mut wizard = test_wizard(store).await;

    let mut state = configured_manual_state();
    // Strip the second subject's themes and park at the loop tail.
    if let Some(areas) = state.subject_catalog.get_mut("strafrecht") {
        for area in areas {
            area.themes.clear();
        }
    }
    state.block_assignments.remove("strafrecht");
    state.navigation.current_step = manual::THEME_TASKS;
    state.navigation.loop_cursors.subject_index = 1;
    wizard.rehydrate_remote(state.clone());

    assert_eq!(wizard.advance(), WizardAdvance::AwaitingConfirmation);
    // Cancellation leaves the state untouched.
    wizard.cancel_exit();
    assert_eq!(wizard.state().navigation.current_step, manual::THEME_TASKS);
    assert!(!wizard.confirm_exit());

    // Confirming after a fresh attempt commits the carried state.
    assert_eq!(wizard.advance(), WizardAdvance::AwaitingConfirmation);
    assert!(wizard.confirm_exit());
    assert_eq!(wizard.state().navigation.current_step, manual::WEIGHTING);
}

#[tokio::test]
async fn test_completion_sequence_success() {
    let store = Arc::new(MemoryDraftStore::new());
    let plans = Arc::new(RecordingPlanService::default());
    let sink = Arc::new(RecordingCalendarSink::default());

    let mut wizard = WizardBuilder::new()
        .with_draft_store(Arc::clone(&store) as Arc<dyn DraftStore>)
        .with_plan_service(Arc::clone(&plans) as _)
        .with_calendar_sink(Arc::clone(&sink) as _)
        .build()
        .await
        .expect("failed to build wizard");

    wizard.rehydrate_remote(configured_manual_state());
    wizard.flush_saves().await.unwrap();
    assert!(store.has_draft().unwrap());

    let created = wizard.complete().await.expect("completion failed");
    assert_eq!(created.plan_id, "plan-1");
    assert_eq!(plans.calls.load(Ordering::SeqCst), 1);
    assert_eq!(sink.handoff_count(), 1);

    // 31 days of January were handed over.
    let handoffs = sink.handoffs.lock().unwrap();
    let (blocks, metadata) = &handoffs[0];
    assert_eq!(blocks.len(), 31);
    assert_eq!(metadata.name, "Examensvorbereitung");

    // Draft cleared, state reset.
    assert!(!store.has_draft().unwrap());
    assert!(wizard.state().creation_method.is_none());
}

#[tokio::test]
async fn test_completion_aborts_before_handoff_when_plan_creation_fails() {
    let store = Arc::new(MemoryDraftStore::new());
    let sink = Arc::new(RecordingCalendarSink::default());

    let mut wizard = WizardBuilder::new()
        .with_draft_store(Arc::clone(&store) as Arc<dyn DraftStore>)
        .with_plan_service(Arc::new(FailingPlanService))
        .with_calendar_sink(Arc::clone(&sink) as _)
        .build()
        .await
        .expect("failed to build wizard");

    let state = configured_manual_state();
    wizard.rehydrate_remote(state.clone());
    wizard.flush_saves().await.unwrap();

    let result = wizard.complete().await;
    assert!(result.is_err());
    // No partial hand-off: the sink was never called, the state and the
    // draft survive for a user-initiated retry.
    assert_eq!(sink.handoff_count(), 0);
    assert_eq!(wizard.state(), &state);
    assert!(store.has_draft().unwrap());
}

#[tokio::test]
async fn test_completion_preserves_state_when_handoff_fails() {
    let store = Arc::new(MemoryDraftStore::new());

    let mut wizard = WizardBuilder::new()
        .with_draft_store(Arc::clone(&store) as Arc<dyn DraftStore>)
        .with_plan_service(Arc::new(RecordingPlanService::default()))
        .with_calendar_sink(Arc::new(FailingCalendarSink))
        .build()
        .await
        .expect("failed to build wizard");

    let state = configured_manual_state();
    wizard.rehydrate_remote(state.clone());
    wizard.flush_saves().await.unwrap();

    let result = wizard.complete().await;
    assert!(result.is_err());
    assert_eq!(wizard.state(), &state);
    assert!(store.has_draft().unwrap());
}

#[tokio::test]
async fn test_discard_clears_draft_and_state() {
    let store = Arc::new(MemoryDraftStore::new());
    let mut wizard = test_wizard(Arc::clone(&store) as Arc<dyn DraftStore>).await;

    wizard.rehydrate_remote(configured_manual_state());
    wizard.flush_saves().await.unwrap();
    assert!(store.has_draft().unwrap());

    wizard.discard().await.expect("discard failed");
    assert!(!store.has_draft().unwrap());
    assert!(wizard.state().creation_method.is_none());
}

#[tokio::test]
async fn test_remote_rehydration_applies_only_once() {
    let store = Arc::new(MemoryDraftStore::new());
    let mut wizard = test_wizard(store).await;

    let mut first = configured_manual_state();
    first.navigation.current_step = 5;
    let mut second = configured_manual_state();
    second.navigation.current_step = 9;

    assert!(wizard.rehydrate_remote(first.clone()));
    assert_eq!(wizard.state().navigation.current_step, 5);

    // A later push is ignored even though it shows more progress.
    assert!(!wizard.rehydrate_remote(second));
    assert_eq!(wizard.state().navigation.current_step, 5);
}

#[tokio::test]
async fn test_remote_rehydration_never_overwrites_local_progress() {
    let store = Arc::new(MemoryDraftStore::new());
    let mut wizard = test_wizard(store).await;

    // Local edits happened first.
    wizard.apply(StatePatch {
        creation_method: Some(CreationMethod::Manual),
        ..Default::default()
    });
    assert_eq!(wizard.advance(), WizardAdvance::Moved);

    let mut remote = configured_manual_state();
    remote.navigation.current_step = 9;
    assert!(!wizard.rehydrate_remote(remote));
    assert_eq!(wizard.state().navigation.current_step, manual::PERIOD_DATES);
}

#[tokio::test]
async fn test_remote_rehydration_ignores_blank_remote() {
    let store = Arc::new(MemoryDraftStore::new());
    let mut wizard = test_wizard(store).await;

    let blank = lernplan_core::WizardState::default();
    assert!(!wizard.rehydrate_remote(blank));
    // A rejected blank push does not use up the once-only application.
    let mut remote = configured_manual_state();
    remote.navigation.current_step = 3;
    assert!(wizard.rehydrate_remote(remote));
}
