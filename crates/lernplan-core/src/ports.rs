//! Ports to the wizard's external collaborators.
//!
//! The core never serializes to a wire format itself; these contracts pass
//! language-level records and the collaborators own the mechanics behind
//! them (network call, calendar archival, etc.).

use async_trait::async_trait;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};
use crate::models::{CalendarData, ContentId, CreationMethod, WizardState};

/// Serialized subset of the state handed to the plan-creation call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanRequest {
    /// Name of the plan to create
    pub name: String,

    /// Creation method the plan was built with
    pub method: CreationMethod,

    /// First day of the plan
    pub start_date: Option<Date>,

    /// Last day of the plan
    pub end_date: Option<Date>,

    /// Declared subject order
    pub subject_ids: Vec<ContentId>,
}

impl PlanRequest {
    /// Build the request subset from the wizard state.
    pub fn from_state(state: &WizardState) -> Result<Self> {
        let method = state
            .creation_method
            .ok_or_else(|| WizardError::invalid_input("creation_method").with_reason("not set"))?;
        let name = state
            .plan_name
            .clone()
            .unwrap_or_else(|| "Lernplan".to_string());
        Ok(Self {
            name,
            method,
            start_date: state.period.start_date,
            end_date: state.period.end_date,
            subject_ids: state.subjects.iter().map(|s| s.id.clone()).collect(),
        })
    }
}

/// Successful plan creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanCreated {
    /// Identifier assigned by the plan service
    pub plan_id: String,
}

/// Metadata accompanying the calendar hand-off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanMetadata {
    /// Identifier of the created plan
    pub plan_id: String,

    /// Name of the plan
    pub name: String,

    /// First day of the plan
    pub start_date: Option<Date>,

    /// Last day of the plan
    pub end_date: Option<Date>,
}

/// The plan-creation network boundary.
///
/// An opaque async call; the core never retries automatically, retry is
/// user-initiated.
#[async_trait]
pub trait PlanService: Send + Sync {
    /// Create the plan and return its identifier.
    async fn create_plan(&self, request: &PlanRequest) -> Result<PlanCreated>;
}

/// The calendar collaborator accepting the finished block map.
///
/// Idempotent: a second call with a new plan archives and replaces the
/// previous one; the core only needs success or failure.
#[async_trait]
pub trait CalendarSink: Send + Sync {
    /// Hand the allocated block map over.
    async fn set_calendar_data(&self, blocks: &CalendarData, metadata: &PlanMetadata)
        -> Result<()>;
}

/// Plan service creating plans locally, for CLI use and tests.
#[derive(Debug, Default)]
pub struct LocalPlanService;

#[async_trait]
impl PlanService for LocalPlanService {
    async fn create_plan(&self, request: &PlanRequest) -> Result<PlanCreated> {
        let plan_id = format!(
            "local-{}-{}",
            request.method.as_str(),
            jiff::Timestamp::now().as_millisecond()
        );
        log::info!("created local plan '{}' ({plan_id})", request.name);
        Ok(PlanCreated { plan_id })
    }
}

/// Calendar sink that logs the hand-off, for CLI use.
#[derive(Debug, Default)]
pub struct LoggingCalendarSink;

#[async_trait]
impl CalendarSink for LoggingCalendarSink {
    async fn set_calendar_data(
        &self,
        blocks: &CalendarData,
        metadata: &PlanMetadata,
    ) -> Result<()> {
        let block_count: usize = blocks.values().map(Vec::len).sum();
        log::info!(
            "calendar hand-off for plan '{}': {} days, {} blocks",
            metadata.name,
            blocks.len(),
            block_count
        );
        Ok(())
    }
}
