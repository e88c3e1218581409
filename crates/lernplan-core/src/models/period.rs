//! Plan period model.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// The user's chosen date range and reserve-day counts.
///
/// `buffer_days` and `vacation_days` distinguish `None` ("not yet computed")
/// from `Some(0)` ("user explicitly chose zero"). The period calculator
/// treats `None` as zero for its math but the value is never persisted as
/// zero on the user's behalf.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanPeriod {
    /// First day of the plan
    pub start_date: Option<Date>,

    /// Last day of the plan (inclusive)
    pub end_date: Option<Date>,

    /// Reserved days at the end of the plan for slippage recovery
    pub buffer_days: Option<u32>,

    /// Planned break days immediately preceding the buffer period
    pub vacation_days: Option<u32>,
}

impl PlanPeriod {
    /// Returns true when both dates are set and the end is strictly after
    /// the start.
    pub fn has_valid_range(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => end > start,
            _ => false,
        }
    }
}
