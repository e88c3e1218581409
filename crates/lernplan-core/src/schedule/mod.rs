//! Scheduling: period calculation, content queueing and allocation.

pub mod allocate;
pub mod period;
pub mod queue;


pub use allocate::{allocate, seeded_assignments, slot_quota, subject_slot_quotas};
pub use period::{DayKind, PeriodSpan};
pub use queue::{build_queue, QueueEntry};
