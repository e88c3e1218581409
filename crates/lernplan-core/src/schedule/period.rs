//! The period calculator.
//!
//! Partitions the plan's date range into three contiguous, non-overlapping
//! ranges ending at the end date: the buffer period (the last `buffer_days`
//! calendar days), the vacation period (the `vacation_days` days immediately
//! before the buffer) and the learning period (everything else from the
//! start date). `None` reserve-day counts compute as zero without ever being
//! written back as zero.

use jiff::civil::Date;
use jiff::ToSpan;
use serde::{Deserialize, Serialize};

use crate::models::{BlockType, DailyStructure, PlanPeriod};

/// Period classification of a single calendar date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    /// Regular plan day whose slots come from the week pattern
    Learning,

    /// Planned break day
    Vacation,

    /// Slippage-recovery day at the end of the plan
    Buffer,

    /// Date outside the plan's range
    OutOfRange,
}

/// A resolved date range with its vacation and buffer thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSpan {
    start: Date,
    end: Date,
    /// First buffer day, when a buffer exists
    buffer_start: Option<Date>,
    /// First vacation day, when a vacation exists
    vacation_start: Option<Date>,
}

impl PeriodSpan {
    /// Resolve a [`PlanPeriod`] into thresholds.
    ///
    /// Returns `None` when either date is missing or the range is inverted;
    /// the allocation engine maps that to an empty allocation rather than an
    /// error.
    pub fn resolve(period: &PlanPeriod) -> Option<Self> {
        let start = period.start_date?;
        let end = period.end_date?;
        if end < start {
            return None;
        }

        let buffer_days = i64::from(period.buffer_days.unwrap_or(0));
        let vacation_days = i64::from(period.vacation_days.unwrap_or(0));

        let buffer_start = (buffer_days > 0)
            .then(|| end.checked_sub((buffer_days - 1).days()).unwrap_or(Date::MIN));
        let vacation_end = match buffer_start {
            Some(buffer_start) => buffer_start.checked_sub(1.day()).unwrap_or(Date::MIN),
            None => end,
        };
        let vacation_start = (vacation_days > 0).then(|| {
            vacation_end
                .checked_sub((vacation_days - 1).days())
                .unwrap_or(Date::MIN)
        });

        Some(Self {
            start,
            end,
            buffer_start,
            vacation_start,
        })
    }

    /// First day of the plan.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the plan (inclusive).
    pub fn end(&self) -> Date {
        self.end
    }

    /// Classify a date. Buffer wins over vacation wins over learning.
    pub fn day_kind(&self, date: Date) -> DayKind {
        if date < self.start || date > self.end {
            return DayKind::OutOfRange;
        }
        if let Some(buffer_start) = self.buffer_start {
            if date >= buffer_start {
                return DayKind::Buffer;
            }
        }
        if let Some(vacation_start) = self.vacation_start {
            if date >= vacation_start {
                return DayKind::Vacation;
            }
        }
        DayKind::Learning
    }

    /// All dates of the range, ascending.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        let end = self.end;
        self.start.series(1.day()).take_while(move |d| *d <= end)
    }

    /// Ordered block-type slots for one date.
    ///
    /// Vacation and buffer days always produce exactly one full-day block of
    /// their type regardless of `blocks_per_day`; learning days take their
    /// slot list from the week pattern, keyed by weekday (Monday-first).
    pub fn day_slots(&self, structure: &DailyStructure, date: Date) -> Vec<BlockType> {
        match self.day_kind(date) {
            DayKind::Buffer => vec![BlockType::Buffer],
            DayKind::Vacation => vec![BlockType::Vacation],
            DayKind::Learning => structure.week_pattern.slots(date.weekday()).to_vec(),
            DayKind::OutOfRange => Vec::new(),
        }
    }

    /// Number of learning-period days with at least one learning slot in the
    /// pattern. This is the `learning_days` input of the slot-quota formula.
    pub fn learning_day_count(&self, structure: &DailyStructure) -> u32 {
        self.dates()
            .filter(|date| {
                self.day_kind(*date) == DayKind::Learning
                    && structure.week_pattern.has_learning(date.weekday())
            })
            .count() as u32
    }
}
