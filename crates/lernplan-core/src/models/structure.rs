//! Daily structure: block types and the weekly slot pattern.

use std::str::FromStr;

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of time block types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// A slot that carries assigned learning content
    Learning,

    /// A slot kept free of content (weekends, evenings off)
    Free,

    /// Full-day vacation sentinel
    Vacation,

    /// Full-day buffer sentinel
    Buffer,
}

impl FromStr for BlockType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "learning" => Ok(BlockType::Learning),
            "free" => Ok(BlockType::Free),
            "vacation" => Ok(BlockType::Vacation),
            "buffer" => Ok(BlockType::Buffer),
            _ => Err(format!("Invalid block type: {s}")),
        }
    }
}

impl BlockType {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Learning => "learning",
            BlockType::Free => "free",
            BlockType::Vacation => "vacation",
            BlockType::Buffer => "buffer",
        }
    }
}

/// Ordered block-type slots per weekday, Monday-first.
///
/// Invariant: every weekday has a non-empty slot list. The list length need
/// not equal `blocks_per_day`; free days may carry a single [`BlockType::Free`]
/// entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekPattern(pub [Vec<BlockType>; 7]);

impl WeekPattern {
    /// Pattern with `blocks_per_day` learning slots Monday through Friday and
    /// a single free slot on weekend days.
    pub fn weekdays_learning(blocks_per_day: u8) -> Self {
        let learning = vec![BlockType::Learning; blocks_per_day.max(1) as usize];
        let free = vec![BlockType::Free];
        Self([
            learning.clone(),
            learning.clone(),
            learning.clone(),
            learning.clone(),
            learning,
            free.clone(),
            free,
        ])
    }

    /// Slot list for the given weekday.
    pub fn slots(&self, weekday: Weekday) -> &[BlockType] {
        &self.0[weekday.to_monday_zero_offset() as usize]
    }

    /// Replace the slot list for the given weekday.
    pub fn set_slots(&mut self, weekday: Weekday, slots: Vec<BlockType>) {
        self.0[weekday.to_monday_zero_offset() as usize] = slots;
    }

    /// True when every weekday carries at least one slot.
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|slots| !slots.is_empty())
    }

    /// True when the weekday has at least one learning slot.
    pub fn has_learning(&self, weekday: Weekday) -> bool {
        self.slots(weekday).contains(&BlockType::Learning)
    }
}

impl Default for WeekPattern {
    fn default() -> Self {
        Self::weekdays_learning(2)
    }
}

/// The daily structure chosen in the wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyStructure {
    /// Number of schedulable blocks per learning day (1..=4)
    pub blocks_per_day: u8,

    /// Per-weekday ordered slot pattern
    pub week_pattern: WeekPattern,
}

impl Default for DailyStructure {
    fn default() -> Self {
        Self {
            blocks_per_day: 2,
            week_pattern: WeekPattern::default(),
        }
    }
}
