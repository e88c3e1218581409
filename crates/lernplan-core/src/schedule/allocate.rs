//! The allocation engine.
//!
//! Two-phase, deterministic and pure:
//!
//! - **Phase A** (fresh generation) walks every date of the range in
//!   ascending order and, within a date, every slot position in ascending
//!   order, popping the FIFO content queue into learning slots. Queue
//!   exhaustion leaves the remaining slots contentless; it is not an error.
//! - **Phase B** (preview re-materialization) converts an edited preview
//!   verbatim back into calendar blocks, re-deriving only the block *types*
//!   from the current period and week pattern so a pattern edit after the
//!   preview still takes effect. Phase B takes precedence whenever a preview
//!   exists, because it is the only path that preserves manual swaps and
//!   locks.
//!
//! Degenerate inputs (missing dates, zero weights, content overflow) have
//! defined fallback behavior and never raise.

use std::collections::{BTreeMap, VecDeque};

use crate::models::{
    BlockAssignments, BlockContent, BlockType, CalendarBlock, CalendarData, ContentId, PreviewDay,
    WizardState,
};

use super::period::{DayKind, PeriodSpan};
use super::queue::{self, QueueEntry};

const EMPTY_SLOT_TITLE: &str = "Open slot";
const FREE_TITLE: &str = "Free";
const VACATION_TITLE: &str = "Vacation";
const BUFFER_TITLE: &str = "Buffer";
const TASKS_TITLE: &str = "Tasks";

/// Produce the calendar block map for the current state.
///
/// Missing start or end date yields an empty map.
pub fn allocate(state: &WizardState) -> CalendarData {
    let Some(span) = PeriodSpan::resolve(&state.period) else {
        return CalendarData::new();
    };

    match &state.preview_calendar {
        Some(preview) => rematerialize_preview(state, &span, preview),
        None => generate_fresh(state, &span),
    }
}

/// Phase A: sequential walk over dates and slot positions.
fn generate_fresh(state: &WizardState, span: &PeriodSpan) -> CalendarData {
    let mut queue = queue::build_queue(state);
    let mut calendar = CalendarData::new();

    for date in span.dates() {
        let slots = span.day_slots(&state.daily_structure, date);
        let mut blocks = Vec::with_capacity(slots.len());
        for (position, block_type) in slots.iter().enumerate() {
            let position = position as u32;
            let block = match block_type {
                BlockType::Learning => next_content_block(&mut queue, date, position),
                BlockType::Free => {
                    CalendarBlock::sentinel(date, position, BlockType::Free, FREE_TITLE)
                }
                BlockType::Vacation => {
                    CalendarBlock::sentinel(date, position, BlockType::Vacation, VACATION_TITLE)
                }
                BlockType::Buffer => {
                    CalendarBlock::sentinel(date, position, BlockType::Buffer, BUFFER_TITLE)
                }
            };
            blocks.push(block);
        }
        calendar.insert(date, blocks);
    }

    if !queue.is_empty() {
        // Excess content is dropped from this run; the user recovers it by
        // reopening the assignment step.
        log::info!("{} content blocks exceeded the available slots", queue.len());
    }

    calendar
}

fn next_content_block(
    queue: &mut VecDeque<QueueEntry>,
    date: jiff::civil::Date,
    position: u32,
) -> CalendarBlock {
    match queue.pop_front() {
        Some(entry) => {
            let title = match &entry.theme {
                Some(theme) => theme.name.clone(),
                None => TASKS_TITLE.to_string(),
            };
            CalendarBlock {
                date,
                position,
                block_type: BlockType::Learning,
                title,
                tasks: entry.tasks,
                locked: false,
                subject_id: Some(entry.subject_id),
            }
        }
        None => CalendarBlock::sentinel(date, position, BlockType::Learning, EMPTY_SLOT_TITLE),
    }
}

/// Phase B: preview content and lock flags are preserved verbatim; block
/// types come from the current period partition and week pattern.
fn rematerialize_preview(
    state: &WizardState,
    span: &PeriodSpan,
    preview: &[PreviewDay],
) -> CalendarData {
    let mut calendar = CalendarData::new();

    for day in preview {
        let kind = span.day_kind(day.date);
        if kind == DayKind::OutOfRange {
            // The preview predates a range edit; out-of-range days are gone.
            continue;
        }
        let slots = span.day_slots(&state.daily_structure, day.date);
        let blocks: Vec<CalendarBlock> = day
            .blocks
            .iter()
            .enumerate()
            .map(|(position, block)| {
                let block_type = slots
                    .get(position)
                    .copied()
                    .unwrap_or(BlockType::Learning);
                CalendarBlock {
                    date: day.date,
                    position: position as u32,
                    block_type,
                    title: block.title.clone(),
                    tasks: block.tasks.clone(),
                    locked: block.locked,
                    subject_id: block.subject_id.clone(),
                }
            })
            .collect();
        calendar.insert(day.date, blocks);
    }

    calendar
}

/// Content-carrying slots a subject is entitled to from its weight.
///
/// Uses floor, not round: the sum across subjects may fall short of the
/// total available learning slots, and that slack is intentionally never
/// redistributed.
pub fn slot_quota(learning_days: u32, blocks_per_day: u8, weight: u32) -> u32 {
    let total = u64::from(learning_days) * u64::from(blocks_per_day) * u64::from(weight);
    (total / 100) as u32
}

/// Per-subject slot quotas for the current state.
///
/// Subjects without a weight count as weight zero. Weights that are set but
/// do not sum to 100 are a programming error upstream of the engine.
pub fn subject_slot_quotas(state: &WizardState) -> BTreeMap<ContentId, u32> {
    let mut quotas = BTreeMap::new();
    let Some(span) = PeriodSpan::resolve(&state.period) else {
        return quotas;
    };

    if state.subjects.iter().all(|s| s.weight.is_some()) && !state.subjects.is_empty() {
        let sum: u64 = state
            .subjects
            .iter()
            .map(|s| u64::from(s.weight.unwrap_or(0)))
            .sum();
        debug_assert!(sum == 100, "subject weights reached the engine summing to {sum}");
    }

    let learning_days = span.learning_day_count(&state.daily_structure);
    for subject in &state.subjects {
        let weight = subject.weight.unwrap_or(0);
        quotas.insert(
            subject.id.clone(),
            slot_quota(learning_days, state.daily_structure.blocks_per_day, weight),
        );
    }
    quotas
}

/// Seed each subject's block list with the empty blocks its quota grants.
///
/// The assignment step starts from this map and fills blocks with content;
/// blocks left empty are skipped by the queue builder later.
pub fn seeded_assignments(state: &WizardState) -> BlockAssignments {
    subject_slot_quotas(state)
        .into_iter()
        .map(|(subject_id, quota)| {
            (subject_id, vec![BlockContent::Empty; quota as usize])
        })
        .collect()
}
