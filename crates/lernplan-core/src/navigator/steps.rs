//! Named step numbers per creation method.
//!
//! Step numbers are 1-based and scoped to the method. Only the steps the
//! navigator or validation engine dispatches on are named; the remaining
//! steps of each graph are plain linear form steps.

/// Steps of the manual method (22 total).
pub mod manual {
    pub const INTRO: u32 = 1;
    pub const PERIOD_DATES: u32 = 2;
    pub const BUFFER_DAYS: u32 = 3;
    pub const VACATION_DAYS: u32 = 4;
    pub const BLOCKS_PER_DAY: u32 = 5;
    pub const WEEK_PATTERN: u32 = 6;
    pub const SUBJECT_SELECT: u32 = 7;
    pub const SUBAREA_INTRO: u32 = 8;
    /// Repeats once per subject (first-incomplete scan)
    pub const SUBAREA_CONFIGURE: u32 = 9;
    pub const THEME_INTRO: u32 = 10;
    /// Theme loop body
    pub const THEME_SELECT: u32 = 11;
    /// Theme loop tail; sequential advance over subjects
    pub const THEME_TASKS: u32 = 12;
    pub const WEIGHTING: u32 = 13;
    pub const DISTRIBUTION_MODE: u32 = 14;
    pub const SLOT_REVIEW: u32 = 15;
    pub const BLOCK_ASSIGNMENT: u32 = 16;
    pub const ASSIGNMENT_REVIEW: u32 = 17;
    pub const PREVIEW_GENERATE: u32 = 18;
    pub const PREVIEW_EDIT: u32 = 19;
    pub const SUMMARY: u32 = 20;
    pub const NAME_AND_CONFIRM: u32 = 21;
    pub const COMPLETION: u32 = 22;
}

/// Steps of the calendar method (7 total).
pub mod calendar {
    pub const INTRO: u32 = 1;
    pub const PERIOD_DATES: u32 = 2;
    pub const RESERVE_DAYS: u32 = 3;
    pub const BLOCKS_PER_DAY: u32 = 4;
    pub const WEEK_PATTERN: u32 = 5;
    pub const SUMMARY: u32 = 6;
    pub const COMPLETION: u32 = 7;
}

/// Steps of the template method (9 total).
pub mod template {
    pub const PERIOD_DATES: u32 = 2;
    pub const NAME_AND_CONFIRM: u32 = 8;
    pub const COMPLETION: u32 = 9;
}

/// Steps of the AI method (8 total).
pub mod ai {
    pub const PERIOD_DATES: u32 = 2;
    pub const COMPLETION: u32 = 8;
}

/// Steps of the automatic method (10 total).
pub mod automatic {
    pub const PERIOD_DATES: u32 = 2;
    pub const SUBJECT_SELECT: u32 = 5;
    pub const WEIGHTING: u32 = 6;
    pub const COMPLETION: u32 = 10;
}
