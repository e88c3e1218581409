//! Display wrappers for wizard output.
//!
//! Newtype wrappers provide Display implementations for the allocated
//! calendar and the wizard's step status, keeping presentation out of the
//! domain models.

use std::fmt;

use crate::models::{CalendarData, WizardState};
use crate::validation;

/// Wrapper for displaying an allocated calendar, one line per block.
pub struct CalendarDays<'a>(pub &'a CalendarData);

impl fmt::Display for CalendarDays<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (date, blocks) in self.0 {
            writeln!(f, "## {date}")?;
            for block in blocks {
                let lock = if block.locked { " (locked)" } else { "" };
                match &block.subject_id {
                    Some(subject) => writeln!(
                        f,
                        "  {}. [{}] {} — {} task(s), subject {}{}",
                        block.position + 1,
                        block.block_type.as_str(),
                        block.title,
                        block.tasks.len(),
                        subject,
                        lock
                    )?,
                    None => writeln!(
                        f,
                        "  {}. [{}] {}{}",
                        block.position + 1,
                        block.block_type.as_str(),
                        block.title,
                        lock
                    )?,
                }
            }
        }
        Ok(())
    }
}

/// Wrapper for displaying the wizard's current position and validity.
pub struct WizardStatus<'a>(pub &'a WizardState);

impl fmt::Display for WizardStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        match state.creation_method {
            Some(method) => {
                writeln!(
                    f,
                    "Method: {} — step {}/{}",
                    method.as_str(),
                    state.navigation.current_step,
                    state.navigation.total_steps
                )?;
                writeln!(
                    f,
                    "Current step valid: {}",
                    if validation::is_step_valid(state) { "yes" } else { "no" }
                )?;
                if !state.subjects.is_empty() {
                    writeln!(f, "Subjects: {}", state.subjects.len())?;
                }
                Ok(())
            }
            None => writeln!(f, "No wizard run in progress"),
        }
    }
}

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Plan created".to_string());
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::failure("Plan creation failed".to_string());
        assert!(format!("{failure}").contains("Error:"));
    }
}
