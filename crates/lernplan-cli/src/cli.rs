//! Command handlers bridging parsed arguments and the core wizard.

use anyhow::{Context, Result};
use lernplan_core::display::{CalendarDays, OperationStatus, WizardStatus};
use lernplan_core::models::{CreationMethod, StatePatch};
use lernplan_core::{schedule, Wizard, WizardAdvance};

/// CLI command dispatcher owning the wizard instance.
pub struct Cli {
    wizard: Wizard,
}

impl Cli {
    /// Create a new dispatcher for the given wizard.
    pub fn new(wizard: Wizard) -> Self {
        Self { wizard }
    }

    /// Start a new wizard run with the given creation method.
    pub async fn handle_init(&mut self, method: CreationMethod) -> Result<()> {
        self.wizard.apply(StatePatch {
            creation_method: Some(method),
            ..Default::default()
        });
        let total = self.wizard.state().navigation.total_steps;
        print!(
            "{}",
            OperationStatus::success(format!(
                "Started a {} wizard run ({total} steps)",
                method.as_str()
            ))
        );
        self.flush().await
    }

    /// Merge a patch into the draft.
    pub async fn handle_set(&mut self, patch: StatePatch) -> Result<()> {
        self.wizard.apply(patch);
        print!(
            "{}",
            OperationStatus::success("Draft updated".to_string())
        );
        self.flush().await
    }

    /// Show the current wizard position.
    pub fn handle_status(&self) -> Result<()> {
        print!("{}", WizardStatus(self.wizard.state()));
        Ok(())
    }

    /// Advance to the next step.
    pub async fn handle_next(&mut self, confirm: bool) -> Result<()> {
        match self.wizard.advance() {
            WizardAdvance::Blocked => {
                print!(
                    "{}",
                    OperationStatus::failure(
                        "Current step is incomplete; fix its inputs first".to_string()
                    )
                );
                Ok(())
            }
            WizardAdvance::Moved => {
                self.print_position();
                self.flush().await
            }
            WizardAdvance::AwaitingConfirmation => {
                if confirm {
                    self.wizard.confirm_exit();
                    self.print_position();
                    self.flush().await
                } else {
                    self.wizard.cancel_exit();
                    print!(
                        "{}",
                        OperationStatus::failure(
                            "Some subjects are not configured yet; re-run with --confirm \
                             to leave the loop anyway"
                                .to_string()
                        )
                    );
                    Ok(())
                }
            }
            WizardAdvance::ReadyToComplete => {
                print!(
                    "{}",
                    OperationStatus::success(
                        "All steps done; run `lern complete` to create the plan".to_string()
                    )
                );
                Ok(())
            }
        }
    }

    /// Go back one step.
    pub async fn handle_back(&mut self) -> Result<()> {
        self.wizard.back();
        self.print_position();
        self.flush().await
    }

    /// Jump to a specific step.
    pub async fn handle_goto(&mut self, step: u32) -> Result<()> {
        self.wizard.jump_to(step);
        self.print_position();
        self.flush().await
    }

    /// Show the calendar the current draft would produce.
    pub fn handle_preview(&self) -> Result<()> {
        let calendar = schedule::allocate(self.wizard.state());
        if calendar.is_empty() {
            println!("Nothing to preview yet; set the plan dates first.");
        } else {
            print!("{}", CalendarDays(&calendar));
        }
        Ok(())
    }

    /// Throw the current draft away.
    pub async fn handle_discard(&mut self) -> Result<()> {
        self.wizard
            .discard()
            .await
            .context("Failed to discard draft")?;
        print!(
            "{}",
            OperationStatus::success("Draft discarded".to_string())
        );
        Ok(())
    }

    /// Create the plan from the finished draft.
    pub async fn handle_complete(&mut self) -> Result<()> {
        let created = self
            .wizard
            .complete()
            .await
            .context("Failed to complete the wizard run")?;
        print!(
            "{}",
            OperationStatus::success(format!("Created plan {}", created.plan_id))
        );
        Ok(())
    }

    fn print_position(&self) {
        let navigation = &self.wizard.state().navigation;
        println!(
            "Now at step {}/{}",
            navigation.current_step, navigation.total_steps
        );
    }

    async fn flush(&mut self) -> Result<()> {
        self.wizard
            .flush_saves()
            .await
            .context("Failed to persist draft")
    }
}
