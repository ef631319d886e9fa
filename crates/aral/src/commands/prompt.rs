//! `aral prompt` command implementation.

use aral_model::build_prompt;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the prompt command.
#[derive(Args)]
pub(crate) struct PromptArgs {
    /// Grade level (e.g., "Grade 7").
    #[arg(short, long)]
    grade: String,

    /// Subject (e.g., "Science").
    #[arg(short, long)]
    subject: String,

    /// Lesson objective.
    #[arg(short, long)]
    objective: String,
}

impl PromptArgs {
    /// Execute the prompt command.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other commands.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        output.info(&build_prompt(&self.grade, &self.subject, &self.objective));

        Ok(())
    }
}
