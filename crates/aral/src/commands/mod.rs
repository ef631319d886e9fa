//! CLI command implementations.

pub(crate) mod generate;
pub(crate) mod prompt;
pub(crate) mod serve;

pub(crate) use generate::GenerateArgs;
pub(crate) use prompt::PromptArgs;
pub(crate) use serve::ServeArgs;
