//! Aral CLI - Lesson planner.
//!
//! Provides commands for:
//! - `serve`: Start the lesson planner server
//! - `generate`: Generate a lesson plan in the terminal
//! - `prompt`: Print the prompt sent to the model for given inputs

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GenerateArgs, PromptArgs, ServeArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Aral - Lesson planner.
#[derive(Parser)]
#[command(name = "aral", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the lesson planner server.
    Serve(ServeArgs),
    /// Generate a lesson plan in the terminal.
    Generate(GenerateArgs),
    /// Print the prompt sent to the model for given inputs.
    Prompt(PromptArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for serve command
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute(VERSION))
        }
        Commands::Generate(args) => args.execute(),
        Commands::Prompt(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_command() {
        let cli = Cli::try_parse_from(["aral", "serve", "--port", "8080"]).unwrap();

        assert!(matches!(cli.command, Commands::Serve(_)));
    }

    #[test]
    fn test_parse_generate_command() {
        let cli = Cli::try_parse_from([
            "aral",
            "generate",
            "--grade",
            "Grade 7",
            "--subject",
            "Science",
            "--objective",
            "Describe the water cycle",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn test_generate_requires_inputs() {
        let result = Cli::try_parse_from(["aral", "generate", "--grade", "Grade 7"]);

        assert!(result.is_err());
    }
}
