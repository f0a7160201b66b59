//! Clap argument types and render dispatch.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use stormstack_keys::output::OutputRenderer;
use stormstack_keys::provision::LocationReport;
use stormstack_keys::verify::VerificationReport;

/// Provision JWT signing key pairs for stormstack platform services.
#[derive(Parser, Debug)]
#[command(
    name = stormstack_keys::constants::APP_NAME,
    version = stormstack_keys::constants::VERSION,
    about = "Provision JWT signing key pairs for stormstack platform services",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Provision key pairs into every configured location.
    Provision(ProvisionArgs),

    /// List the configured key locations.
    Locations,

    /// Print version and build information.
    Version,
}

/// Arguments for the `provision` subcommand.
#[derive(Parser, Debug)]
pub struct ProvisionArgs {
    /// Starting directory for monorepo root discovery (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Regenerate key pairs even when both files already exist.
    #[arg(long, default_value_t = false)]
    pub force: bool,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Suppress banner and progress output. Only the report and errors are shown.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a run's results using the renderer for this format.
    pub fn render(
        &self,
        reports: &[LocationReport],
        verification: &VerificationReport,
    ) -> String {
        match self {
            OutputFormat::Terminal => {
                stormstack_keys::output::terminal::TerminalRenderer.render(reports, verification)
            }
            OutputFormat::Json => {
                stormstack_keys::output::json::JsonRenderer.render(reports, verification)
            }
        }
    }
}
