//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "clarify",
    version,
    about = "Clarify — friendly build-error reports",
    long_about = "Clarify — turn noisy bundler diagnostics into a concise, prioritized console report.\n\nConfiguration precedence: CLI > clarify.toml > defaults.",
    after_help = "Examples:\n  clarify report --stats .cache/build-stats.json\n  clarify report --stats stats.json --log-level ERROR --no-clear",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current clarify version.")]
    Version,
    /// Render the report for one build cycle
    #[command(
        about = "Render a build report",
        long_about = "Read a serialized per-cycle stats document (the bundler's JSON stats dump, single or multi-build) and print the deduplicated, prioritized report.",
        after_help = "Examples:\n  clarify report --stats stats.json\n  clarify report --stats stats.json --log-level WARNING"
    )]
    Report {
        #[arg(long, help = "Path to the JSON stats document (required)")]
        stats: String,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Verbosity: INFO|WARNING|ERROR|SILENT (default: INFO)")]
        log_level: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Do not clear the console before printing")]
        no_clear: bool,
    },
}
