//! Clarify CLI binary entry point.
//! Reads a serialized stats document and prints the report for one cycle.

use clap::Parser;
use clarify::cli::{Cli, Commands};
use clarify::config;
use clarify::reporter::{Options, Reporter, SuccessInfo};
use clarify::stats::BuildStats;
use clarify::utils;
use std::fs;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Report {
            stats,
            repo_root,
            log_level,
            no_clear,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                log_level.as_deref(),
                if no_clear { Some(false) } else { None },
            );
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No clarify.toml found; using defaults."
                );
            }
            let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
            let stats_path = utils::resolve_cli_path(&cwd, &stats);
            let raw = match fs::read_to_string(&stats_path) {
                Ok(s) => s,
                Err(_) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("Stats file not found: {}", stats_path.to_string_lossy())
                    );
                    std::process::exit(2);
                }
            };
            let stats: BuildStats = match serde_json::from_str(&raw) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("Stats file is not valid JSON: {e}")
                    );
                    std::process::exit(2);
                }
            };
            let mut reporter = Reporter::new(Options {
                success_info: SuccessInfo {
                    messages: eff.success_messages.clone(),
                    notes: eff.success_notes.clone(),
                },
                clear_console: eff.clear_console,
                log_level: eff.log_level,
                ..Default::default()
            });
            reporter.on_cycle_done(&stats);
        }
    }
}
