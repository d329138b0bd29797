//! Clarify core library.
//!
//! Post-processes compiler diagnostics from a bundler build cycle into a
//! deduplicated, prioritized, human-readable console report. The host build
//! system drives a `Reporter` through two lifecycle entry points per cycle
//! (`on_cycle_start`, `on_cycle_done`); the binary wraps the same pipeline
//! around a serialized stats document.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `stats`: Per-cycle stats model, multi-build flattening with dedup.
//! - `models`: Value types flowing through the pipeline.
//! - `transform`: Transformer chain and severity reduction.
//! - `transformers`: Built-in raw-error recognizers.
//! - `format`: Formatter chain with no-drop fallback.
//! - `formatters`: Built-in renderers.
//! - `reporter`: Report driver (cycle state, log-level gating).
//! - `output`: Styled console printing.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod format;
pub mod formatters;
pub mod models;
pub mod output;
pub mod reporter;
pub mod stats;
pub mod transform;
pub mod transformers;
pub mod utils;
