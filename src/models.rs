//! Shared value types flowing through the reporting pipeline.
//!
//! Everything here is immutable once constructed: raw errors come in from
//! the stats document, transformers produce `NormalizedError`s, formatters
//! produce `Chunk`s, and the reporter assembles `Block`s for the console
//! writer. No stage mutates what a previous stage produced.

use serde::Deserialize;

/// Diagnostic class of a report: which list of the stats document the raw
/// errors came from, and which title the resulting block gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// Label used in report titles and badges.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A raw diagnostic as produced by the build tool. Opaque to the pipeline
/// except for `message`; the optional fields are carried through for
/// transformers that know how to use them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub module: Option<String>,
}

/// A normalized diagnostic after the transformer chain.
///
/// `kind` identifies the transformer that produced it and is the only thing
/// formatters dispatch on. `severity` ranks error classes against each
/// other; only the highest-ranked class present in a cycle is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedError {
    pub kind: String,
    pub severity: u32,
    pub message: String,
    pub module: Option<String>,
}

/// Kind tag of errors no transformer claimed.
pub const DEFAULT_KIND: &str = "default";

impl NormalizedError {
    /// Pass-through normalization for errors no transformer recognizes:
    /// lowest rank, message kept verbatim.
    pub fn passthrough(raw: &RawError) -> Self {
        NormalizedError {
            kind: DEFAULT_KIND.to_string(),
            severity: 0,
            message: raw.message.clone(),
            module: raw.module.clone(),
        }
    }
}

/// Ordered lines produced by one formatter for the errors it claimed.
pub type Chunk = Vec<String>;

/// Badge style for a printed block title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Success,
    Info,
    Warning,
    Error,
}

/// One printable report unit: a badged title line followed by body lines.
///
/// Blocks are pure values so tests can assert on report content without
/// capturing stdout; the console writer applies styling when printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub badge: Badge,
    pub label: String,
    pub title: String,
    pub body: Vec<String>,
}

impl Block {
    pub fn new(badge: Badge, label: &str, title: impl Into<String>) -> Self {
        Block {
            badge,
            label: label.to_string(),
            title: title.into(),
            body: Vec::new(),
        }
    }
}
