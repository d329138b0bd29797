//! Data model for the per-cycle build stats document.
//!
//! A cycle is either a single compilation (`compilation.errors/warnings`)
//! or a multi-build: a list of nested stats objects under `stats`, one per
//! sub-compilation. Multi-builds are flattened recursively; dedup by message
//! happens only at the flattening step, so a single compilation's repeated
//! diagnostics pass through untouched.

use crate::models::{RawError, Severity};
use crate::utils::dedupe_by;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
/// Diagnostics of one compilation, partitioned by severity.
pub struct Compilation {
    #[serde(default)]
    pub errors: Vec<RawError>,
    #[serde(default)]
    pub warnings: Vec<RawError>,
}

#[derive(Debug, Default, Deserialize)]
/// Per-cycle stats as serialized by the build tool.
pub struct BuildStats {
    #[serde(default)]
    pub compilation: Option<Compilation>,
    /// Present only for multi-build cycles; nested stats per sub-build.
    #[serde(default)]
    pub stats: Option<Vec<BuildStats>>,
    #[serde(default, rename = "startTime")]
    pub start_time: Option<u64>,
    #[serde(default, rename = "endTime")]
    pub end_time: Option<u64>,
}

impl BuildStats {
    fn is_multi(&self) -> bool {
        self.stats.is_some()
    }

    pub fn has_errors(&self) -> bool {
        !self.extract(Severity::Error).is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.extract(Severity::Warning).is_empty()
    }

    /// Collect the raw diagnostics of the given class for this cycle.
    ///
    /// Multi-builds flatten sub-build diagnostics recursively and dedupe by
    /// message, since several sub-compilers depending on the same module
    /// each report the same underlying error.
    pub fn extract(&self, severity: Severity) -> Vec<RawError> {
        if let Some(children) = &self.stats {
            let flat: Vec<RawError> = children
                .iter()
                .flat_map(|s| s.extract(severity))
                .collect();
            return dedupe_by(flat, |e| e.message.clone());
        }
        match &self.compilation {
            Some(c) => match severity {
                Severity::Error => c.errors.clone(),
                Severity::Warning => c.warnings.clone(),
            },
            None => Vec::new(),
        }
    }

    /// Elapsed compile time in milliseconds.
    ///
    /// Sub-builds of a multi-build run in parallel, so the cycle's time is
    /// the longest child duration, not the sum.
    pub fn compile_time(&self) -> u64 {
        if let Some(children) = &self.stats {
            return children.iter().map(|s| s.compile_time()).max().unwrap_or(0);
        }
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.saturating_sub(start),
            _ => 0,
        }
    }
}
