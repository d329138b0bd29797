//! Recognizer for linter output forwarded as build diagnostics.
//!
//! Lint loaders emit a table of findings per file:
//!
//! ```text
//! /app/src/a.js
//!   3:1   error  'x' is defined but never used  no-unused-vars
//!   10:5  warning  Unexpected console statement  no-console
//! ```

use crate::models::{NormalizedError, RawError};
use crate::transform::Transform;
use crate::transformers::{KIND_LINT, SEVERITY_LINT};
use regex::Regex;

pub struct LintTransform {
    row: Regex,
}

impl LintTransform {
    pub fn new() -> Self {
        LintTransform {
            row: Regex::new(r"(?m)^\s*\d+:\d+\s+(error|warning)\s").expect("lint row pattern"),
        }
    }
}

impl Default for LintTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for LintTransform {
    fn transform(&self, raw: &RawError) -> Option<NormalizedError> {
        if !self.row.is_match(&raw.message) {
            return None;
        }
        Some(NormalizedError {
            kind: KIND_LINT.to_string(),
            severity: SEVERITY_LINT,
            message: raw.message.trim_end().to_string(),
            module: raw.module.clone(),
        })
    }
}
