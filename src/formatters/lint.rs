//! Renderer for lint findings, with hint lines on how to silence rules.

use crate::format::Format;
use crate::models::{Chunk, NormalizedError, Severity};
use crate::transformers::KIND_LINT;

pub struct LintFormatter;

const HINTS: [&str; 3] = [
    "You may use special comments to disable some warnings.",
    "Use // eslint-disable-next-line to ignore the next line.",
    "Use /* eslint-disable */ to ignore all warnings in a file.",
];

impl Format for LintFormatter {
    fn claims(&self, err: &NormalizedError) -> bool {
        err.kind == KIND_LINT
    }

    fn render(&self, errors: &[&NormalizedError], _severity: Severity) -> Vec<Chunk> {
        let mut lines: Vec<String> = Vec::new();
        for err in errors {
            lines.extend(err.message.lines().map(str::to_string));
            lines.push(String::new());
        }
        lines.extend(HINTS.iter().map(|h| h.to_string()));
        lines.push(String::new());
        vec![lines]
    }
}
