//! Formatter chain: normalized errors to printable chunks.
//!
//! Each formatter claims the errors it knows how to render (by `kind`);
//! the chain hands every error to at most one formatter, in chain order,
//! and renders whatever is left over with a raw-message fallback. Nothing
//! is ever silently dropped. Formatting is pure: no printing here.

use crate::models::{Chunk, NormalizedError, Severity};

/// A rule rendering normalized errors of the kinds it recognizes.
pub trait Format {
    /// Whether this formatter renders the given error.
    fn claims(&self, err: &NormalizedError) -> bool;
    /// Render the claimed errors. Called only with a non-empty slice.
    fn render(&self, errors: &[&NormalizedError], severity: Severity) -> Vec<Chunk>;
}

/// Run the chain: concatenated non-empty outputs in chain order, then the
/// fallback chunks for anything unclaimed.
pub fn format_all(
    errors: &[NormalizedError],
    formatters: &[Box<dyn Format>],
    severity: Severity,
) -> Vec<Chunk> {
    let mut remaining: Vec<&NormalizedError> = errors.iter().collect();
    let mut chunks: Vec<Chunk> = Vec::new();
    for f in formatters {
        let (claimed, rest): (Vec<_>, Vec<_>) =
            remaining.iter().copied().partition(|e| f.claims(e));
        remaining = rest;
        if !claimed.is_empty() {
            chunks.extend(f.render(&claimed, severity));
        }
    }
    for err in remaining {
        chunks.push(fallback_chunk(err));
    }
    chunks
}

/// Default rendering: the message as-is, one blank separator line.
fn fallback_chunk(err: &NormalizedError) -> Chunk {
    let mut lines: Vec<String> = err.message.lines().map(str::to_string).collect();
    if lines.is_empty() {
        // Malformed raw error carrying no message at all.
        lines.push(String::new());
    }
    lines.push(String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KindFormatter {
        kind: &'static str,
        header: &'static str,
    }

    impl Format for KindFormatter {
        fn claims(&self, err: &NormalizedError) -> bool {
            err.kind == self.kind
        }

        fn render(&self, errors: &[&NormalizedError], _severity: Severity) -> Vec<Chunk> {
            let mut lines = vec![self.header.to_string()];
            lines.extend(errors.iter().map(|e| e.message.clone()));
            vec![lines]
        }
    }

    fn err(kind: &str, msg: &str) -> NormalizedError {
        NormalizedError {
            kind: kind.to_string(),
            severity: 0,
            message: msg.to_string(),
            module: None,
        }
    }

    #[test]
    fn test_chunks_follow_chain_order() {
        let formatters: Vec<Box<dyn Format>> = vec![
            Box::new(KindFormatter {
                kind: "a",
                header: "A:",
            }),
            Box::new(KindFormatter {
                kind: "b",
                header: "B:",
            }),
        ];
        // Input order is b-first, but the chain renders a's chunk first.
        let errors = vec![err("b", "b1"), err("a", "a1")];
        let chunks = format_all(&errors, &formatters, Severity::Error);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0][0], "A:");
        assert_eq!(chunks[1][0], "B:");
    }

    #[test]
    fn test_unrecognized_kind_falls_back_to_raw_message() {
        let formatters: Vec<Box<dyn Format>> = vec![Box::new(KindFormatter {
            kind: "a",
            header: "A:",
        })];
        let errors = vec![err("mystery", "unexplained failure")];
        let chunks = format_all(&errors, &formatters, Severity::Error);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0][0], "unexplained failure");
    }

    #[test]
    fn test_error_without_message_still_appears() {
        let chunks = format_all(&[err("mystery", "")], &[], Severity::Warning);
        assert_eq!(chunks.len(), 1);
        assert!(!chunks[0].is_empty());
    }

    #[test]
    fn test_each_error_rendered_exactly_once() {
        // Two formatters both claim kind "a"; only the first gets it.
        let formatters: Vec<Box<dyn Format>> = vec![
            Box::new(KindFormatter {
                kind: "a",
                header: "first:",
            }),
            Box::new(KindFormatter {
                kind: "a",
                header: "second:",
            }),
        ];
        let chunks = format_all(&[err("a", "msg")], &formatters, Severity::Error);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0][0], "first:");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let formatters: Vec<Box<dyn Format>> = vec![Box::new(KindFormatter {
            kind: "a",
            header: "A:",
        })];
        let errors = vec![err("a", "one"), err("other", "two")];
        let first = format_all(&errors, &formatters, Severity::Warning);
        let second = format_all(&errors, &formatters, Severity::Warning);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(format_all(&[], &[], Severity::Error).is_empty());
    }
}
