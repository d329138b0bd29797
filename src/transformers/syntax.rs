//! Recognizer for syntax errors surfaced through loader output.
//!
//! Loader failures bury the useful `SyntaxError: ...` line under a
//! "Module build failed" preamble and a stack trace. This transformer keeps
//! the lines from the first `SyntaxError` up to the stack frames and drops
//! the rest.

use crate::models::{NormalizedError, RawError};
use crate::transform::Transform;
use crate::transformers::{KIND_SYNTAX, SEVERITY_SYNTAX};
use regex::Regex;

pub struct SyntaxTransform {
    frame: Regex,
}

impl SyntaxTransform {
    pub fn new() -> Self {
        SyntaxTransform {
            // Stack frame lines: "    at fn (file:1:2)"
            frame: Regex::new(r"^\s+at\s").expect("syntax frame pattern"),
        }
    }

    fn is_syntax(&self, message: &str) -> bool {
        message.contains("SyntaxError:") || message.contains("Module parse failed")
    }
}

impl Default for SyntaxTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for SyntaxTransform {
    fn transform(&self, raw: &RawError) -> Option<NormalizedError> {
        if !self.is_syntax(&raw.message) {
            return None;
        }
        let mut lines: Vec<&str> = Vec::new();
        let mut started = false;
        for line in raw.message.lines() {
            if !started {
                if line.contains("SyntaxError:") || line.contains("Module parse failed") {
                    started = true;
                } else {
                    continue;
                }
            }
            if self.frame.is_match(line) {
                break;
            }
            lines.push(line);
        }
        let message = if lines.is_empty() {
            raw.message.clone()
        } else {
            lines.join("\n")
        };
        Some(NormalizedError {
            kind: KIND_SYNTAX.to_string(),
            severity: SEVERITY_SYNTAX,
            message,
            module: raw.module.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(msg: &str) -> RawError {
        RawError {
            message: msg.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_strips_preamble_and_stack() {
        let msg = "Module build failed: Error in ./src/a.js\n\
                   SyntaxError: Unexpected token (3:7)\n\
                   ExtraContext line\n\
                   \u{20}\u{20}\u{20}\u{20}at Parser.raise (parser.js:1:1)\n\
                   \u{20}\u{20}\u{20}\u{20}at Parser.next (parser.js:2:2)";
        let out = SyntaxTransform::new().transform(&raw(msg)).unwrap();
        assert_eq!(out.kind, KIND_SYNTAX);
        assert_eq!(out.severity, SEVERITY_SYNTAX);
        assert_eq!(
            out.message,
            "SyntaxError: Unexpected token (3:7)\nExtraContext line"
        );
    }

    #[test]
    fn test_module_parse_failed_is_recognized() {
        let out = SyntaxTransform::new()
            .transform(&raw("Module parse failed: Unexpected character '#'"))
            .unwrap();
        assert_eq!(out.kind, KIND_SYNTAX);
    }

    #[test]
    fn test_ignores_unrelated_messages() {
        assert!(SyntaxTransform::new().transform(&raw("plain error")).is_none());
    }
}
