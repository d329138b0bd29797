//! Renderer for unresolved module requests.
//!
//! Groups all missing requests of a cycle into one chunk with an install
//! hint, instead of repeating the resolver's stack per occurrence.

use crate::format::Format;
use crate::models::{Chunk, NormalizedError, Severity};
use crate::transformers::KIND_MODULE_NOT_FOUND;
use crate::utils::dedupe_by;

pub struct ModuleNotFoundFormatter;

impl Format for ModuleNotFoundFormatter {
    fn claims(&self, err: &NormalizedError) -> bool {
        err.kind == KIND_MODULE_NOT_FOUND
    }

    fn render(&self, errors: &[&NormalizedError], _severity: Severity) -> Vec<Chunk> {
        let requests: Vec<String> = dedupe_by(
            errors
                .iter()
                .map(|e| e.module.clone().unwrap_or_else(|| e.message.clone()))
                .collect(),
            |r: &String| r.clone(),
        );
        let mut lines: Vec<String> = Vec::new();
        if requests.len() == 1 {
            lines.push("This dependency was not found:".to_string());
        } else {
            lines.push("These dependencies were not found:".to_string());
        }
        lines.push(String::new());
        for req in &requests {
            lines.push(format!("* {req}"));
        }
        lines.push(String::new());
        lines.push("To install them, you can run:".to_string());
        lines.push(format!("  npm install --save {}", requests.join(" ")));
        lines.push(String::new());
        vec![lines]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found(request: &str) -> NormalizedError {
        NormalizedError {
            kind: KIND_MODULE_NOT_FOUND.to_string(),
            severity: 900,
            message: format!("Module not found: {request}"),
            module: Some(request.to_string()),
        }
    }

    #[test]
    fn test_singular_header_and_install_hint() {
        let err = not_found("left-pad");
        let chunks = ModuleNotFoundFormatter.render(&[&err], Severity::Error);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0][0], "This dependency was not found:");
        assert!(chunks[0].contains(&"* left-pad".to_string()));
        assert!(chunks[0]
            .iter()
            .any(|l| l.contains("npm install --save left-pad")));
    }

    #[test]
    fn test_plural_header_and_grouped_requests() {
        let a = not_found("a");
        let b = not_found("b");
        let b2 = not_found("b");
        let chunks = ModuleNotFoundFormatter.render(&[&a, &b, &b2], Severity::Error);
        assert_eq!(chunks[0][0], "These dependencies were not found:");
        // Same request from two places is listed once.
        let stars = chunks[0].iter().filter(|l| l.starts_with("* ")).count();
        assert_eq!(stars, 2);
    }

    #[test]
    fn test_claims_only_its_kind() {
        let other = NormalizedError {
            kind: "default".to_string(),
            severity: 0,
            message: "x".to_string(),
            module: None,
        };
        assert!(!ModuleNotFoundFormatter.claims(&other));
        assert!(ModuleNotFoundFormatter.claims(&not_found("a")));
    }
}
