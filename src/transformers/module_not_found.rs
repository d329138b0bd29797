//! Recognizer for unresolved module requests.

use crate::models::{NormalizedError, RawError};
use crate::transform::Transform;
use crate::transformers::{KIND_MODULE_NOT_FOUND, SEVERITY_MODULE_NOT_FOUND};
use regex::Regex;

pub struct ModuleNotFoundTransform {
    resolve: Regex,
}

impl ModuleNotFoundTransform {
    pub fn new() -> Self {
        ModuleNotFoundTransform {
            resolve: Regex::new(r"Can't resolve '([^']+)'").expect("resolve pattern"),
        }
    }
}

impl Default for ModuleNotFoundTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for ModuleNotFoundTransform {
    fn transform(&self, raw: &RawError) -> Option<NormalizedError> {
        if !raw.message.starts_with("Module not found") {
            return None;
        }
        let request = self
            .resolve
            .captures(&raw.message)
            .map(|c| c[1].to_string());
        let message = match &request {
            Some(req) => format!("Module not found: {req}"),
            None => raw.message.clone(),
        };
        Some(NormalizedError {
            kind: KIND_MODULE_NOT_FOUND.to_string(),
            severity: SEVERITY_MODULE_NOT_FOUND,
            message,
            // The unresolved request, not the module the error occurred in,
            // is what the formatter groups by.
            module: request.or_else(|| raw.module.clone()),
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
    fn test_captures_unresolved_request() {
        let msg = "Module not found: Error: Can't resolve 'left-pad' in '/app/src'";
        let out = ModuleNotFoundTransform::new().transform(&raw(msg)).unwrap();
        assert_eq!(out.kind, KIND_MODULE_NOT_FOUND);
        assert_eq!(out.severity, SEVERITY_MODULE_NOT_FOUND);
        assert_eq!(out.message, "Module not found: left-pad");
        assert_eq!(out.module.as_deref(), Some("left-pad"));
    }

    #[test]
    fn test_keeps_message_when_request_not_parseable() {
        let msg = "Module not found: something unusual";
        let out = ModuleNotFoundTransform::new().transform(&raw(msg)).unwrap();
        assert_eq!(out.message, msg);
    }

    #[test]
    fn test_ignores_other_errors() {
        assert!(ModuleNotFoundTransform::new()
            .transform(&raw("SyntaxError: nope"))
            .is_none());
    }
}
