//! Transformer chain: raw diagnostics to normalized ones.
//!
//! Transformers run in configured order; the first one returning `Some`
//! wins for a given raw error. Errors nothing recognizes pass through with
//! the `default` kind at the lowest severity, message untouched. The chain
//! never drops or duplicates: exactly one normalized error per raw error.

use crate::models::{NormalizedError, RawError};

/// A rule rewriting one noisy raw-error shape into a concise normalized
/// error. Returning `None` means "not mine, ask the next one".
pub trait Transform {
    fn transform(&self, raw: &RawError) -> Option<NormalizedError>;
}

/// Where caller-supplied chain entries go relative to the built-in set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChainPosition {
    /// After the built-ins: additions extend the chain (default).
    #[default]
    Append,
    /// Before the built-ins: additions can override built-in recognition.
    Prepend,
}

/// Run the chain over every raw error, first match wins per error.
pub fn transform_all(
    errors: &[RawError],
    transformers: &[Box<dyn Transform>],
) -> Vec<NormalizedError> {
    errors
        .iter()
        .map(|raw| {
            transformers
                .iter()
                .find_map(|t| t.transform(raw))
                .unwrap_or_else(|| NormalizedError::passthrough(raw))
        })
        .collect()
}

/// Keep only the errors of the most severe class present, preserving
/// relative order. A fatal parse error alongside its cascading follow-ups
/// should be reported alone.
pub fn max_severity_errors(errors: Vec<NormalizedError>) -> Vec<NormalizedError> {
    let max = errors.iter().map(|e| e.severity).max().unwrap_or(0);
    errors.into_iter().filter(|e| e.severity == max).collect()
}
