//! Built-in formatters, in chain order.
//!
//! Whatever none of these claims is rendered by the chain's raw-message
//! fallback in `format::format_all`.

mod lint;
mod module_not_found;

pub use lint::LintFormatter;
pub use module_not_found::ModuleNotFoundFormatter;

use crate::format::Format;

/// The default formatter chain.
pub fn builtin_formatters() -> Vec<Box<dyn Format>> {
    vec![
        Box::new(ModuleNotFoundFormatter),
        Box::new(LintFormatter),
    ]
}
