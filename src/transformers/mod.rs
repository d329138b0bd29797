//! Built-in transformers, in chain order.
//!
//! Order matters: syntax errors outrank unresolved modules, which outrank
//! lint findings. Caller-supplied transformers join the chain after (or,
//! by configuration, before) this set.

mod lint;
mod module_not_found;
mod syntax;

pub use lint::LintTransform;
pub use module_not_found::ModuleNotFoundTransform;
pub use syntax::SyntaxTransform;

use crate::transform::Transform;

pub const KIND_SYNTAX: &str = "syntax-error";
pub const KIND_MODULE_NOT_FOUND: &str = "module-not-found";
pub const KIND_LINT: &str = "lint-error";

pub const SEVERITY_SYNTAX: u32 = 1000;
pub const SEVERITY_MODULE_NOT_FOUND: u32 = 900;
pub const SEVERITY_LINT: u32 = 800;

/// The default transformer chain.
pub fn builtin_transformers() -> Vec<Box<dyn Transform>> {
    vec![
        Box::new(SyntaxTransform::new()),
        Box::new(ModuleNotFoundTransform::new()),
        Box::new(LintTransform::new()),
    ]
}
