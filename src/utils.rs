//! Supporting helpers: order-preserving dedup and colored stderr prefixes.

use owo_colors::OwoColorize;
use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

/// Drop every item whose key was already seen, keeping first-seen order.
///
/// Parallel sub-builds sharing a module graph report the same underlying
/// error once per sub-build; keying by message collapses those repeats.
pub fn dedupe_by<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen: HashSet<K> = HashSet::new();
    items.into_iter().filter(|it| seen.insert(key(it))).collect()
}

/// Resolve a user-supplied input path against the invocation directory.
///
/// Relative paths mean "relative to where the command ran", not relative
/// to the detected repo root; absolute paths pass through untouched.
pub fn resolve_cli_path(cwd: &Path, arg: &str) -> PathBuf {
    let p = PathBuf::from(arg);
    if p.is_absolute() {
        p
    } else {
        cwd.join(p)
    }
}

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for CLI-level error notices on stderr.
pub fn error_prefix() -> String {
    if use_colors() {
        "⟦error⟧".red().bold().to_string()
    } else {
        "⟦error⟧".to_string()
    }
}

/// Prefix for CLI-level notes on stderr.
pub fn note_prefix() -> String {
    if use_colors() {
        "⟦note⟧".cyan().bold().to_string()
    } else {
        "⟦note⟧".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_preserves_first_seen_order() {
        let items = vec!["a", "b", "a", "c", "b", "a"];
        assert_eq!(dedupe_by(items, |s| s.to_string()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dedupe_length_drops_exactly_duplicates() {
        let items = vec![1, 2, 2, 3, 1];
        let out = dedupe_by(items, |n| *n);
        assert_eq!(out.len(), 3);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_dedupe_empty() {
        let items: Vec<String> = Vec::new();
        assert!(dedupe_by(items, |s| s.clone()).is_empty());
    }

    #[test]
    fn test_resolve_cli_path_relative_to_invocation_dir() {
        let p = resolve_cli_path(Path::new("/work/sub"), "out/stats.json");
        assert_eq!(p, PathBuf::from("/work/sub/out/stats.json"));
    }

    #[test]
    fn test_resolve_cli_path_absolute_passthrough() {
        let p = resolve_cli_path(Path::new("/work/sub"), "/tmp/stats.json");
        assert_eq!(p, PathBuf::from("/tmp/stats.json"));
    }
}
