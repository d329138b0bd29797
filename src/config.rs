//! Configuration discovery and effective settings resolution.
//!
//! The CLI reads `clarify.toml|yaml|yml` from the repository root (or the
//! closest ancestor) and merges it with CLI flags. Defaults:
//! - `logLevel`: `INFO`
//! - `clearConsole`: true
//! - `[success].messages|notes`: empty
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::reporter::LogLevel;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Extra success-report lines under `[success]`.
pub struct SuccessCfg {
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `clarify.toml|yaml`.
pub struct ClarifyConfig {
    #[serde(rename = "logLevel")]
    pub log_level: Option<String>,
    #[serde(rename = "clearConsole")]
    pub clear_console: Option<bool>,
    #[serde(default)]
    pub success: Option<SuccessCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub log_level: LogLevel,
    pub clear_console: bool,
    pub success_messages: Vec<String>,
    pub success_notes: Vec<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `clarify.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("clarify.toml").exists()
            || cur.join("clarify.yaml").exists()
            || cur.join("clarify.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ClarifyConfig` from `clarify.toml` or `clarify.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<ClarifyConfig> {
    let toml_path = root.join("clarify.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: ClarifyConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["clarify.yaml", "clarify.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: ClarifyConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_log_level: Option<&str>,
    cli_clear: Option<bool>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or(cfg.log_level)
        .map(|s| LogLevel::parse(&s))
        .unwrap_or_default();

    let clear_console = cli_clear.or(cfg.clear_console).unwrap_or(true);

    let success = cfg.success.unwrap_or_default();
    Effective {
        repo_root,
        log_level,
        clear_console,
        success_messages: success.messages,
        success_notes: success.notes,
    }
}
