//! Configuration discovery and effective settings resolution.
//!
//! Deprector reads `deprector.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `output`: `human`
//! - `events`: none (read the event stream from stdin)
//! - `[deprecations].enabled`: false (the feature is opt-in; when disabled
//!   the engine is never constructed and the run is untouched)
//! - `[deprecations].rules`: empty
//!
//! Overrides precedence: CLI > config file > defaults. Rule strings are
//! carried verbatim here; parsing them (and rejecting malformed ones) is
//! the policy table's job at setup time.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Governance section under `[deprecations]`.
pub struct DeprecationsCfg {
    pub enabled: Option<bool>,
    /// Ordered rule strings of the form `action:pattern:allowed`.
    #[serde(default)]
    pub rules: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `deprector.toml|yaml`.
pub struct DeprectorConfig {
    pub output: Option<String>,
    /// Path to a recorded warning-event JSONL file, relative to the root.
    pub events: Option<String>,
    #[serde(default)]
    pub deprecations: Option<DeprecationsCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub events: Option<String>,
    pub enabled: bool,
    pub rules: Vec<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `deprector.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("deprector.toml").exists()
            || cur.join("deprector.yaml").exists()
            || cur.join("deprector.yml").exists()
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

/// Load `DeprectorConfig` from `deprector.toml` or `deprector.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<DeprectorConfig> {
    let toml_path = root.join("deprector.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: DeprectorConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["deprector.yaml", "deprector.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: DeprectorConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_events: Option<&str>,
    cli_output: Option<&str>,
    cli_enabled: Option<bool>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let events = cli_events.map(|s| s.to_string()).or(cfg.events);

    let enabled = cli_enabled
        .or_else(|| cfg.deprecations.as_ref().and_then(|d| d.enabled))
        .unwrap_or(false);

    let rules = cfg.deprecations.map(|d| d.rules).unwrap_or_default();

    Effective {
        repo_root,
        output,
        events,
        enabled,
        rules,
    }
}
