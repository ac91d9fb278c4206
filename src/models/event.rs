//! Warning-event schema delivered by the host test harness.
//!
//! Events arrive either through the programmatic hooks or as JSON Lines
//! captured during a run (one object per line). Only the `category` and the
//! first entry of `args` matter to governance; `phase`, `test_id`, and
//! `location` are carried for diagnostics and are all optional.

use serde::Deserialize;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Warning class reported by the host. Only `deprecation` is governed.
pub enum WarningCategory {
    Deprecation,
    User,
    Runtime,
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Run phase during which the warning fired.
pub enum WarningPhase {
    Config,
    Collect,
    Runtest,
}

#[derive(Deserialize, Clone, Debug)]
/// Source location of the warning, when the host provides one.
pub struct WarningLocation {
    pub file: String,
    pub line: u32,
    #[serde(default)]
    pub function: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
/// One observed warning. `args[0]` is the warning identifier; events
/// without it are not representable and are ignored by the hooks.
pub struct WarningEvent {
    pub category: WarningCategory,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub phase: Option<WarningPhase>,
    #[serde(default)]
    pub test_id: Option<String>,
    #[serde(default)]
    pub location: Option<WarningLocation>,
}

impl WarningEvent {
    /// The identifier this event aggregates under, when present.
    pub fn identifier(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_event_line() {
        let line = r#"{"category":"deprecation","args":["old_api","extra"],"phase":"runtest","test_id":"tests/api.rs::smoke","location":{"file":"src/lib.rs","line":42,"function":"call_old"}}"#;
        let ev: WarningEvent = serde_json::from_str(line).unwrap();
        assert_eq!(ev.category, WarningCategory::Deprecation);
        assert_eq!(ev.identifier(), Some("old_api"));
        assert_eq!(ev.phase, Some(WarningPhase::Runtest));
        assert_eq!(ev.location.unwrap().line, 42);
    }

    #[test]
    fn test_decode_minimal_event_line() {
        let ev: WarningEvent =
            serde_json::from_str(r#"{"category":"deprecation","args":["x"]}"#).unwrap();
        assert_eq!(ev.identifier(), Some("x"));
        assert!(ev.phase.is_none());
        assert!(ev.test_id.is_none());
        assert!(ev.location.is_none());
    }

    #[test]
    fn test_unknown_category_falls_back_to_other() {
        let ev: WarningEvent =
            serde_json::from_str(r#"{"category":"future","args":["x"]}"#).unwrap();
        assert_eq!(ev.category, WarningCategory::Other);
    }

    #[test]
    fn test_missing_args_yields_no_identifier() {
        let ev: WarningEvent = serde_json::from_str(r#"{"category":"deprecation"}"#).unwrap();
        assert_eq!(ev.identifier(), None);
    }
}
