//! Policy schema: governance rules and the ordered table that resolves them.
//!
//! Key components:
//! - `RuleAction`: `enforce` rules can fail the session, `observe` rules are
//!   report-only.
//! - `PolicyRule`: one parsed rule with its compiled matcher and allowed
//!   occurrence threshold (`None` means zero tolerance).
//! - `PolicyTable`: rules in configured order; `resolve` returns the first
//!   rule whose pattern matches the identifier.
//!
//! Rule strings have the form `action:pattern:allowed`. The action ends at
//! the first `:` and the allowed count starts after the last `:`, so the
//! pattern itself may contain colons. A blank allowed count means zero
//! tolerance. Matching is a regex *search* over the identifier (a rule
//! matches when its pattern occurs anywhere in the identifier), case
//! sensitive, with multi-line and dot-all enabled so patterns can span
//! constructed multi-line identifiers. This is deliberately not a full
//! match; changing it would silently change which warnings an existing
//! configuration governs.

use crate::errors::ConfigError;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// What a matching rule does with the identifier's occurrence count.
pub enum RuleAction {
    /// Count above the allowed threshold fails the session.
    Enforce,
    /// Always reported, never fails the session.
    Observe,
}

/// One governance rule from the configured rule list.
pub struct PolicyRule {
    pub action: RuleAction,
    /// Pattern source text, kept for display and JSON output.
    pub pattern: String,
    /// Allowed occurrences for `enforce` rules; `None` is zero tolerance.
    pub allowed: Option<u64>,
    matcher: Regex,
}

impl PolicyRule {
    /// Effective threshold used by verdict evaluation.
    pub fn effective_allowed(&self) -> u64 {
        self.allowed.unwrap_or(0)
    }

    /// Whether this rule governs the given identifier (search semantics).
    pub fn matches(&self, identifier: &str) -> bool {
        self.matcher.is_match(identifier)
    }
}

/// Ordered rule collection; first match wins.
pub struct PolicyTable {
    rules: Vec<PolicyRule>,
}

impl PolicyTable {
    /// Build a table from raw `action:pattern:allowed` strings, preserving
    /// order. Any malformed entry aborts construction.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, ConfigError> {
        let mut rules = Vec::with_capacity(specs.len());
        for spec in specs {
            rules.push(parse_rule(spec.as_ref())?);
        }
        Ok(Self { rules })
    }

    /// First rule whose pattern matches `identifier`, or `None` when the
    /// identifier is untracked. Untracked is not an error.
    pub fn resolve(&self, identifier: &str) -> Option<&PolicyRule> {
        self.rules.iter().find(|r| r.matches(identifier))
    }

    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Parse one `action:pattern:allowed` rule string.
fn parse_rule(raw: &str) -> Result<PolicyRule, ConfigError> {
    let (action_str, rest) = raw.split_once(':').ok_or_else(|| ConfigError::MalformedRule {
        raw: raw.to_string(),
        reason: "expected 'action:pattern:allowed'",
    })?;
    let (pattern_str, allowed_str) =
        rest.rsplit_once(':').ok_or_else(|| ConfigError::MalformedRule {
            raw: raw.to_string(),
            reason: "missing allowed-count field (may be blank, but the ':' must be present)",
        })?;
    if action_str.is_empty() {
        return Err(ConfigError::MalformedRule {
            raw: raw.to_string(),
            reason: "missing action field",
        });
    }
    if pattern_str.is_empty() {
        return Err(ConfigError::MalformedRule {
            raw: raw.to_string(),
            reason: "missing pattern field",
        });
    }
    let action = match action_str {
        "enforce" => RuleAction::Enforce,
        "observe" => RuleAction::Observe,
        other => {
            return Err(ConfigError::UnknownAction {
                raw: raw.to_string(),
                action: other.to_string(),
            })
        }
    };
    let allowed = if allowed_str.is_empty() {
        None
    } else {
        let n = allowed_str
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidAllowedCount {
                raw: raw.to_string(),
                value: allowed_str.to_string(),
            })?;
        Some(n)
    };
    let matcher = RegexBuilder::new(pattern_str)
        .multi_line(true)
        .dot_matches_new_line(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            raw: raw.to_string(),
            source: e,
        })?;
    Ok(PolicyRule {
        action,
        pattern: pattern_str.to_string(),
        allowed,
        matcher,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enforce_with_count() {
        let table = PolicyTable::from_specs(&["enforce:^ModuleA$:3"]).unwrap();
        let rule = &table.rules()[0];
        assert_eq!(rule.action, RuleAction::Enforce);
        assert_eq!(rule.pattern, "^ModuleA$");
        assert_eq!(rule.allowed, Some(3));
        assert_eq!(rule.effective_allowed(), 3);
    }

    #[test]
    fn test_parse_blank_allowed_is_zero_tolerance() {
        let table = PolicyTable::from_specs(&["enforce:^X$:"]).unwrap();
        let rule = &table.rules()[0];
        assert_eq!(rule.allowed, None);
        assert_eq!(rule.effective_allowed(), 0);
    }

    #[test]
    fn test_parse_pattern_may_contain_colons() {
        let table = PolicyTable::from_specs(&["observe:ns::legacy:5"]).unwrap();
        let rule = &table.rules()[0];
        assert_eq!(rule.pattern, "ns::legacy");
        assert_eq!(rule.allowed, Some(5));
        assert!(rule.matches("crate ns::legacy::thing"));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert!(matches!(
            PolicyTable::from_specs(&["enforce"]),
            Err(ConfigError::MalformedRule { .. })
        ));
        // Two fields only: the trailing allowed separator is required.
        assert!(matches!(
            PolicyTable::from_specs(&["enforce:^X$"]),
            Err(ConfigError::MalformedRule { .. })
        ));
        assert!(matches!(
            PolicyTable::from_specs(&[":^X$:3"]),
            Err(ConfigError::MalformedRule { .. })
        ));
        assert!(matches!(
            PolicyTable::from_specs(&["enforce::3"]),
            Err(ConfigError::MalformedRule { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_action_and_bad_count() {
        assert!(matches!(
            PolicyTable::from_specs(&["deny:^X$:3"]),
            Err(ConfigError::UnknownAction { .. })
        ));
        assert!(matches!(
            PolicyTable::from_specs(&["enforce:^X$:-1"]),
            Err(ConfigError::InvalidAllowedCount { .. })
        ));
        assert!(matches!(
            PolicyTable::from_specs(&["enforce:^X$:many"]),
            Err(ConfigError::InvalidAllowedCount { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_regex() {
        assert!(matches!(
            PolicyTable::from_specs(&["enforce:([unclosed:0"]),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_resolve_search_not_full_match() {
        let table = PolicyTable::from_specs(&["enforce:legacy:0"]).unwrap();
        // Substring-anywhere: the pattern occurring inside a longer
        // identifier still matches.
        assert!(table.resolve("some legacy api").is_some());
        assert!(table.resolve("legacy").is_some());
        assert!(table.resolve("modern api").is_none());
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let table = PolicyTable::from_specs(&["enforce:Legacy:0"]).unwrap();
        assert!(table.resolve("Legacy").is_some());
        assert!(table.resolve("legacy").is_none());
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let table =
            PolicyTable::from_specs(&["observe:^ModuleA$:0", "enforce:ModuleA:0"]).unwrap();
        let rule = table.resolve("ModuleA").unwrap();
        assert_eq!(rule.action, RuleAction::Observe);
    }

    #[test]
    fn test_resolve_spans_multiline_identifiers() {
        // dot-all lets '.' cross line breaks in constructed identifiers.
        let table = PolicyTable::from_specs(&["enforce:old.*api:0"]).unwrap();
        assert!(table.resolve("old\napi").is_some());
        // multi-line anchors bind per line.
        let anchored = PolicyTable::from_specs(&["enforce:^api$:0"]).unwrap();
        assert!(anchored.resolve("old\napi").is_some());
    }
}
