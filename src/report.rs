//! Report formatting: verdicts into structured, presentation-neutral lines.
//!
//! The formatter decides line text and severity; colorization and writing
//! belong to `output`. Unmatched identifiers are omitted entirely. When the
//! session recorded nothing at all, a single guidance line points the user
//! at rule configuration; recorded-but-unmatched identifiers do not trigger
//! that line.

use crate::models::{Evaluation, Outcome, Verdict};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Line severity, ordered fail > report > pass.
pub enum LineKind {
    Error,
    Info,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One rendered report row.
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

/// Summary section title reflecting the session verdict.
pub fn title(failed: bool) -> String {
    if failed {
        "deprecations report summary (failed)".to_string()
    } else {
        "deprecations report summary (passed)".to_string()
    }
}

/// Render report rows in verdict order.
pub fn format(eval: &Evaluation) -> Vec<ReportLine> {
    if eval.verdicts.is_empty() {
        return vec![ReportLine {
            kind: LineKind::Info,
            text: "no deprecation warnings were recorded; add rules under [deprecations] to govern them"
                .to_string(),
        }];
    }
    eval.verdicts.iter().filter_map(format_verdict).collect()
}

fn format_verdict(v: &Verdict) -> Option<ReportLine> {
    match v.outcome {
        Outcome::Fail => {
            let allowed = v.allowed.unwrap_or(0);
            Some(ReportLine {
                kind: LineKind::Error,
                text: format!(
                    "{}: {} occurrences, allowed {} (exceeded by {})",
                    v.identifier,
                    v.count,
                    allowed,
                    v.count - allowed
                ),
            })
        }
        Outcome::Pass => Some(ReportLine {
            kind: LineKind::Success,
            text: format!(
                "{}: {} occurrences, allowed {}",
                v.identifier,
                v.count,
                v.allowed.unwrap_or(0)
            ),
        }),
        Outcome::Report => Some(ReportLine {
            kind: LineKind::Info,
            text: format!("{}: {} occurrences", v.identifier, v.count),
        }),
        Outcome::Unmatched => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::models::policy::PolicyTable;

    fn eval(rules: &[&str], counts: &[(&str, u64)]) -> Evaluation {
        let table = PolicyTable::from_specs(rules).unwrap();
        let counts: Vec<(String, u64)> =
            counts.iter().map(|(s, n)| (s.to_string(), *n)).collect();
        engine::evaluate(&counts, &table)
    }

    #[test]
    fn test_title_reflects_session_verdict() {
        assert_eq!(title(true), "deprecations report summary (failed)");
        assert_eq!(title(false), "deprecations report summary (passed)");
    }

    #[test]
    fn test_fail_line_names_exceedance() {
        let lines = format(&eval(&["enforce:^old_api$:3"], &[("old_api", 5)]));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, LineKind::Error);
        assert_eq!(
            lines[0].text,
            "old_api: 5 occurrences, allowed 3 (exceeded by 2)"
        );
    }

    #[test]
    fn test_pass_and_report_lines() {
        let e = eval(
            &["enforce:^a$:3", "observe:^b$:0"],
            &[("a", 2), ("b", 7)],
        );
        let lines = format(&e);
        assert_eq!(lines[0].kind, LineKind::Success);
        assert_eq!(lines[0].text, "a: 2 occurrences, allowed 3");
        assert_eq!(lines[1].kind, LineKind::Info);
        assert_eq!(lines[1].text, "b: 7 occurrences");
    }

    #[test]
    fn test_unmatched_rows_are_omitted() {
        let lines = format(&eval(&["enforce:^a$:0"], &[("a", 1), ("stray", 9)]));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].text.starts_with("a:"));
    }

    #[test]
    fn test_guidance_line_only_when_nothing_recorded() {
        let empty = format(&eval(&[], &[]));
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].kind, LineKind::Info);
        assert!(empty[0].text.contains("[deprecations]"));
        // Recorded-but-unmatched is a different situation: no guidance line,
        // and no rows either.
        let unmatched = format(&eval(&[], &[("ModuleC", 1)]));
        assert!(unmatched.is_empty());
    }
}
