//! Output rendering for check and rules commands.
//!
//! Supports `human` (default) and `json` outputs. Human output styles
//! report rows by severity (red for failures, green for passes, yellow for
//! observe-only rows) and the title by session verdict. The JSON form is
//! composed by pure functions so its shape can be tested directly.

use crate::models::policy::{PolicyTable, RuleAction};
use crate::models::Evaluation;
use crate::report::{self, LineKind};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the end-of-run summary in the requested format.
pub fn print_check(eval: &Evaluation, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_check_json(eval)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            let title = report::title(eval.failed);
            if color {
                if eval.failed {
                    println!("{}", title.red().bold());
                } else {
                    println!("{}", title.green().bold());
                }
            } else {
                println!("{}", title);
            }
            for line in report::format(eval) {
                let (icon, text) = match line.kind {
                    LineKind::Error => {
                        if color {
                            ("✖".red().to_string(), line.text.red().to_string())
                        } else {
                            ("✖".to_string(), line.text)
                        }
                    }
                    LineKind::Success => {
                        if color {
                            ("✔".green().to_string(), line.text.green().to_string())
                        } else {
                            ("✔".to_string(), line.text)
                        }
                    }
                    LineKind::Info => {
                        if color {
                            ("◆".yellow().to_string(), line.text.yellow().to_string())
                        } else {
                            ("◆".to_string(), line.text)
                        }
                    }
                };
                println!("{} {}", icon, text);
            }
        }
    }
}

/// Print the parsed policy table; validates configuration by construction.
pub fn print_rules(table: &PolicyTable, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_rules_json(table)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            if table.is_empty() {
                println!("no rules configured");
                return;
            }
            for rule in table.rules() {
                let action = match rule.action {
                    RuleAction::Enforce => {
                        if color {
                            "enforce".red().bold().to_string()
                        } else {
                            "enforce".to_string()
                        }
                    }
                    RuleAction::Observe => {
                        if color {
                            "observe".yellow().bold().to_string()
                        } else {
                            "observe".to_string()
                        }
                    }
                };
                let allowed = match rule.allowed {
                    Some(n) => n.to_string(),
                    None => "0 (blank)".to_string(),
                };
                println!("{} pattern={} allowed={}", action, rule.pattern, allowed);
            }
        }
    }
}

/// Compose check JSON object (pure) for testing purposes.
pub fn compose_check_json(eval: &Evaluation) -> JsonVal {
    json!({
        "title": report::title(eval.failed),
        "failed": eval.failed,
        "verdicts": serde_json::to_value(&eval.verdicts).unwrap(),
    })
}

/// Compose rules JSON object (pure) for testing purposes.
pub fn compose_rules_json(table: &PolicyTable) -> JsonVal {
    let rules: Vec<_> = table
        .rules()
        .iter()
        .map(|r| {
            json!({
                "action": r.action,
                "pattern": r.pattern,
                "allowed": r.allowed,
            })
        })
        .collect();
    json!({ "rules": rules })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::models::policy::PolicyTable;

    #[test]
    fn test_compose_check_json_shape() {
        let table = PolicyTable::from_specs(&["enforce:^a$:1", "observe:^b$:0"]).unwrap();
        let counts = vec![("a".to_string(), 3), ("b".to_string(), 2)];
        let eval = engine::evaluate(&counts, &table);
        let out = compose_check_json(&eval);
        assert_eq!(out["failed"], true);
        assert_eq!(out["title"], "deprecations report summary (failed)");
        assert_eq!(out["verdicts"][0]["identifier"], "a");
        assert_eq!(out["verdicts"][0]["outcome"], "fail");
        assert_eq!(out["verdicts"][0]["allowed"], 1);
        assert_eq!(out["verdicts"][1]["outcome"], "report");
        // observe verdicts carry no threshold
        assert!(out["verdicts"][1].get("allowed").is_none());
    }

    #[test]
    fn test_compose_rules_json_shape() {
        let table = PolicyTable::from_specs(&["enforce:^x$:", "observe:y:9"]).unwrap();
        let out = compose_rules_json(&table);
        assert_eq!(out["rules"][0]["action"], "enforce");
        assert_eq!(out["rules"][0]["allowed"], JsonVal::Null);
        assert_eq!(out["rules"][1]["pattern"], "y");
        assert_eq!(out["rules"][1]["allowed"], 9);
    }
}
