//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "deprector",
    version,
    about = "Deprecation-warning governance gate for test runs",
    long_about = "Deprector — aggregates deprecation warnings captured during a test run and gates the run on per-identifier thresholds.\n\nConfiguration precedence: CLI > deprector.toml > defaults.",
    after_help = "Examples:\n  deprector check --events target/warnings.jsonl --deprecations\n  your-test-runner | deprector check --deprecations\n  deprector rules --output json\n\nExit codes: 0 pass, 101 deprecation policy violated, 2 configuration error.",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for checking runs and inspecting policy.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current deprector version.")]
    Version,
    /// Replay a warning-event stream and gate on deprecation policy
    #[command(
        about = "Evaluate a warning-event stream",
        long_about = "Read warning events (JSON Lines) from --events or stdin, aggregate deprecation occurrences, evaluate them against [deprecations] rules, print the summary, and exit 101 when the policy is violated.",
        after_help = "Examples:\n  deprector check --events target/warnings.jsonl --deprecations\n  deprector check --output json < warnings.jsonl"
    )]
    Check {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Warning-event JSONL file (default: stdin)")]
        events: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(
            long,
            action = clap::ArgAction::SetTrue,
            help = "Enable deprecation governance (overrides [deprecations].enabled)"
        )]
        deprecations: bool,
    },
    /// Show the parsed policy table
    #[command(
        about = "Show parsed policy rules",
        long_about = "Parse [deprecations].rules and print the resulting table. Fails with a configuration error when any rule is malformed, the same as check would at setup."
    )]
    Rules {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
