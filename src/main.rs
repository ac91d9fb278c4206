//! Deprector CLI binary entry point.
//! Thin host around the governance core: feeds recorded warning events
//! through the hooks and applies the resulting exit status.

mod cli;
mod config;
mod engine;
mod errors;
mod hooks;
mod models;
mod output;
mod report;
mod session;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use hooks::Governor;
use models::event::WarningEvent;
use models::policy::PolicyTable;
use std::fs;
use std::io::{self, BufRead, BufReader};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            repo_root,
            events,
            output,
            deprecations,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                events.as_deref(),
                output.as_deref(),
                if deprecations { Some(true) } else { None },
            );
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No deprector.toml found; using defaults."
                );
            }
            // Disabled means not registered: events are not even read.
            if !eff.enabled {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "Deprecation governance is disabled; enable with --deprecations or [deprecations].enabled."
                );
                return;
            }
            // Malformed rules are fatal before any event is processed.
            let table = match PolicyTable::from_specs(&eff.rules) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            let reader: Box<dyn BufRead> = match eff.events.as_deref() {
                Some(path) => {
                    let full = eff.repo_root.join(path);
                    match fs::File::open(&full) {
                        Ok(f) => Box::new(BufReader::new(f)),
                        Err(_) => {
                            eprintln!(
                                "{} {}",
                                utils::error_prefix(),
                                format!(
                                    "Events file not found: {} (pass --events or configure deprector.toml)",
                                    full.to_string_lossy()
                                )
                            );
                            std::process::exit(2);
                        }
                    }
                }
                None => Box::new(BufReader::new(io::stdin())),
            };

            let mut governor = Governor::new(table);
            governor.on_session_start();
            let mut skipped = 0usize;
            for line in reader.lines() {
                let line = match line {
                    Ok(l) => l,
                    Err(_) => break,
                };
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<WarningEvent>(&line) {
                    Ok(event) => governor.on_warning_recorded(&event),
                    // A bad line under-reports; it never aborts the run.
                    Err(_) => skipped += 1,
                }
            }
            if skipped > 0 && eff.output != "json" {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("Skipped {} unreadable event line(s).", skipped)
                );
            }
            let eval = governor.on_session_finish();
            output::print_check(&eval, &eff.output);
            if let Some(code) = Governor::exit_override(&eval) {
                std::process::exit(code);
            }
        }
        Commands::Rules { repo_root, output } => {
            let eff = config::resolve_effective(repo_root.as_deref(), None, output.as_deref(), None);
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No deprector.toml found; using defaults."
                );
            }
            let table = match PolicyTable::from_specs(&eff.rules) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            output::print_rules(&table, &eff.output);
        }
    }
}
