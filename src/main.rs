//! Journal CLI
//!
//! Command-line interface for the journal viewer core:
//! - Replay navigation sequences against an in-memory browser history
//! - List journal entries
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use journal::config::{generate_default_config, Config, LoggingConfig};
use journal::{HistoryTracker, JournalEntries, MemoryHistory, Session};

#[derive(Parser)]
#[command(name = "journal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Journal entry viewer with hash-based routing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Entries JSON file (default: bundled entries)
    #[arg(long, global = true)]
    pub entries: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a navigation sequence
    Navigate {
        /// Steps: home, settings, entry:<N>, back, forward
        #[arg(required = true)]
        steps: Vec<Step>,
    },

    /// List journal entries
    Entries,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// One user action in a navigation sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Home,
    Settings,
    Entry(usize),
    Back,
    Forward,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Step::Home),
            "settings" => Ok(Step::Settings),
            "back" => Ok(Step::Back),
            "forward" => Ok(Step::Forward),
            other => {
                let number = other
                    .strip_prefix("entry:")
                    .ok_or_else(|| format!("Unknown step: {}", other))?;
                number
                    .parse()
                    .map(Step::Entry)
                    .map_err(|_| format!("Invalid entry number: {}", number))
            }
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Home => write!(f, "home"),
            Step::Settings => write!(f, "settings"),
            Step::Entry(n) => write!(f, "entry:{}", n),
            Step::Back => write!(f, "back"),
            Step::Forward => write!(f, "forward"),
        }
    }
}

/// Page state after one step
#[derive(Debug, Serialize)]
struct StepReport {
    step: String,
    url: String,
    title: String,
    body_class: &'static str,
    log_len: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Navigate { steps } => {
            let entries = load_entries(cli.entries.as_ref().or(config.app.entries.as_ref()))?;
            let tracker = HistoryTracker::with_log(
                config.router.baseline(),
                MemoryHistory::new(&config.app.origin),
            );
            let mut session = Session::new(entries, tracker);

            let mut reports = Vec::with_capacity(steps.len());
            for step in &steps {
                apply_step(&mut session, step)?;
                let view = session.view_state();
                reports.push(StepReport {
                    step: step.to_string(),
                    url: session.current_url().to_string(),
                    title: view.title,
                    body_class: view.body_class,
                    log_len: session.log().len(),
                });
            }

            if cli.format == "json" {
                let output = serde_json::json!({
                    "steps": reports,
                    "log": session.log(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!(
                    "{:<12} {:<40} {:<20} {:<14} {}",
                    "STEP", "URL", "HEADER", "BODY CLASS", "LOG"
                );
                for r in &reports {
                    println!(
                        "{:<12} {:<40} {:<20} {:<14} {}",
                        r.step, r.url, r.title, r.body_class, r.log_len
                    );
                }
                println!();
                println!("Navigation log ({} entries):", session.log().len());
                for (i, entry) in session.log().iter().enumerate() {
                    println!("  {:>3}  {}", i, entry);
                }
            }
        }

        Commands::Entries => {
            let entries = load_entries(cli.entries.as_ref().or(config.app.entries.as_ref()))?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("{:<4} {:<12} {}", "#", "DATE", "TITLE");
                for (n, entry) in entries.numbered() {
                    println!("{:<4} {:<12} {}", n, entry.date, entry.title);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn apply_step(session: &mut Session<MemoryHistory>, step: &Step) -> anyhow::Result<()> {
    match step {
        Step::Home => {
            session.go_home();
        }
        Step::Settings => {
            session.open_settings();
        }
        Step::Entry(number) => {
            session.open_entry(*number)?;
        }
        Step::Back => {
            if !session.back() {
                tracing::warn!("Already at the oldest history entry");
            }
        }
        Step::Forward => {
            if !session.forward() {
                tracing::warn!("Already at the newest history entry");
            }
        }
    }
    Ok(())
}

fn load_entries(path: Option<&PathBuf>) -> anyhow::Result<JournalEntries> {
    match path {
        Some(path) => JournalEntries::load(path)
            .with_context(|| format!("Failed to load entries from {:?}", path)),
        None => Ok(JournalEntries::bundled()),
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("journal={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!("home".parse::<Step>(), Ok(Step::Home));
        assert_eq!("settings".parse::<Step>(), Ok(Step::Settings));
        assert_eq!("entry:3".parse::<Step>(), Ok(Step::Entry(3)));
        assert_eq!("back".parse::<Step>(), Ok(Step::Back));
        assert!("entry:x".parse::<Step>().is_err());
        assert!("about".parse::<Step>().is_err());
    }

    #[test]
    fn test_step_display_roundtrips() {
        for step in [Step::Home, Step::Entry(2), Step::Forward] {
            assert_eq!(step.to_string().parse::<Step>(), Ok(step));
        }
    }

    #[test]
    fn test_apply_steps() {
        let mut session = Session::in_memory(JournalEntries::bundled(), "http://localhost");
        for step in [Step::Entry(1), Step::Settings, Step::Back] {
            apply_step(&mut session, &step).unwrap();
        }
        assert_eq!(session.current_url(), "http://localhost/#entry1");
        assert_eq!(session.log().len(), 3);

        assert!(apply_step(&mut session, &Step::Entry(99)).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["journal", "navigate", "entry:1", "settings", "back"]).unwrap();
        match cli.command {
            Commands::Navigate { steps } => assert_eq!(steps.len(), 3),
            _ => panic!("expected navigate"),
        }
    }
}
