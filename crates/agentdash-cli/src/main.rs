use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use agentdash_core::{AgentStore, Dashboard, DashboardConfig};
use anyhow::Context;
use serde_json::json;
use tracing::debug;

mod logging;
mod render;
mod tui;

use logging::LogTarget;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "agentdash.toml";

/// AgentDash - terminal operations dashboard for AI agents
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a TOML config file (default: ./agentdash.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive dashboard (default)
    Ui {
        /// Page to open, e.g. `agents` or `#agents`
        #[arg(long)]
        page: Option<String>,
    },

    /// Print the agent list and counts
    Status {
        /// JSON output for integrations
        #[arg(long)]
        json: bool,
    },

    /// Write a JSON export of the startup state
    Export {
        /// Target directory (default: export.directory from config)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Write the default configuration as TOML
    Config {
        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    match path {
        Some(path) => Ok(DashboardConfig::from_file(path)?),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Ok(DashboardConfig::from_file(DEFAULT_CONFIG_FILE)?)
        }
        None => Ok(DashboardConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("loading configuration")?;
    let command = cli.command.unwrap_or(Commands::Ui { page: None });

    let target = match command {
        Commands::Ui { .. } => LogTarget::File(config.logging.file.clone()),
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, target)?;
    debug!(?config, "configuration loaded");

    match command {
        Commands::Ui { page } => {
            tui::run_tui(&config, page)?;
        }
        Commands::Status { json } => {
            let store = AgentStore::with_fixtures();
            let counts = store.counts();
            if json {
                let value = json!({ "agents": store.agents(), "counts": counts });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!(
                    "AGENTS: {} total, {} running, {} warning, {} paused",
                    counts.total, counts.running, counts.warning, counts.paused
                );
                for agent in store.agents() {
                    println!(
                        "  [{}] {:<22} {:>3}%  {}  {:<8} {}",
                        agent.id,
                        agent.name,
                        agent.progress,
                        agent.elapsed(),
                        agent.state.as_str(),
                        agent.status
                    );
                }
            }
        }
        Commands::Export { dir } => {
            let dir = dir.unwrap_or_else(|| config.export.directory.clone());
            let dash = Dashboard::new(&config);
            let path = dash.export_snapshot().write_to(&dir)?;
            println!("Exported dashboard to {}", path.display());
        }
        Commands::Config { output } => {
            let content = config.to_toml()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote configuration to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_ui() {
        let cli = Cli::try_parse_from(["agentdash"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["agentdash", "ui", "--page", "#rag", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Ui { page: Some(ref p) }) if p == "#rag"));
    }

    #[test]
    fn test_load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dash.toml");
        std::fs::write(&path, "[simulation]\nseed = 4\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.simulation.seed, Some(4));
        assert!(load_config(Some(dir.path().join("missing.toml").as_path())).is_err());
    }
}
