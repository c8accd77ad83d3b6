// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the TUI starts. Subcommands run headless:
// - config --show: Display effective configuration
// - config --path: Print the config file location
// - config --reset: Regenerate config file with defaults
// - roster [--json]: Print the roster that the TUI would show

use crate::config::{Config, VERSION};
use crate::roster::{CardContent, Roster};
use crate::theme::Theme;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// crewdeck - team roster and project cards in the terminal
#[derive(Parser, Debug)]
#[command(name = "crewdeck")]
#[command(version = VERSION)]
#[command(about = "Browse a team roster as expandable cards", long_about = None)]
pub struct Cli {
    /// Roster file to show (overrides config and CREWDECK_ROSTER)
    #[arg(long, global = true)]
    pub roster: Option<PathBuf>,

    /// Theme name (overrides config and CREWDECK_THEME)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Print the roster without starting the TUI
    Roster {
        /// Emit JSON instead of a plain listing
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.roster {
            config.roster = Some(path.clone());
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

/// Run a headless subcommand
pub fn run_command(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Config { show, path, reset } => {
            if *path {
                handle_config_path()
            } else if *show {
                handle_config_show(config);
                Ok(())
            } else if *reset {
                handle_config_reset()
            } else {
                // No flag provided, show help
                println!("Usage: crewdeck config [--show|--path|--reset]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
                Ok(())
            }
        }
        Commands::Roster { json } => {
            let roster = Roster::load_or_sample(config.roster.as_deref())?;
            if *json {
                println!("{}", roster.to_json()?);
            } else {
                print!("{}", render_listing(&roster));
            }
            Ok(())
        }
    }
}

fn handle_config_path() -> Result<()> {
    let Some(path) = Config::config_path() else {
        bail!("Could not determine config path");
    };
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (flags > env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!();
    println!("# Available themes: {}", Theme::list_available().join(", "));

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let Some(path) = Config::config_path() else {
        bail!("Could not determine config path");
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

/// Plain listing: one line per card, grouped by deck
fn render_listing(roster: &Roster) -> String {
    let mut out = String::new();

    out.push_str(&format!("Team ({})\n", roster.members.len()));
    for record in &roster.members {
        out.push_str(&listing_line(record.id.as_str(), &record.payload));
    }

    out.push_str(&format!("\nProjects ({})\n", roster.projects.len()));
    for record in &roster.projects {
        out.push_str(&listing_line(record.id.as_str(), &record.payload));
    }

    out
}

fn listing_line(id: &str, content: &impl CardContent) -> String {
    match content.subtitle() {
        Some(subtitle) => format!("  {:<22} {} - {}\n", id, content.headline(), subtitle),
        None => format!("  {:<22} {}\n", id, content.headline()),
    }
}
