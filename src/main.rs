// crewdeck - team roster and project cards in the terminal
//
// Browses two decks of cards (team members, projects). Selecting a card
// expands it into a detail overlay; Escape, a click outside the panel or
// its close control collapse it again.
//
// Architecture:
// - Roster: card data loaded from TOML (or the bundled sample)
// - Deck: the expandable card controller, the page scroll lock and the
//   transition keys that drive the expand/collapse morph
// - TUI (ratatui): grid, detail overlay, modals, event loop
// - Config + logging: env > file > defaults, tracing into the TUI buffer

mod cli;
mod config;
mod deck;
mod logging;
mod roster;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::Config;
use logging::{LogBuffer, LogOutput};
use roster::Roster;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Load configuration, then let command-line flags win
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);

    // Headless subcommands log to stdout and exit
    if let Some(command) = &cli.command {
        let _guard = logging::init(&config.logging, LogOutput::Stdout, &LogBuffer::new())?;
        return cli::run_command(command, &config);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // In TUI mode logs go to the buffer so they don't garble the display.
    // The guard must stay alive for file logs to flush.
    let log_buffer = LogBuffer::new();
    let _guard = logging::init(&config.logging, LogOutput::Buffer, &log_buffer)?;

    let roster = Roster::load_or_sample(config.roster.as_deref())?;

    tui::run_tui(config, roster, log_buffer).await
}
