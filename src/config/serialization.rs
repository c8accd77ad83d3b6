//! Config serialization to TOML
//!
//! Single source of truth for the config file format: the template written
//! on first run, `config --reset` and `config --show` all come from here.

use super::Config;

impl Config {
    /// Render the full config file, keeping every option discoverable
    pub fn to_toml(&self) -> String {
        let mut out = String::new();

        out.push_str("# crewdeck configuration\n\n");

        out.push_str("# Roster file with [[members]] and [[projects]] entries.\n");
        out.push_str("# Without one, ~/.config/crewdeck/roster.toml or the bundled sample is used.\n");
        match &self.roster {
            Some(path) => out.push_str(&format!("roster = {:?}\n", path.display().to_string())),
            None => out.push_str("# roster = \"/path/to/roster.toml\"\n"),
        }
        out.push('\n');

        out.push_str("# Theme: Nexus Dark, Nexus Light, Dracula, Nord, Gruvbox Dark, Terminal\n");
        out.push_str(&format!("theme = {:?}\n", self.theme));
        out.push_str("# Use theme's background color (true) or terminal's default (false)\n");
        out.push_str(&format!(
            "use_theme_background = {}\n",
            self.use_theme_background
        ));
        out.push('\n');

        out.push_str("[deck]\n");
        out.push_str("# Animation ticks for the card expand/collapse morph (0 = off)\n");
        out.push_str(&format!("morph_frames = {}\n", self.deck.morph_frames));
        out.push_str("# Click cards to expand, click outside the panel to close\n");
        out.push_str(&format!("mouse = {}\n", self.deck.mouse));
        out.push('\n');

        out.push_str("[logging]\n");
        out.push_str("# trace, debug, info, warn, error (RUST_LOG overrides)\n");
        out.push_str(&format!("level = {:?}\n", self.logging.level));
        out.push_str("# Write JSON logs to rotating files\n");
        out.push_str(&format!("file_enabled = {}\n", self.logging.file_enabled));
        out.push_str(&format!(
            "file_dir = {:?}\n",
            self.logging.file_dir.display().to_string()
        ));
        out.push_str("# hourly, daily, never\n");
        out.push_str(&format!(
            "file_rotation = {:?}\n",
            self.logging.file_rotation.as_str()
        ));
        out.push_str(&format!("file_prefix = {:?}\n", self.logging.file_prefix));

        out
    }
}
