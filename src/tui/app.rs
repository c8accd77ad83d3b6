// TUI application state
//
// Owns both decks, the scroll lock they share, the morph layer and the
// shell state (theme, modal, toast). Input routing lives in tui/mod.rs;
// rendering in tui/views.

use super::clipboard;
use super::components::{DeckPanel, DeckSurface, Toast};
use super::input::InputHandler;
use super::modal::Modal;
use super::traits::{ComponentId, RenderContext};
use crate::config::Config;
use crate::deck::{MorphLayer, ScrollLock};
use crate::logging::LogBuffer;
use crate::roster::{MemberProfile, ProjectSummary, Roster};
use crate::theme::{Theme, ThemeConfig};
use crossterm::event::KeyCode;
use std::path::PathBuf;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Team,
    Projects,
}

impl View {
    /// Get display name for title and status bar
    pub fn name(&self) -> &'static str {
        match self {
            View::Team => "Team",
            View::Projects => "Projects",
        }
    }
}

/// Main application state for the TUI
pub struct App {
    pub view: View,

    pub team: DeckPanel<MemberProfile>,
    pub projects: DeckPanel<ProjectSummary>,

    /// Page scroll lock shared by both decks
    pub scroll_lock: ScrollLock,

    /// Expand/collapse animation fed by the decks' transitions
    pub morph: MorphLayer,

    pub theme: Theme,

    /// Active modal dialog (help, notices)
    pub modal: Option<Modal>,

    pub toast: Option<Toast>,

    /// Log buffer for the status bar
    pub log_buffer: LogBuffer,

    /// Whether mouse capture is on
    pub mouse_enabled: bool,

    pub should_quit: bool,

    /// Roster file to re-read on `r`; `None` means the sample roster
    roster_path: Option<PathBuf>,

    input_handler: InputHandler,
}

impl App {
    pub fn new(config: &Config, roster: Roster, log_buffer: LogBuffer) -> Self {
        let scroll_lock = ScrollLock::new();
        let theme = Theme::by_name_with_config(
            &config.theme,
            &ThemeConfig {
                use_theme_background: config.use_theme_background,
            },
        );

        Self {
            view: View::default(),
            team: DeckPanel::new(
                ComponentId::TeamDeck,
                "team",
                roster.members,
                scroll_lock.clone(),
            ),
            projects: DeckPanel::new(
                ComponentId::ProjectDeck,
                "projects",
                roster.projects,
                scroll_lock.clone(),
            ),
            scroll_lock,
            morph: MorphLayer::new(config.deck.morph_frames),
            theme,
            modal: None,
            toast: None,
            log_buffer,
            mouse_enabled: config.deck.mouse,
            should_quit: false,
            roster_path: config.roster.clone(),
            input_handler: InputHandler::with_default_config(),
        }
    }

    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            tracing::debug!("view: {} -> {}", self.view.name(), view.name());
            self.view = view;
        }
    }

    pub fn active_deck(&self) -> &dyn DeckSurface {
        match self.view {
            View::Team => &self.team,
            View::Projects => &self.projects,
        }
    }

    pub fn active_deck_mut(&mut self) -> &mut dyn DeckSurface {
        match self.view {
            View::Team => &mut self.team,
            View::Projects => &mut self.projects,
        }
    }

    /// Active deck plus a render context, borrowed side by side
    pub fn render_parts(&mut self) -> (&mut dyn DeckSurface, RenderContext<'_>) {
        let ctx = RenderContext::new(&self.theme, &self.morph);
        let deck: &mut dyn DeckSurface = match self.view {
            View::Team => &mut self.team,
            View::Projects => &mut self.projects,
        };
        (deck, ctx)
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Feed transitions emitted by the decks into the morph layer.
    /// Only the visible deck animates; anything else is dropped.
    pub fn sync_morph(&mut self) {
        let (active, hidden): (&mut dyn DeckSurface, &mut dyn DeckSurface) = match self.view {
            View::Team => (&mut self.team, &mut self.projects),
            View::Projects => (&mut self.projects, &mut self.team),
        };
        hidden.drain_transitions();

        for transition in active.drain_transitions() {
            let origin = active.card_rect(&transition.key);
            self.morph.begin(&transition, origin, active.last_panel());
        }
    }

    /// Per-tick housekeeping
    pub fn tick(&mut self) {
        self.morph.tick();
        self.clear_expired_toast();
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Push a fresh roster into both decks
    pub fn apply_roster(&mut self, roster: Roster) {
        self.team.set_records(roster.members);
        self.projects.set_records(roster.projects);
        self.sync_morph();
    }

    /// Re-read the roster file; failures are shown, the old cards stay
    pub fn reload_roster(&mut self) {
        match Roster::reload(self.roster_path.as_deref()) {
            Ok(roster) => {
                let message = format!(
                    "Reloaded {} member(s), {} project(s)",
                    roster.members.len(),
                    roster.projects.len()
                );
                self.apply_roster(roster);
                self.show_toast(Toast::success(message));
            }
            Err(e) => {
                tracing::warn!("Roster reload failed: {}", e);
                self.modal = Some(Modal::notice("Roster not reloaded", e.to_string()));
            }
        }
    }

    /// Copy the expanded card's primary contact to the clipboard
    pub fn copy_active(&mut self) {
        let deck = self.active_deck();
        let Some(text) = deck.copy_text() else {
            self.show_toast(Toast::info("Nothing to copy"));
            return;
        };
        let description = deck.copy_description();

        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.show_toast(Toast::success(format!("Copied {}", description))),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast(Toast::failure("Failed to copy"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DeckState;
    use crate::roster::{CardId, CardRecord};

    fn app() -> App {
        App::new(&Config::default(), Roster::sample(), LogBuffer::new())
    }

    #[test]
    fn decks_share_one_scroll_lock() {
        let mut app = app();
        app.team.select_card(&CardId::new("pranay-de")).unwrap();
        app.projects.select_card(&CardId::new("portfolio-website")).unwrap();
        assert_eq!(app.scroll_lock.holders(), 2);

        app.team.dismiss();
        assert!(app.scroll_lock.is_locked(), "projects deck still expanded");
        app.projects.dismiss();
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn reload_that_drops_the_expanded_card_collapses() {
        let mut app = app();
        app.team.select_card(&CardId::new("rudranil-das")).unwrap();
        app.sync_morph();

        let mut roster = Roster::sample();
        roster.members.retain(|m| m.id.as_str() != "rudranil-das");
        app.apply_roster(roster);

        assert_eq!(app.team.state(), DeckState::Collapsed);
        assert!(!app.scroll_lock.is_locked());
        assert_eq!(app.team.card_count(), 5);
    }

    #[test]
    fn reload_keeping_the_expanded_card_stays_expanded() {
        let mut app = app();
        app.team.select_card(&CardId::new("pranay-de")).unwrap();

        let mut roster = Roster::sample();
        roster.members.push(CardRecord::new(
            "newcomer",
            MemberProfile {
                name: "Newcomer".to_string(),
                ..Default::default()
            },
        ));
        app.apply_roster(roster);

        assert_eq!(app.team.state(), DeckState::Expanded(CardId::new("pranay-de")));
        assert!(app.scroll_lock.is_locked());
    }

    #[test]
    fn failed_reload_keeps_cards_and_opens_notice() {
        let mut app = app();
        app.roster_path = Some(std::env::temp_dir().join("crewdeck-test-vanished-roster.toml"));

        app.reload_roster();

        assert_eq!(app.team.card_count(), 6);
        assert!(matches!(app.modal, Some(Modal::Notice { .. })));
    }

    #[test]
    fn morph_disabled_by_config_stays_idle() {
        let mut config = Config::default();
        config.deck.morph_frames = 0;
        let mut app = App::new(&config, Roster::sample(), LogBuffer::new());

        app.team.select_card(&CardId::new("pranay-de")).unwrap();
        app.sync_morph();
        assert!(!app.morph.is_animating());
    }
}
