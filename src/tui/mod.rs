// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Layered input dispatch into the decks

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::roster::Roster;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use traits::Handled;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub async fn run_tui(config: Config, roster: Roster, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if config.deck.mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, roster, log_buffer);
    tracing::info!(
        "crewdeck started: {} member(s), {} project(s)",
        app.team.controller().records().len(),
        app.projects.controller().records().len()
    );

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Unmount both decks first so any held scroll lock is released
    drop(app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    if config.deck.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to disable mouse capture")?;
    }
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on input and the animation tick, responding to
/// whichever completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // 20 FPS keeps the expand/collapse morph smooth
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Expanded deck → Global → Grid
pub(crate) fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
            return;
        }
        KeyEventKind::Press | KeyEventKind::Repeat => {}
    }

    // Ctrl+C always quits, whatever has focus
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return;
    }

    if !app.handle_key_press(key_event.code) {
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: An expanded card captures everything else
    if handle_expanded_input(app, key_event) {
        return;
    }

    // Layer 3: Global keys (work regardless of view)
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: Grid navigation in the active deck
    app.active_deck_mut().handle_key(key_event);
    app.sync_morph();
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if !app.mouse_enabled || app.modal.is_some() {
        return;
    }
    app.active_deck_mut().handle_mouse(&mouse_event);
    app.sync_morph();
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
    }

    true
}

/// While a card is expanded only Escape (close), `y` (copy), `r` (reload)
/// and `q` (quit) do anything; all other keys are swallowed.
fn handle_expanded_input(app: &mut App, key_event: KeyEvent) -> bool {
    if !app.active_deck().is_expanded() {
        return false;
    }

    if app.active_deck_mut().handle_key(key_event) == Handled::No {
        match key_event.code {
            KeyCode::Char('y') => app.copy_active(),
            KeyCode::Char('r') => app.reload_roster(),
            KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
            _ => {}
        }
    }
    app.sync_morph();

    true
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::F(1) | KeyCode::Char('t') => app.set_view(View::Team),
        KeyCode::F(2) | KeyCode::Char('p') => app.set_view(View::Projects),
        KeyCode::Char('r') => app.reload_roster(),
        KeyCode::Char('?') => app.modal = Some(Modal::help()),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DeckState;
    use crate::roster::CardId;
    use crate::tui::components::DeckSurface;
    use crate::tui::traits::Scrollable;
    use crossterm::event::{MouseButton, MouseEventKind};
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    fn app() -> App {
        let mut config = Config::default();
        config.deck.morph_frames = 0;
        App::new(&config, Roster::sample(), LogBuffer::new())
    }

    /// Press and release, like a terminal with key release reporting
    fn tap(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press));
        handle_key_event(
            app,
            KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release),
        );
    }

    fn click(app: &mut App, column: u16, row: u16) {
        handle_mouse_event(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    fn render(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| views::draw(f, app)).unwrap();
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    fn expanded(id: &str) -> DeckState {
        DeckState::Expanded(CardId::new(id))
    }

    #[test]
    fn enter_expands_and_escape_collapses() {
        let mut app = app();
        tap(&mut app, KeyCode::Right);
        tap(&mut app, KeyCode::Enter);

        assert_eq!(app.team.state(), expanded("pranay-de"));
        assert!(app.scroll_lock.is_locked());

        tap(&mut app, KeyCode::Esc);
        assert_eq!(app.team.state(), DeckState::Collapsed);
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn expanded_card_swallows_navigation_and_view_switches() {
        let mut app = app();
        tap(&mut app, KeyCode::Enter);

        tap(&mut app, KeyCode::Char('p'));
        tap(&mut app, KeyCode::Down);
        tap(&mut app, KeyCode::PageDown);

        assert_eq!(app.view, View::Team);
        assert_eq!(app.team.focus(), 0);
        assert_eq!(app.team.scroll_offset(), 0);
        assert_eq!(app.team.state(), expanded("amitava-datta"));
    }

    #[test]
    fn global_keys_switch_views() {
        let mut app = app();
        tap(&mut app, KeyCode::Char('p'));
        assert_eq!(app.view, View::Projects);
        tap(&mut app, KeyCode::F(1));
        assert_eq!(app.view, View::Team);

        tap(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn help_modal_absorbs_keys_until_closed() {
        let mut app = app();
        tap(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modal, Some(Modal::Help));

        tap(&mut app, KeyCode::Enter);
        assert_eq!(app.team.state(), DeckState::Collapsed);

        tap(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[test]
    fn click_card_then_click_outside_panel() {
        let mut app = app();
        render(&mut app);

        let origin = app
            .team
            .card_rect(&app.team.controller().transition_key(&CardId::new("aitijhya-roy")))
            .unwrap();
        let (x, y) = center(origin);
        click(&mut app, x, y);
        assert_eq!(app.team.state(), expanded("aitijhya-roy"));

        render(&mut app);
        let panel = app.team.controller().panel_bounds().unwrap();

        // Inside the panel: stays open
        let (x, y) = center(panel);
        click(&mut app, x, y);
        assert_eq!(app.team.state(), expanded("aitijhya-roy"));

        // Top-left corner of the screen is outside the panel
        click(&mut app, 0, 0);
        assert_eq!(app.team.state(), DeckState::Collapsed);
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn click_on_close_control_collapses() {
        let mut app = app();
        app.team.select_card(&CardId::new("pranay-de")).unwrap();
        render(&mut app);

        let close = app.team.controller().close_bounds().unwrap();
        click(&mut app, close.x + 1, close.y);
        assert_eq!(app.team.state(), DeckState::Collapsed);
    }

    #[test]
    fn pointer_before_first_render_is_ignored() {
        let mut app = app();
        app.team.select_card(&CardId::new("pranay-de")).unwrap();

        click(&mut app, 0, 0);
        assert_eq!(app.team.state(), expanded("pranay-de"));
    }

    #[test]
    fn collapse_starts_morph_back_to_card() {
        let mut config = Config::default();
        config.deck.morph_frames = 3;
        let mut app = App::new(&config, Roster::sample(), LogBuffer::new());
        render(&mut app);

        tap(&mut app, KeyCode::Enter);
        assert!(app.morph.is_animating());
        for _ in 0..3 {
            app.tick();
        }
        assert!(!app.morph.is_animating());

        render(&mut app);
        tap(&mut app, KeyCode::Esc);
        assert!(app.morph.collapse_outline().is_some());
    }

    #[test]
    fn ctrl_c_quits_even_when_expanded() {
        let mut app = app();
        tap(&mut app, KeyCode::Enter);
        handle_key_event(
            &mut app,
            KeyEvent::new_with_kind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press),
        );
        assert!(app.should_quit);
    }
}
