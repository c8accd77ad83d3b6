//! Expandable card controller
//!
//! Owns which card of a deck is expanded into the detail overlay.
//!
//! ```text
//!              select(id)                select(other)
//!  Collapsed ─────────────▶ Expanded(id) ─────────────▶ Expanded(other)
//!      ▲                        │
//!      └────────────────────────┘
//!   dismiss(): close control, Escape, pointer outside the panel,
//!              or the active card disappearing from the record list
//! ```
//!
//! While expanded the controller holds a share of the page `ScrollLock`.
//! The guard lives in the controller, so dropping the controller (unmount)
//! releases it even if nobody called `dismiss()`.

use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use super::transition::{Transition, TransitionKey};
use crate::roster::{CardId, CardRecord};
use crate::tui::traits::Handled;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::fmt;

/// Observable controller state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckState {
    Collapsed,
    Expanded(CardId),
}

/// Caller mistakes reported by the controller. None of them change state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// `select` with an id that is not in the current record list
    UnknownCard(CardId),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCard(id) => write!(f, "No card with id '{}' in this deck", id),
        }
    }
}

impl std::error::Error for DeckError {}

pub struct ExpandableCardController<P> {
    /// Deck name, prefixes every transition key
    scope: &'static str,
    records: Vec<CardRecord<P>>,
    active: Option<CardId>,
    scroll_lock: ScrollLock,
    /// Held exactly while `active` is `Some`
    lock_guard: Option<ScrollLockGuard>,
    /// Rendered detail panel rectangle, recorded by the renderer
    panel_bounds: Option<Rect>,
    /// Rendered close control rectangle
    close_bounds: Option<Rect>,
}

impl<P> ExpandableCardController<P> {
    /// Mount a controller over `records`, starting collapsed
    pub fn mount(scope: &'static str, records: Vec<CardRecord<P>>, scroll_lock: ScrollLock) -> Self {
        tracing::debug!("deck '{}' mounted with {} card(s)", scope, records.len());
        Self {
            scope,
            records,
            active: None,
            scroll_lock,
            lock_guard: None,
            panel_bounds: None,
            close_bounds: None,
        }
    }

    pub fn records(&self) -> &[CardRecord<P>] {
        &self.records
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn state(&self) -> DeckState {
        match &self.active {
            Some(id) => DeckState::Expanded(id.clone()),
            None => DeckState::Collapsed,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.active.is_some()
    }

    /// Record currently shown in the detail panel
    pub fn active_record(&self) -> Option<&CardRecord<P>> {
        let id = self.active.as_ref()?;
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.records.iter().any(|r| &r.id == id)
    }

    /// Correlation key shared by a compact card and its detail panel
    pub fn transition_key(&self, id: &CardId) -> TransitionKey {
        TransitionKey::new(self.scope, id)
    }

    /// Expand `id`. The last call wins; an unknown id leaves state untouched.
    pub fn select(&mut self, id: &CardId) -> Result<Transition, DeckError> {
        if !self.contains(id) {
            tracing::warn!("deck '{}': ignoring select of unknown card '{}'", self.scope, id);
            return Err(DeckError::UnknownCard(id.clone()));
        }

        if self.active.as_ref() != Some(id) {
            // The new panel has not been laid out yet
            self.panel_bounds = None;
            self.close_bounds = None;
            self.active = Some(id.clone());
        }
        if self.lock_guard.is_none() {
            self.lock_guard = Some(self.scroll_lock.acquire());
        }

        tracing::debug!("deck '{}': expanded '{}'", self.scope, id);
        Ok(Transition::expand(self.transition_key(id)))
    }

    /// Collapse back to the grid. Returns `None` if nothing was expanded.
    pub fn dismiss(&mut self) -> Option<Transition> {
        let id = self.active.take()?;
        self.lock_guard = None;
        self.panel_bounds = None;
        self.close_bounds = None;

        tracing::debug!("deck '{}': collapsed '{}'", self.scope, id);
        Some(Transition::collapse(self.transition_key(&id)))
    }

    /// Replace the record list. If the expanded card is gone the deck
    /// collapses instead of keeping a dangling id.
    pub fn set_records(&mut self, records: Vec<CardRecord<P>>) -> Option<Transition> {
        self.records = records;

        let dangling = self
            .active
            .as_ref()
            .is_some_and(|id| !self.records.iter().any(|r| &r.id == id));

        if dangling {
            tracing::warn!(
                "deck '{}': expanded card no longer in the list, collapsing",
                self.scope
            );
            self.dismiss()
        } else {
            None
        }
    }

    /// Record where the detail panel was drawn this frame
    pub fn set_panel_bounds(&mut self, bounds: Rect) {
        if self.is_expanded() {
            self.panel_bounds = Some(bounds);
        }
    }

    /// Record where the close control was drawn this frame
    pub fn set_close_bounds(&mut self, bounds: Rect) {
        if self.is_expanded() {
            self.close_bounds = Some(bounds);
        }
    }

    #[cfg(test)]
    pub fn panel_bounds(&self) -> Option<Rect> {
        self.panel_bounds
    }

    #[cfg(test)]
    pub fn close_bounds(&self) -> Option<Rect> {
        self.close_bounds
    }

    /// Global key listener: Escape dismisses, but only while expanded
    pub fn handle_key(&mut self, key: &KeyEvent) -> (Handled, Option<Transition>) {
        if !self.is_expanded() || key.kind != KeyEventKind::Press {
            return (Handled::No, None);
        }

        match key.code {
            KeyCode::Esc => {
                let transition = self.dismiss();
                (Handled::Yes, transition)
            }
            _ => (Handled::No, None),
        }
    }

    /// Global pointer listener.
    ///
    /// A left-button press on the close control or outside the panel
    /// rectangle dismisses; a press inside the panel is absorbed. Other
    /// buttons never dismiss. Before the panel has been drawn there is
    /// nothing to test against and the press is ignored.
    pub fn handle_pointer(&mut self, mouse: &MouseEvent) -> (Handled, Option<Transition>) {
        if !self.is_expanded() || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return (Handled::No, None);
        }
        let Some(panel) = self.panel_bounds else {
            return (Handled::No, None);
        };

        let at = Position::new(mouse.column, mouse.row);
        let on_close = self.close_bounds.is_some_and(|close| close.contains(at));

        if on_close || !panel.contains(at) {
            let transition = self.dismiss();
            (Handled::Yes, transition)
        } else {
            (Handled::Yes, None)
        }
    }
}

impl<P> fmt::Debug for ExpandableCardController<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandableCardController")
            .field("scope", &self.scope)
            .field("cards", &self.records.len())
            .field("active", &self.active)
            .field("panel_bounds", &self.panel_bounds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::transition::TransitionKind;
    use crossterm::event::KeyModifiers;

    fn records(ids: &[&str]) -> Vec<CardRecord<()>> {
        ids.iter().map(|id| CardRecord::new(*id, ())).collect()
    }

    fn deck(ids: &[&str]) -> (ExpandableCardController<()>, ScrollLock) {
        let lock = ScrollLock::new();
        (
            ExpandableCardController::mount("team", records(ids), lock.clone()),
            lock,
        )
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn expanded(id: &str) -> DeckState {
        DeckState::Expanded(CardId::new(id))
    }

    #[test]
    fn starts_collapsed_and_unlocked() {
        let (deck, lock) = deck(&["a", "b"]);
        assert_eq!(deck.state(), DeckState::Collapsed);
        assert!(!lock.is_locked());
    }

    #[test]
    fn select_known_card_expands_it() {
        for id in ["a", "b", "c"] {
            let (mut deck, _lock) = deck(&["a", "b", "c"]);
            deck.select(&CardId::new(id)).unwrap();
            assert_eq!(deck.state(), expanded(id));
        }
    }

    #[test]
    fn select_unknown_card_changes_nothing() {
        let (mut deck, lock) = deck(&["a", "b"]);

        let err = deck.select(&CardId::new("zzz")).unwrap_err();
        assert_eq!(err, DeckError::UnknownCard(CardId::new("zzz")));
        assert_eq!(deck.state(), DeckState::Collapsed);
        assert!(!lock.is_locked());

        deck.select(&CardId::new("a")).unwrap();
        assert!(deck.select(&CardId::new("zzz")).is_err());
        assert_eq!(deck.state(), expanded("a"));
    }

    #[test]
    fn dismiss_is_idempotent() {
        let (mut deck, lock) = deck(&["a"]);
        deck.select(&CardId::new("a")).unwrap();

        assert!(deck.dismiss().is_some());
        assert!(deck.dismiss().is_none());
        assert_eq!(deck.state(), DeckState::Collapsed);
        assert!(!lock.is_locked());
    }

    #[test]
    fn select_then_dismiss_round_trips() {
        let (mut deck, lock) = deck(&["a", "b"]);
        let opened = deck.select(&CardId::new("b")).unwrap();
        let closed = deck.dismiss().unwrap();

        assert_eq!(opened.kind, TransitionKind::Expand);
        assert_eq!(closed.kind, TransitionKind::Collapse);
        assert_eq!(opened.key, closed.key);
        assert_eq!(deck.state(), DeckState::Collapsed);
        assert!(!lock.is_locked());
    }

    #[test]
    fn rapid_selects_last_wins_with_single_lock_share() {
        let (mut deck, lock) = deck(&["a", "b", "c"]);
        deck.select(&CardId::new("a")).unwrap();
        deck.select(&CardId::new("c")).unwrap();
        deck.select(&CardId::new("b")).unwrap();

        assert_eq!(deck.state(), expanded("b"));
        assert_eq!(lock.holders(), 1);
    }

    #[test]
    fn selecting_engages_scroll_lock() {
        let (mut deck, lock) = deck(&["a", "b"]);
        deck.select(&CardId::new("b")).unwrap();

        assert_eq!(deck.state(), expanded("b"));
        assert!(lock.is_locked());
        assert!(!lock.allows_scroll());
    }

    #[test]
    fn removing_active_card_collapses_and_unlocks() {
        let (mut deck, lock) = deck(&["a", "b"]);
        deck.select(&CardId::new("b")).unwrap();

        let transition = deck.set_records(records(&["a"]));
        assert_eq!(transition.map(|t| t.kind), Some(TransitionKind::Collapse));
        assert_eq!(deck.state(), DeckState::Collapsed);
        assert!(!lock.is_locked());
    }

    #[test]
    fn replacing_records_keeps_surviving_active_card() {
        let (mut deck, lock) = deck(&["a", "b"]);
        deck.select(&CardId::new("a")).unwrap();

        assert!(deck.set_records(records(&["c", "a"])).is_none());
        assert_eq!(deck.state(), expanded("a"));
        assert!(lock.is_locked());
    }

    #[test]
    fn escape_dismisses_only_when_expanded() {
        let (mut deck, _lock) = deck(&["a"]);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);

        let (handled, transition) = deck.handle_key(&esc);
        assert_eq!(handled, Handled::No);
        assert!(transition.is_none());

        deck.select(&CardId::new("a")).unwrap();
        let (handled, transition) = deck.handle_key(&esc);
        assert_eq!(handled, Handled::Yes);
        assert!(transition.is_some());
        assert_eq!(deck.state(), DeckState::Collapsed);
    }

    #[test]
    fn other_keys_do_not_dismiss() {
        let (mut deck, _lock) = deck(&["a"]);
        deck.select(&CardId::new("a")).unwrap();

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(deck.handle_key(&enter).0, Handled::No);
        assert_eq!(deck.state(), expanded("a"));
    }

    #[test]
    fn pointer_outside_panel_dismisses_inside_does_not() {
        let (mut deck, lock) = deck(&["a", "b"]);
        deck.select(&CardId::new("a")).unwrap();
        deck.set_panel_bounds(Rect::new(10, 5, 40, 12));

        let (handled, transition) = deck.handle_pointer(&click(20, 10));
        assert_eq!(handled, Handled::Yes);
        assert!(transition.is_none());
        assert_eq!(deck.state(), expanded("a"));

        let (handled, transition) = deck.handle_pointer(&click(2, 2));
        assert_eq!(handled, Handled::Yes);
        assert!(transition.is_some());
        assert_eq!(deck.state(), DeckState::Collapsed);
        assert!(!lock.is_locked());
    }

    #[test]
    fn only_left_button_dismisses() {
        let (mut deck, lock) = deck(&["a"]);
        deck.select(&CardId::new("a")).unwrap();
        deck.set_panel_bounds(Rect::new(10, 5, 40, 12));

        for button in [MouseButton::Right, MouseButton::Middle] {
            let press = MouseEvent {
                kind: MouseEventKind::Down(button),
                ..click(0, 0)
            };
            let (handled, transition) = deck.handle_pointer(&press);
            assert_eq!(handled, Handled::No);
            assert!(transition.is_none());
            assert_eq!(deck.state(), expanded("a"));
        }
        assert!(lock.is_locked());
    }

    #[test]
    fn pointer_on_panel_edge_counts_as_inside() {
        let (mut deck, _lock) = deck(&["a"]);
        deck.select(&CardId::new("a")).unwrap();
        deck.set_panel_bounds(Rect::new(10, 5, 40, 12));

        deck.handle_pointer(&click(10, 5));
        deck.handle_pointer(&click(49, 16));
        assert_eq!(deck.state(), expanded("a"));

        deck.handle_pointer(&click(50, 16));
        assert_eq!(deck.state(), DeckState::Collapsed);
    }

    #[test]
    fn close_control_dismisses_even_inside_panel() {
        let (mut deck, _lock) = deck(&["a"]);
        deck.select(&CardId::new("a")).unwrap();
        deck.set_panel_bounds(Rect::new(10, 5, 40, 12));
        deck.set_close_bounds(Rect::new(45, 5, 3, 1));

        deck.handle_pointer(&click(46, 5));
        assert_eq!(deck.state(), DeckState::Collapsed);
    }

    #[test]
    fn pointer_before_first_render_is_ignored() {
        let (mut deck, _lock) = deck(&["a"]);
        deck.select(&CardId::new("a")).unwrap();

        let (handled, _) = deck.handle_pointer(&click(0, 0));
        assert_eq!(handled, Handled::No);
        assert_eq!(deck.state(), expanded("a"));
    }

    #[test]
    fn pointer_ignored_while_collapsed_and_for_non_press() {
        let (mut deck, _lock) = deck(&["a"]);
        assert_eq!(deck.handle_pointer(&click(0, 0)).0, Handled::No);

        deck.select(&CardId::new("a")).unwrap();
        deck.set_panel_bounds(Rect::new(10, 5, 40, 12));
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..click(0, 0)
        };
        assert_eq!(deck.handle_pointer(&scroll).0, Handled::No);
        assert_eq!(deck.state(), expanded("a"));
    }

    #[test]
    fn switching_cards_clears_stale_bounds() {
        let (mut deck, _lock) = deck(&["a", "b"]);
        deck.select(&CardId::new("a")).unwrap();
        deck.set_panel_bounds(Rect::new(10, 5, 40, 12));

        deck.select(&CardId::new("b")).unwrap();
        assert!(deck.panel_bounds().is_none());
    }

    #[test]
    fn bounds_ignored_while_collapsed() {
        let (mut deck, _lock) = deck(&["a"]);
        deck.set_panel_bounds(Rect::new(0, 0, 5, 5));
        assert!(deck.panel_bounds().is_none());
    }

    #[test]
    fn unmount_while_expanded_releases_lock() {
        let (mut deck, lock) = deck(&["a"]);
        deck.select(&CardId::new("a")).unwrap();
        assert!(lock.is_locked());

        drop(deck);
        assert!(!lock.is_locked());
        assert!(lock.allows_scroll());
    }

    #[test]
    fn two_decks_share_the_lock() {
        let lock = ScrollLock::new();
        let mut team = ExpandableCardController::mount("team", records(&["a"]), lock.clone());
        let mut projects =
            ExpandableCardController::mount("projects", records(&["x"]), lock.clone());

        team.select(&CardId::new("a")).unwrap();
        projects.select(&CardId::new("x")).unwrap();
        team.dismiss();

        assert!(lock.is_locked(), "projects deck is still expanded");
        projects.dismiss();
        assert!(!lock.is_locked());
    }
}
