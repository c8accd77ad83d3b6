//! Deck panel component
//!
//! Binds one `ExpandableCardController` to the screen: the card grid with a
//! keyboard focus, page scrolling gated by the shared scroll lock, mouse
//! hit-testing, and the detail overlay while a card is expanded.
//!
//! Every transition the controller emits is queued here and drained by the
//! App, which feeds it to the morph layer together with the card rectangle
//! that shares its key.

use super::{card_detail, card_grid, scrollbar};
use crate::deck::{DeckError, DeckState, ExpandableCardController, ScrollLock, Transition, TransitionKey};
use crate::roster::{CardContent, CardId, CardRecord};
use crate::tui::layout::Breakpoint;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable,
};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    Frame,
};

/// What the App needs from a deck, independent of its payload type
pub trait DeckSurface: Interactive + Scrollable + Copyable {
    fn state(&self) -> DeckState;

    fn is_expanded(&self) -> bool {
        self.state() != DeckState::Collapsed
    }

    fn card_count(&self) -> usize;

    /// Route a mouse event. While expanded every event is absorbed.
    fn handle_mouse(&mut self, mouse: &MouseEvent) -> Handled;

    /// Draw the detail overlay over the whole screen if a card is expanded
    fn render_overlay(&mut self, f: &mut Frame, screen: Rect, ctx: &RenderContext);

    /// Transitions emitted since the last drain, oldest first
    fn drain_transitions(&mut self) -> Vec<Transition>;

    /// Rectangle of the compact card carrying `key` in the last frame
    fn card_rect(&self, key: &TransitionKey) -> Option<Rect>;

    /// Detail panel rectangle of the last frame it was drawn in
    fn last_panel(&self) -> Option<Rect>;
}

pub struct DeckPanel<P> {
    id: ComponentId,
    controller: ExpandableCardController<P>,
    /// Index of the focused card
    focus: usize,
    /// Columns used in the last frame
    columns: usize,
    scroll: ScrollState,
    /// Visible cards of the last frame
    card_rects: Vec<(CardId, Rect)>,
    last_panel: Option<Rect>,
    pending: Vec<Transition>,
}

impl<P: CardContent> DeckPanel<P> {
    pub fn new(
        id: ComponentId,
        scope: &'static str,
        records: Vec<CardRecord<P>>,
        scroll_lock: ScrollLock,
    ) -> Self {
        Self {
            id,
            controller: ExpandableCardController::mount(scope, records, scroll_lock),
            focus: 0,
            columns: 1,
            scroll: ScrollState::new(),
            card_rects: Vec::new(),
            last_panel: None,
            pending: Vec::new(),
        }
    }

    pub fn controller(&self) -> &ExpandableCardController<P> {
        &self.controller
    }

    #[cfg(test)]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Collapse if expanded
    #[cfg(test)]
    pub fn dismiss(&mut self) {
        if let Some(transition) = self.controller.dismiss() {
            self.pending.push(transition);
        }
    }

    pub fn focused_id(&self) -> Option<&CardId> {
        self.controller.records().get(self.focus).map(|r| &r.id)
    }

    /// Move focus by whole cells of the grid, clamped to the card list
    pub fn move_focus(&mut self, dx: isize, dy: isize) {
        let count = self.controller.records().len();
        if count == 0 {
            return;
        }
        let columns = self.columns.max(1) as isize;
        let target = self.focus as isize + dx + dy * columns;
        // Row moves that would leave the grid stay put; column moves clamp
        if dy != 0 && !(0..count as isize).contains(&target) {
            return;
        }
        self.focus = target.clamp(0, count as isize - 1) as usize;
        self.scroll.ensure_visible(self.focus / self.columns.max(1));
    }

    /// Expand `id`, moving the grid focus onto it
    pub fn select_card(&mut self, id: &CardId) -> Result<(), DeckError> {
        let transition = self.controller.select(id)?;
        if let Some(index) = self.controller.records().iter().position(|r| &r.id == id) {
            self.focus = index;
        }
        self.pending.push(transition);
        Ok(())
    }

    pub fn select_focused(&mut self) -> Result<(), DeckError> {
        let Some(id) = self.focused_id().cloned() else {
            return Ok(());
        };
        self.select_card(&id)
    }

    /// Replace the cards; collapses if the expanded one disappeared
    pub fn set_records(&mut self, records: Vec<CardRecord<P>>) {
        if let Some(transition) = self.controller.set_records(records) {
            self.pending.push(transition);
        }
        let count = self.controller.records().len();
        self.focus = self.focus.min(count.saturating_sub(1));
        // Rects of cards that may no longer exist must not be hit
        self.card_rects.clear();
    }

    fn card_at(&self, column: u16, row: u16) -> Option<CardId> {
        let at = Position::new(column, row);
        self.card_rects
            .iter()
            .find(|(_, rect)| rect.contains(at))
            .map(|(id, _)| id.clone())
    }
}

impl<P: CardContent> Component for DeckPanel<P> {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        self.columns = Breakpoint::from_width(area.width).grid_columns();

        let records = self.controller.records();
        self.scroll.update_dimensions(
            card_grid::row_count(records.len(), self.columns),
            card_grid::visible_rows(area.height),
        );

        let cards: Vec<card_grid::GridCard> = records
            .iter()
            .map(|r| card_grid::GridCard {
                id: &r.id,
                content: &r.payload,
            })
            .collect();
        let drawn = card_grid::render(
            f,
            area,
            &cards,
            self.columns,
            self.scroll.offset(),
            Some(self.focus),
            ctx.theme,
        );
        self.card_rects = drawn;

        scrollbar::render_scrollbar(
            f,
            area,
            &self.scroll,
            ctx.theme,
            !self.controller.scroll_lock().allows_scroll(),
        );
    }
}

impl<P: CardContent> Interactive for DeckPanel<P> {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if self.controller.is_expanded() {
            let (handled, transition) = self.controller.handle_key(&key);
            self.pending.extend(transition);
            return handled;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_focus(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_focus(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_focus(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_focus(0, 1),
            KeyCode::Home => {
                self.focus = 0;
                self.scroll.scroll_to_top();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // The focused card always exists, so this cannot be unknown
                let _ = self.select_focused();
            }
            KeyCode::PageUp => {
                self.page_up();
            }
            KeyCode::PageDown => {
                self.page_down();
            }
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        if self.controller.is_expanded() {
            Some("Esc:close  y:copy")
        } else {
            Some("←↑↓→:move  Enter:open")
        }
    }
}

impl<P: CardContent> Scrollable for DeckPanel<P> {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    fn scroll_enabled(&self) -> bool {
        self.controller.scroll_lock().allows_scroll()
    }
}

impl<P: CardContent> Copyable for DeckPanel<P> {
    fn copy_text(&self) -> Option<String> {
        self.controller.active_record()?.payload.primary_contact()
    }

    fn copy_description(&self) -> String {
        match self.controller.active_record() {
            Some(record) => format!("contact of {}", record.payload.headline()),
            None => self.id.label().to_string(),
        }
    }
}

impl<P: CardContent> DeckSurface for DeckPanel<P> {
    fn state(&self) -> DeckState {
        self.controller.state()
    }

    fn card_count(&self) -> usize {
        self.controller.records().len()
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> Handled {
        if self.controller.is_expanded() {
            let (_, transition) = self.controller.handle_pointer(mouse);
            self.pending.extend(transition);
            return Handled::Yes;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.card_at(mouse.column, mouse.row) {
                    Some(id) => Handled::from(self.select_card(&id).is_ok()),
                    None => Handled::No,
                }
            }
            MouseEventKind::ScrollUp => Handled::from(self.scroll_up()),
            MouseEventKind::ScrollDown => Handled::from(self.scroll_down()),
            _ => Handled::No,
        }
    }

    fn render_overlay(&mut self, f: &mut Frame, screen: Rect, ctx: &RenderContext) {
        let layout = {
            let Some(record) = self.controller.active_record() else {
                return;
            };
            let key = self.controller.transition_key(&record.id);
            card_detail::render(f, screen, record, &key, ctx)
        };

        self.controller.set_panel_bounds(layout.panel);
        self.controller.set_close_bounds(layout.close);
        self.last_panel = Some(layout.panel);
    }

    fn drain_transitions(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.pending)
    }

    fn card_rect(&self, key: &TransitionKey) -> Option<Rect> {
        self.card_rects
            .iter()
            .find(|(id, _)| &self.controller.transition_key(id) == key)
            .map(|(_, rect)| *rect)
    }

    fn last_panel(&self) -> Option<Rect> {
        self.last_panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::transition::TransitionKind;
    use crate::roster::ProjectSummary;
    use crossterm::event::{KeyEventKind, KeyModifiers};

    fn deck(n: usize) -> (DeckPanel<ProjectSummary>, ScrollLock) {
        let lock = ScrollLock::new();
        let records = (0..n)
            .map(|i| {
                CardRecord::new(
                    format!("p{}", i),
                    ProjectSummary {
                        title: format!("Project {}", i),
                        ..Default::default()
                    },
                )
            })
            .collect();
        (
            DeckPanel::new(ComponentId::ProjectDeck, "projects", records, lock.clone()),
            lock,
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn focus_moves_through_grid() {
        let (mut deck, _lock) = deck(5);
        deck.columns = 2;

        deck.move_focus(0, 1);
        assert_eq!(deck.focus(), 2);
        deck.move_focus(1, 0);
        assert_eq!(deck.focus(), 3);
        // No row below card 3 with 5 cards in 2 columns
        deck.move_focus(0, 1);
        assert_eq!(deck.focus(), 3);
        deck.move_focus(1, 0);
        deck.move_focus(1, 0);
        assert_eq!(deck.focus(), 4);
    }

    #[test]
    fn enter_expands_focused_card_and_queues_transition() {
        let (mut deck, lock) = deck(3);
        deck.move_focus(1, 0);

        assert_eq!(deck.handle_key(key(KeyCode::Enter)), Handled::Yes);
        assert_eq!(deck.state(), DeckState::Expanded(CardId::new("p1")));
        assert!(lock.is_locked());

        let drained = deck.drain_transitions();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].kind, TransitionKind::Expand);
        assert_eq!(drained[0].key.as_str(), "projects-p1");
        assert!(deck.drain_transitions().is_empty());
    }

    #[test]
    fn expanded_deck_only_answers_escape() {
        let (mut deck, lock) = deck(3);
        deck.select_card(&CardId::new("p0")).unwrap();

        assert_eq!(deck.handle_key(key(KeyCode::Down)), Handled::No);
        assert_eq!(deck.focus(), 0);
        assert_eq!(deck.handle_key(key(KeyCode::Esc)), Handled::Yes);
        assert_eq!(deck.state(), DeckState::Collapsed);
        assert!(!lock.is_locked());
    }

    #[test]
    fn click_on_card_selects_it() {
        let (mut deck, _lock) = deck(3);
        deck.card_rects = vec![
            (CardId::new("p0"), Rect::new(0, 0, 10, 6)),
            (CardId::new("p1"), Rect::new(10, 0, 10, 6)),
        ];

        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(deck.handle_mouse(&mouse(down, 30, 2)), Handled::No);
        assert_eq!(deck.handle_mouse(&mouse(down, 12, 2)), Handled::Yes);
        assert_eq!(deck.state(), DeckState::Expanded(CardId::new("p1")));
        assert_eq!(deck.focus(), 1);
    }

    #[test]
    fn page_scroll_refused_while_locked() {
        let (mut deck, lock) = deck(9);
        deck.scroll.update_dimensions(9, 2);

        assert!(deck.scroll_down());
        assert_eq!(deck.scroll_offset(), 1);

        let guard = lock.acquire();
        assert!(!deck.scroll_down());
        assert_eq!(
            deck.handle_mouse(&mouse(MouseEventKind::ScrollDown, 0, 0)),
            Handled::No
        );
        assert_eq!(deck.scroll_offset(), 1);

        drop(guard);
        assert!(deck.scroll_down());
        assert_eq!(deck.scroll_offset(), 2);
    }

    #[test]
    fn removing_expanded_card_queues_collapse() {
        let (mut deck, lock) = deck(3);
        deck.select_card(&CardId::new("p2")).unwrap();
        deck.drain_transitions();

        let remaining = deck.controller().records()[..2].to_vec();
        deck.set_records(remaining);

        assert_eq!(deck.state(), DeckState::Collapsed);
        assert!(!lock.is_locked());
        assert_eq!(deck.focus(), 1);
        let drained = deck.drain_transitions();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].kind, TransitionKind::Collapse);
    }
}
