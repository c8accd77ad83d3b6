// Scroll state for the card grid
//
// Offsets count grid rows, not terminal lines. Each deck owns one
// ScrollState; the renderer feeds it the row count and how many rows fit,
// and input moves the offset within that range.

/// Scroll state for a single deck page
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current scroll offset (row index at top of viewport)
    offset: usize,

    /// Total number of rows in content
    total: usize,

    /// Number of rows visible in viewport
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        // Before the first render the dimensions are unknown; the next
        // update_dimensions clamps whatever we end up with
        if self.total == 0 || self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Move the minimum distance needed for `row` to be visible
    pub fn ensure_visible(&mut self, row: usize) {
        if row < self.offset {
            self.offset = row;
        } else if self.viewport > 0 && row >= self.offset + self.viewport {
            self.offset = row + 1 - self.viewport;
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(5, 2);

        for _ in 0..10 {
            scroll.scroll_down();
        }
        assert_eq!(scroll.offset(), 3);

        scroll.scroll_to_top();
        scroll.scroll_up();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn paging_moves_by_viewport() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 3);

        scroll.page_down();
        assert_eq!(scroll.offset(), 3);
        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset(), 7);
        scroll.page_up();
        assert_eq!(scroll.offset(), 4);
    }

    #[test]
    fn ensure_visible_moves_minimally() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 3);

        scroll.ensure_visible(1);
        assert_eq!(scroll.offset(), 0);
        scroll.ensure_visible(5);
        assert_eq!(scroll.offset(), 3);
        scroll.ensure_visible(2);
        assert_eq!(scroll.offset(), 2);
    }

    #[test]
    fn shrinking_content_clamps_offset() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 2);
        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset(), 4);

        scroll.update_dimensions(3, 2);
        assert_eq!(scroll.offset(), 1);
        assert!(scroll.needs_scrollbar());
    }
}
