//! Scroll state management.
//!
//! [`ScrollState`] tracks how far the post list is scrolled, measured in
//! rendered lines from the top. The renderer reports content and viewport
//! sizes each frame via [`ScrollState::update_limits`], which keeps the offset
//! clamped.

/// Which scroll boundary was hit (for visual feedback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBoundary {
    Top,
    Bottom,
}

/// Line-based scroll position.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// First visible content line
    offset: usize,
    /// Largest valid offset (calculated during render)
    max_offset: usize,
    /// Total content lines from last render
    content_lines: usize,
    /// Visible lines from last render
    viewport_height: usize,
    /// Scroll boundary hit state (for visual feedback)
    boundary_hit: Option<ScrollBoundary>,
    /// Tick counter when boundary was hit
    boundary_hit_tick: u64,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn content_lines(&self) -> usize {
        self.content_lines
    }

    /// Lines moved by a page-up/page-down, keeping one line of context.
    pub fn page_size(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }

    /// Scroll towards the start of the list.
    ///
    /// Returns true if the scroll position changed.
    pub fn scroll_up(&mut self, lines: usize, tick: u64) -> bool {
        let old = self.offset;
        self.offset = self.offset.saturating_sub(lines);
        if old == 0 {
            self.record_boundary_hit(ScrollBoundary::Top, tick);
        }
        old != self.offset
    }

    /// Scroll towards the end of the list.
    ///
    /// Returns true if the scroll position changed.
    pub fn scroll_down(&mut self, lines: usize, tick: u64) -> bool {
        let old = self.offset;
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
        if old == self.max_offset {
            self.record_boundary_hit(ScrollBoundary::Bottom, tick);
        }
        old != self.offset
    }

    pub fn scroll_to_top(&mut self) -> bool {
        let changed = self.offset != 0;
        self.offset = 0;
        changed
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        let changed = self.offset != self.max_offset;
        self.offset = self.max_offset;
        changed
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset
    }

    /// Record the size of the content and of the area it is drawn in.
    pub fn update_limits(&mut self, content_lines: usize, viewport_height: usize) {
        self.content_lines = content_lines;
        self.viewport_height = viewport_height;
        self.max_offset = content_lines.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }

    fn record_boundary_hit(&mut self, boundary: ScrollBoundary, tick: u64) {
        self.boundary_hit = Some(boundary);
        self.boundary_hit_tick = tick;
    }

    /// Boundary hit within the last `duration_ticks` ticks, if any.
    pub fn recent_boundary_hit(&self, current_tick: u64, duration_ticks: u64) -> Option<ScrollBoundary> {
        self.boundary_hit
            .filter(|_| current_tick < self.boundary_hit_tick + duration_ticks)
    }

    /// Whether a boundary hint shown at `current_tick - 1` is gone at
    /// `current_tick`, so the footer needs one more redraw.
    pub fn boundary_hit_expired(&self, current_tick: u64, duration_ticks: u64) -> bool {
        self.boundary_hit.is_some() && current_tick == self.boundary_hit_tick + duration_ticks
    }

    /// Back to the top with no limits, for a freshly loaded page.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
