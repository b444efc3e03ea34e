//! Hit area system for mouse interactions.
//!
//! Components register hit areas during rendering, and the event loop
//! queries the registry to determine what action to take on mouse events.

use ratatui::layout::{Position, Rect};

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// "‹ Prev" button
    PreviousPage,
    /// "Next ›" button
    NextPage,
    /// A page number in the pagination bar
    GoToPage(u32),
    /// Header button switching between paged and infinite mode
    ToggleStyle,
    /// Page-size selector
    CycleLimit,
    /// "Reload" button on the error panel
    Reload,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. Hover state survives the clear so that a button keeps its
/// highlight across redraws while the pointer rests on it.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (later = on top)
    areas: Vec<HitArea>,
    /// Last known pointer position
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call this at the start of each render.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority where they overlap.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find(x, y).map(|area| area.action)
    }

    fn find(&self, x: u16, y: u16) -> Option<&HitArea> {
        self.areas.iter().rev().find(|area| area.contains(x, y))
    }

    /// Update the pointer position.
    ///
    /// Returns true if the hovered area changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered().map(|area| area.rect);
        self.pointer = Some((x, y));
        let after = self.hovered().map(|area| area.rect);
        before != after
    }

    /// The area under the pointer, if any.
    pub fn hovered(&self) -> Option<&HitArea> {
        let (x, y) = self.pointer?;
        self.find(x, y)
    }

    /// Whether the pointer rests on `rect`.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer
            .is_some_and(|(x, y)| rect.contains(Position::new(x, y)))
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }
}
