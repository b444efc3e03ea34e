//! Keyboard and mouse handling for the App.
//!
//! Navigation never touches the view directly: it goes through the router,
//! and the event loop reloads whenever the route changes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::route::DisplayMode;
use crate::traits::Router;
use crate::ui::interaction::handle_click_action;

use super::{App, PageView};

/// Lines moved per mouse wheel notch
const WHEEL_LINES: usize = 3;

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('t') => self.toggle_style(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Backspace => {
                self.back();
            }
            KeyCode::Char(']') => self.cycle_limit(true),
            KeyCode::Char('[') => self.cycle_limit(false),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(self.scroll.page_size()),
            KeyCode::PageDown => self.scroll_down(self.scroll.page_size()),
            code => match self.route.mode {
                DisplayMode::Paged => self.handle_paged_key(code),
                DisplayMode::Infinite => self.handle_infinite_key(code),
            },
        }
    }

    fn handle_paged_key(&mut self, code: KeyCode) {
        if !matches!(self.view, PageView::Paged(_)) {
            return;
        }
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.previous_page(),
            KeyCode::Right | KeyCode::Char('l') => self.next_page(),
            KeyCode::Home | KeyCode::Char('g') => {
                self.controls().first();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.controls().last();
            }
            _ => {}
        }
    }

    fn handle_infinite_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll.scroll_to_top();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.scroll.scroll_to_bottom();
            }
            _ => {}
        }
    }

    /// Handle a mouse event: clicks on hit areas, hover and wheel scrolling.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown => self.scroll_down(WHEEL_LINES),
            MouseEventKind::ScrollUp => self.scroll_up(WHEEL_LINES),
            _ => {}
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll.scroll_up(lines, self.tick_count);
        self.mark_dirty();
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll.scroll_down(lines, self.tick_count);
        self.mark_dirty();
    }

    pub fn previous_page(&mut self) {
        self.controls().previous();
    }

    pub fn next_page(&mut self) {
        self.controls().next();
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.controls().go_to(page);
    }

    /// Switch between numbered pages and infinite scroll.
    pub fn toggle_style(&mut self) {
        let params = self.router.current_params();
        tracing::debug!("Toggle style from {:?}", params.mode);
        self.router.navigate(params.toggle_style());
    }

    /// Next (or previous) page size, back on page 1.
    pub fn cycle_limit(&mut self, forward: bool) {
        self.controls().cycle_limit(forward);
    }

    /// Load the current route again, like a browser reload.
    pub fn reload(&mut self) {
        self.router.reload();
    }

    /// Return to the previous route. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        self.router.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryPostSource, MemoryRouter};
    use crate::models::Page;
    use crate::route::RouteParams;
    use crate::ui::interaction::ClickAction;
    use ratatui::layout::Rect;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn paged_app(page: u32, total: u32) -> App {
        let route = RouteParams::new(page, 5, DisplayMode::Paged);
        let router = Arc::new(MemoryRouter::new(route));
        let mut app = App::new(router, Arc::new(InMemoryPostSource::with_count(total)));
        app.view = PageView::Paged(Page::new(Vec::new(), total, 5, route.skip()));
        app
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = paged_app(1, 20);
            app.handle_key(key(code));
            assert!(app.should_quit);
        }

        let mut app = paged_app(1, 20);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_arrow_navigation() {
        let mut app = paged_app(2, 20);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.router.current_params().page, 3);

        app.handle_key(key(KeyCode::Char('h')));
        assert_eq!(app.router.current_params().page, 2);
    }

    #[test]
    fn test_previous_disabled_on_first_page() {
        let mut app = paged_app(1, 20);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.router.current_params().page, 1);
        assert_eq!(app.router.history_len(), 0);
    }

    #[test]
    fn test_first_and_last() {
        let mut app = paged_app(2, 23);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.router.current_params().page, 5);

        app.handle_key(key(KeyCode::Char('g')));
        assert_eq!(app.router.current_params().page, 1);
    }

    #[test]
    fn test_navigation_ignored_while_loading() {
        let mut app = paged_app(2, 20);
        app.view = PageView::Loading;
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.router.current_params().page, 2);
    }

    #[test]
    fn test_toggle_key_preserves_page_and_limit() {
        let mut app = paged_app(3, 20);
        app.handle_key(key(KeyCode::Char('t')));

        let params = app.router.current_params();
        assert_eq!(params.mode, DisplayMode::Infinite);
        assert_eq!(params.page, 3);
        assert_eq!(params.limit, 5);
    }

    #[test]
    fn test_limit_keys_reset_page() {
        let mut app = paged_app(3, 100);
        app.handle_key(key(KeyCode::Char(']')));
        let params = app.router.current_params();
        assert_eq!(params.limit, 10);
        assert_eq!(params.page, 1);

        app.handle_key(key(KeyCode::Char('[')));
        assert_eq!(app.router.current_params().limit, 5);
    }

    #[test]
    fn test_back_key() {
        let mut app = paged_app(2, 20);
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.router.current_params().page, 2);
        assert!(!app.back());
    }

    #[test]
    fn test_scroll_keys() {
        let mut app = paged_app(1, 20);
        app.scroll.update_limits(50, 10);

        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.scroll.offset(), 2);

        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.scroll.offset(), 11);

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.scroll.offset(), 10);
    }

    #[test]
    fn test_click_page_button() {
        let mut app = paged_app(1, 50);
        app.hit_registry
            .register(Rect::new(10, 20, 3, 1), ClickAction::GoToPage(4));

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 11,
            row: 20,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert_eq!(app.router.current_params().page, 4);

        // Miss
        let miss = MouseEvent { column: 0, row: 0, ..click };
        app.handle_mouse(miss);
        assert_eq!(app.router.current_params().page, 4);
    }

    #[test]
    fn test_wheel_scrolls() {
        let mut app = paged_app(1, 20);
        app.scroll.update_limits(50, 10);
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(wheel);
        assert_eq!(app.scroll.offset(), WHEEL_LINES);
    }
}
