//! Previous/next and page-number navigation.

use crate::route::cycle_limit;
use crate::traits::Router;

use super::window::{page_window, total_pages, PageToken};

/// Navigation for one rendered page of results.
///
/// Built fresh for every render from the router and the collection size the
/// server reported. Every method that navigates returns whether a navigation
/// actually happened; out-of-range targets are ignored.
pub struct PaginationControls<'a, R: Router + ?Sized> {
    router: &'a R,
    total_pages: u32,
}

impl<'a, R: Router + ?Sized> PaginationControls<'a, R> {
    pub fn new(router: &'a R, total_items: u32) -> Self {
        let limit = router.current_params().limit;
        Self {
            router,
            total_pages: total_pages(total_items, limit),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.router.current_params().page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn tokens(&self) -> Vec<PageToken> {
        page_window(self.current_page(), self.total_pages)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page() > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page() < self.total_pages
    }

    pub fn previous(&self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        // From a route past the end, "previous" is the last real page.
        self.go_to((self.current_page() - 1).min(self.total_pages))
    }

    pub fn next(&self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.go_to(self.current_page() + 1)
    }

    pub fn first(&self) -> bool {
        self.go_to(1)
    }

    pub fn last(&self) -> bool {
        self.go_to(self.total_pages)
    }

    /// Navigate to `page`, keeping every other parameter.
    pub fn go_to(&self, page: u32) -> bool {
        if page < 1 || page > self.total_pages {
            tracing::debug!(page, total = self.total_pages, "Ignoring out-of-range page");
            return false;
        }
        let params = self.router.current_params();
        if params.page == page {
            return false;
        }
        self.router.navigate(params.with_page(page));
        true
    }

    /// Handle a click on a page token. Ellipsis markers do nothing.
    pub fn activate(&self, token: PageToken) -> bool {
        match token.page() {
            Some(page) => self.go_to(page),
            None => false,
        }
    }

    /// Switch to the next (or previous) page size, back on page 1.
    pub fn cycle_limit(&self, forward: bool) -> bool {
        let params = self.router.current_params();
        let limit = cycle_limit(params.limit, forward);
        self.router.navigate(params.with_limit(limit));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryRouter;
    use crate::route::{DisplayMode, RouteParams};

    fn router_at(page: u32, limit: u32) -> MemoryRouter {
        MemoryRouter::new(RouteParams::new(page, limit, DisplayMode::Paged))
    }

    #[test]
    fn test_previous_disabled_on_first_page() {
        let router = router_at(1, 5);
        let controls = PaginationControls::new(&router, 12);

        assert!(!controls.can_go_previous());
        assert!(!controls.previous());
        assert_eq!(router.current_params().page, 1);
    }

    #[test]
    fn test_previous_from_past_the_end_lands_on_last_page() {
        let router = router_at(100, 5);
        let controls = PaginationControls::new(&router, 12);

        assert!(controls.can_go_previous());
        assert!(!controls.can_go_next());
        assert!(controls.previous());
        assert_eq!(router.current_params().page, 3);
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        let router = router_at(3, 5);
        let controls = PaginationControls::new(&router, 12);

        assert_eq!(controls.total_pages(), 3);
        assert!(!controls.can_go_next());
        assert!(!controls.next());
        assert_eq!(router.history_len(), 0);
    }

    #[test]
    fn test_next_and_previous_preserve_limit() {
        let router = router_at(2, 10);
        let controls = PaginationControls::new(&router, 100);

        assert!(controls.next());
        assert_eq!(router.current_params(), RouteParams::new(3, 10, DisplayMode::Paged));

        assert!(controls.previous());
        assert_eq!(router.current_params(), RouteParams::new(2, 10, DisplayMode::Paged));
    }

    #[test]
    fn test_out_of_range_navigation_is_ignored() {
        let router = router_at(2, 5);
        let controls = PaginationControls::new(&router, 12);

        assert!(!controls.go_to(0));
        assert!(!controls.go_to(4));
        assert_eq!(router.current_params().page, 2);
    }

    #[test]
    fn test_activate_tokens() {
        let router = router_at(5, 5);
        let controls = PaginationControls::new(&router, 50);

        let tokens = controls.tokens();
        let ellipsis = tokens
            .iter()
            .copied()
            .find(|t| t.page().is_none())
            .expect("window of 10 pages at page 5 has an ellipsis");
        assert!(!controls.activate(ellipsis));

        assert!(controls.activate(PageToken::Page(10)));
        assert_eq!(router.current_params().page, 10);
    }

    #[test]
    fn test_first_and_last() {
        let router = router_at(4, 5);
        let controls = PaginationControls::new(&router, 42);

        assert!(controls.last());
        assert_eq!(router.current_params().page, 9);
        assert!(controls.first());
        assert_eq!(router.current_params().page, 1);
        // Already there.
        assert!(!controls.first());
    }

    #[test]
    fn test_cycle_limit_resets_page() {
        let router = router_at(3, 5);
        let controls = PaginationControls::new(&router, 42);

        assert!(controls.cycle_limit(true));
        assert_eq!(router.current_params(), RouteParams::new(1, 10, DisplayMode::Paged));
    }
}
