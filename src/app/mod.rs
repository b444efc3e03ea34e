//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`PageView`] - What the page body currently shows
//! - [`AppMessage`] - Messages for async communication
//!
//! The app reacts to route changes by loading the route's first page in a
//! background task. In infinite mode it then watches the list's sentinel and
//! fetches further pages as it comes into view.

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::PageView;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::adapters::MemoryRouter;
use crate::domain::ScrollState;
use crate::error::FetchError;
use crate::infinite::{InfiniteLoader, ViewportObserver, SENTINEL, SENTINEL_THRESHOLD};
use crate::models::Page;
use crate::pagination::PaginationControls;
use crate::route::{DisplayMode, RouteParams};
use crate::traits::{PostSource, Router, Subscription, VisibilityObserver};
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::BOUNDARY_HINT_TICKS;

/// Ticks between spinner frames (16ms tick)
const SPINNER_TICKS: u64 = 6;

/// Main application state
pub struct App {
    /// Address state shared with the controls
    pub router: Arc<MemoryRouter>,
    /// Where posts come from
    source: Arc<dyn PostSource>,
    /// Route the current view was loaded for
    pub route: RouteParams,
    /// Page body
    pub view: PageView,
    /// Scroll position of the post list
    pub scroll: ScrollState,
    /// Fed by the renderer, evaluated after each draw
    pub observer: ViewportObserver,
    /// Active sentinel observation (infinite mode only)
    sentinel: Option<Subscription>,
    /// Clickable regions registered during render
    pub hit_registry: HitAreaRegistry,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into fetch tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Dirty flag: set when state changes and a redraw is needed
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Incremented on every route load; stale messages carry an older value
    generation: u64,
}

impl App {
    /// Create a new app. Nothing is fetched until [`App::load_route`].
    pub fn new(router: Arc<MemoryRouter>, source: Arc<dyn PostSource>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let route = router.current_params();

        Self {
            router,
            source,
            route,
            view: PageView::Loading,
            scroll: ScrollState::new(),
            observer: ViewportObserver::new(),
            sentinel: None,
            hit_registry: HitAreaRegistry::new(),
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a sentinel observation is active.
    pub fn is_observing_sentinel(&self) -> bool {
        self.sentinel.is_some()
    }

    /// Controls bound to the router and the current collection size.
    pub fn controls(&self) -> PaginationControls<'_, MemoryRouter> {
        PaginationControls::new(self.router.as_ref(), self.view.total().unwrap_or(0))
    }

    /// Start loading `route` from scratch.
    ///
    /// Paged mode fetches the requested page; infinite mode always seeds from
    /// page 1. Anything still in flight for the previous route is discarded
    /// when it arrives.
    pub fn load_route(&mut self, route: RouteParams) {
        self.generation += 1;
        self.route = route;
        self.view = PageView::Loading;
        self.sentinel = None;
        self.scroll.reset();
        self.mark_dirty();

        let page = match route.mode {
            DisplayMode::Paged => route.page,
            DisplayMode::Infinite => 1,
        };
        tracing::info!(generation = self.generation, "Loading {}", route);

        let generation = self.generation;
        self.spawn_fetch(route.limit, page, move |result| AppMessage::PageLoaded {
            generation,
            route,
            result,
        });
    }

    fn spawn_fetch<F>(&self, limit: u32, page: u32, into_message: F)
    where
        F: FnOnce(Result<Page, FetchError>) -> AppMessage + Send + 'static,
    {
        let source = Arc::clone(&self.source);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_page(limit, page).await;
            let _ = tx.send(into_message(result));
        });
    }

    /// Handle a message from a fetch task or the observer.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if msg.generation() != self.generation {
            tracing::debug!(
                stale = msg.generation(),
                current = self.generation,
                "Discarding stale message"
            );
            return;
        }

        match msg {
            AppMessage::PageLoaded { route, result, .. } => self.on_page_loaded(route, result),
            AppMessage::ChunkLoaded { result, .. } => self.on_chunk_loaded(result),
            AppMessage::SentinelVisible { .. } => self.on_sentinel_visible(),
        }
        self.mark_dirty();
    }

    fn on_page_loaded(&mut self, route: RouteParams, result: Result<Page, FetchError>) {
        let page = match result {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(code = e.error_code(), "Failed to load {}: {}", route, e);
                self.view = PageView::Failed(e);
                return;
            }
        };

        match route.mode {
            DisplayMode::Paged => {
                tracing::debug!(items = page.items.len(), total = page.total, "Page loaded");
                self.view = PageView::Paged(page);
            }
            DisplayMode::Infinite => {
                let loader = InfiniteLoader::new(route.limit, page);
                let exhausted = loader.is_exhausted();
                self.view = PageView::Infinite(loader);
                if !exhausted {
                    self.observe_sentinel();
                }
            }
        }
    }

    fn on_sentinel_visible(&mut self) {
        let PageView::Infinite(loader) = &mut self.view else {
            return;
        };
        let Some(request) = loader.begin_load() else {
            return;
        };

        let generation = self.generation;
        self.spawn_fetch(request.limit, request.page, move |result| {
            AppMessage::ChunkLoaded { generation, result }
        });
    }

    fn on_chunk_loaded(&mut self, result: Result<Page, FetchError>) {
        let PageView::Infinite(loader) = &mut self.view else {
            return;
        };
        let loaded = result.is_ok();
        loader.finish_load(result);

        if loader.is_exhausted() {
            self.sentinel = None;
        } else if loaded {
            // A fresh observation fires again if the sentinel is still in view.
            self.observe_sentinel();
        }
        // After a failure the old observation stays armed: it fires again
        // only once the sentinel leaves the viewport and comes back.
    }

    fn observe_sentinel(&mut self) {
        // Cancel the old observation before registering its replacement.
        self.sentinel = None;

        let tx = self.message_tx.clone();
        let generation = self.generation;
        let subscription = self.observer.observe(
            SENTINEL,
            SENTINEL_THRESHOLD,
            Box::new(move || {
                let _ = tx.send(AppMessage::SentinelVisible { generation });
            }),
        );
        self.sentinel = Some(subscription);
    }

    /// Check visibility after a draw. Returns how many callbacks fired.
    pub fn evaluate_visibility(&self) -> usize {
        self.observer.evaluate()
    }

    /// Advance animations by one tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.view.is_loading() && self.tick_count % SPINNER_TICKS == 0 {
            self.mark_dirty();
        }
        // Put the key hints back once the boundary hint expires.
        if self.scroll.boundary_hit_expired(self.tick_count, BOUNDARY_HINT_TICKS) {
            self.mark_dirty();
        }
    }

    /// Current spinner frame index.
    pub fn spinner_frame(&self) -> usize {
        (self.tick_count / SPINNER_TICKS) as usize
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPostSource;
    use crate::infinite::{LoaderStatus, Region};

    fn app_with(source: Arc<InMemoryPostSource>, route: RouteParams) -> App {
        let router = Arc::new(MemoryRouter::new(route));
        App::new(router, source)
    }

    async fn pump(app: &mut App) {
        let msg = app
            .message_rx
            .as_mut()
            .unwrap()
            .recv()
            .await
            .expect("message channel closed");
        app.handle_message(msg);
    }

    fn show_sentinel(app: &App) {
        app.observer.set_viewport(Region::new(0, 100));
        app.observer.set_region(SENTINEL, Region::new(10, 1));
    }

    #[tokio::test]
    async fn test_paged_load() {
        let source = Arc::new(InMemoryPostSource::with_count(12));
        let mut app = app_with(source.clone(), RouteParams::new(3, 5, DisplayMode::Paged));

        app.load_route(app.route);
        assert!(matches!(app.view, PageView::Loading));
        pump(&mut app).await;

        match &app.view {
            PageView::Paged(page) => {
                assert_eq!(page.items.len(), 2);
                assert_eq!(page.skip, 10);
                assert_eq!(page.items[0].id, 11);
            }
            other => panic!("unexpected view {:?}", other),
        }
        assert_eq!(source.calls(), vec![(5, 3)]);
    }

    #[tokio::test]
    async fn test_initial_failure_shows_error_view() {
        let source = Arc::new(InMemoryPostSource::with_count(12));
        source.fail_page(1);
        let mut app = app_with(source, RouteParams::default());

        app.load_route(app.route);
        pump(&mut app).await;

        assert!(matches!(app.view, PageView::Failed(_)));
    }

    #[tokio::test]
    async fn test_stale_page_result_discarded() {
        let source = Arc::new(InMemoryPostSource::with_count(30));
        let mut app = app_with(source, RouteParams::new(1, 5, DisplayMode::Paged));

        app.load_route(RouteParams::new(1, 5, DisplayMode::Paged));
        app.load_route(RouteParams::new(4, 5, DisplayMode::Paged));

        pump(&mut app).await;
        pump(&mut app).await;

        match &app.view {
            PageView::Paged(page) => assert_eq!(page.skip, 15),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_infinite_seeds_from_first_page() {
        let source = Arc::new(InMemoryPostSource::with_count(12));
        let mut app = app_with(source.clone(), RouteParams::new(3, 5, DisplayMode::Infinite));

        app.load_route(app.route);
        pump(&mut app).await;

        assert_eq!(source.calls(), vec![(5, 1)]);
        match &app.view {
            PageView::Infinite(loader) => {
                assert_eq!(loader.items().len(), 5);
                assert_eq!(loader.next_page(), 2);
            }
            other => panic!("unexpected view {:?}", other),
        }
        assert!(app.is_observing_sentinel());
    }

    #[tokio::test]
    async fn test_sentinel_drives_loads_until_exhausted() {
        let source = Arc::new(InMemoryPostSource::with_count(12));
        let mut app = app_with(source.clone(), RouteParams::new(1, 5, DisplayMode::Infinite));
        app.load_route(app.route);
        pump(&mut app).await;

        show_sentinel(&app);

        // Visible -> SentinelVisible -> ChunkLoaded
        assert_eq!(app.evaluate_visibility(), 1);
        pump(&mut app).await;
        assert!(app.view.is_loading());
        pump(&mut app).await;

        // Re-observed, still visible: loads again
        assert_eq!(app.evaluate_visibility(), 1);
        pump(&mut app).await;
        pump(&mut app).await;

        let PageView::Infinite(loader) = &app.view else {
            panic!("expected infinite view");
        };
        assert_eq!(loader.items().len(), 12);
        assert_eq!(loader.status(), LoaderStatus::Exhausted);
        assert!(!app.is_observing_sentinel());
        assert_eq!(app.evaluate_visibility(), 0);
        assert_eq!(source.calls(), vec![(5, 1), (5, 2), (5, 3)]);
    }

    #[tokio::test]
    async fn test_repeated_sentinel_does_not_double_fetch() {
        let source = Arc::new(InMemoryPostSource::with_count(30));
        let mut app = app_with(source.clone(), RouteParams::new(1, 5, DisplayMode::Infinite));
        app.load_route(app.route);
        pump(&mut app).await;

        let generation = app.generation();
        app.handle_message(AppMessage::SentinelVisible { generation });
        app.handle_message(AppMessage::SentinelVisible { generation });
        pump(&mut app).await;

        assert_eq!(source.calls(), vec![(5, 1), (5, 2)]);
    }

    #[tokio::test]
    async fn test_chunk_failure_returns_to_idle() {
        let source = Arc::new(InMemoryPostSource::with_count(30));
        source.fail_page(2);
        let mut app = app_with(source.clone(), RouteParams::new(1, 5, DisplayMode::Infinite));
        app.load_route(app.route);
        pump(&mut app).await;

        let generation = app.generation();
        app.handle_message(AppMessage::SentinelVisible { generation });
        pump(&mut app).await;

        let PageView::Infinite(loader) = &app.view else {
            panic!("expected infinite view, not an error page");
        };
        assert!(!loader.is_loading());
        assert_eq!(loader.items().len(), 5);
        assert_eq!(loader.next_page(), 2);
        assert!(app.is_observing_sentinel());
    }

    #[tokio::test]
    async fn test_failed_chunk_waits_for_scroll_before_retry() {
        let source = Arc::new(InMemoryPostSource::with_count(30));
        source.fail_page(2);
        let mut app = app_with(source.clone(), RouteParams::new(1, 5, DisplayMode::Infinite));
        app.load_route(app.route);
        pump(&mut app).await;

        show_sentinel(&app);
        assert_eq!(app.evaluate_visibility(), 1);
        pump(&mut app).await; // sentinel
        pump(&mut app).await; // failed chunk

        // Sentinel still on screen: later draws must not refetch.
        for _ in 0..3 {
            assert_eq!(app.evaluate_visibility(), 0);
        }
        assert_eq!(source.calls(), vec![(5, 1), (5, 2)]);

        // Scrolling it away and back is the retry.
        source.heal_page(2);
        app.observer.set_region(SENTINEL, Region::new(500, 1));
        assert_eq!(app.evaluate_visibility(), 0);
        show_sentinel(&app);
        assert_eq!(app.evaluate_visibility(), 1);
        pump(&mut app).await;
        pump(&mut app).await;

        assert_eq!(source.calls(), vec![(5, 1), (5, 2), (5, 2)]);
        let PageView::Infinite(loader) = &app.view else {
            panic!("expected infinite view");
        };
        assert_eq!(loader.items().len(), 10);
    }

    #[tokio::test]
    async fn test_chunk_from_previous_route_discarded() {
        let source = Arc::new(InMemoryPostSource::with_count(30));
        let mut app = app_with(source, RouteParams::new(1, 5, DisplayMode::Infinite));
        app.load_route(app.route);
        pump(&mut app).await;

        let old_generation = app.generation();
        app.handle_message(AppMessage::SentinelVisible { generation: old_generation });
        app.load_route(RouteParams::new(1, 10, DisplayMode::Infinite));

        // Chunk for the old loader, then the new seed.
        pump(&mut app).await;
        pump(&mut app).await;

        let PageView::Infinite(loader) = &app.view else {
            panic!("expected infinite view");
        };
        assert_eq!(loader.limit(), 10);
        assert_eq!(loader.items().len(), 10);
    }

    #[tokio::test]
    async fn test_tick_redraws_while_loading() {
        let source = Arc::new(InMemoryPostSource::with_count(5));
        let mut app = app_with(source, RouteParams::default());
        app.load_route(app.route);
        app.needs_redraw = false;

        for _ in 0..SPINNER_TICKS {
            app.tick();
        }
        assert!(app.needs_redraw);
        assert_eq!(app.spinner_frame(), 1);
    }

    #[tokio::test]
    async fn test_tick_redraws_when_boundary_hint_expires() {
        let source = Arc::new(InMemoryPostSource::with_count(5));
        let mut app = app_with(source, RouteParams::default());
        app.view = PageView::Paged(Page::new(Vec::new(), 5, 5, 0));
        app.scroll.update_limits(50, 10);
        app.scroll_up(1);
        app.needs_redraw = false;

        for _ in 0..BOUNDARY_HINT_TICKS - 1 {
            app.tick();
        }
        assert!(!app.needs_redraw);

        app.tick();
        assert!(app.needs_redraw);
    }
}
