//! In-process router.
//!
//! Stands in for the browser address bar: holds the current
//! [`RouteParams`], a back-history, and a `tokio::sync::watch` channel the
//! event loop listens on to reload the page whenever the route changes.

use std::sync::Mutex;
use tokio::sync::watch;

use crate::route::RouteParams;
use crate::traits::Router;

/// Router backed by memory.
#[derive(Debug)]
pub struct MemoryRouter {
    current: watch::Sender<RouteParams>,
    history: Mutex<Vec<RouteParams>>,
}

impl MemoryRouter {
    pub fn new(initial: RouteParams) -> Self {
        let (current, _) = watch::channel(initial);
        Self {
            current,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Receiver that is notified on every navigation, back and reload.
    pub fn subscribe(&self) -> watch::Receiver<RouteParams> {
        self.current.subscribe()
    }

    /// Return to the previous route. Returns false when there is no history.
    pub fn back(&self) -> bool {
        let previous = self
            .history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop();
        match previous {
            Some(params) => {
                tracing::debug!("Router back to {}", params);
                self.current.send_replace(params);
                true
            }
            None => false,
        }
    }

    /// Re-announce the current route so listeners load it again.
    pub fn reload(&self) {
        let params = *self.current.borrow();
        tracing::debug!("Router reload {}", params);
        self.current.send_replace(params);
    }

    pub fn history_len(&self) -> usize {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new(RouteParams::default())
    }
}

impl Router for MemoryRouter {
    fn current_params(&self) -> RouteParams {
        *self.current.borrow()
    }

    fn navigate(&self, params: RouteParams) {
        let previous = self.current_params();
        if previous == params {
            return;
        }
        tracing::info!("Navigate {} -> {}", previous, params);
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(previous);
        self.current.send_replace(params);
    }
}
