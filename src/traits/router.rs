//! Navigation abstraction.
//!
//! Components never read address state from an ambient global. They are
//! handed a [`Router`] and go through `current_params()` / `navigate()`.

use crate::route::RouteParams;

/// Reads and replaces the current address parameters.
pub trait Router: Send + Sync {
    /// The parameters currently in the address bar.
    fn current_params(&self) -> RouteParams;

    /// Push a new set of parameters, triggering a page reload for it.
    fn navigate(&self, params: RouteParams);
}
