//! postpager - numbered pagination vs. infinite scroll, in the terminal
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infinite;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod posts;
pub mod prelude;
pub mod route;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
