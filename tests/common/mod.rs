//! Common test utilities for integration tests.
//!
//! Fixtures for posts payloads, an app wired to an in-memory source, and
//! helpers to drive the message loop and read back a rendered frame.
//!
//! # Example
//!
//! ```ignore
//! let (mut app, source) = test_app(RouteParams::default(), 12);
//! app.load_route(app.route);
//! pump(&mut app).await;
//! let screen = render_to_string(&mut app, 80, 24);
//! ```

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::{json, Value};

use postpager::adapters::{InMemoryPostSource, MemoryRouter};
use postpager::app::App;
use postpager::route::RouteParams;

/// A dummyjson-shaped posts payload with ids `skip+1 ..= skip+count`.
#[allow(dead_code)]
pub fn posts_json(count: u32, total: u32, limit: u32, skip: u32) -> Value {
    let posts: Vec<Value> = (skip + 1..=skip + count)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Post {}", id),
                "body": format!("Body of post {}", id),
                "tags": ["history"],
                "reactions": { "likes": id, "dislikes": 0 },
                "views": id * 10,
                "userId": 1
            })
        })
        .collect();

    json!({ "posts": posts, "total": total, "skip": skip, "limit": limit })
}

/// App over `count` in-memory posts, starting at `route`.
#[allow(dead_code)]
pub fn test_app(route: RouteParams, count: u32) -> (App, Arc<InMemoryPostSource>) {
    let source = Arc::new(InMemoryPostSource::with_count(count));
    let router = Arc::new(MemoryRouter::new(route));
    (App::new(router, source.clone()), source)
}

/// Receive one message and hand it to the app.
#[allow(dead_code)]
pub async fn pump(app: &mut App) {
    let msg = app
        .message_rx
        .as_mut()
        .expect("receiver already taken")
        .recv()
        .await
        .expect("message channel closed");
    app.handle_message(msg);
}

/// Render the app once and return the screen as newline-joined rows.
#[allow(dead_code)]
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| postpager::ui::render(f, app))
        .unwrap();
    app.needs_redraw = false;

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
