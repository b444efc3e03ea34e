//! Post list rendering shared by both pagination styles.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::models::Post;
use crate::ui::text_wrapping::wrap_text;
use crate::ui::theme::{COLOR_BODY, COLOR_DIM, COLOR_HEADER};

/// Lines for one post: wrapped title, wrapped body, optional metadata and a
/// trailing blank line.
pub fn post_lines(post: &Post, width: usize) -> Vec<Line<'static>> {
    let label = format!("#{:<4}", post.id);
    let indent = " ".repeat(label.width());
    let content_width = width.saturating_sub(label.width()).max(10);

    let mut lines = Vec::new();

    let title_style = Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD);
    for (i, chunk) in wrap_text(&post.title, content_width).into_iter().enumerate() {
        let prefix = if i == 0 { label.clone() } else { indent.clone() };
        lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(COLOR_DIM)),
            Span::styled(chunk, title_style),
        ]));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(label, Style::default().fg(COLOR_DIM))));
    }

    for chunk in wrap_text(&post.body, content_width) {
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(chunk, Style::default().fg(COLOR_BODY)),
        ]));
    }

    if let Some(meta) = post.meta_line() {
        for chunk in wrap_text(&meta, content_width) {
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(chunk, Style::default().fg(COLOR_DIM)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines
}

/// Lines for a sequence of posts.
pub fn posts_lines<'a>(posts: impl IntoIterator<Item = &'a Post>, width: usize) -> Vec<Line<'static>> {
    posts
        .into_iter()
        .flat_map(|post| post_lines(post, width))
        .collect()
}
