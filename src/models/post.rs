use serde::{Deserialize, Serialize};

/// Like/dislike counters attached to a post.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reactions {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
}

/// A single post returned by the posts API.
///
/// Only `id`, `title` and `body` are required. The remaining fields are
/// display metadata that older or trimmed-down backends may omit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub reactions: Option<Reactions>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<u64>,
}

impl Post {
    /// Create a post with no metadata.
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            tags: Vec::new(),
            views: None,
            reactions: None,
            user_id: None,
        }
    }

    /// One-line metadata summary, e.g. `#history #crime · 305 views · 192 likes`.
    ///
    /// Returns `None` when the post carries no metadata at all.
    pub fn meta_line(&self) -> Option<String> {
        let mut parts = Vec::new();

        if !self.tags.is_empty() {
            let tags: Vec<String> = self.tags.iter().map(|t| format!("#{}", t)).collect();
            parts.push(tags.join(" "));
        }
        if let Some(views) = self.views {
            parts.push(format!("{} views", views));
        }
        if let Some(reactions) = self.reactions {
            parts.push(format!(
                "{} likes · {} dislikes",
                reactions.likes, reactions.dislikes
            ));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}
