use serde::{Deserialize, Serialize};

use super::Post;

/// Wire format of `GET /posts?limit={L}&skip={S}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

/// One page of posts plus the server-reported size of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<Post>,
    pub total: u32,
    pub limit: u32,
    /// Zero-based offset of the first item in `items`.
    pub skip: u32,
}

impl Page {
    pub fn new(items: Vec<Post>, total: u32, limit: u32, skip: u32) -> Self {
        Self {
            items,
            total,
            limit,
            skip,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based index range of the items on this page, or `None` for an empty page.
    pub fn item_range(&self) -> Option<(u32, u32)> {
        if self.items.is_empty() {
            return None;
        }
        let first = self.skip + 1;
        let last = self.skip + self.items.len() as u32;
        Some((first, last))
    }
}

impl From<PostsResponse> for Page {
    fn from(response: PostsResponse) -> Self {
        Self {
            items: response.posts,
            total: response.total,
            limit: response.limit,
            skip: response.skip,
        }
    }
}
