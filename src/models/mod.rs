mod page;
mod post;

pub use page::{Page, PostsResponse};
pub use post::{Post, Reactions};
