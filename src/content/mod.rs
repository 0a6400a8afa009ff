//! Content module - loads posts and their front-matter

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::FrontMatter;
pub use loader::{load_posts, sort_posts, ContentLoader};
pub use post::{slug_from_file_name, Post};
