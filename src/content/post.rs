//! Post model

use chrono::{DateTime, FixedOffset};
use std::path::PathBuf;

use super::frontmatter::{epoch, FrontMatter};
use crate::error::MetadataError;

/// A blog post
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Post author
    pub author: String,

    /// Publication date
    pub date: DateTime<FixedOffset>,

    /// Short summary shown in feed readers
    pub description: String,

    /// Slug (file name without `.md`)
    pub slug: String,

    /// Full source file path
    pub source: PathBuf,
}

impl Post {
    /// Build a post from parsed front-matter. Absent keys become empty values
    /// and an absent date becomes the Unix epoch.
    pub fn from_front_matter(
        fm: FrontMatter,
        file_name: &str,
        source: PathBuf,
    ) -> Result<Self, MetadataError> {
        let date = fm.parse_date()?.unwrap_or_else(epoch);

        Ok(Self {
            title: fm.title.unwrap_or_default(),
            author: fm.author.unwrap_or_default(),
            date,
            description: fm.description.unwrap_or_default(),
            slug: slug_from_file_name(file_name).to_string(),
            source,
        })
    }

    /// Canonical article URL for this post
    pub fn permalink(&self, base_url: &str, posts_path: &str) -> String {
        let posts_path = posts_path.trim_matches('/');
        if posts_path.is_empty() {
            format!("{}/{}.html", base_url.trim_end_matches('/'), self.slug)
        } else {
            format!(
                "{}/{}/{}.html",
                base_url.trim_end_matches('/'),
                posts_path,
                self.slug
            )
        }
    }
}

/// Strip the `.md` suffix; names without it are used unchanged
pub fn slug_from_file_name(file_name: &str) -> &str {
    file_name.strip_suffix(".md").unwrap_or(file_name)
}
