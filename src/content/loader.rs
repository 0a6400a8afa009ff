//! Content loader - loads posts from the source directory

use std::fs;
use std::path::Path;

use super::{FrontMatter, Post};
use crate::config::OrderBy;
use crate::error::{FeedError, MetadataError};
use crate::Feedgen;

/// Loads posts from the configured source directory
pub struct ContentLoader<'a> {
    feedgen: &'a Feedgen,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(feedgen: &'a Feedgen) -> Self {
        Self { feedgen }
    }

    /// Load all posts, ordered as configured
    pub fn load_posts(&self) -> Result<Vec<Post>, FeedError> {
        let mut posts = load_posts(&self.feedgen.source_dir)?;
        sort_posts(&mut posts, self.feedgen.config.order_by);
        Ok(posts)
    }
}

/// Load every entry of `dir` as a post, in file-name order.
///
/// Listing the directory or reading any entry is fatal. Entries whose
/// front-matter can't be parsed are skipped with a warning.
pub fn load_posts(dir: &Path) -> Result<Vec<Post>, FeedError> {
    let read_dir_err = |source: std::io::Error| FeedError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_dir_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_dir_err)?;
    entries.sort_by_key(|e| e.file_name());

    let mut posts = Vec::with_capacity(entries.len());

    for entry in entries {
        let path = entry.path();
        let bytes = fs::read(&path).map_err(|source| FeedError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let file_name = entry.file_name().to_string_lossy().into_owned();

        match parse_post(bytes, &file_name, &path) {
            Ok(post) => {
                tracing::debug!("Loaded {:?} as {:?}", path, post.slug);
                posts.push(post);
            }
            Err(e) => {
                tracing::warn!("Skipping {:?}: {}", path, e);
            }
        }
    }

    tracing::info!("Loaded {} posts from {:?}", posts.len(), dir);
    Ok(posts)
}

fn parse_post(bytes: Vec<u8>, file_name: &str, path: &Path) -> Result<Post, MetadataError> {
    let content = String::from_utf8(bytes)?;
    let fm = FrontMatter::parse(&content)?;
    Post::from_front_matter(fm, file_name, path.to_path_buf())
}

/// Reorder posts in place. Sorting is stable, so posts sharing a date keep
/// their file-name order.
pub fn sort_posts(posts: &mut [Post], order_by: OrderBy) {
    match order_by {
        OrderBy::Name => {}
        OrderBy::Date => posts.sort_by(|a, b| a.date.cmp(&b.date)),
        OrderBy::DateDesc => posts.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_posts_in_file_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "b.md",
            "---\ntitle: B\ndate: 2024-01-01\n---\nbody",
        );
        write(
            dir.path(),
            "a.md",
            "---\ntitle: A\ndate: 2024-02-02\n---\nbody",
        );
        write(dir.path(), "c", "title: C\n");

        let posts = load_posts(dir.path()).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "b", "c"]);
        assert_eq!(posts[0].title, "A");
        assert_eq!(posts[0].source, dir.path().join("a.md"));
    }

    #[test]
    fn test_malformed_front_matter_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "good.md", "---\ntitle: Good\n---\n");
        write(dir.path(), "bad.md", "---\ntitle: [oops\n---\n");
        write(dir.path(), "bad-date.md", "---\ndate: someday\n---\n");
        write(dir.path(), "far-future.md", "---\ndate: +12345-01-01\n---\n");
        fs::write(dir.path().join("binary.md"), [0xff, 0xfe, 0x00]).unwrap();

        let posts = load_posts(dir.path()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "good");
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = load_posts(&missing).unwrap_err();
        assert!(matches!(err, FeedError::ReadDir { ref path, .. } if *path == missing));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_subdirectory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.md", "title: A\n");
        fs::create_dir(dir.path().join("drafts")).unwrap();

        let err = load_posts(dir.path()).unwrap_err();
        assert!(matches!(err, FeedError::ReadFile { ref path, .. } if path.ends_with("drafts")));
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_posts(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_sort_posts() {
        let post = |slug: &str, date: &str| {
            let fm = FrontMatter {
                date: Some(date.to_string()),
                ..Default::default()
            };
            Post::from_front_matter(fm, slug, PathBuf::from(slug)).unwrap()
        };
        let mut posts = vec![
            post("a", "2024-03-01"),
            post("b", "2024-01-01"),
            post("c", "2024-03-01"),
        ];

        sort_posts(&mut posts, OrderBy::Name);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(slugs, ["a", "b", "c"]);

        sort_posts(&mut posts, OrderBy::Date);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(slugs, ["b", "a", "c"]);

        sort_posts(&mut posts, OrderBy::DateDesc);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(slugs, ["a", "c", "b"]);
    }
}
