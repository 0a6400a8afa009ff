//! Generate the feeds

use crate::content::loader::ContentLoader;
use crate::error::FeedError;
use crate::generator::{self, SiteIdentity};
use crate::Feedgen;

/// Load posts from the source directory, then write RSS and Atom feeds
pub fn run(feedgen: &Feedgen) -> Result<(), FeedError> {
    let start = std::time::Instant::now();

    let posts = ContentLoader::new(feedgen).load_posts()?;

    let site = SiteIdentity::from_config(&feedgen.config, feedgen.generated_at);
    generator::build_and_write(&posts, &site, &feedgen.output_paths())?;

    tracing::info!(
        "Wrote {} items in {:.2}s",
        posts.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OrderBy, SiteConfig};
    use std::fs;
    use std::path::Path;

    fn post(dir: &Path, name: &str, title: &str, date: &str) {
        fs::write(
            dir.join(name),
            format!("---\ntitle: {title}\nauthor: X\ndate: {date}\n---\n"),
        )
        .unwrap();
    }

    #[test]
    fn test_generate_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("content/posts");
        fs::create_dir_all(&source).unwrap();
        post(&source, "hello-world.md", "Hello", "2024-01-01");

        let feedgen = Feedgen::new(dir.path(), None).unwrap();
        run(&feedgen).unwrap();

        let rss_xml = fs::read_to_string(dir.path().join("docs/rss.xml")).unwrap();
        assert!(rss_xml.contains("https://snow-dev.com/posts/hello-world.html"));
        assert!(dir.path().join("docs/atom.xml").exists());
    }

    #[test]
    fn test_unreadable_source_leaves_outputs_alone() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("rss.xml"), "old rss").unwrap();
        fs::write(docs.join("atom.xml"), "old atom").unwrap();

        let feedgen = Feedgen::new(dir.path(), None).unwrap();
        let err = run(&feedgen).unwrap_err();

        assert!(matches!(err, FeedError::ReadDir { .. }));
        assert!(err.to_string().contains("content/posts"));
        assert_eq!(fs::read_to_string(docs.join("rss.xml")).unwrap(), "old rss");
        assert_eq!(fs::read_to_string(docs.join("atom.xml")).unwrap(), "old atom");
    }

    #[test]
    fn test_generate_with_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("posts");
        fs::create_dir_all(&source).unwrap();
        post(&source, "a.md", "Old", "2023-01-01");
        post(&source, "b.md", "New", "2024-01-01");
        fs::write(
            dir.path().join("feed.yml"),
            "url: https://blog.example.com\nsource_dir: posts\noutput_dir: public\norder_by: -date\n",
        )
        .unwrap();

        let feedgen = Feedgen::new(dir.path(), None).unwrap();
        assert_eq!(feedgen.config.order_by, OrderBy::DateDesc);
        run(&feedgen).unwrap();

        let xml = fs::read(dir.path().join("public/rss.xml")).unwrap();
        let channel = rss::Channel::read_from(&xml[..]).unwrap();
        let titles: Vec<_> = channel.items().iter().map(|i| i.title()).collect();
        assert_eq!(titles, [Some("New"), Some("Old")]);
        assert_eq!(
            channel.items()[0].link(),
            Some("https://blog.example.com/posts/b.html")
        );
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Feedgen::new(dir.path(), Some(Path::new("missing.yml"))).is_err());

        let feedgen = Feedgen::with_config(dir.path().to_path_buf(), SiteConfig::default());
        assert_eq!(feedgen.source_dir, dir.path().join("content/posts"));
        assert_eq!(feedgen.output_paths().atom, dir.path().join("docs/atom.xml"));
    }
}
