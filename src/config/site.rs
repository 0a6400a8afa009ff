//! Site configuration (feed.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub email: String,

    // URL
    pub url: String,
    /// URL segment under which rendered posts live (`<url>/<posts_path>/<slug>.html`)
    pub posts_path: String,

    // Directory
    pub source_dir: String,
    pub output_dir: String,
    pub rss_path: String,
    pub atom_path: String,

    // Ordering of feed items
    pub order_by: OrderBy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "snow-dev.com".to_string(),
            description: "A blog about linux, vim, devops and various other tech topics"
                .to_string(),
            author: "Marcel Patzwahl".to_string(),
            email: "marcel.patzwahl@posteo.de".to_string(),

            url: "https://snow-dev.com".to_string(),
            posts_path: "posts".to_string(),

            source_dir: "content/posts".to_string(),
            output_dir: "docs".to_string(),
            rss_path: "rss.xml".to_string(),
            atom_path: "atom.xml".to_string(),

            order_by: OrderBy::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Couldn't read config file {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Couldn't parse config file {:?}", path))?;
        Ok(config)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// Order in which posts appear in the feeds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderBy {
    /// Source directory listing order (by file name)
    #[default]
    #[serde(rename = "name")]
    Name,
    /// Oldest first
    #[serde(rename = "date")]
    Date,
    /// Newest first
    #[serde(rename = "-date")]
    DateDesc,
}
