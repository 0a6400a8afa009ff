//! feedgen: RSS and Atom feeds for a static blog
//!
//! Reads the front-matter of every post in the source directory and writes
//! an RSS 2.0 and an Atom 1.0 feed next to the rendered site.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local};
use std::path::{Path, PathBuf};

pub use error::{FeedError, MetadataError};

/// Config file looked up in the base directory when none is given
pub const CONFIG_FILE: &str = "feed.yml";

/// The main application
#[derive(Debug, Clone)]
pub struct Feedgen {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the posts
    pub source_dir: PathBuf,
    /// Directory the feeds are written to
    pub output_dir: PathBuf,
    /// Feed generation timestamp, taken once at startup
    pub generated_at: DateTime<FixedOffset>,
}

impl Feedgen {
    /// Create a new instance rooted at `base_dir`
    ///
    /// An explicit `config_path` must exist. Without one, `feed.yml` in the
    /// base directory is used if present, else the built-in defaults.
    pub fn new<P: AsRef<Path>>(base_dir: P, config_path: Option<&Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        let config = match config_path {
            Some(path) => config::SiteConfig::load(base_dir.join(path))?,
            None => {
                let default_path = base_dir.join(CONFIG_FILE);
                if default_path.exists() {
                    config::SiteConfig::load(&default_path)?
                } else {
                    config::SiteConfig::default()
                }
            }
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let source_dir = base_dir.join(&config.source_dir);
        let output_dir = base_dir.join(&config.output_dir);

        Self {
            config,
            base_dir,
            source_dir,
            output_dir,
            generated_at: Local::now().fixed_offset(),
        }
    }

    /// Paths of the RSS and Atom files
    pub fn output_paths(&self) -> generator::OutputPaths {
        generator::OutputPaths {
            rss: self.output_dir.join(&self.config.rss_path),
            atom: self.output_dir.join(&self.config.atom_path),
        }
    }

    /// Load posts and write both feeds
    pub fn generate(&self) -> Result<(), FeedError> {
        commands::generate::run(self)
    }
}
