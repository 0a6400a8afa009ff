//! Generator module - assembles the feed and writes RSS and Atom files
//!
//! - **RSS 2.0** (`rss.xml`)
//! - **Atom 1.0** (`atom.xml`)

use std::fs;
use std::path::{Path, PathBuf};

use crate::content::Post;
use crate::error::FeedError;

pub mod atom;
pub mod feed;
pub mod rss;

pub use feed::{Feed, FeedItem, SiteIdentity};

/// Destination files for the two serializations
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub rss: PathBuf,
    pub atom: PathBuf,
}

/// Build the feed from `posts` and write both serializations.
///
/// RSS is serialized and written before Atom is attempted, so a failing Atom
/// step leaves a fresh `rss.xml` behind.
pub fn build_and_write(
    posts: &[Post],
    site: &SiteIdentity,
    outputs: &OutputPaths,
) -> Result<(), FeedError> {
    let feed = Feed::from_posts(site, posts);

    let xml = rss::to_xml(&feed)?;
    write_feed(&outputs.rss, &xml)?;

    let xml = atom::to_xml(&feed)?;
    write_feed(&outputs.atom, &xml)?;

    Ok(())
}

/// Write a feed file, replacing any previous one
fn write_feed(path: &Path, xml: &[u8]) -> Result<(), FeedError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| FeedError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source: std::io::Error| FeedError::Write {
        path: path.to_path_buf(),
        source,
    };

    fs::write(path, xml).map_err(write_err)?;
    set_mode(path).map_err(write_err)?;

    tracing::info!("Generated {:?}", path);
    Ok(())
}

/// rwxr-xr-x, matching the rest of the published site
#[cfg(unix)]
fn set_mode(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
