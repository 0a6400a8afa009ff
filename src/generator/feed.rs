//! Format-neutral feed model shared by the RSS and Atom writers

use chrono::{DateTime, FixedOffset};

use crate::config::SiteConfig;
use crate::content::Post;

/// Fixed identity of the site publishing the feed
#[derive(Debug, Clone, PartialEq)]
pub struct SiteIdentity {
    pub title: String,
    /// Base URL, no trailing slash
    pub link: String,
    pub description: String,
    pub author: String,
    pub email: String,
    /// URL segment for post pages
    pub posts_path: String,
    /// Public URL of the Atom document itself
    pub atom_url: String,
    /// Captured once per run
    pub generated: DateTime<FixedOffset>,
}

impl SiteIdentity {
    pub fn from_config(config: &SiteConfig, generated: DateTime<FixedOffset>) -> Self {
        let link = config.base_url().to_string();
        let atom_url = format!("{}/{}", link, config.atom_path.trim_start_matches('/'));
        Self {
            title: config.title.clone(),
            link,
            description: config.description.clone(),
            author: config.author.clone(),
            email: config.email.clone(),
            posts_path: config.posts_path.clone(),
            atom_url,
            generated,
        }
    }
}

/// One entry of the feed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub author: String,
    pub created: DateTime<FixedOffset>,
    pub link: String,
    pub description: String,
}

/// The assembled feed
#[derive(Debug, Clone, PartialEq)]
pub struct Feed {
    pub site: SiteIdentity,
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// Build the feed, one item per post in the given order
    pub fn from_posts(site: &SiteIdentity, posts: &[Post]) -> Self {
        let items = posts
            .iter()
            .map(|post| FeedItem {
                title: post.title.clone(),
                author: post.author.clone(),
                created: post.date,
                link: post.permalink(&site.link, &site.posts_path),
                description: post.description.clone(),
            })
            .collect();

        Self {
            site: site.clone(),
            items,
        }
    }
}
