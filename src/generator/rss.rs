//! RSS 2.0 serialization

use rss::validation::Validate;
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use super::feed::{Feed, FeedItem};
use crate::error::FeedError;

/// Serialize the feed as an RSS 2.0 document
pub fn to_xml(feed: &Feed) -> Result<Vec<u8>, FeedError> {
    let site = &feed.site;
    let items: Vec<Item> = feed.items.iter().map(to_rss_item).collect();
    let generated = site.generated.to_rfc2822();

    let channel = ChannelBuilder::default()
        .title(site.title.clone())
        .link(site.link.clone())
        .description(site.description.clone())
        .managing_editor(managing_editor(&site.author, &site.email))
        .pub_date(generated.clone())
        .last_build_date(generated)
        .generator(env!("CARGO_PKG_NAME").to_string())
        .items(items)
        .build();

    channel.validate()?;
    Ok(channel.write_to(Vec::new())?)
}

fn to_rss_item(item: &FeedItem) -> Item {
    ItemBuilder::default()
        .title(item.title.clone())
        .link(item.link.clone())
        .guid(
            GuidBuilder::default()
                .permalink(true)
                .value(item.link.clone())
                .build(),
        )
        .description(item.description.clone())
        .author(non_empty(&item.author))
        .pub_date(item.created.to_rfc2822())
        .build()
}

/// RSS wants "email (Name)"
fn managing_editor(name: &str, email: &str) -> Option<String> {
    match (email.is_empty(), name.is_empty()) {
        (true, true) => None,
        (true, false) => Some(name.to_string()),
        (false, true) => Some(email.to_string()),
        (false, false) => Some(format!("{} ({})", email, name)),
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
