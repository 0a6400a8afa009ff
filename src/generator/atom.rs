//! Atom 1.0 serialization

use atom_syndication::{
    Entry, EntryBuilder, FeedBuilder, GeneratorBuilder, Link, LinkBuilder, Person,
    PersonBuilder, Text,
};

use super::feed::{Feed, FeedItem};
use crate::error::FeedError;

/// Serialize the feed as an Atom 1.0 document
pub fn to_xml(feed: &Feed) -> Result<Vec<u8>, FeedError> {
    let site = &feed.site;
    let entries: Vec<Entry> = feed.items.iter().map(to_atom_entry).collect();

    let author: Person = PersonBuilder::default()
        .name(site.author.clone())
        .email((!site.email.is_empty()).then(|| site.email.clone()))
        .build();

    let self_link: Link = LinkBuilder::default()
        .href(site.atom_url.clone())
        .rel("self".to_string())
        .mime_type(Some("application/atom+xml".to_string()))
        .build();

    let alternate_link: Link = LinkBuilder::default()
        .href(site.link.clone())
        .rel("alternate".to_string())
        .build();

    let atom = FeedBuilder::default()
        .title(Text::plain(site.title.clone()))
        .id(site.link.clone())
        .updated(site.generated)
        .authors(vec![author])
        .links(vec![alternate_link, self_link])
        .subtitle(Some(Text::plain(site.description.clone())))
        .generator(Some(
            GeneratorBuilder::default()
                .value(env!("CARGO_PKG_NAME"))
                .version(Some(env!("CARGO_PKG_VERSION").to_string()))
                .build(),
        ))
        .entries(entries)
        .build();

    Ok(atom.write_to(Vec::new())?)
}

fn to_atom_entry(item: &FeedItem) -> Entry {
    let link: Link = LinkBuilder::default()
        .href(item.link.clone())
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = if item.author.is_empty() {
        Vec::new()
    } else {
        vec![PersonBuilder::default().name(item.author.clone()).build()]
    };

    let summary = (!item.description.is_empty()).then(|| Text::plain(item.description.clone()));

    EntryBuilder::default()
        .title(Text::plain(item.title.clone()))
        .id(item.link.clone())
        .updated(item.created)
        .published(Some(item.created))
        .links(vec![link])
        .authors(authors)
        .summary(summary)
        .build()
}
