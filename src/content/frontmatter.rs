//! Front-matter parsing

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::MetadataError;

/// Front-matter data from a post
///
/// Only the keys the feeds need are kept; anything else in the block is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from the full content of a post
    ///
    /// Accepts a `---` delimited YAML block, a `;;;` delimited or leading JSON
    /// object, or a file that is a YAML document as a whole.
    pub fn parse(content: &str) -> Result<Self, MetadataError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(yaml_block(content));
        }

        if content.starts_with(";;;") {
            return Self::parse_json(content);
        }

        // A leading brace may also be a YAML flow mapping
        if content.starts_with('{') {
            return Self::parse_json(content).or_else(|_| Self::parse_yaml(content));
        }

        Self::parse_yaml(content)
    }

    fn parse_yaml(yaml: &str) -> Result<Self, MetadataError> {
        if yaml.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    fn parse_json(content: &str) -> Result<Self, MetadataError> {
        // JSON front-matter ends with ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            let end_pos = rest.find(";;;").ok_or(MetadataError::UnterminatedJson)?;
            return Ok(serde_json::from_str(&rest[..end_pos])?);
        }

        // Leading JSON object, find the matching closing brace
        let mut depth = 0;
        let mut in_string = false;
        let mut escaped = false;
        for (i, c) in content.char_indices() {
            if in_string {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(serde_json::from_str(&content[..=i])?);
                    }
                }
                _ => {}
            }
        }

        Err(MetadataError::UnterminatedJson)
    }

    /// Parse the date string
    ///
    /// `Ok(None)` when the key is absent or blank. Years outside 0..=9999
    /// can't be written as RFC 2822 dates and are rejected.
    pub fn parse_date(&self) -> Result<Option<DateTime<FixedOffset>>, MetadataError> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_date_string(s)
                .filter(|dt| (0..=9999).contains(&dt.year()))
                .map(Some)
                .ok_or_else(|| MetadataError::Date(s.to_string())),
        }
    }
}

/// Slice out the YAML between the opening `---` and the closing `---` line.
/// Without a closing line the rest of the file is the block.
fn yaml_block(content: &str) -> &str {
    let rest = &content[3..];
    let rest = rest.trim_start_matches(['\n', '\r']);

    if rest.starts_with("---") {
        return "";
    }

    match rest.find("\n---") {
        Some(end_pos) => &rest[..end_pos],
        None => rest,
    }
}

/// Parse a date string in various formats. Dates without an offset are UTC.
fn parse_date_string(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    let offset_formats = [
        "%Y-%m-%d %H:%M:%S%.f %z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
    ];
    for fmt in offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().fixed_offset());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
        }
    }

    None
}

/// Date used for posts without one
pub(crate) fn epoch() -> DateTime<FixedOffset> {
    DateTime::<Utc>::default().fixed_offset()
}
