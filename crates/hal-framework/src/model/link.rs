//! Navigational links and the ordered collection a resource carries.

use serde::{Deserialize, Serialize};

/// A single hypermedia link.
///
/// Only `href` is required; every other attribute is skipped on output when
/// it is not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub templated: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,
}

impl Link {
    /// Creates a plain link pointing at `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            templated: false,
            media_type: None,
            deprecation: None,
            name: None,
            profile: None,
            title: None,
            hreflang: None,
        }
    }

    /// Creates a URI-template link (e.g. `/orders{?page}`).
    pub fn templated(href: impl Into<String>) -> Self {
        Self {
            templated: true,
            ..Self::new(href)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// Links grouped by relation name, in insertion order.
///
/// Adding a second link under a relation that already exists appends to that
/// relation instead of creating a new entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkCollection {
    entries: Vec<(String, Vec<Link>)>,
}

impl LinkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, rel: impl Into<String>, link: Link) {
        let rel = rel.into();
        match self.entries.iter_mut().find(|(name, _)| *name == rel) {
            Some((_, links)) => links.push(link),
            None => self.entries.push((rel, vec![link])),
        }
    }

    pub fn get(&self, rel: &str) -> Option<&[Link]> {
        self.entries
            .iter()
            .find(|(name, _)| name == rel)
            .map(|(_, links)| links.as_slice())
    }

    /// Number of distinct relations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Link])> {
        self.entries
            .iter()
            .map(|(rel, links)| (rel.as_str(), links.as_slice()))
    }
}
