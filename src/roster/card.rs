//! Card records and their display payloads
//!
//! A `CardRecord` is an immutable id + payload pair. The deck controller
//! only cares about the id; the payload is opaque to it and only read by
//! the rendering layer through the `CardContent` trait.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a card within one deck
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an id from a display name: lowercase ascii alphanumerics,
    /// every other run of characters collapsed into a single `-`
    pub fn slug(name: &str) -> Self {
        let mut slug = String::with_capacity(name.len());
        for c in name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One displayable entity. Identity is `id`; two records are the same
/// card iff their ids match, regardless of payload.
#[derive(Debug, Clone, Serialize)]
pub struct CardRecord<P> {
    pub id: CardId,
    pub payload: P,
}

impl<P> CardRecord<P> {
    pub fn new(id: impl Into<CardId>, payload: P) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Read-only view of a payload used by the grid and the detail overlay
pub trait CardContent {
    /// Bold first line of the compact card and the detail header
    fn headline(&self) -> &str;

    /// Second line under the headline (role, tagline)
    fn subtitle(&self) -> Option<&str>;

    /// Extra lines shown on the compact card
    fn summary(&self) -> Vec<String> {
        Vec::new()
    }

    /// Labelled fields shown in the detail overlay, in display order
    fn detail_fields(&self) -> Vec<(&'static str, String)>;

    /// Image reference handed through to the image collaborator untouched
    fn image(&self) -> Option<&str> {
        None
    }

    /// Text copied by `y` while the card is expanded
    fn primary_contact(&self) -> Option<String> {
        None
    }
}

/// Team member shown on the Team view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub stream: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub expanded_photo: String,
}

impl CardContent for MemberProfile {
    fn headline(&self) -> &str {
        &self.name
    }

    fn subtitle(&self) -> Option<&str> {
        non_empty(&self.role)
    }

    fn summary(&self) -> Vec<String> {
        match (non_empty(&self.stream), non_empty(&self.year)) {
            (Some(stream), Some(year)) => vec![format!("{}, {} Year", stream, year)],
            (Some(stream), None) => vec![stream.to_string()],
            (None, Some(year)) => vec![format!("{} Year", year)],
            (None, None) => Vec::new(),
        }
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        [
            ("Stream", &self.stream),
            ("Year", &self.year),
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("LinkedIn", &self.linkedin),
            ("GitHub", &self.github),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| (label, value.clone()))
        .collect()
    }

    fn image(&self) -> Option<&str> {
        // The detail view prefers the large photo but many rosters leave it blank
        non_empty(&self.expanded_photo).or_else(|| non_empty(&self.photo))
    }

    fn primary_contact(&self) -> Option<String> {
        non_empty(&self.email).map(str::to_string)
    }
}

/// Project shown on the Projects view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
}

impl CardContent for ProjectSummary {
    fn headline(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> Option<&str> {
        None
    }

    fn summary(&self) -> Vec<String> {
        non_empty(&self.description)
            .map(|d| vec![d.to_string()])
            .unwrap_or_default()
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if !self.description.is_empty() {
            fields.push(("About", self.description.clone()));
        }
        if !self.link.is_empty() {
            fields.push(("Link", self.link.clone()));
        }
        fields
    }

    fn primary_contact(&self) -> Option<String> {
        non_empty(&self.link).map(str::to_string)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
