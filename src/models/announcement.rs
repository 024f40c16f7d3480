//! Announcement model
//!
//! Admin communications pushed to marketplace audiences. Announcements are
//! drafted first and carry a publish timestamp once released.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AnnouncementId;

/// Who an announcement is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    Everyone,
    Vendors,
    Customers,
}

impl Audience {
    /// Parse an audience from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "everyone" | "all" => Some(Self::Everyone),
            "vendors" => Some(Self::Vendors),
            "customers" => Some(Self::Customers),
            _ => None,
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Everyone => write!(f, "Everyone"),
            Self::Vendors => write!(f, "Vendors"),
            Self::Customers => write!(f, "Customers"),
        }
    }
}

/// An admin announcement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    /// Unique identifier
    pub id: AnnouncementId,

    /// Headline
    pub title: String,

    /// Body text
    pub body: String,

    /// Addressed audience
    #[serde(default)]
    pub audience: Audience,

    /// Set when the announcement goes live; None means draft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// When the draft was created
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    /// Create a new draft announcement
    pub fn new(title: impl Into<String>, body: impl Into<String>, audience: Audience) -> Self {
        Self {
            id: AnnouncementId::new(),
            title: title.into(),
            body: body.into(),
            audience,
            published_at: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the announcement is live
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    /// Publish the announcement
    pub fn publish(&mut self) {
        if self.published_at.is_none() {
            self.published_at = Some(Utc::now());
        }
    }

    /// Validate the announcement
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Announcement title cannot be empty".into());
        }
        if self.body.trim().is_empty() {
            return Err("Announcement body cannot be empty".into());
        }
        Ok(())
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_published() { "published" } else { "draft" };
        write!(f, "{} ({}, {})", self.title, self.audience, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_announcement_is_draft() {
        let ann = Announcement::new("Season opening", "Bookings open for autumn", Audience::Everyone);
        assert!(!ann.is_published());
    }

    #[test]
    fn test_publish_is_idempotent() {
        let mut ann = Announcement::new("Season opening", "...", Audience::Vendors);
        ann.publish();
        let first = ann.published_at;
        ann.publish();
        assert_eq!(ann.published_at, first);
    }

    #[test]
    fn test_audience_parse() {
        assert_eq!(Audience::parse("all"), Some(Audience::Everyone));
        assert_eq!(Audience::parse("Vendors"), Some(Audience::Vendors));
        assert_eq!(Audience::parse("staff"), None);
    }
}
