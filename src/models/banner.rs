//! Banner model
//!
//! Promotional banners managed from the admin console and shown on the
//! storefront surfaces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BannerId;

/// Storefront surface a banner appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BannerPlacement {
    #[default]
    Home,
    Listing,
    Checkout,
}

impl BannerPlacement {
    /// Parse a placement from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "home" => Some(Self::Home),
            "listing" => Some(Self::Listing),
            "checkout" => Some(Self::Checkout),
            _ => None,
        }
    }
}

impl fmt::Display for BannerPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Listing => write!(f, "Listing"),
            Self::Checkout => write!(f, "Checkout"),
        }
    }
}

/// A promotional banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    /// Unique identifier
    pub id: BannerId,

    /// Title shown on the banner
    pub title: String,

    /// Reference to the banner image (asset key or URL)
    pub image_ref: String,

    /// Target link when clicked
    #[serde(default)]
    pub link: String,

    /// Surface the banner appears on
    #[serde(default)]
    pub placement: BannerPlacement,

    /// Whether the banner is live
    #[serde(default = "default_active")]
    pub active: bool,

    /// Ordering within its placement (lower first)
    #[serde(default)]
    pub sort_order: i32,

    /// When the banner was created
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Banner {
    /// Create a new active banner
    pub fn new(
        title: impl Into<String>,
        image_ref: impl Into<String>,
        placement: BannerPlacement,
    ) -> Self {
        Self {
            id: BannerId::new(),
            title: title.into(),
            image_ref: image_ref.into(),
            link: String::new(),
            placement,
            active: true,
            sort_order: 0,
            created_at: Utc::now(),
        }
    }

    /// Validate the banner
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Banner title cannot be empty".into());
        }
        if self.image_ref.trim().is_empty() {
            return Err("Banner image reference cannot be empty".into());
        }
        Ok(())
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_banner() {
        let banner = Banner::new("Monsoon Sale", "banners/monsoon.png", BannerPlacement::Home);
        assert!(banner.active);
        assert_eq!(banner.placement, BannerPlacement::Home);
    }

    #[test]
    fn test_placement_parse() {
        assert_eq!(BannerPlacement::parse("listing"), Some(BannerPlacement::Listing));
        assert_eq!(BannerPlacement::parse("footer"), None);
    }

    #[test]
    fn test_validation() {
        let mut banner = Banner::new("Monsoon Sale", "banners/monsoon.png", BannerPlacement::Home);
        assert!(banner.validate().is_ok());

        banner.image_ref = String::new();
        assert!(banner.validate().is_err());
    }
}
