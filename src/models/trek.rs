//! Trek model
//!
//! Represents a catalog entry owned by a vendor: a route that can be
//! scheduled as dated batches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{TrekId, VendorId};
use super::money::Money;

/// Difficulty grade of a trek
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
    Strenuous,
}

impl Difficulty {
    /// Parse a difficulty from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "moderate" => Some(Self::Moderate),
            "challenging" | "hard" => Some(Self::Challenging),
            "strenuous" | "extreme" => Some(Self::Strenuous),
            _ => None,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Moderate
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Challenging => write!(f, "Challenging"),
            Self::Strenuous => write!(f, "Strenuous"),
        }
    }
}

/// A trek listed in the marketplace catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trek {
    /// Unique identifier
    pub id: TrekId,

    /// Owning vendor
    pub vendor_id: VendorId,

    /// Trek name (e.g. "Valley of Flowers")
    pub name: String,

    /// Region or range (e.g. "Garhwal Himalaya")
    pub region: String,

    /// Difficulty grade
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Duration in days
    pub duration_days: u32,

    /// Base price per seat
    pub price: Money,

    /// Longer description shown on the detail page
    #[serde(default)]
    pub description: String,

    /// Whether this trek is bookable
    #[serde(default = "default_active")]
    pub active: bool,

    /// When the trek was created
    pub created_at: DateTime<Utc>,

    /// When the trek was last modified
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Trek {
    /// Create a new active trek
    pub fn new(
        vendor_id: VendorId,
        name: impl Into<String>,
        region: impl Into<String>,
        difficulty: Difficulty,
        duration_days: u32,
        price: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TrekId::new(),
            vendor_id,
            name: name.into(),
            region: region.into(),
            difficulty,
            duration_days,
            price,
            description: String::new(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deactivate this trek (stops new batches and bookings)
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivate this trek
    pub fn activate(&mut self) {
        self.active = true;
        self.updated_at = Utc::now();
    }

    /// Validate the trek
    pub fn validate(&self) -> Result<(), TrekValidationError> {
        if self.name.trim().is_empty() {
            return Err(TrekValidationError::EmptyName);
        }
        if self.duration_days == 0 {
            return Err(TrekValidationError::ZeroDuration);
        }
        if self.price.is_negative() {
            return Err(TrekValidationError::NegativePrice);
        }
        Ok(())
    }
}

impl fmt::Display for Trek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {}d)", self.name, self.difficulty, self.duration_days)
    }
}

/// Validation errors for treks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrekValidationError {
    EmptyName,
    ZeroDuration,
    NegativePrice,
}

impl fmt::Display for TrekValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Trek name cannot be empty"),
            Self::ZeroDuration => write!(f, "Trek duration must be at least one day"),
            Self::NegativePrice => write!(f, "Trek price cannot be negative"),
        }
    }
}

impl std::error::Error for TrekValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trek() -> Trek {
        Trek::new(
            VendorId::new(),
            "Valley of Flowers",
            "Garhwal Himalaya",
            Difficulty::Moderate,
            6,
            Money::from_minor(1_450_000),
        )
    }

    #[test]
    fn test_new_trek_is_active() {
        let trek = sample_trek();
        assert!(trek.active);
        assert_eq!(trek.duration_days, 6);
    }

    #[test]
    fn test_deactivate() {
        let mut trek = sample_trek();
        trek.deactivate();
        assert!(!trek.active);
        trek.activate();
        assert!(trek.active);
    }

    #[test]
    fn test_validation() {
        let mut trek = sample_trek();
        assert!(trek.validate().is_ok());

        trek.duration_days = 0;
        assert_eq!(trek.validate(), Err(TrekValidationError::ZeroDuration));

        trek.duration_days = 6;
        trek.name = "  ".into();
        assert_eq!(trek.validate(), Err(TrekValidationError::EmptyName));
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(Difficulty::parse("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("HARD"), Some(Difficulty::Challenging));
        assert_eq!(Difficulty::parse("vertical"), None);
    }

    #[test]
    fn test_display() {
        let trek = sample_trek();
        assert_eq!(format!("{}", trek), "Valley of Flowers (Moderate, 6d)");
    }
}
