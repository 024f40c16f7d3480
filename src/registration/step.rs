//! Wizard step sequence
//!
//! The five registration steps as a sum type. Ordinals are 1-based and the
//! sequence is strictly linear: `next`/`prev` return None at the boundaries
//! so clamping is explicit at the call site.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the vendor registration wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    #[default]
    PersonalDetails,
    BankDetails,
    TaxDetails,
    Documents,
    Success,
}

impl RegistrationStep {
    /// All steps in wizard order
    pub const ALL: [RegistrationStep; 5] = [
        Self::PersonalDetails,
        Self::BankDetails,
        Self::TaxDetails,
        Self::Documents,
        Self::Success,
    ];

    /// 1-based position in the sequence
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::PersonalDetails => 1,
            Self::BankDetails => 2,
            Self::TaxDetails => 3,
            Self::Documents => 4,
            Self::Success => 5,
        }
    }

    /// Look up a step by its 1-based ordinal
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal.checked_sub(1)? as usize).copied()
    }

    /// Label shown in the progress header
    pub fn label(&self) -> &'static str {
        match self {
            Self::PersonalDetails => "Personal Details",
            Self::BankDetails => "Bank Details",
            Self::TaxDetails => "Tax Details",
            Self::Documents => "Documents",
            Self::Success => "Done",
        }
    }

    /// Marker glyph shown next to the label in the progress header
    pub fn marker(&self) -> &'static str {
        match self {
            Self::PersonalDetails => "◉",
            Self::BankDetails => "▣",
            Self::TaxDetails => "◆",
            Self::Documents => "▤",
            Self::Success => "✓",
        }
    }

    /// The following step, or None at the terminal step
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::PersonalDetails => Some(Self::BankDetails),
            Self::BankDetails => Some(Self::TaxDetails),
            Self::TaxDetails => Some(Self::Documents),
            Self::Documents => Some(Self::Success),
            Self::Success => None,
        }
    }

    /// The preceding step, or None at the first step
    pub fn prev(&self) -> Option<Self> {
        match self {
            Self::PersonalDetails => None,
            Self::BankDetails => Some(Self::PersonalDetails),
            Self::TaxDetails => Some(Self::BankDetails),
            Self::Documents => Some(Self::TaxDetails),
            Self::Success => Some(Self::Documents),
        }
    }

    /// Whether this is the terminal (read-only) step
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_one_based_and_contiguous() {
        for (i, step) in RegistrationStep::ALL.iter().enumerate() {
            assert_eq!(step.ordinal() as usize, i + 1);
            assert_eq!(RegistrationStep::from_ordinal(step.ordinal()), Some(*step));
        }
        assert_eq!(RegistrationStep::from_ordinal(0), None);
        assert_eq!(RegistrationStep::from_ordinal(6), None);
    }

    #[test]
    fn test_linear_sequence() {
        let mut step = RegistrationStep::PersonalDetails;
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            step = next;
            visited.push(step);
        }
        assert_eq!(visited, RegistrationStep::ALL);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(RegistrationStep::PersonalDetails.prev(), None);
        assert_eq!(RegistrationStep::Success.next(), None);
        assert!(RegistrationStep::Success.is_terminal());
        assert!(!RegistrationStep::Documents.is_terminal());
    }
}
