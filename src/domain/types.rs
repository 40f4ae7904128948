//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty names, well-formed
//! links, known categories) so that once a value reaches the domain layer it
//! can be treated as trusted. They are applied on the write path only: rows
//! read back from the database pass through as plain strings, including
//! legacy rows with an unmapped or empty category.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
    /// Provided category is not one of the known choices.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Fixed set of charity categories, mirroring the listing filter choices.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CharityCategory {
    Education,
    Health,
    WomenSupport,
    Other,
}

impl CharityCategory {
    pub const ALL: [CharityCategory; 4] = [
        CharityCategory::Education,
        CharityCategory::Health,
        CharityCategory::WomenSupport,
        CharityCategory::Other,
    ];

    /// Wire value stored in the database and used in query parameters.
    pub const fn as_str(self) -> &'static str {
        match self {
            CharityCategory::Education => "education",
            CharityCategory::Health => "health",
            CharityCategory::WomenSupport => "women_support",
            CharityCategory::Other => "other",
        }
    }

    /// Human-readable label shown in the filter select and category badges.
    pub const fn label(self) -> &'static str {
        match self {
            CharityCategory::Education => "Education",
            CharityCategory::Health => "Health",
            CharityCategory::WomenSupport => "Women Support",
            CharityCategory::Other => "Other",
        }
    }
}

impl Display for CharityCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharityCategory {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "education" => Ok(CharityCategory::Education),
            "health" => Ok(CharityCategory::Health),
            "women_support" => Ok(CharityCategory::WomenSupport),
            "other" => Ok(CharityCategory::Other),
            other => Err(TypeConstraintError::UnknownCategory(other.to_string())),
        }
    }
}

/// Charity name wrapper enforcing trimmed, non-empty values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CharityName(String);

impl CharityName {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CharityName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharityName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CharityName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated external link to the charity's own site.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CharityLink(String);

impl CharityLink {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if !trimmed.validate_url() {
            return Err(TypeConstraintError::InvalidUrl);
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CharityLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharityLink {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CharityLink {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_wire_values() {
        for category in CharityCategory::ALL {
            assert_eq!(category.as_str().parse::<CharityCategory>(), Ok(category));
        }
    }

    #[test]
    fn category_rejects_unknown_values() {
        assert_eq!(
            "animals".parse::<CharityCategory>(),
            Err(TypeConstraintError::UnknownCategory("animals".to_string()))
        );
    }

    #[test]
    fn name_is_trimmed_and_must_not_be_empty() {
        assert_eq!(
            CharityName::new("  Food Bank  ").unwrap().as_str(),
            "Food Bank"
        );
        assert_eq!(
            CharityName::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn link_must_be_a_url() {
        assert!(CharityLink::new("https://example.org/about").is_ok());
        assert_eq!(
            CharityLink::new("not a url"),
            Err(TypeConstraintError::InvalidUrl)
        );
    }
}
