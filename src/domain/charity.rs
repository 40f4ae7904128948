use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CharityCategory, CharityLink, CharityName};

/// A charity organization as shown in the directory.
///
/// `category` stays a plain string on the read side: rows created before a
/// category was renamed, or with no category at all, still render as-is.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Charity {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub location: Option<String>,
    /// Path to the uploaded logo, served from the media directory.
    pub logo: Option<String>,
    /// External "Know More" URL.
    pub link: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Payload for creating a charity. Construction goes through the validated
/// value objects, so a `NewCharity` is well-formed by the time it exists.
#[derive(Clone, Debug)]
pub struct NewCharity {
    pub name: CharityName,
    pub category: CharityCategory,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub link: Option<CharityLink>,
}

impl NewCharity {
    #[must_use]
    pub fn new(
        name: CharityName,
        category: CharityCategory,
        location: Option<String>,
        logo: Option<String>,
        link: Option<CharityLink>,
    ) -> Self {
        Self {
            name,
            category,
            location: location
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            logo: logo.filter(|s| !s.is_empty()),
            link,
        }
    }
}
