use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::charity::{Charity as DomainCharity, NewCharity as DomainNewCharity};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::charities)]
/// Diesel model for [`crate::domain::charity::Charity`].
pub struct Charity {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub link: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::charities)]
/// Insertable form of [`Charity`]. `created_at` is filled by the database.
pub struct NewCharity<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub location: Option<&'a str>,
    pub logo: Option<&'a str>,
    pub link: Option<&'a str>,
}

impl From<Charity> for DomainCharity {
    fn from(charity: Charity) -> Self {
        Self {
            id: charity.id,
            name: charity.name,
            category: charity.category,
            location: charity.location,
            logo: charity.logo,
            link: charity.link,
            created_at: charity.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewCharity> for NewCharity<'a> {
    fn from(charity: &'a DomainNewCharity) -> Self {
        Self {
            name: charity.name.as_str(),
            category: charity.category.as_str(),
            location: charity.location.as_deref(),
            logo: charity.logo.as_deref(),
            link: charity.link.as_ref().map(|l| l.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::types::{CharityCategory, CharityLink, CharityName};

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewCharity::new(
            CharityName::new("Food Bank").unwrap(),
            CharityCategory::Health,
            Some("Berlin".to_string()),
            None,
            Some(CharityLink::new("https://example.org").unwrap()),
        );
        let new: NewCharity = (&domain).into();
        assert_eq!(new.name, "Food Bank");
        assert_eq!(new.category, "health");
        assert_eq!(new.location, Some("Berlin"));
        assert_eq!(new.logo, None);
        assert_eq!(new.link, Some("https://example.org"));
    }

    #[test]
    fn blank_location_becomes_none() {
        let domain = DomainNewCharity::new(
            CharityName::new("Food Bank").unwrap(),
            CharityCategory::Other,
            Some("   ".to_string()),
            None,
            None,
        );
        assert_eq!(domain.location, None);
    }

    #[test]
    fn db_charity_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_charity = Charity {
            id: 7,
            name: "Food Bank".to_string(),
            category: "education".to_string(),
            location: None,
            logo: Some("/media/charity_logos/a.png".to_string()),
            link: None,
            created_at: now,
        };
        let domain: DomainCharity = db_charity.into();
        assert_eq!(domain.id, 7);
        assert_eq!(domain.category, "education");
        assert_eq!(domain.location, None);
        assert_eq!(domain.logo.as_deref(), Some("/media/charity_logos/a.png"));
        assert_eq!(domain.created_at, now);
    }
}
