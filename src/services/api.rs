//! Services backing the JSON API endpoints.

use crate::domain::charity::{Charity, NewCharity};
use crate::domain::types::{CharityCategory, CharityLink, CharityName};
use crate::dto::api::{CharitiesQuery, CharitiesResponse, CreateCharityPayload};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{CharityListQuery, CharityReader, CharityWriter};
use crate::services::ServiceResult;
use crate::services::main::non_blank;

/// Returns the filtered charity listing in the API wire format.
pub fn list_charities<R>(repo: &R, params: CharitiesQuery) -> ServiceResult<CharitiesResponse>
where
    R: CharityReader + ?Sized,
{
    let page = params.page.unwrap_or(1).max(1);

    let mut query = CharityListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = non_blank(params.search) {
        query = query.search(term);
    }
    if let Some(category) = non_blank(params.category) {
        query = query.category(category);
    }
    if let Some(location) = non_blank(params.location) {
        query = query.location(location);
    }

    let (count, results) = repo.list_charities(query)?;

    Ok(CharitiesResponse { count, results })
}

/// Validates a JSON creation payload and persists the charity.
pub fn create_charity<R>(repo: &R, payload: CreateCharityPayload) -> ServiceResult<Charity>
where
    R: CharityWriter + ?Sized,
{
    let name = CharityName::new(payload.name)?;
    let category: CharityCategory = payload.category.parse()?;
    let link = non_blank(payload.link).map(CharityLink::new).transpose()?;

    let new_charity = NewCharity::new(name, category, payload.location, None, link);

    Ok(repo.create_charity(&new_charity)?)
}
