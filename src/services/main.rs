//! Services backing the server-rendered listing page.

use crate::domain::charity::{Charity, NewCharity};
use crate::dto::main::{IndexFilter, IndexPageData, IndexQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated, total_pages};
use crate::repository::{CharityListQuery, CharityReader, CharityWriter};
use crate::services::ServiceResult;

/// Trims a user-supplied filter value; blanks count as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Loads one page of charities for the listing template, applying whatever
/// filter values are currently set.
pub fn load_index_page<R>(repo: &R, query: IndexQuery) -> ServiceResult<IndexPageData>
where
    R: CharityReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let search = non_blank(query.search);
    let category = non_blank(query.category);
    let location = non_blank(query.location);

    let mut list_query = CharityListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = &search {
        list_query = list_query.search(term.clone());
    }
    if let Some(category) = &category {
        list_query = list_query.category(category.clone());
    }
    if let Some(location) = &location {
        list_query = list_query.location(location.clone());
    }

    let (total, charities) = repo.list_charities(list_query)?;
    let charities = Paginated::new(charities, page, total_pages(total, DEFAULT_ITEMS_PER_PAGE));

    Ok(IndexPageData {
        charities,
        filter: IndexFilter {
            search: search.unwrap_or_default(),
            category: category.unwrap_or_default(),
            location: location.unwrap_or_default(),
        },
    })
}

/// Persists an already-validated charity creation payload.
pub fn add_charity<R>(repo: &R, new_charity: &NewCharity) -> ServiceResult<Charity>
where
    R: CharityWriter + ?Sized,
{
    Ok(repo.create_charity(new_charity)?)
}
