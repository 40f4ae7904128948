use crate::db::DbPool;
use crate::domain::charity::{Charity, NewCharity};
use crate::repository::errors::RepositoryResult;

pub mod charity;
pub mod errors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filter and pagination parameters for the charity listing.
///
/// `search` matches name, category and location with a substring pattern;
/// `category` and `location` are exact matches. Absent fields do not
/// constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharityListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub pagination: Option<Pagination>,
}

impl CharityListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CharityReader {
    fn get_charity_by_id(&self, id: i32) -> RepositoryResult<Option<Charity>>;
    /// Returns the total number of matching charities together with the
    /// requested page of them, newest first.
    fn list_charities(&self, query: CharityListQuery) -> RepositoryResult<(usize, Vec<Charity>)>;
}

pub trait CharityWriter {
    fn create_charity(&self, new_charity: &NewCharity) -> RepositoryResult<Charity>;
}

/// Diesel-backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}
