//! DTOs exposed by the charity API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::charity::Charity;

/// Query parameters accepted by the `GET /api/charities/` service.
#[derive(Debug, Default)]
pub struct CharitiesQuery {
    /// Optional free-form search string applied to name, category, location.
    pub search: Option<String>,
    /// Optional exact category filter.
    pub category: Option<String>,
    /// Optional exact location filter.
    pub location: Option<String>,
    /// Optional page number for pagination.
    pub page: Option<usize>,
}

/// Wire format of the listing endpoint: `{ "results": [...], "count": n }`.
#[derive(Debug, Serialize)]
pub struct CharitiesResponse {
    pub count: usize,
    pub results: Vec<Charity>,
}

/// JSON body accepted by `POST /api/charities/`.
#[derive(Debug, Deserialize)]
pub struct CreateCharityPayload {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
