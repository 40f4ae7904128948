use serde::Serialize;

use crate::domain::charity::Charity;
use crate::pagination::Paginated;

/// Query parameters accepted by the listing page service. All fields are
/// independently optional; blank strings count as absent.
#[derive(Debug, Default)]
pub struct IndexQuery {
    /// Free-text search entered by the user.
    pub search: Option<String>,
    /// Category filter; empty means unfiltered.
    pub category: Option<String>,
    /// Location filter text.
    pub location: Option<String>,
    /// Page number requested by the pagination controls.
    pub page: Option<usize>,
}

/// Filter values echoed back to the template so the inputs keep their state
/// and the pagination links carry the applied filters.
#[derive(Debug, Default, Serialize)]
pub struct IndexFilter {
    pub search: String,
    pub category: String,
    pub location: String,
}

/// Data required to render the charities listing template.
pub struct IndexPageData {
    /// Paginated page of charity cards.
    pub charities: Paginated<Charity>,
    /// Applied filter values.
    pub filter: IndexFilter,
}
