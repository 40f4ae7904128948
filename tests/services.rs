use charity_directory::domain::charity::Charity;
use charity_directory::dto::api::{CharitiesQuery, CreateCharityPayload};
use charity_directory::dto::main::IndexQuery;
use charity_directory::repository::{CharityListQuery, Pagination};
use charity_directory::services::{self, ServiceError};

mod common;

use common::MockRepository;

fn sample_charity(id: i32, name: &str) -> Charity {
    Charity {
        id,
        name: name.to_string(),
        category: "health".to_string(),
        ..Default::default()
    }
}

#[test]
fn index_defaults_to_first_page_with_no_filters() {
    let mut repo = MockRepository::new();
    repo.expect_list_charities()
        .withf(|query: &CharityListQuery| {
            query.search.is_none()
                && query.category.is_none()
                && query.location.is_none()
                && query.pagination
                    == Some(Pagination {
                        page: 1,
                        per_page: 10,
                    })
        })
        .return_once(|_| Ok((0, vec![])));

    let page = services::main::load_index_page(&repo, IndexQuery::default()).unwrap();
    assert!(page.charities.items.is_empty());
    assert_eq!(page.charities.page, 1);
    assert_eq!(page.charities.total_pages, 1);
    assert_eq!(page.filter.search, "");
    assert_eq!(page.filter.category, "");
    assert_eq!(page.filter.location, "");
}

#[test]
fn index_drops_blank_filters_and_trims_the_rest() {
    let mut repo = MockRepository::new();
    repo.expect_list_charities()
        .withf(|query: &CharityListQuery| {
            query.search.is_none()
                && query.category.is_none()
                && query.location.as_deref() == Some("Berlin")
        })
        .return_once(|_| Ok((1, vec![sample_charity(1, "Food Bank")])));

    let page = services::main::load_index_page(
        &repo,
        IndexQuery {
            search: Some("   ".to_string()),
            category: Some(String::new()),
            location: Some("  Berlin  ".to_string()),
            page: None,
        },
    )
    .unwrap();

    assert_eq!(page.charities.items.len(), 1);
    assert_eq!(page.filter.location, "Berlin");
}

#[test]
fn index_total_pages_covers_partial_last_page() {
    let mut repo = MockRepository::new();
    repo.expect_list_charities()
        .return_once(|_| Ok((23, (1..=10).map(|i| sample_charity(i, "c")).collect())));

    let page = services::main::load_index_page(&repo, IndexQuery::default()).unwrap();
    assert_eq!(page.charities.total_pages, 3);
    assert_eq!(page.charities.page, 1);
}

#[test]
fn api_category_filter_passes_through_alone() {
    let mut repo = MockRepository::new();
    repo.expect_list_charities()
        .withf(|query: &CharityListQuery| {
            query.category.as_deref() == Some("health")
                && query.search.is_none()
                && query.location.is_none()
        })
        .return_once(|_| Ok((1, vec![sample_charity(1, "Food Bank")])));

    let response = services::api::list_charities(
        &repo,
        CharitiesQuery {
            search: Some(String::new()),
            category: Some("health".to_string()),
            location: None,
            page: None,
        },
    )
    .unwrap();

    assert_eq!(response.count, 1);
    assert_eq!(response.results[0].name, "Food Bank");
}

#[test]
fn api_pages_past_the_end_are_requested_as_given() {
    let mut repo = MockRepository::new();
    repo.expect_list_charities()
        .withf(|query: &CharityListQuery| {
            query.pagination
                == Some(Pagination {
                    page: 5,
                    per_page: 10,
                })
        })
        .return_once(|_| Ok((23, vec![])));

    let response = services::api::list_charities(
        &repo,
        CharitiesQuery {
            page: Some(5),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(response.count, 23);
    assert!(response.results.is_empty());
}

#[test]
fn create_persists_a_valid_payload() {
    let mut repo = MockRepository::new();
    repo.expect_create_charity()
        .withf(|new_charity| {
            new_charity.name.as_str() == "Hope"
                && new_charity.category.as_str() == "education"
                && new_charity.location.as_deref() == Some("Lagos")
                && new_charity.link.as_ref().map(|l| l.as_str()) == Some("https://hope.example.org")
        })
        .return_once(|_| Ok(sample_charity(42, "Hope")));

    let created = services::api::create_charity(
        &repo,
        CreateCharityPayload {
            name: "  Hope  ".to_string(),
            category: "education".to_string(),
            location: Some("Lagos".to_string()),
            link: Some("https://hope.example.org".to_string()),
        },
    )
    .unwrap();

    assert_eq!(created.id, 42);
}

#[test]
fn create_rejects_unknown_category() {
    let repo = MockRepository::new();

    let err = services::api::create_charity(
        &repo,
        CreateCharityPayload {
            name: "Hope".to_string(),
            category: "animals".to_string(),
            location: None,
            link: None,
        },
    )
    .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}

#[test]
fn create_rejects_blank_name_and_bad_link() {
    let repo = MockRepository::new();

    let err = services::api::create_charity(
        &repo,
        CreateCharityPayload {
            name: "   ".to_string(),
            category: "health".to_string(),
            location: None,
            link: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = services::api::create_charity(
        &repo,
        CreateCharityPayload {
            name: "Hope".to_string(),
            category: "health".to_string(),
            location: None,
            link: Some("not a url".to_string()),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}
