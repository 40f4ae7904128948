use actix_web::{HttpResponse, Responder, get, post, web};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::dto::api::{CharitiesQuery, CreateCharityPayload};
use crate::repository::DieselRepository;
use crate::services::{self, ServiceError};

#[derive(Deserialize)]
struct CharitiesQueryParams {
    page: Option<usize>,
    search: Option<String>,
    category: Option<String>,
    location: Option<String>,
}

#[get("/charities/")]
pub async fn api_list_charities(
    params: web::Query<CharitiesQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = params.into_inner();
    let query = CharitiesQuery {
        search: params.search,
        category: params.category,
        location: params.location,
        page: params.page,
    };

    match services::api::list_charities(repo.get_ref(), query) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to list charities: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/charities/")]
pub async fn api_add_charity(
    payload: web::Json<CreateCharityPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::api::create_charity(repo.get_ref(), payload.into_inner()) {
        Ok(charity) => HttpResponse::Created().json(charity),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(e) => {
            error!("Failed to create charity: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
