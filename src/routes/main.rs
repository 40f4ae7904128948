use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::Deserialize;
use tera::Tera;

use crate::domain::types::CharityCategory;
use crate::dto::main::IndexQuery;
use crate::forms::main::{AddCharityForm, discard_logo};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services;

#[derive(Deserialize)]
struct IndexQueryParams {
    search: Option<String>,
    category: Option<String>,
    location: Option<String>,
    page: Option<usize>,
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQueryParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let query = IndexQuery {
        search: params.search,
        category: params.category,
        location: params.location,
        page: params.page,
    };

    let page_data = match services::main::load_index_page(repo.get_ref(), query) {
        Ok(page_data) => page_data,
        Err(e) => {
            error!("Failed to load charities: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let categories = CharityCategory::ALL
        .iter()
        .map(|c| (c.as_str(), c.label()))
        .collect::<Vec<_>>();

    let mut context = base_context(&flash_messages, "index");
    context.insert("charities", &page_data.charities);
    context.insert("filter", &page_data.filter);
    context.insert("categories", &categories);

    render_template(&tera, "main/index.html", &context)
}

#[post("/charity/add")]
pub async fn add_charity(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<AddCharityForm>,
) -> impl Responder {
    let new_charity = match form.into_new_charity(&server_config.media_root) {
        Ok(new_charity) => new_charity,
        Err(err) => {
            FlashMessage::error(format!("Failed to add charity: {err}")).send();
            return redirect("/");
        }
    };

    match services::main::add_charity(repo.get_ref(), &new_charity) {
        Ok(charity) => {
            FlashMessage::success(format!("Charity \"{}\" added.", charity.name)).send();
        }
        Err(err) => {
            error!("Failed to add charity: {err}");
            // The logo was already written to disk; don't leave it orphaned.
            if let Some(logo) = &new_charity.logo {
                discard_logo(&server_config.media_root, logo);
            }
            FlashMessage::error("Failed to add charity.".to_string()).send();
        }
    }

    redirect("/")
}
