use std::fmt;
use std::str::FromStr;

use actix_web::{HttpResponse, Responder, get, web};
use serde::{Deserialize, Deserializer};
use tera::{Context, Tera};

use crate::dto::catalog::{CatalogIndexViewModel, CatalogQuery};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::catalog as catalog_service;

/// Treats an empty query parameter as an absent value, so that submitting the
/// filter form with "All brands" selected does not fail extraction.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogQueryParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    page: Option<usize>,
    #[serde(default, deserialize_with = "empty_as_none")]
    brand: Option<i32>,
    #[serde(default, rename = "type", deserialize_with = "empty_as_none")]
    catalog_type: Option<i32>,
}

/// Query-string suffix that keeps the applied filters on pager links.
fn filter_query(catalog: &CatalogIndexViewModel) -> String {
    let mut suffix = String::new();
    if let Some(brand_id) = catalog.brand_filter_applied {
        suffix.push_str(&format!("&brand={brand_id}"));
    }
    if let Some(type_id) = catalog.type_filter_applied {
        suffix.push_str(&format!("&type={type_id}"));
    }
    suffix
}

#[get("/")]
pub async fn show_catalog(
    params: web::Query<CatalogQueryParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let query = CatalogQuery {
        page: params.page,
        brand: params.brand,
        catalog_type: params.catalog_type,
    };

    let catalog = match catalog_service::load_index_page(repo.get_ref(), query) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load catalog page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    // Per-request snapshot of the display settings.
    let settings = server_config.display.clone();

    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("settings", &settings);
    context.insert("filter_query", &filter_query(&catalog));
    context.insert("catalog", &catalog);

    render_template(&tera, "main/index.html", &context)
}
