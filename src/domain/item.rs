use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A sellable product record exposed by the catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub picture_url: Option<String>,
    pub brand_id: i32,
    pub type_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCatalogItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub picture_url: Option<String>,
    pub brand_id: i32,
    pub type_id: i32,
}

impl NewCatalogItem {
    #[must_use]
    pub fn new(
        name: String,
        description: Option<String>,
        price: f64,
        picture_url: Option<String>,
        brand_id: i32,
        type_id: i32,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            price,
            picture_url: picture_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            brand_id,
            type_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCatalogItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub picture_url: Option<String>,
}

impl UpdateCatalogItem {
    #[must_use]
    pub fn new(
        name: String,
        description: Option<String>,
        price: f64,
        picture_url: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            price,
            picture_url: picture_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
