use serde::Serialize;

use crate::domain::brand::CatalogBrand;
use crate::domain::catalog_type::CatalogType;
use crate::domain::item::CatalogItem;
use crate::pagination::Paginated;

/// Query parameters accepted by the catalog index service.
#[derive(Debug, Default)]
pub struct CatalogQuery {
    /// Zero-based page requested by the user interface.
    pub page: Option<usize>,
    /// Brand the catalog should be narrowed to.
    pub brand: Option<i32>,
    /// Product type the catalog should be narrowed to.
    pub catalog_type: Option<i32>,
}

/// Data required to render the catalog index template.
#[derive(Debug, Serialize)]
pub struct CatalogIndexViewModel {
    /// Paginated items for the requested page.
    pub items: Paginated<CatalogItem>,
    /// All brands, for the filter select.
    pub brands: Vec<CatalogBrand>,
    /// All product types, for the filter select.
    pub types: Vec<CatalogType>,
    /// Brand filter echoed back to the template when present.
    pub brand_filter_applied: Option<i32>,
    /// Type filter echoed back to the template when present.
    pub type_filter_applied: Option<i32>,
}
