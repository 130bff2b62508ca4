use crate::{
    domain::{
        brand::{CatalogBrand, NewCatalogBrand},
        catalog_type::{CatalogType, NewCatalogType},
        item::{CatalogItem, NewCatalogItem, UpdateCatalogItem},
    },
    repository::errors::RepositoryResult,
};

pub mod catalog;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use catalog::DieselRepository;

#[derive(Debug, Clone)]
pub struct Pagination {
    /// Zero-based page index. Passed through as requested, never clamped.
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogItemListQuery {
    pub brand_id: Option<i32>,
    pub type_id: Option<i32>,
    pub pagination: Option<Pagination>,
}

impl CatalogItemListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand(mut self, brand_id: i32) -> Self {
        self.brand_id = Some(brand_id);
        self
    }

    pub fn catalog_type(mut self, type_id: i32) -> Self {
        self.type_id = Some(type_id);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CatalogReader {
    fn get_item_by_id(&self, id: i32) -> RepositoryResult<Option<CatalogItem>>;
    /// Returns the total number of matching items alongside the requested page.
    fn list_items(&self, query: CatalogItemListQuery)
    -> RepositoryResult<(usize, Vec<CatalogItem>)>;
    fn list_brands(&self) -> RepositoryResult<Vec<CatalogBrand>>;
    fn list_types(&self) -> RepositoryResult<Vec<CatalogType>>;
}

pub trait CatalogWriter {
    fn create_items(&self, new_items: &[NewCatalogItem]) -> RepositoryResult<usize>;
    fn create_brands(&self, new_brands: &[NewCatalogBrand])
    -> RepositoryResult<Vec<CatalogBrand>>;
    fn create_types(&self, new_types: &[NewCatalogType]) -> RepositoryResult<Vec<CatalogType>>;
    fn update_item(&self, item_id: i32, updates: &UpdateCatalogItem)
    -> RepositoryResult<CatalogItem>;
    fn delete_item(&self, item_id: i32) -> RepositoryResult<()>;
}
