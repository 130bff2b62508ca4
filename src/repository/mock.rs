//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::brand::{CatalogBrand, NewCatalogBrand};
use crate::domain::catalog_type::{CatalogType, NewCatalogType};
use crate::domain::item::{CatalogItem, NewCatalogItem, UpdateCatalogItem};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CatalogItemListQuery, CatalogReader, CatalogWriter};

mock! {
    pub Repository {}

    impl CatalogReader for Repository {
        fn get_item_by_id(&self, id: i32) -> RepositoryResult<Option<CatalogItem>>;
        fn list_items(
            &self,
            query: CatalogItemListQuery,
        ) -> RepositoryResult<(usize, Vec<CatalogItem>)>;
        fn list_brands(&self) -> RepositoryResult<Vec<CatalogBrand>>;
        fn list_types(&self) -> RepositoryResult<Vec<CatalogType>>;
    }

    impl CatalogWriter for Repository {
        fn create_items(&self, new_items: &[NewCatalogItem]) -> RepositoryResult<usize>;
        fn create_brands(
            &self,
            new_brands: &[NewCatalogBrand],
        ) -> RepositoryResult<Vec<CatalogBrand>>;
        fn create_types(&self, new_types: &[NewCatalogType]) -> RepositoryResult<Vec<CatalogType>>;
        fn update_item(
            &self,
            item_id: i32,
            updates: &UpdateCatalogItem,
        ) -> RepositoryResult<CatalogItem>;
        fn delete_item(&self, item_id: i32) -> RepositoryResult<()>;
    }
}
