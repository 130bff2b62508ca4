//! Services backing the storefront catalog page.

use crate::dto::catalog::{CatalogIndexViewModel, CatalogQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CatalogItemListQuery, CatalogReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads the catalog view for the storefront index page.
///
/// A missing page parameter means the first page. The page index is forwarded
/// exactly as requested; asking for a page past the end yields an empty item
/// list with the true total rather than an error.
pub fn load_index_page<R>(repo: &R, query: CatalogQuery) -> ServiceResult<CatalogIndexViewModel>
where
    R: CatalogReader + ?Sized,
{
    let page = query.page.unwrap_or(0);

    get_catalog_items(
        repo,
        page,
        DEFAULT_ITEMS_PER_PAGE,
        query.brand,
        query.catalog_type,
    )
}

/// Fetches one page of catalog items together with the brand and type lists
/// the filter bar needs. Filters are forwarded to the repository untouched.
pub fn get_catalog_items<R>(
    repo: &R,
    page_index: usize,
    items_page: usize,
    brand_id: Option<i32>,
    type_id: Option<i32>,
) -> ServiceResult<CatalogIndexViewModel>
where
    R: CatalogReader + ?Sized,
{
    let mut list_query = CatalogItemListQuery::new().paginate(page_index, items_page);

    if let Some(brand_id) = brand_id {
        list_query = list_query.brand(brand_id);
    }
    if let Some(type_id) = type_id {
        list_query = list_query.catalog_type(type_id);
    }

    let (total, items) = repo.list_items(list_query).map_err(ServiceError::from)?;
    let brands = repo.list_brands().map_err(ServiceError::from)?;
    let types = repo.list_types().map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(items_page);

    Ok(CatalogIndexViewModel {
        items: Paginated::new(items, page_index, total_pages),
        brands,
        types,
        brand_filter_applied: brand_id,
        type_filter_applied: type_id,
    })
}
