use diesel::prelude::*;

use crate::{
    db::DbPool,
    domain::{
        brand::{CatalogBrand, NewCatalogBrand},
        catalog_type::{CatalogType, NewCatalogType},
        item::{CatalogItem, NewCatalogItem, UpdateCatalogItem},
    },
    repository::{CatalogItemListQuery, CatalogReader, CatalogWriter, errors::RepositoryResult},
};

/// Diesel implementation of the catalog repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CatalogReader for DieselRepository {
    fn get_item_by_id(&self, id: i32) -> RepositoryResult<Option<CatalogItem>> {
        use crate::models::item::CatalogItem as DbCatalogItem;
        use crate::schema::catalog_items;

        let mut conn = self.pool.get()?;
        let item = catalog_items::table
            .find(id)
            .first::<DbCatalogItem>(&mut conn)
            .optional()?;

        Ok(item.map(Into::into))
    }

    fn list_items(
        &self,
        query: CatalogItemListQuery,
    ) -> RepositoryResult<(usize, Vec<CatalogItem>)> {
        use crate::models::item::CatalogItem as DbCatalogItem;
        use crate::schema::catalog_items;

        let mut conn = self.pool.get()?;

        let mut items_query = catalog_items::table.into_boxed();
        let mut count_query = catalog_items::table.into_boxed();

        if let Some(brand_id) = query.brand_id {
            items_query = items_query.filter(catalog_items::brand_id.eq(brand_id));
            count_query = count_query.filter(catalog_items::brand_id.eq(brand_id));
        }

        if let Some(type_id) = query.type_id {
            items_query = items_query.filter(catalog_items::type_id.eq(type_id));
            count_query = count_query.filter(catalog_items::type_id.eq(type_id));
        }

        let total: i64 = count_query.count().get_result(&mut conn)?;

        items_query = items_query.order(catalog_items::id.asc());

        if let Some(pagination) = &query.pagination {
            let per_page = pagination.per_page as i64;
            let offset = pagination.page as i64 * per_page;
            items_query = items_query.limit(per_page).offset(offset);
        }

        let items = items_query
            .load::<DbCatalogItem>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<CatalogItem>>();

        Ok((total as usize, items))
    }

    fn list_brands(&self) -> RepositoryResult<Vec<CatalogBrand>> {
        use crate::models::brand::CatalogBrand as DbCatalogBrand;
        use crate::schema::catalog_brands;

        let mut conn = self.pool.get()?;
        let brands = catalog_brands::table
            .order(catalog_brands::name.asc())
            .load::<DbCatalogBrand>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(brands)
    }

    fn list_types(&self) -> RepositoryResult<Vec<CatalogType>> {
        use crate::models::catalog_type::CatalogType as DbCatalogType;
        use crate::schema::catalog_types;

        let mut conn = self.pool.get()?;
        let types = catalog_types::table
            .order(catalog_types::name.asc())
            .load::<DbCatalogType>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(types)
    }
}

impl CatalogWriter for DieselRepository {
    fn create_items(&self, new_items: &[NewCatalogItem]) -> RepositoryResult<usize> {
        use crate::models::item::NewCatalogItem as DbNewCatalogItem;
        use crate::schema::catalog_items;

        let mut conn = self.pool.get()?;
        let insertables: Vec<DbNewCatalogItem> = new_items.iter().map(|i| i.into()).collect();
        let affected = diesel::insert_into(catalog_items::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn create_brands(
        &self,
        new_brands: &[NewCatalogBrand],
    ) -> RepositoryResult<Vec<CatalogBrand>> {
        use crate::models::brand::{
            CatalogBrand as DbCatalogBrand, NewCatalogBrand as DbNewCatalogBrand,
        };
        use crate::schema::catalog_brands;

        let mut conn = self.pool.get()?;
        let insertables: Vec<DbNewCatalogBrand> = new_brands.iter().map(|b| b.into()).collect();
        let created = conn
            .transaction::<Vec<DbCatalogBrand>, diesel::result::Error, _>(|conn| {
                insertables
                    .iter()
                    .map(|insertable| {
                        diesel::insert_into(catalog_brands::table)
                            .values(insertable)
                            .get_result::<DbCatalogBrand>(conn)
                    })
                    .collect()
            })?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(created)
    }

    fn create_types(&self, new_types: &[NewCatalogType]) -> RepositoryResult<Vec<CatalogType>> {
        use crate::models::catalog_type::{
            CatalogType as DbCatalogType, NewCatalogType as DbNewCatalogType,
        };
        use crate::schema::catalog_types;

        let mut conn = self.pool.get()?;
        let insertables: Vec<DbNewCatalogType> = new_types.iter().map(|t| t.into()).collect();
        let created = conn
            .transaction::<Vec<DbCatalogType>, diesel::result::Error, _>(|conn| {
                insertables
                    .iter()
                    .map(|insertable| {
                        diesel::insert_into(catalog_types::table)
                            .values(insertable)
                            .get_result::<DbCatalogType>(conn)
                    })
                    .collect()
            })?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(created)
    }

    fn update_item(
        &self,
        item_id: i32,
        updates: &UpdateCatalogItem,
    ) -> RepositoryResult<CatalogItem> {
        use crate::models::item::{
            CatalogItem as DbCatalogItem, UpdateCatalogItem as DbUpdateCatalogItem,
        };
        use crate::schema::catalog_items;

        let mut conn = self.pool.get()?;
        let db_updates: DbUpdateCatalogItem = updates.into();

        let updated = diesel::update(catalog_items::table.find(item_id))
            .set(&db_updates)
            .get_result::<DbCatalogItem>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_item(&self, item_id: i32) -> RepositoryResult<()> {
        use crate::schema::catalog_items;

        let mut conn = self.pool.get()?;
        diesel::delete(catalog_items::table.find(item_id)).execute(&mut conn)?;

        Ok(())
    }
}
