use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::item::{
    CatalogItem as DomainCatalogItem, NewCatalogItem as DomainNewCatalogItem,
    UpdateCatalogItem as DomainUpdateCatalogItem,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::catalog_items)]
/// Diesel model for [`crate::domain::item::CatalogItem`].
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::catalog_items)]
/// Insertable form of [`CatalogItem`].
pub struct NewCatalogItem<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub picture_url: Option<&'a str>,
    pub brand_id: i32,
    pub type_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::catalog_items)]
/// Data used when updating a [`CatalogItem`] record.
pub struct UpdateCatalogItem<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub picture_url: Option<&'a str>,
}

impl From<CatalogItem> for DomainCatalogItem {
    fn from(item: CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            picture_url: item.picture_url,
            brand_id: item.brand_id,
            type_id: item.type_id,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCatalogItem> for NewCatalogItem<'a> {
    fn from(item: &'a DomainNewCatalogItem) -> Self {
        Self {
            name: item.name.as_str(),
            description: item.description.as_deref(),
            price: item.price,
            picture_url: item.picture_url.as_deref(),
            brand_id: item.brand_id,
            type_id: item.type_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateCatalogItem> for UpdateCatalogItem<'a> {
    fn from(item: &'a DomainUpdateCatalogItem) -> Self {
        Self {
            name: item.name.as_str(),
            description: item.description.as_deref(),
            price: item.price,
            picture_url: item.picture_url.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_domain_new() -> DomainNewCatalogItem {
        DomainNewCatalogItem::new(
            " Trail Mug ".to_string(),
            Some("Enamel mug".to_string()),
            12.5,
            Some("/assets/img/mug.png".to_string()),
            1,
            2,
        )
    }

    #[test]
    fn from_domain_new_creates_newcatalogitem() {
        let domain = sample_domain_new();
        let new: NewCatalogItem = (&domain).into();
        assert_eq!(new.name, domain.name);
        assert_eq!(new.description, domain.description.as_deref());
        assert_eq!(new.price, domain.price);
        assert_eq!(new.picture_url, domain.picture_url.as_deref());
        assert_eq!(new.brand_id, domain.brand_id);
        assert_eq!(new.type_id, domain.type_id);
    }

    #[test]
    fn domain_new_normalizes_optional_fields() {
        let domain = DomainNewCatalogItem::new(
            " Sticker ".to_string(),
            Some("   ".to_string()),
            1.0,
            None,
            1,
            1,
        );
        assert_eq!(domain.name, "Sticker");
        assert_eq!(domain.description, None);
        assert_eq!(domain.picture_url, None);
    }

    #[test]
    fn from_domain_update_creates_updatecatalogitem() {
        let domain =
            DomainUpdateCatalogItem::new("Trail Mug v2".to_string(), None, 14.0, None);
        let update: UpdateCatalogItem = (&domain).into();
        assert_eq!(update.name, domain.name);
        assert_eq!(update.description, None);
        assert_eq!(update.price, 14.0);
        assert_eq!(update.picture_url, None);
    }

    #[test]
    fn catalog_item_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_item = CatalogItem {
            id: 1,
            name: "Trail Mug".to_string(),
            description: Some("Enamel mug".to_string()),
            price: 12.5,
            picture_url: None,
            brand_id: 3,
            type_id: 4,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainCatalogItem = db_item.into();
        assert_eq!(domain.id, 1);
        assert_eq!(domain.name, "Trail Mug");
        assert_eq!(domain.description, Some("Enamel mug".to_string()));
        assert_eq!(domain.price, 12.5);
        assert_eq!(domain.picture_url, None);
        assert_eq!(domain.brand_id, 3);
        assert_eq!(domain.type_id, 4);
        assert_eq!(domain.created_at, now);
        assert_eq!(domain.updated_at, now);
    }
}
