use diesel::prelude::*;

use crate::domain::catalog_type::{
    CatalogType as DomainCatalogType, NewCatalogType as DomainNewCatalogType,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::catalog_types)]
/// Diesel model for [`crate::domain::catalog_type::CatalogType`].
pub struct CatalogType {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::catalog_types)]
/// Insertable form of [`CatalogType`].
pub struct NewCatalogType<'a> {
    pub name: &'a str,
}

impl From<CatalogType> for DomainCatalogType {
    fn from(catalog_type: CatalogType) -> Self {
        Self {
            id: catalog_type.id,
            name: catalog_type.name,
        }
    }
}

impl<'a> From<&'a DomainNewCatalogType> for NewCatalogType<'a> {
    fn from(catalog_type: &'a DomainNewCatalogType) -> Self {
        Self {
            name: catalog_type.name.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_type_into_domain() {
        let db_type = CatalogType {
            id: 2,
            name: "Mug".to_string(),
        };
        let domain: DomainCatalogType = db_type.into();
        assert_eq!(domain.id, 2);
        assert_eq!(domain.name, "Mug");
    }
}
