use diesel::prelude::*;

use crate::domain::brand::{
    CatalogBrand as DomainCatalogBrand, NewCatalogBrand as DomainNewCatalogBrand,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::catalog_brands)]
/// Diesel model for [`crate::domain::brand::CatalogBrand`].
pub struct CatalogBrand {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::catalog_brands)]
/// Insertable form of [`CatalogBrand`].
pub struct NewCatalogBrand<'a> {
    pub name: &'a str,
}

impl From<CatalogBrand> for DomainCatalogBrand {
    fn from(brand: CatalogBrand) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
        }
    }
}

impl<'a> From<&'a DomainNewCatalogBrand> for NewCatalogBrand<'a> {
    fn from(brand: &'a DomainNewCatalogBrand) -> Self {
        Self {
            name: brand.name.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_into_domain() {
        let db_brand = CatalogBrand {
            id: 7,
            name: "Basecamp".to_string(),
        };
        let domain: DomainCatalogBrand = db_brand.into();
        assert_eq!(domain.id, 7);
        assert_eq!(domain.name, "Basecamp");
    }

    #[test]
    fn from_domain_new_trims_name() {
        let domain = DomainNewCatalogBrand::new("  Basecamp ");
        let new: NewCatalogBrand = (&domain).into();
        assert_eq!(new.name, "Basecamp");
    }
}
