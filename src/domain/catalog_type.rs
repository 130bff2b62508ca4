use serde::{Deserialize, Serialize};

/// A product category a catalog item can be filtered by.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogType {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCatalogType {
    pub name: String,
}

impl NewCatalogType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
        }
    }
}
