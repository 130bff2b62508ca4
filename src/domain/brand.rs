use serde::{Deserialize, Serialize};

/// A brand a catalog item can be filtered by.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogBrand {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCatalogBrand {
    pub name: String,
}

impl NewCatalogBrand {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
        }
    }
}
