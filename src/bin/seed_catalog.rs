//! One-shot seeder populating an empty catalog with demo brands, types and
//! items.

use std::env;

use config::Config;
use dotenvy::dotenv;

use pushkind_store::db::establish_connection_pool;
use pushkind_store::domain::{
    brand::{CatalogBrand, NewCatalogBrand},
    catalog_type::{CatalogType, NewCatalogType},
    item::NewCatalogItem,
};
use pushkind_store::models::config::ServerConfig;
use pushkind_store::repository::errors::{RepositoryError, RepositoryResult};
use pushkind_store::repository::{
    CatalogItemListQuery, CatalogReader, CatalogWriter, DieselRepository,
};

fn brand_id(brands: &[CatalogBrand], name: &str) -> RepositoryResult<i32> {
    brands
        .iter()
        .find(|b| b.name == name)
        .map(|b| b.id)
        .ok_or_else(|| RepositoryError::Unexpected(format!("Missing seeded brand: {name}")))
}

fn type_id(types: &[CatalogType], name: &str) -> RepositoryResult<i32> {
    types
        .iter()
        .find(|t| t.name == name)
        .map(|t| t.id)
        .ok_or_else(|| RepositoryError::Unexpected(format!("Missing seeded type: {name}")))
}

/// Seeds demo catalog data unless the catalog already holds items.
fn seed_catalog<R>(repo: &R) -> RepositoryResult<usize>
where
    R: CatalogReader + CatalogWriter,
{
    let (existing, _) = repo.list_items(CatalogItemListQuery::new().paginate(0, 1))?;
    if existing > 0 {
        log::info!("Catalog already contains {existing} items, skipping seed");
        return Ok(0);
    }

    let brands = repo.create_brands(&[
        NewCatalogBrand::new("Basecamp"),
        NewCatalogBrand::new("Summit"),
        NewCatalogBrand::new("Trailhead"),
    ])?;
    let types = repo.create_types(&[
        NewCatalogType::new("Hoodie"),
        NewCatalogType::new("Mug"),
        NewCatalogType::new("Sticker"),
        NewCatalogType::new("T-Shirt"),
    ])?;

    let items = vec![
        NewCatalogItem::new(
            "Basecamp Enamel Mug".to_string(),
            Some("Double-coated enamel mug".to_string()),
            12.5,
            Some("/assets/img/basecamp-mug.png".to_string()),
            brand_id(&brands, "Basecamp")?,
            type_id(&types, "Mug")?,
        ),
        NewCatalogItem::new(
            "Basecamp Logo Tee".to_string(),
            Some("Organic cotton, classic fit".to_string()),
            19.0,
            Some("/assets/img/basecamp-tee.png".to_string()),
            brand_id(&brands, "Basecamp")?,
            type_id(&types, "T-Shirt")?,
        ),
        NewCatalogItem::new(
            "Summit Ridge Hoodie".to_string(),
            Some("Heavyweight fleece hoodie".to_string()),
            45.0,
            Some("/assets/img/summit-hoodie.png".to_string()),
            brand_id(&brands, "Summit")?,
            type_id(&types, "Hoodie")?,
        ),
        NewCatalogItem::new(
            "Summit Sticker Pack".to_string(),
            Some("Six weatherproof stickers".to_string()),
            4.5,
            None,
            brand_id(&brands, "Summit")?,
            type_id(&types, "Sticker")?,
        ),
        NewCatalogItem::new(
            "Trailhead Trucker Tee".to_string(),
            None,
            17.5,
            Some("/assets/img/trailhead-tee.png".to_string()),
            brand_id(&brands, "Trailhead")?,
            type_id(&types, "T-Shirt")?,
        ),
        NewCatalogItem::new(
            "Trailhead Camp Mug".to_string(),
            Some("Insulated steel camp mug".to_string()),
            22.0,
            None,
            brand_id(&brands, "Trailhead")?,
            type_id(&types, "Mug")?,
        ),
    ];

    repo.create_items(&items)
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    match seed_catalog(&repo) {
        Ok(inserted) => log::info!("Seeded {inserted} catalog items"),
        Err(e) => {
            log::error!("Failed to seed catalog: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use pushkind_store::repository::mock::MockRepository;

    #[test]
    fn skips_seed_when_catalog_has_items() {
        let mut repo = MockRepository::new();
        repo.expect_list_items()
            .times(1)
            .returning(|_| Ok((5, vec![])));
        repo.expect_create_brands().times(0);
        repo.expect_create_types().times(0);
        repo.expect_create_items().times(0);

        let inserted = seed_catalog(&repo).expect("seed should succeed");

        assert_eq!(inserted, 0);
    }

    #[test]
    fn seeds_empty_catalog() {
        let mut repo = MockRepository::new();
        repo.expect_list_items()
            .times(1)
            .returning(|_| Ok((0, vec![])));
        repo.expect_create_brands().times(1).returning(|new_brands| {
            Ok(new_brands
                .iter()
                .enumerate()
                .map(|(i, b)| CatalogBrand {
                    id: i as i32 + 1,
                    name: b.name.clone(),
                })
                .collect())
        });
        repo.expect_create_types().times(1).returning(|new_types| {
            Ok(new_types
                .iter()
                .enumerate()
                .map(|(i, t)| CatalogType {
                    id: i as i32 + 1,
                    name: t.name.clone(),
                })
                .collect())
        });
        repo.expect_create_items()
            .times(1)
            .withf(|items| {
                !items.is_empty()
                    && items
                        .iter()
                        .all(|item| item.brand_id > 0 && item.type_id > 0)
            })
            .returning(|items| Ok(items.len()));

        let inserted = seed_catalog(&repo).expect("seed should succeed");

        assert!(inserted > 0);
    }
}
