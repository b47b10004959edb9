use std::sync::Arc;

use catalog_infra::{
    CatalogError, CatalogService, InMemoryProductStore, ProductService, fixtures,
};

use crate::config::ApiConfig;

/// Services shared by all handlers.
#[derive(Clone)]
pub struct AppServices {
    products: Arc<dyn ProductService>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductService>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &dyn ProductService {
        self.products.as_ref()
    }
}

/// Wire the in-memory store and catalog service, seeding demo data if configured.
pub async fn build_services(config: &ApiConfig) -> Result<AppServices, CatalogError> {
    let store = Arc::new(InMemoryProductStore::new());
    let catalog: Arc<dyn ProductService> = Arc::new(CatalogService::new(store));

    if config.seed {
        fixtures::seed_if_empty(catalog.as_ref()).await?;
    }

    Ok(AppServices::new(catalog))
}
