//! Catalog service: the seam between HTTP handlers and product storage.
//!
//! Each operation maps to exactly one store call (plus, for search, an
//! in-memory filter). There are no retries and no multi-step transactions.

use async_trait::async_trait;
use thiserror::Error;

use catalog_core::DomainError;
use catalog_products::{Product, ProductDraft, ProductId};

use crate::read_model::{ProductStore, StoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl CatalogError {
    pub fn not_found() -> Self {
        Self::Domain(DomainError::not_found())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_not_found())
    }
}

/// Catalog operations exposed to the HTTP layer.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;

    /// Products whose name contains `query`. A blank query yields nothing.
    async fn search_by_name(&self, query: &str) -> Result<Vec<Product>, CatalogError>;

    async fn count(&self) -> Result<usize, CatalogError>;

    async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogError>;

    /// Field-wise update. `NotFound` when `id` does not exist.
    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, CatalogError>;

    async fn delete(&self, id: ProductId) -> Result<(), CatalogError>;
}

/// `ProductService` over any `ProductStore`.
#[derive(Debug)]
pub struct CatalogService<S> {
    store: S,
}

impl<S> CatalogService<S>
where
    S: ProductStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S> ProductService for CatalogService<S>
where
    S: ProductStore,
{
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.store.list()?)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.store.get(id)?)
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut products = self.store.list()?;
        products.retain(|p| p.name_contains(query));
        Ok(products)
    }

    async fn count(&self) -> Result<usize, CatalogError> {
        Ok(self.store.count()?)
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        let product = self.store.insert(draft)?;
        tracing::info!(product_id = %product.id_typed(), name = product.name(), "product created");
        Ok(product)
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, CatalogError> {
        match self.store.update(id, draft)? {
            Some(product) => {
                tracing::info!(product_id = %id, "product updated");
                Ok(product)
            }
            None => {
                tracing::debug!(product_id = %id, "update skipped: product not found");
                Err(CatalogError::not_found())
            }
        }
    }

    async fn delete(&self, id: ProductId) -> Result<(), CatalogError> {
        match self.store.remove(id)? {
            Some(_) => {
                tracing::info!(product_id = %id, "product deleted");
                Ok(())
            }
            None => Err(CatalogError::not_found()),
        }
    }
}
