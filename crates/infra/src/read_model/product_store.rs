use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use catalog_core::Entity;
use catalog_products::{Product, ProductDraft, ProductId};

/// Storage failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("product store lock poisoned")]
    Poisoned,
}

/// Key/value store for products with store-assigned identifiers.
///
/// Every method is a single store operation; there is no batching and no
/// transaction spanning calls.
pub trait ProductStore: Send + Sync {
    /// All products in ascending id order.
    fn list(&self) -> Result<Vec<Product>, StoreError>;
    fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError>;
    fn count(&self) -> Result<usize, StoreError>;
    /// Persist a new product under the next free identifier.
    fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError>;
    /// Overwrite the mutable fields of an existing product. `None` when absent.
    fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Option<Product>, StoreError>;
    fn remove(&self, id: ProductId) -> Result<Option<Product>, StoreError>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn list(&self) -> Result<Vec<Product>, StoreError> {
        (**self).list()
    }

    fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).get(id)
    }

    fn count(&self) -> Result<usize, StoreError> {
        (**self).count()
    }

    fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        (**self).insert(draft)
    }

    fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Option<Product>, StoreError> {
        (**self).update(id, draft)
    }

    fn remove(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).remove(id)
    }
}

#[derive(Debug)]
struct Inner {
    products: BTreeMap<ProductId, Product>,
    last_id: i64,
}

/// In-memory product store.
///
/// Identifiers start at 1 and are never reused, even after a delete.
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                products: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for InMemoryProductStore {
    fn list(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.products.values().cloned().collect())
    }

    fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.products.get(&id).cloned())
    }

    fn count(&self) -> Result<usize, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.products.len())
    }

    fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        inner.last_id += 1;
        let product = Product::from_draft(ProductId::new(inner.last_id), draft);
        inner.products.insert(*product.id(), product.clone());
        Ok(product)
    }

    fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Option<Product>, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.products.get_mut(&id).map(|existing| {
            existing.apply(draft);
            existing.clone()
        }))
    }

    fn remove(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.products.remove(&id))
    }
}
