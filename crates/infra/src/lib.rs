//! Infrastructure layer: storage and the catalog service built on top of it.

pub mod catalog;
pub mod fixtures;
pub mod read_model;

pub use catalog::{CatalogError, CatalogService, ProductService};
pub use read_model::{InMemoryProductStore, ProductStore, StoreError};
