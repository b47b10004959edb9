//! Products domain module.
//!
//! The catalog's only entity lives here, as plain data plus the few rules the
//! catalog applies to it (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductDraft, ProductId};
