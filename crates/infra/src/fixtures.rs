//! Startup seed data for an empty catalog.

use rust_decimal::Decimal;

use catalog_products::ProductDraft;

use crate::catalog::{CatalogError, ProductService};

/// The three demo products inserted into an empty catalog.
pub fn demo_products() -> Vec<ProductDraft> {
    vec![
        ProductDraft {
            name: "Notebook".to_string(),
            description: "Notebook básico".to_string(),
            price: Decimal::new(3500, 0),
            stock: 10,
        },
        ProductDraft {
            name: "Mouse".to_string(),
            description: "Mouse sem fio".to_string(),
            price: Decimal::new(120, 0),
            stock: 50,
        },
        ProductDraft {
            name: "Teclado".to_string(),
            description: "Teclado mecânico".to_string(),
            price: Decimal::new(280, 0),
            stock: 20,
        },
    ]
}

/// Insert the demo products when the catalog is empty.
///
/// Returns how many products were inserted (0 when the catalog already had data).
pub async fn seed_if_empty(service: &dyn ProductService) -> Result<usize, CatalogError> {
    if service.count().await? > 0 {
        tracing::debug!("catalog already populated; skipping seed");
        return Ok(0);
    }

    let drafts = demo_products();
    let inserted = drafts.len();
    for draft in drafts {
        service.create(draft).await?;
    }

    tracing::info!(inserted, "seeded demo catalog");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::CatalogService;
    use crate::read_model::InMemoryProductStore;

    #[tokio::test]
    async fn seeds_empty_catalog_once() {
        let svc = CatalogService::new(Arc::new(InMemoryProductStore::new()));

        assert_eq!(seed_if_empty(&svc).await.unwrap(), 3);
        assert_eq!(seed_if_empty(&svc).await.unwrap(), 0);

        let names: Vec<String> = svc
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Notebook", "Mouse", "Teclado"]);
    }
}
