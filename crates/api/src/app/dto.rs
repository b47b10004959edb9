//! JSON shapes of the product API.
//!
//! Field names on the wire are `id`, `nome`, `descricao`, `preco`, `estoque`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_products::{Product, ProductDraft};

// -------------------------
// Request DTOs
// -------------------------

/// Body of create and update requests. A client-supplied `id` is ignored.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "preco", with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    #[serde(rename = "estoque", default)]
    pub stock: i32,
}

impl From<ProductRequest> for ProductDraft {
    fn from(req: ProductRequest) -> Self {
        ProductDraft {
            name: req.name,
            description: req.description,
            price: req.price,
            stock: req.stock,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub nome: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "preco", with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    #[serde(rename = "estoque")]
    pub stock: i32,
}

impl From<&Product> for ProductResponse {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id_typed().value(),
            name: p.name().to_string(),
            description: p.description().to_string(),
            price: p.price(),
            stock: p.stock(),
        }
    }
}

pub fn product_to_json(p: &Product) -> ProductResponse {
    ProductResponse::from(p)
}

pub fn products_to_json(items: &[Product]) -> Vec<ProductResponse> {
    items.iter().map(product_to_json).collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use catalog_products::ProductId;

    use super::*;

    fn product_priced(price: Decimal) -> Product {
        Product::from_draft(
            ProductId::new(1),
            ProductDraft {
                name: "Notebook".to_string(),
                description: "Notebook básico".to_string(),
                price,
                stock: 10,
            },
        )
    }

    #[test]
    fn request_accepts_integer_and_fractional_prices() {
        let req: ProductRequest = serde_json::from_str(
            r#"{"id":77,"nome":"Mouse","descricao":"Mouse sem fio","preco":120,"estoque":50}"#,
        )
        .unwrap();
        assert_eq!(req.price, Decimal::new(120, 0));

        let req: ProductRequest = serde_json::from_str(r#"{"nome":"Cabo","preco":19.9}"#).unwrap();
        assert_eq!(req.price, Decimal::new(199, 1));
        assert_eq!(req.description, "");
        assert_eq!(req.stock, 0);
    }

    #[test]
    fn request_rejects_missing_price() {
        let res = serde_json::from_str::<ProductRequest>(r#"{"nome":"Cabo"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn price_keeps_every_digit_in_and_out() {
        let req: ProductRequest =
            serde_json::from_str(r#"{"nome":"X","preco":12345678901234.567}"#).unwrap();
        assert_eq!(req.price, Decimal::from_str("12345678901234.567").unwrap());

        let body = serde_json::to_string(&product_to_json(&product_priced(req.price))).unwrap();
        assert!(body.contains(r#""preco":12345678901234.567"#), "{body}");

        let big = Decimal::from_str("1234567890123456.78").unwrap();
        let body = serde_json::to_string(&product_to_json(&product_priced(big))).unwrap();
        assert!(body.contains(r#""preco":1234567890123456.78"#), "{body}");
    }

    #[test]
    fn price_keeps_its_scale() {
        let body =
            serde_json::to_string(&product_to_json(&product_priced(Decimal::new(1050, 2)))).unwrap();
        assert!(body.contains(r#""preco":10.50"#), "{body}");
    }

    #[test]
    fn response_uses_wire_field_names() {
        let value =
            serde_json::to_value(product_to_json(&product_priced(Decimal::new(3500, 0)))).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["nome"], "Notebook");
        assert_eq!(value["descricao"], "Notebook básico");
        assert_eq!(value["preco"].as_f64(), Some(3500.0));
        assert_eq!(value["estoque"], 10);
    }
}
