use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use catalog_products::ProductId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub const BASE_PATH: &str = "/api/v1/produtos";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/pesquisar", get(search_products))
        .route("/contar", get(count_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn parse_id(id: &str) -> Result<ProductId, axum::response::Response> {
    id.parse()
        .map_err(|e: catalog_core::DomainError| errors::catalog_error_to_response(e.into()))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products().list_all().await {
        Ok(items) => (StatusCode::OK, Json(dto::products_to_json(&items))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    match services.products().find_by_id(id).await {
        Ok(Some(product)) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Ok(None) => errors::product_not_found(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SearchQuery>,
) -> axum::response::Response {
    let nome = query.nome.unwrap_or_default();
    match services.products().search_by_name(&nome).await {
        Ok(items) => (StatusCode::OK, Json(dto::products_to_json(&items))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn count_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products().count().await {
        Ok(total) => (StatusCode::OK, Json(total)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let created = match services.products().create(body.into()).await {
        Ok(p) => p,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    let location = format!("{BASE_PATH}/{}", created.id_typed());
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(dto::product_to_json(&created)),
    )
        .into_response()
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    match services.products().update(id, body.into()).await {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    match services.products().delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
