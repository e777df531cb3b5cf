use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use klimatpro_catalog::ProductQuery;

use crate::app::dto::ProductListResponse;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route(
        "/",
        get(list_products)
            .options(preflight)
            .fallback(errors::method_not_allowed),
    )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<ProductQuery>,
) -> axum::response::Response {
    let catalog = services.catalog();
    let products = query.apply(catalog.products());
    tracing::debug!(?query, matched = products.len(), "product list requested");

    (
        StatusCode::OK,
        Json(ProductListResponse::new(products, catalog.sources())),
    )
        .into_response()
}

/// CORS preflight: always 200 with an empty body.
pub async fn preflight() -> axum::response::Response {
    (
        StatusCode::OK,
        [
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET, OPTIONS"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ),
            (
                header::ACCESS_CONTROL_MAX_AGE,
                HeaderValue::from_static("86400"),
            ),
        ],
    )
        .into_response()
}
