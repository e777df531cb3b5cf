use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use crate::app::dto::{CreateInquiryRequest, InquiryAccepted};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route(
        "/",
        post(create_inquiry).fallback(errors::method_not_allowed),
    )
}

pub async fn create_inquiry(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CreateInquiryRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", e.body_text()),
    };

    match services.record_inquiry(body) {
        Ok(record) => (StatusCode::CREATED, Json(InquiryAccepted { id: record.id })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
