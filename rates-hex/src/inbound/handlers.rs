//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use rates_types::{AppError, ConvertRequest, RateCache, RateFeed};

use crate::RateService;

/// Application state shared across handlers.
pub struct AppState<C: RateCache, F: RateFeed> {
    pub service: RateService<C, F>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Convert an amount between two currencies.
#[tracing::instrument(skip(state), fields(source = req.source, target = req.target, amount = req.amount))]
pub async fn convert<C: RateCache, F: RateFeed>(
    State(state): State<Arc<AppState<C, F>>>,
    Json(req): Json<ConvertRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !req.amount.is_finite() || req.amount < 0.0 {
        return Err(AppError::BadRequest("Amount must be a non-negative number".into()).into());
    }

    let converted = state.service.convert(req).await.map_err(AppError::from)?;
    Ok(Json(converted))
}
