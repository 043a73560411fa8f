//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use rates_types::dto::ConvertRequest;
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Convert an amount between two currencies
#[utoipa::path(
    post,
    path = "/api/currency/convert",
    tag = "currency",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Converted amount", body = f64, example = json!(2.6110001436050077)),
        (status = 400, description = "Unknown currency pair or invalid request"),
        (status = 500, description = "Exchange-rate provider unavailable")
    )
)]
async fn convert() {}

/// OpenAPI documentation for the currency rates API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Rates Service API",
        version = "1.0.0",
        description = "Currency conversion backed by a third-party exchange-rate feed with a TTL cache.",
        license(name = "MIT"),
    ),
    paths(health, convert),
    components(schemas(ConvertRequest)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "currency", description = "Currency conversion operations"),
    )
)]
pub struct ApiDoc;
