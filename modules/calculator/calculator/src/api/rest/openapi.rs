//! `OpenAPI` document for the calculator routes

#![allow(clippy::needless_for_each)]

use utoipa::OpenApi;
use utoipa::openapi::server::Server;

use super::dto::{EvaluateRequest, EvaluateResponse, HistoryEntryDto, MessageResponse};
use super::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "Arithmetic evaluation with an in-memory calculation history"
    ),
    paths(
        crate::api::rest::handlers::calculate,
        crate::api::rest::handlers::get_history,
        crate::api::rest::handlers::clear_history,
    ),
    components(schemas(
        EvaluateRequest,
        EvaluateResponse,
        HistoryEntryDto,
        MessageResponse,
        ErrorResponse,
    )),
    tags((name = "calculator", description = "Arithmetic and history endpoints"))
)]
struct CalculatorApiDoc;

/// Build the `OpenAPI` document with paths served under `api_prefix`.
#[must_use]
pub fn openapi(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = CalculatorApiDoc::openapi();
    if !api_prefix.is_empty() {
        doc.servers = Some(vec![Server::new(api_prefix)]);
    }
    doc
}
