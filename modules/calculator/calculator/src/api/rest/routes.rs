//! Route registration for the calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::domain::Service;

use super::handlers;

/// Build the calculator routes, relative to the API prefix.
///
/// - `POST /calculate` - evaluate one operation
/// - `GET /history` - list the history, oldest first
/// - `DELETE /history` - clear the history
#[must_use]
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/calculate", post(handlers::calculate))
        .route(
            "/history",
            get(handlers::get_history).delete(handlers::clear_history),
        )
        .layer(Extension(service))
}
