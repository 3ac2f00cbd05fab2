//! HTTP host: router assembly, middleware stack and serving.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode};
use axum::routing::get;
use calculator::Service;
use calculator::api::rest::{self, ApiError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ServerConfig};
use crate::cors::build_cors_layer;
use crate::signals::shutdown_signal;

const SERVICE_NAME: &str = "Calculator API";
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Liveness payload for `GET {prefix}/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
        service: SERVICE_NAME,
    })
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// UUID v4 request ids for requests that arrive without one.
#[derive(Clone, Copy, Default)]
struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&uuid::Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Assemble the full router: calculator routes, health probes, docs and
/// the middleware stack.
///
/// # Errors
/// Returns an error if the CORS configuration is invalid.
pub fn build_router(cfg: &ServerConfig, service: Arc<Service>) -> Result<Router> {
    let api = rest::router(service).route("/health", get(health_check));

    let mut router = if cfg.api_prefix.is_empty() {
        api
    } else {
        Router::new().nest(&cfg.api_prefix, api)
    };

    router = router.route("/healthz", get(|| async { "ok" }));

    if cfg.enable_docs {
        let doc = rest::openapi::openapi(&cfg.api_prefix);
        router = router.route(
            "/openapi.json",
            get(move || {
                let doc = doc.clone();
                async move { Json(doc) }
            }),
        );
    }

    router = router.fallback(not_found);

    // Layers run outermost-last: request id -> trace -> timeout -> body limit -> CORS.
    router = router.layer(build_cors_layer(&cfg.cors)?);
    router = router.layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes));
    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        Duration::from_secs(cfg.request_timeout_secs),
    ));
    router = router.layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        let rid = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("n/a");

        tracing::info_span!(
            "http_request",
            method = %req.method(),
            uri = %req.uri().path(),
            request_id = %rid,
        )
    }));
    router = router.layer(PropagateRequestIdLayer::x_request_id());
    router = router.layer(SetRequestIdLayer::x_request_id(MakeReqId));

    Ok(router)
}

/// Bind, serve until a shutdown signal arrives, then drain.
///
/// # Errors
/// Returns an error if the router cannot be built, the address cannot be
/// bound, or the server fails.
pub async fn run_server(config: AppConfig) -> Result<()> {
    let service = Arc::new(Service::new(&config.calculator));
    let router = build_router(&config.server, service)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        api_prefix = %config.server.api_prefix,
        history_limit = ?config.calculator.history_limit,
        "Calculator API listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Calculator API stopped");
    Ok(())
}
