use std::time::Duration;

use anyhow::Result;
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// Build a CORS layer from config.
///
/// Preflight `OPTIONS` requests are answered by the layer itself with an
/// empty `200` response.
///
/// # Errors
/// Returns an error if [`CorsConfig::validate`] rejects the config.
pub fn build_cors_layer(cfg: &CorsConfig) -> Result<CorsLayer> {
    cfg.validate()?;

    let any_origin = is_wildcard(&cfg.allowed_origins);
    let any_method = is_wildcard(&cfg.allowed_methods);
    let any_header = is_wildcard(&cfg.allowed_headers);

    if any_origin {
        warn!(
            "CORS is configured with allowed_origins=['*']; \
             consider listing explicit origins for production deployments"
        );
    }

    let mut layer = CorsLayer::new();

    if any_origin {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cfg
            .allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        if !origins.is_empty() {
            layer = layer.allow_origin(origins);
        }
    }

    if any_method {
        layer = layer.allow_methods(Any);
    } else {
        let methods: Vec<Method> = cfg
            .allowed_methods
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if any_header {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = cfg
            .allowed_headers
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    if cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cfg.max_age_seconds));
    }

    Ok(layer)
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}
