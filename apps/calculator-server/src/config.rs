//! Layered application configuration.
//!
//! Precedence: defaults -> YAML file (if provided) -> env (`APP__*`) -> CLI overrides.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use calculator::CalculatorConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `APP__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub calculator: CalculatorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for the calculator routes; empty mounts them at the root.
    pub api_prefix: String,
    /// Serve `/openapi.json`.
    pub enable_docs: bool,
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            api_prefix: "/api".to_owned(),
            enable_docs: true,
            request_timeout_secs: 30,
            body_limit_bytes: 64 * 1024,
            cors: CorsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
            allowed_methods: ["GET", "POST", "DELETE", "OPTIONS"]
                .map(str::to_owned)
                .to_vec(),
            allowed_headers: vec!["content-type".to_owned()],
            allow_credentials: false,
            max_age_seconds: 600,
        }
    }
}

impl CorsConfig {
    /// Credentials cannot be combined with a `"*"` entry; browsers reject it.
    ///
    /// # Errors
    /// Returns an error naming the offending combination.
    pub fn validate(&self) -> Result<()> {
        let wildcard = [
            &self.allowed_origins,
            &self.allowed_methods,
            &self.allowed_headers,
        ]
        .into_iter()
        .any(|values| values.iter().any(|v| v == "*"));

        ensure!(
            !(self.allow_credentials && wildcard),
            "CORS misconfiguration: allow_credentials=true cannot be combined with '*' \
             in allowed_origins, allowed_methods or allowed_headers"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the YAML file (if any), then `APP__*` env vars.
    ///
    /// # Errors
    /// Returns an error if the file does not exist, a layer cannot be parsed,
    /// or the merged configuration is invalid.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            ensure!(
                path.is_file(),
                "config file does not exist: {}",
                path.display()
            );
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded layers.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) {
        if let Some(port) = port {
            self.server.port = port;
        }

        match verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
    }

    /// # Errors
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.server.api_prefix;
        ensure!(
            prefix.is_empty() || (prefix.starts_with('/') && !prefix.ends_with('/')),
            "server.api_prefix must be empty or start with '/' without a trailing '/', got '{prefix}'"
        );
        ensure!(
            self.server.request_timeout_secs > 0,
            "server.request_timeout_secs must be greater than zero"
        );
        ensure!(
            self.server.body_limit_bytes > 0,
            "server.body_limit_bytes must be greater than zero"
        );
        self.server.cors.validate()
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// # Errors
    /// Returns an error if the configuration cannot be serialized.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}
