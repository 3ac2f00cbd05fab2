//! Calculator Module
//!
//! Arithmetic evaluation with an in-memory, append-only history.
//!
//! ## Architecture
//!
//! - `domain/` - operation semantics, history store and the `Service`
//! - `api/rest/` - DTOs, input normalization, handlers, routes and error mapping
//! - `local_client.rs` - in-process implementation of `CalculatorClientV1`
//!
//! External consumers should depend on `calculator-sdk` for the API trait,
//! models and error kinds.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub use config::CalculatorConfig;

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::Service;

mod local_client;
pub use local_client::{CalculatorLocalClient, wire_local_client};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
