//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClientV1`)
//! - Models (`Operation`, `HistoryEntry`)
//! - Error kinds (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::CalculatorClientV1;
//!
//! let client: Arc<dyn CalculatorClientV1> = calculator::wire_local_client(service);
//! let result = client.evaluate("add", &[5.0, 3.0]).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
mod errors;
mod models;

pub use api::CalculatorClientV1;
pub use errors::CalculatorError;
pub use models::{HistoryEntry, Operation};
