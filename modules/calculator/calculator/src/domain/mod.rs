//! Domain layer for the calculator module
//!
//! Contains operation semantics, the history store and the service that
//! ties them together.

pub mod arithmetic;
pub mod history;
pub mod service;

pub use history::History;
pub use service::Service;
