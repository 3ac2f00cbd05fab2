//! Local client implementation of `CalculatorClientV1`
//!
//! Delegates straight to the in-process `Service`.

use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{CalculatorClientV1, CalculatorError, HistoryEntry};

use crate::domain::Service;

/// Local client that delegates to the module's `Service`.
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Create a new local client wrapping the `Service`.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CalculatorClientV1 for CalculatorLocalClient {
    async fn evaluate(&self, operation: &str, operands: &[f64]) -> Result<f64, CalculatorError> {
        self.service.evaluate_tag(operation, operands)
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, CalculatorError> {
        Ok(self.service.history())
    }

    async fn clear_history(&self) -> Result<(), CalculatorError> {
        self.service.clear_history();
        Ok(())
    }
}

/// Wrap `service` as a `CalculatorClientV1` trait object.
#[must_use]
pub fn wire_local_client(service: Arc<Service>) -> Arc<dyn CalculatorClientV1> {
    tracing::debug!("CalculatorClientV1 local client wired");
    Arc::new(CalculatorLocalClient::new(service))
}
