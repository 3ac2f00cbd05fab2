use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Configuration for the calculator module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Maximum number of history entries kept. The oldest entries are
    /// evicted once the cap is exceeded. `None` keeps every entry.
    pub history_limit: Option<NonZeroUsize>,
}
