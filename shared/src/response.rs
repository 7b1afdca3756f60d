//! API Response types
//!
//! The storefront backend answers with a flat success/message envelope.

use serde::{Deserialize, Serialize};

/// Success/message envelope returned by the reservation and newsletter
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ApiOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
