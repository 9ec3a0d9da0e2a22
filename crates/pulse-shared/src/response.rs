//! Standardized API response bodies.

use serde::{Deserialize, Serialize};

/// The `{message}` body: what mutations answer on success and what every
/// error path answers regardless of status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
