//! Human-readable status messages attached to API envelopes.
//!
//! Built once at startup and shared through handler state.

use std::collections::HashMap;

use axum::http::StatusCode;

#[derive(Debug, Clone)]
pub struct MessageTable {
    messages: HashMap<u16, String>,
}

impl MessageTable {
    pub fn new(entries: impl IntoIterator<Item = (StatusCode, String)>) -> Self {
        Self {
            messages: entries
                .into_iter()
                .map(|(status, msg)| (status.as_u16(), msg))
                .collect(),
        }
    }

    /// Message for `status`, falling back to the canonical reason phrase.
    pub fn get(&self, status: StatusCode) -> String {
        self.messages
            .get(&status.as_u16())
            .cloned()
            .or_else(|| status.canonical_reason().map(String::from))
            .unwrap_or_default()
    }
}

impl Default for MessageTable {
    fn default() -> Self {
        Self::new([
            (StatusCode::OK, "Successfully".to_string()),
            (StatusCode::CREATED, "Created successfully".to_string()),
            (
                StatusCode::BAD_REQUEST,
                "Something went wrong with your request".to_string(),
            ),
            (
                StatusCode::UNAUTHORIZED,
                "Unauthorized, permission denied".to_string(),
            ),
            (
                StatusCode::FORBIDDEN,
                "Your request has been rejected".to_string(),
            ),
            (
                StatusCode::NOT_FOUND,
                "Record not found, please check your input".to_string(),
            ),
            (
                StatusCode::CONFLICT,
                "Your input conflicts with existing data".to_string(),
            ),
            (StatusCode::TOO_MANY_REQUESTS, "Too many requests".to_string()),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            (StatusCode::GATEWAY_TIMEOUT, "Gateway time out".to_string()),
        ])
    }
}
