//! Response envelopes shared by every endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Successful response: `{message?, data?}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            message: None,
            data: Some(data),
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Confirmation with no payload, e.g. after a delete.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Detail attached to an error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// One message per violated validation rule.
    Fields(Vec<String>),
    /// Raw text of the underlying failure.
    Message(String),
}

/// Error response: `{message, error?}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.error = Some(ErrorDetail::Message(detail.into()));
        self
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.error = Some(ErrorDetail::Fields(fields));
        self
    }

    // Common error constructors
    pub fn validation(fields: Vec<String>) -> Self {
        Self::new("Validation error").with_fields(fields)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    pub fn server_error(detail: impl Into<String>) -> Self {
        Self::new("Server error").with_detail(detail)
    }
}
