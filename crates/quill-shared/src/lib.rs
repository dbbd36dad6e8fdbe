//! # Quill Shared
//!
//! Request and response types shared between the server and API clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorDetail, ErrorResponse};
