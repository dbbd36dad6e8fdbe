//! Observability module - request IDs and the request root span.

mod request_id;
mod root_span;

pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdMiddleware};
pub use root_span::QuillRootSpanBuilder;
