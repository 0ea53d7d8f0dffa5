//! Request identification.
//!
//! Every inbound request gets a UUID v4 `x-request-id` as early as possible
//! so all log lines for it can be correlated; the same id is echoed on the
//! response.

use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request id.
pub fn x_request_id() -> HeaderName {
    HeaderName::from_static("x-request-id")
}

/// Generates a fresh UUID v4 request id.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// The request id from a header map, or `"unknown"`.
pub fn request_id_of(headers: &HeaderMap) -> String {
    headers
        .get(x_request_id())
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}
