//! The relay endpoint.

use std::time::Instant;

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::http::request::request_id_of;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::{handle_preflight, ValidationError};

/// Handles every method on the endpoint.
///
/// `OPTIONS` ends with an empty 200. Anything else is a business request and
/// always gets HTTP 200 with an envelope; failures are reported in the
/// envelope's `code`.
pub async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id_of(request.headers());
    let method = request.method().clone();

    if handle_preflight(&method) {
        tracing::debug!(request_id = %request_id, "Preflight");
        metrics::record_request("preflight");
        return StatusCode::OK.into_response();
    }

    let bytes = to_bytes(request.into_body(), state.max_body_size).await;
    let body = match &bytes {
        Ok(b) => Ok(&b[..]),
        Err(e) => Err(ValidationError::Unreadable(e.to_string())),
    };

    let handled = state.relay.handle(body).await;
    let outcome = handled.outcome.as_str();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        outcome,
        upstream_status = %handled.envelope.status_code,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Relay request completed"
    );
    metrics::record_request(outcome);
    if let Some(elapsed) = handled.upstream_elapsed {
        metrics::record_upstream(outcome, elapsed);
    }

    (StatusCode::OK, Json(handled.envelope)).into_response()
}
