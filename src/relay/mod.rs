//! Relay subsystem.
//!
//! # Data Flow
//! ```text
//! POST body
//!     → request.rs (parse JSON, validate cookie + code)
//!     → target.rs (fixed base URL + act + user + encoded code)
//!     → upstream.rs (one GET, fixed headers, bounded timeout)
//!     → envelope.rs (normalize into {code, msg, statusCode, responseText})
//! ```
//!
//! Terminal states per request: preflight short-circuit, validation failure,
//! or completed (transport failure or relayed upstream answer). Nothing is
//! retried and nothing outlives the request.

pub mod envelope;
pub mod request;
pub mod target;
pub mod upstream;

use std::time::{Duration, Instant};

use axum::http::Method;

pub use envelope::ResponseEnvelope;
pub use request::{parse_and_validate, InboundRequest, ValidationError};
pub use target::TargetUrl;
pub use upstream::{OutboundResult, RelayError, UpstreamClient};

use crate::config::UpstreamConfig;

/// Whether the request is a CORS preflight that ends without further processing.
pub fn handle_preflight(method: &Method) -> bool {
    *method == Method::OPTIONS
}

/// The relay handler: validation, URL construction, and the outbound call.
#[derive(Debug, Clone)]
pub struct Relay {
    target: TargetUrl,
    upstream: UpstreamClient,
}

/// How a business request ended. Used for logs and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Invalid,
    TransportError,
    Relayed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Invalid => "invalid",
            Outcome::TransportError => "transport_error",
            Outcome::Relayed => "relayed",
        }
    }
}

/// Result of [`Relay::handle`].
#[derive(Debug, Clone)]
pub struct Handled {
    pub envelope: ResponseEnvelope,
    pub outcome: Outcome,
    /// Time spent in the outbound call; `None` when no call was made.
    pub upstream_elapsed: Option<Duration>,
}

impl Relay {
    pub fn new(config: &UpstreamConfig) -> Result<Self, RelayError> {
        Ok(Self {
            target: TargetUrl::from_config(config),
            upstream: UpstreamClient::new(config)?,
        })
    }

    /// Run one business request from an already-read body (or the error
    /// that prevented reading it) through to its envelope.
    pub async fn handle(
        &self,
        body: Result<&[u8], ValidationError>,
    ) -> Handled {
        let request = match body.and_then(parse_and_validate) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected relay parameters");
                return Handled {
                    envelope: ResponseEnvelope::invalid_params(),
                    outcome: Outcome::Invalid,
                    upstream_elapsed: None,
                };
            }
        };

        let url = self.target.build(&request.code);
        tracing::debug!(code = %request.code, "Relaying to upstream");

        let started = Instant::now();
        let result = self.upstream.perform_relay(&url, &request.cookie).await;
        let upstream_elapsed = started.elapsed();
        let outcome = match &result {
            OutboundResult::TransportError(e) => {
                tracing::warn!(error = %e, "Upstream request failed");
                Outcome::TransportError
            }
            OutboundResult::Response { status, .. } => {
                tracing::debug!(status = *status, "Upstream responded");
                Outcome::Relayed
            }
        };

        Handled {
            envelope: ResponseEnvelope::from_outbound(result),
            outcome,
            upstream_elapsed: Some(upstream_elapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_options_is_preflight() {
        assert!(handle_preflight(&Method::OPTIONS));
        assert!(!handle_preflight(&Method::POST));
        assert!(!handle_preflight(&Method::GET));
    }

    #[tokio::test]
    async fn test_invalid_body_never_reaches_upstream() {
        let config = UpstreamConfig {
            // Unroutable; any outbound attempt would surface as a transport error.
            base_url: "http://127.0.0.1:1/card".into(),
            ..UpstreamConfig::default()
        };
        let relay = Relay::new(&config).unwrap();

        let handled = relay.handle(Ok(br#"{"cookie":"c"}"#.as_slice())).await;
        assert_eq!(handled.outcome, Outcome::Invalid);
        assert_eq!(handled.envelope, ResponseEnvelope::invalid_params());
        assert_eq!(handled.upstream_elapsed, None);

        let handled = relay
            .handle(Err(ValidationError::Unreadable("too large".into())))
            .await;
        assert_eq!(handled.outcome, Outcome::Invalid);
        assert_eq!(handled.envelope.code, -1);
        assert_eq!(handled.upstream_elapsed, None);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_yields_transport_envelope() {
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:1/card".into(),
            ..UpstreamConfig::default()
        };
        let relay = Relay::new(&config).unwrap();

        let handled = relay
            .handle(Ok(br#"{"cookie":"c","code":"x"}"#.as_slice()))
            .await;
        assert_eq!(handled.outcome, Outcome::TransportError);
        assert!(handled.upstream_elapsed.is_some());
        let envelope = handled.envelope;
        assert_eq!(envelope.code, -2);
        assert!(envelope.msg.starts_with("relay failed: "));
        assert_eq!(envelope.status_code, "none");
        assert_eq!(envelope.response_text, "");
    }
}
