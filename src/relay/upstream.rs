//! Outbound call to the upstream API.
//!
//! # Design Decisions
//! - One pooled `reqwest::Client` per process; every relay is still its own
//!   request (no caching, no deduplication)
//! - Timeout covers connect, headers, and body
//! - Never retries: the upstream action is not idempotent
//! - Certificate and hostname checks follow `upstream.verify_tls`

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE, REFERER, USER_AGENT};
use reqwest::redirect::Policy;

use crate::config::UpstreamConfig;

/// Outcome of one outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundResult {
    /// The upstream answered, with any status.
    Response { status: u16, body: String },
    /// The upstream could not be reached or its answer could not be read.
    TransportError(String),
}

/// Errors building the upstream client at startup.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("invalid value for header {name}: {source}")]
    InvalidHeader {
        name: &'static str,
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP client preconfigured with the fixed upstream headers.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, RelayError> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, header_value("Referer", &config.referer)?);
        headers.insert(USER_AGENT, header_value("User-Agent", &config.user_agent)?);
        headers.insert(ACCEPT, header_value("Accept", &config.accept)?);

        if !config.verify_tls {
            tracing::warn!("Upstream TLS certificate and hostname verification is disabled");
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(Policy::limited(config.max_redirects))
            .danger_accept_invalid_certs(!config.verify_tls)
            .danger_accept_invalid_hostnames(!config.verify_tls)
            .no_proxy()
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` with the caller's cookie. Never fails; errors become
    /// [`OutboundResult::TransportError`].
    pub async fn perform_relay(&self, url: &str, cookie: &str) -> OutboundResult {
        let response = match self.client.get(url).header(COOKIE, cookie).send().await {
            Ok(r) => r,
            Err(e) => return OutboundResult::TransportError(describe(&e)),
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => OutboundResult::Response { status, body },
            Err(e) => OutboundResult::TransportError(describe(&e)),
        }
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, RelayError> {
    HeaderValue::from_str(value).map_err(|source| RelayError::InvalidHeader { name, source })
}

/// Render an error with its source chain, e.g.
/// `error sending request for url (...): client error (Connect): tcp connect error: ...`.
pub(crate) fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
