//! Configuration validation.
//!
//! Serde handles syntax; this module checks values that would otherwise
//! surface as failures at request time. All violations are collected so an
//! operator can fix a config file in one pass.

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct ConfigViolation {
    pub field: &'static str,
    pub reason: String,
}

impl ConfigViolation {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Validate a configuration, returning every violation found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ConfigViolation>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ConfigViolation::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if !config.listener.path.starts_with('/') {
        errors.push(ConfigViolation::new("listener.path", "must start with '/'"));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ConfigViolation::new(
                    "upstream.base_url",
                    format!("unsupported scheme '{}'", url.scheme()),
                ));
            }
            if url.query().is_some() {
                errors.push(ConfigViolation::new(
                    "upstream.base_url",
                    "must not carry a query string",
                ));
            }
        }
        Err(e) => errors.push(ConfigViolation::new("upstream.base_url", e.to_string())),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ConfigViolation::new("upstream.timeout_secs", "must be > 0"));
    }

    // The inbound deadline firing first would replace the envelope with a bare 408.
    if config.timeouts.request_secs <= config.upstream.timeout_secs {
        errors.push(ConfigViolation::new(
            "timeouts.request_secs",
            format!(
                "must exceed upstream.timeout_secs ({})",
                config.upstream.timeout_secs
            ),
        ));
    }

    if config.security.max_body_size == 0 {
        errors.push(ConfigViolation::new("security.max_body_size", "must be > 0"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ConfigViolation::new(
            "observability.metrics_address",
            format!(
                "'{}' is not a socket address",
                config.observability.metrics_address
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
