//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file.
//! Every field has a default, so an empty file (or no file) yields a relay
//! that targets the card endpoint exactly as the browser frontend expects.

use serde::{Deserialize, Serialize};

/// Upstream endpoint the relay forwards to.
pub const DEFAULT_BASE_URL: &str = "https://openapi.52vmy.cn/post/user/2026jika";
/// Fixed `act` query parameter.
pub const DEFAULT_ACT: &str = "receive_card";
/// Fixed `user` query parameter.
pub const DEFAULT_USER: &str = "3217174732";
/// Referer the upstream checks for origin validation.
pub const DEFAULT_REFERER: &str = "https://openapi.52vmy.cn/user/2026StarCard";
/// Browser User-Agent sent upstream.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
/// Accept header sent upstream.
pub const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address, endpoint path).
    pub listener: ListenerConfig,

    /// Outbound call settings.
    pub upstream: UpstreamConfig,

    /// Inbound request deadlines.
    pub timeouts: TimeoutConfig,

    /// Input limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Path of the single relay endpoint.
    pub path: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            path: "/relay".to_string(),
        }
    }
}

/// Outbound request configuration.
///
/// These values are process-wide. Nothing in an inbound request can change
/// them; only `code` and `cookie` flow through from the caller.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL, without query string.
    pub base_url: String,

    /// Value of the `act` query parameter.
    pub act: String,

    /// Value of the `user` query parameter.
    pub user: String,

    pub referer: String,

    pub user_agent: String,

    pub accept: String,

    /// Total time allowed for the outbound call, body included.
    pub timeout_secs: u64,

    /// Maximum redirects followed before the call is a transport error.
    pub max_redirects: usize,

    /// Verify the upstream TLS certificate and hostname.
    ///
    /// Off by default: the upstream is reached without certificate or
    /// hostname checks. Anyone able to intercept the connection can read the
    /// relayed session cookie. Turn this on for any deployment that matters.
    pub verify_tls: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            act: DEFAULT_ACT.to_string(),
            user: DEFAULT_USER.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            timeout_secs: 20,
            max_redirects: 10,
            verify_tls: false,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request deadline in seconds. Must exceed the upstream timeout.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum inbound body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
