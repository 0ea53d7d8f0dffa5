//! Card relay library.
//!
//! A single-endpoint HTTP relay: a browser POSTs `{cookie, code}`, the
//! server performs the upstream GET on its behalf, and the outcome comes
//! back as a fixed-shape JSON envelope.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod security;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::{Handled, Relay, ResponseEnvelope};
