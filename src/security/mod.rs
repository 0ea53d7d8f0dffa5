//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response (every path, preflight included):
//!     → headers.rs (content type + CORS allowances)
//! ```
//!
//! # Design Decisions
//! - Any origin may call the relay; there is no allow-list
//! - Headers are set by middleware so no handler path can forget them
//! - Inbound body size is capped before parsing (see `SecurityConfig`)

pub mod headers;

pub use headers::{relay_response_headers, with_relay_headers};
