//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: trace, request id, timeout, headers)
//!     → handler.rs (preflight short-circuit or relay → envelope)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod server;

pub use request::{request_id_of, x_request_id, UuidRequestId};
pub use server::{AppState, HttpServer};
