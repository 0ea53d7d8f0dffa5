//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Relay handler produces:
//!     → logging.rs (structured log events, request id on each)
//!     → metrics.rs (request counter + duration histogram by outcome)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt)
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```
//!
//! # Design Decisions
//! - Cookie values are never logged
//! - Metrics are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
