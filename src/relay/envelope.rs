//! The fixed-shape JSON object returned for every business request.

use serde::{Deserialize, Serialize};

use crate::relay::upstream::OutboundResult;

/// Discriminant for a rejected inbound body.
pub const CODE_INVALID_PARAMS: i32 = -1;
/// Discriminant for a failed outbound call.
pub const CODE_TRANSPORT_FAILED: i32 = -2;
/// Discriminant for a completed relay, whatever the upstream answered.
pub const CODE_RELAYED: i32 = 200;

pub const MSG_INVALID_PARAMS: &str = "parameter error: cookie and code must not be empty";
pub const MSG_RELAY_FAILED_PREFIX: &str = "relay failed: ";
pub const MSG_RELAYED: &str = "request succeeded";
pub const NO_STATUS: &str = "none";
pub const NO_CONTENT: &str = "no response content";

/// Response body for the relay endpoint.
///
/// Field order is part of the contract; serde emits fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub code: i32,
    pub msg: String,
    pub status_code: String,
    pub response_text: String,
}

impl ResponseEnvelope {
    pub fn invalid_params() -> Self {
        Self {
            code: CODE_INVALID_PARAMS,
            msg: MSG_INVALID_PARAMS.to_string(),
            status_code: NO_STATUS.to_string(),
            response_text: String::new(),
        }
    }

    /// Map an outbound result to its envelope.
    ///
    /// An upstream 4xx/5xx is still a completed relay and gets `code: 200`.
    pub fn from_outbound(result: OutboundResult) -> Self {
        match result {
            OutboundResult::TransportError(message) => Self {
                code: CODE_TRANSPORT_FAILED,
                msg: format!("{MSG_RELAY_FAILED_PREFIX}{message}"),
                status_code: NO_STATUS.to_string(),
                response_text: String::new(),
            },
            OutboundResult::Response { status, body } => Self {
                code: CODE_RELAYED,
                msg: MSG_RELAYED.to_string(),
                status_code: status.to_string(),
                response_text: if body.is_empty() {
                    NO_CONTENT.to_string()
                } else {
                    body
                },
            },
        }
    }
}

impl From<OutboundResult> for ResponseEnvelope {
    fn from(result: OutboundResult) -> Self {
        Self::from_outbound(result)
    }
}
