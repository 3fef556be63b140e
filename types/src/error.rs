//! Client-side error taxonomy for backend calls.

use std::fmt;

/// Everything that can go wrong with a backend call, from the client's
/// point of view. Malformed JSON is treated the same as a transport
/// failure by the UI; `Server` carries the backend's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Fetch rejection: DNS, offline, CORS.
    Transport(String),
    /// Non-2xx response without a usable envelope.
    Http(u16),
    /// Response body did not parse as the expected shape.
    Decode(String),
    /// Well-formed `{success: false, message}` envelope.
    Server(String),
}

impl ApiError {
    /// The message shown to the operator. Server-reported failures are
    /// surfaced verbatim; everything else collapses to a generic notice.
    pub fn notice(&self) -> String {
        match self {
            ApiError::Server(message) => message.clone(),
            _ => "Could not reach the server. Please try again later.".to_string(),
        }
    }

    /// Server-reported message, if this failure carries one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(detail) => write!(f, "network error: {detail}"),
            ApiError::Http(status) => write!(f, "unexpected HTTP status {status}"),
            ApiError::Decode(detail) => write!(f, "malformed response: {detail}"),
            ApiError::Server(message) => write!(f, "server rejected request: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_surfaces_verbatim() {
        let err = ApiError::Server("Trip is fully booked".into());
        assert_eq!(err.notice(), "Trip is fully booked");
        assert_eq!(err.server_message(), Some("Trip is fully booked"));
    }

    #[test]
    fn transport_and_decode_collapse_to_generic_notice() {
        let transport = ApiError::Transport("dns failure".into());
        let decode = ApiError::Decode("expected value at line 1".into());
        let http = ApiError::Http(502);
        assert_eq!(transport.notice(), decode.notice());
        assert_eq!(decode.notice(), http.notice());
        assert!(transport.server_message().is_none());
    }
}
