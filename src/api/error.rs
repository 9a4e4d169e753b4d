//! Errors returned by the game server API.

/// Failure of a request to the game server.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ApiError {
    /// The server refused the credentials (HTTP 401).
    #[display("Authentication failed: {}", _0)]
    Authentication(String),

    /// The server rejected the request (HTTP 406).
    #[display("Request rejected: {}", _0)]
    Validation(String),

    /// The server could not be reached or answered with an unexpected status.
    #[display("Could not reach game server{}", status_detail(status))]
    Connectivity {
        /// Status code, when a response was received at all.
        status: Option<u16>,
    },

    /// A successful response body could not be decoded.
    #[display("Invalid response from game server: {}", _0)]
    Decode(String),
}

impl std::error::Error for ApiError {}

fn status_detail(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}
