//! Error types for the API client.

/// Errors that can occur when configuring the client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Credentials or host could not be resolved into a usable configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// The login call failed or did not return an access token.
    #[error("Authentication failed: {0}")]
    Authentication(String),
    /// An HTTP request failed (network error, timeout, or unreadable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body did not decode into the expected record type.
    #[error("Failed to map response: {0}")]
    Mapping(String),
}

impl Error {
    /// HTTP status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
