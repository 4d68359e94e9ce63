//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request did not complete within the client timeout.
    #[error("Request timed out")]
    Timeout,
    /// An HTTP request failed (connection, TLS, or an unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not JSON of the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
