use std::fmt;

// === FetchError ===

/// Errors raised by the remote data source boundary.
///
/// Every variant surfaces to the view as a single retryable failure state;
/// none of them is retried automatically.
#[derive(Debug)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    Network(String),
    /// The requested account does not exist.
    NotFound(String),
    /// The unauthenticated rate limit was exhausted.
    RateLimited,
    /// Any other non-success HTTP status.
    Status(u16),
    /// The response body could not be decoded into the expected shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::NotFound(login) => write!(f, "Account not found: {}", login),
            FetchError::RateLimited => write!(f, "GitHub API rate limit exceeded"),
            FetchError::Status(code) => write!(f, "GitHub API error: HTTP {}", code),
            FetchError::Decode(msg) => write!(f, "Response decode error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

// === StoreError ===

/// Errors raised by the persisted key-value store.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    IoError(String),
    /// A value could not be serialized for persistence.
    SerializationError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(msg) => write!(f, "Store I/O error: {}", msg),
            StoreError::SerializationError(msg) => {
                write!(f, "Store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}
