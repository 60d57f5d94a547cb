//! Error type for catalog API calls.

/// Errors from fetching a storefront document.
///
/// Cloneable so a memoized fetch outcome can be replayed to every
/// reader.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Connection error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Deserialization error for {url}: {message}")]
    Payload { url: String, message: String },
}
