use thiserror::Error;

/// Error types for PubMed retrieval operations
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// XML parsing failed
    #[error("XML parsing error: {message}")]
    XmlError { message: String },
}

pub type Result<T> = std::result::Result<T, RetrievalError>;
