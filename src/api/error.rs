//! Error types for fetching the project dataset.

use thiserror::Error;

/// Errors that can occur when loading the dataset.
///
/// Every variant is a "load failure" from the user's point of view; the
/// `Display` text is what the table shows in its alert block.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP error! status: {}", .0.as_u16())]
    Status(reqwest::StatusCode),

    /// Network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body could not be decoded as a project list.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The configured URL is not usable.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error from an HTTP status code.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        ApiError::Status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_message() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP error! status: 404");

        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::InvalidUrl("ftp://example.com".to_string());
        assert_eq!(err.to_string(), "Invalid URL: ftp://example.com");

        let err = ApiError::InvalidResponse("expected array".to_string());
        assert_eq!(err.to_string(), "Invalid response: expected array");
    }
}
