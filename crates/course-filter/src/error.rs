//! Catalog Errors
//!
//! Failures surfaced by the fetch layer and bookmark persistence.
//! Pure filtering and positioning never fail.

use thiserror::Error;

/// Common result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request never produced a response
    #[error("HTTP request failed: {0}")]
    Http(String),
    /// Directus answered with a non-success status
    #[error("API returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    /// Whether the failure came from the remote content API
    pub fn is_api_failure(&self) -> bool {
        !matches!(self, CatalogError::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::Status { status: 503, url: "/items/courses".to_string() };
        assert_eq!(err.to_string(), "API returned status 503 for /items/courses");
        assert!(err.is_api_failure());
        assert!(!CatalogError::Storage("quota".to_string()).is_api_failure());
    }

    #[test]
    fn test_decode_error_conversion() {
        let parse: Result<Vec<String>, _> = serde_json::from_str("{");
        let err: CatalogError = parse.unwrap_err().into();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
