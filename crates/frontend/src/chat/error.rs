//! Typed failures of the backend gateway.
//!
//! Both endpoints distinguish a non-success HTTP response (status plus raw
//! body text) from a transport-level failure where no response arrived.

use thiserror::Error;

/// Failure of `POST /ask`.
#[derive(Debug, Error)]
pub enum AskError {
    #[error("Server error: {status} - {body}")]
    Http { status: u16, body: String },
    #[error("Request failed: {0}")]
    Network(String),
}

/// Failure of `POST /upload-docs`.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Upload failed: {status} - {body}")]
    Http { status: u16, body: String },
    #[error("Upload request failed: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_error_display_carries_status_and_body() {
        let err = AskError::Http {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "Server error: 500 - internal error");
    }

    #[test]
    fn test_upload_error_display() {
        let err = UploadError::Http {
            status: 400,
            body: "Only .pdf or .txt files are supported right now.".to_string(),
        };
        assert!(err.to_string().starts_with("Upload failed: 400"));
    }
}
