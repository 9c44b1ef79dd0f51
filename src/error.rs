//! Error types shared by every stage of the pipeline.

use thiserror::Error;

/// Top-level error for the create and trade flows.
///
/// Every variant is terminal for the current invocation. Variants that come
/// from a remote endpoint carry the status and the raw response body.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Metadata upload failed ({status}): {body}")]
    Upload { status: u16, body: String },

    #[error("Transaction build failed ({status}): {body}")]
    Build { status: u16, body: String },

    #[error("Deserialization error: {0}")]
    Deserialize(String),

    #[error("Signer error: {0}")]
    Signer(String),

    #[error("Relay submission failed ({status}): {body}")]
    Relay { status: u16, body: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortalError {
    /// Short label for the error kind, used as the log field on failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Validation(_) => "validation",
            Self::Upload { .. } => "upload",
            Self::Build { .. } => "build",
            Self::Deserialize(_) => "deserialize",
            Self::Signer(_) => "signer",
            Self::Relay { .. } => "relay",
            Self::Http(_) => "http",
            Self::Io(_) => "io",
        }
    }
}

/// Result type alias for pipeline operations.
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_carries_body() {
        let err = PortalError::Build {
            status: 500,
            body: "insufficient liquidity".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Transaction build failed (500): insufficient liquidity"
        );
        assert_eq!(err.kind(), "build");
    }

    #[test]
    fn test_io_error_is_its_own_kind() {
        let err = PortalError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdout closed",
        ));
        assert_eq!(err.kind(), "io");
        assert!(err.to_string().contains("stdout closed"));
    }

    #[test]
    fn test_relay_error_display() {
        let err = PortalError::Relay {
            status: 200,
            body: r#"{"error":"bundle dropped"}"#.to_string(),
        };
        assert!(err.to_string().contains("bundle dropped"));
        assert_eq!(err.kind(), "relay");
    }
}
