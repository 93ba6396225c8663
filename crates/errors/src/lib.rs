//! vault-errors - error types shared by the helper, its ports and adapters
//!
//! Errors are plain values carrying the originating path or key and the
//! underlying cause. Nothing here logs; callers decide what to do with them.

use thiserror::Error;

/// Boxed underlying cause carried by source and decode failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Secret retrieval error
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Invalid path: {0:?}")]
    InvalidPath(String),

    #[error("Source unavailable: path: {path}, err: {cause}")]
    SourceUnavailable {
        path: String,
        #[source]
        cause: BoxError,
    },

    #[error("Malformed input: path: {path}, err: {cause}")]
    MalformedInput {
        path: String,
        #[source]
        cause: BoxError,
    },

    #[error("No data returned: path: {0}")]
    NoDataReturned(String),

    #[error("Unsupported value type: key: {key}, found: {found}")]
    UnsupportedValueType { key: String, found: &'static str },

    #[error("Key not found: '{0}'")]
    KeyNotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SecretError {
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }

    pub fn source_unavailable(path: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            cause: cause.into(),
        }
    }

    pub fn malformed_input(path: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            cause: cause.into(),
        }
    }

    pub fn no_data_returned(path: impl Into<String>) -> Self {
        Self::NoDataReturned(path.into())
    }

    pub fn unsupported_value_type(key: impl Into<String>, found: &'static str) -> Self {
        Self::UnsupportedValueType {
            key: key.into(),
            found,
        }
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound(key.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether repeating the whole fetch could succeed.
    ///
    /// Only source failures (I/O, network, remote status) qualify; bad input
    /// and lookup misses will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

/// Failure reported by a remote client adapter
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid path: {0:?}")]
    InvalidPath(String),
}

impl ClientError {
    /// Classify a non-success HTTP status the way Vault reports them
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 => Self::Unauthenticated(body),
            403 => Self::Forbidden(body),
            _ => Self::Status { status, body },
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }
}

/// Result alias used across the workspace
pub type SecretResult<T> = Result<T, SecretError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_source_unavailable_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SecretError::source_unavailable("./creds.json", io);

        assert!(err.to_string().contains("./creds.json"));
        assert!(err.source().unwrap().to_string().contains("no such file"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_lookup_miss_is_not_retryable() {
        let err = SecretError::key_not_found("api_key");
        assert_eq!(err.to_string(), "Key not found: 'api_key'");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_map_401_status() {
        let err = ClientError::from_status(401, "missing client token");
        assert!(matches!(err, ClientError::Unauthenticated(_)));
    }

    #[test]
    fn test_map_403_status() {
        let err = ClientError::from_status(403, "permission denied");
        assert!(matches!(err, ClientError::Forbidden(_)));
    }

    #[test]
    fn test_map_other_status() {
        let err = ClientError::from_status(503, "Vault is sealed");
        assert!(matches!(err, ClientError::Status { status: 503, .. }));
    }

    #[test]
    fn test_client_invalid_path_message() {
        let err = ClientError::invalid_path("secret/../sys");
        assert_eq!(err.to_string(), r#"Invalid path: "secret/../sys""#);
    }

    #[test]
    fn test_client_error_wraps_into_source_unavailable() {
        let err = SecretError::source_unavailable(
            "secret/data/app",
            ClientError::transport("connection refused"),
        );
        let cause = err.source().unwrap();
        assert!(cause.downcast_ref::<ClientError>().is_some());
    }
}
