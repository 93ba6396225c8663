//! Error mapping for the Vault adapter

use rustify::errors::ClientError as RestClientError;
use vault_errors::ClientError;

/// Stand-in for a server error that carried no body
const EMPTY_BODY: &str = "<empty body>";

/// Convert a vaultrs/rustify failure into a ClientError
pub fn map_rest_error(err: RestClientError, context: &str) -> ClientError {
    match err {
        RestClientError::ServerResponseError { code, content } => ClientError::from_status(
            code,
            format!(
                "{}: {}",
                context,
                content.unwrap_or_else(|| EMPTY_BODY.to_string())
            ),
        ),
        err @ RestClientError::ResponseParseError { .. } => {
            ClientError::decode(format!("{}: {}", context, err))
        }
        // Connection, timeout and request building errors
        err => ClientError::transport(format!("{}: {}", context, err)),
    }
}
