use serde_json::Value;
use thiserror::Error;

/// Failure surface of the transport boundary.
///
/// 401/403/404 get their own variants because the presentation layer renders
/// them differently; everything else non-2xx lands in `Status`.
/// `MissingParent` is not a network failure at all: it flags a parent-scoped
/// binding invoked without a resolved parent id, and the orchestrator maps it
/// to the same prompt the context resolver produces.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP 401")]
    Unauthorized,

    #[error("Non autorizzato")]
    Forbidden,

    #[error("Risorsa non trovata")]
    NotFound,

    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        code: Option<String>,
        details: Option<Value>,
    },

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("parametro `{param}` mancante")]
    MissingParent { param: &'static str },
}

impl ApiError {
    /// Build the right variant for a non-2xx response.
    pub fn from_status(
        status: u16,
        message: Option<String>,
        code: Option<String>,
        details: Option<Value>,
    ) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            _ => ApiError::Status {
                status,
                message: message.unwrap_or_else(|| format!("HTTP {status}")),
                code,
                details,
            },
        }
    }

    /// HTTP status carried by this error, when it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::NotFound => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_maps_known_codes() {
        assert!(matches!(
            ApiError::from_status(401, None, None, None),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(403, None, None, None),
            ApiError::Forbidden
        ));
        assert!(matches!(
            ApiError::from_status(404, None, None, None),
            ApiError::NotFound
        ));
    }

    #[test]
    fn from_status_keeps_message_for_generic_failures() {
        let err = ApiError::from_status(500, Some("boom".into()), Some("E42".into()), None);
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn from_status_defaults_message_to_http_code() {
        let err = ApiError::from_status(502, None, None, None);
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn fixed_messages_for_forbidden_and_not_found() {
        assert_eq!(ApiError::Forbidden.to_string(), "Non autorizzato");
        assert_eq!(ApiError::NotFound.to_string(), "Risorsa non trovata");
    }
}
