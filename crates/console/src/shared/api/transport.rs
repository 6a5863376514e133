use std::collections::HashSet;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::system::auth::Session;

/// Paths that never carry the bearer token.
static AUTH_FREE_PATHS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["/login", "/auth/login", "/verifyToken"]));

/// Whether a request path must carry the session credential. Query string
/// and fragment are ignored when matching the allow-list.
pub fn requires_auth(path: &str) -> bool {
    let bare = path.split(['?', '#']).next().unwrap_or(path);
    !AUTH_FREE_PATHS.contains(bare)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Decoded body of a 2xx response. The backend is not consistent here:
/// JSON endpoints, plain-text endpoints and bodyless 204 replies all exist,
/// so the three shapes are kept apart and funneled through the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBody {
    Json(Value),
    Text(String),
    Empty,
}

impl RawBody {
    pub fn into_value(self) -> Value {
        match self {
            RawBody::Json(value) => value,
            RawBody::Text(text) => Value::String(text),
            RawBody::Empty => Value::Null,
        }
    }

    /// Deserialize a JSON body into a typed contract.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(self.into_value()).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// The one seam the core uses for network I/O. Implementations own base-URL
/// resolution, credential attachment (except the auth-free allow-list),
/// status mapping and body decoding; the core imposes no timeout or retry
/// policy on top.
#[async_trait(?Send)]
pub trait Transport {
    async fn request(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<RawBody, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_free_paths_skip_the_token() {
        assert!(!requires_auth("/login"));
        assert!(!requires_auth("/auth/login"));
        assert!(!requires_auth("/verifyToken"));
        assert!(!requires_auth("/login?next=app"));
    }

    #[test]
    fn everything_else_requires_auth() {
        assert!(requires_auth("/aziende"));
        assert!(requires_auth("/admin/users/4"));
    }

    #[test]
    fn raw_body_bridges_to_json_values() {
        assert_eq!(RawBody::Empty.into_value(), Value::Null);
        assert_eq!(
            RawBody::Text("ok".into()).into_value(),
            Value::String("ok".into())
        );
    }
}
