//! Login and token verification against the backend. Both paths are on the
//! transport's auth-free allow-list.

use std::rc::Rc;

use contracts::system::auth::{LoginRequest, LoginResponse, VerifyTokenRequest, VerifyTokenResponse};
use serde_json::to_value;

use super::Session;
use crate::shared::api::{ApiError, Method, Transport};

pub async fn login(
    transport: &Rc<dyn Transport>,
    payload: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let body = to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    transport
        .request(&Session::anonymous(), Method::Post, "/login", Some(body))
        .await?
        .json()
}

pub async fn verify_token(
    transport: &Rc<dyn Transport>,
    token: &str,
) -> Result<VerifyTokenResponse, ApiError> {
    let payload = VerifyTokenRequest {
        token: token.to_string(),
    };
    let body = to_value(&payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    transport
        .request(&Session::anonymous(), Method::Post, "/verifyToken", Some(body))
        .await?
        .json()
}

/// Build the session carried through the CRUD layer from a successful login.
pub fn session_from_login(response: &LoginResponse) -> Session {
    Session::new(response.token.clone(), response.roles.clone())
}
