//! gloo-net transport for the browser build.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use super::error::ApiError;
use super::transport::{requires_auth, Method, RawBody, Transport};
use crate::system::auth::{storage, Session};

const DEFAULT_BASE_URL: &str = "/api";

/// Base URL for backend requests. Overridable at build time via
/// `CHEMRISK_API_BASE_URL`; defaults to the same-origin `/api` prefix.
pub fn api_base() -> String {
    match option_env!("CHEMRISK_API_BASE_URL") {
        Some(value) if !value.trim().is_empty() => {
            value.trim().trim_end_matches('/').to_string()
        }
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

fn join_url(path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", api_base(), path)
    } else {
        format!("{}/{}", api_base(), path)
    }
}

pub struct BrowserTransport;

impl BrowserTransport {
    fn builder(method: Method, url: &str) -> RequestBuilder {
        match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }

    async fn decode_failure(response: Response) -> ApiError {
        let status = response.status();
        if status == 401 {
            // stale credential: drop it so the shell falls back to login
            storage::clear_token();
        }

        let content_type = response
            .headers()
            .get("content-type")
            .unwrap_or_default();
        if content_type.contains("application/json") {
            if let Ok(parsed) = response.json::<Value>().await {
                let message = parsed
                    .get("message")
                    .or_else(|| parsed.get("error"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                let code = parsed
                    .get("code")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                let details = parsed.get("details").cloned();
                return ApiError::from_status(status, message, code, details);
            }
            return ApiError::from_status(status, None, None, None);
        }

        let text = response.text().await.unwrap_or_default();
        let message = if text.is_empty() { None } else { Some(text) };
        ApiError::from_status(status, message, None, None)
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn request(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<RawBody, ApiError> {
        let url = join_url(path);
        let mut builder = Self::builder(method, &url);

        if requires_auth(path) {
            if let Some(token) = session.token.as_deref() {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
        }

        let response = match body {
            Some(json) => builder
                .json(&json)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::decode_failure(response).await);
        }

        if response.status() == 204 {
            return Ok(RawBody::Empty);
        }

        let content_type = response
            .headers()
            .get("content-type")
            .unwrap_or_default();
        if content_type.contains("application/json") {
            let value = response
                .json::<Value>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(RawBody::Json(value))
        } else {
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(RawBody::Text(text))
        }
    }
}
