//! In-memory transport for tests: records every call and replays canned
//! responses.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;
use super::transport::{requires_auth, Method, RawBody, Transport};
use crate::system::auth::Session;

#[derive(Debug, Clone)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    /// Whether the call would have carried the bearer token.
    pub authenticated: bool,
}

pub struct RecordingTransport {
    calls: RefCell<Vec<Call>>,
    queued: RefCell<VecDeque<Result<RawBody, ApiError>>>,
    fallback: RawBody,
}

impl RecordingTransport {
    /// Every request answers with `fallback`.
    pub fn returning(fallback: RawBody) -> Rc<Self> {
        Rc::new(Self {
            calls: RefCell::new(Vec::new()),
            queued: RefCell::new(VecDeque::new()),
            fallback,
        })
    }

    /// Answers are popped from `responses` in order; once exhausted, every
    /// request answers with `RawBody::Empty`.
    pub fn with_responses(responses: Vec<Result<RawBody, ApiError>>) -> Rc<Self> {
        Rc::new(Self {
            calls: RefCell::new(Vec::new()),
            queued: RefCell::new(responses.into()),
            fallback: RawBody::Empty,
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn request(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<RawBody, ApiError> {
        self.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body,
            authenticated: requires_auth(path) && session.token.is_some(),
        });
        match self.queued.borrow_mut().pop_front() {
            Some(response) => response,
            None => Ok(self.fallback.clone()),
        }
    }
}
