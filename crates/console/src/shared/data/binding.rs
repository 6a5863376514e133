//! REST bindings the registry hands to each entity definition.
//!
//! Bindings are resolved once at registry construction against an injected
//! [`Transport`], so the catalog stays testable with an in-memory transport.
//! Four shapes cover the whole backend: flat collections, parent-nested
//! collections, collections whose mutating routes live under `/admin`, and
//! the search endpoint.

use std::borrow::Cow;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::shared::api::{ApiError, Method, RawBody, Transport};
use crate::shared::data::context::RequestContext;
use crate::shared::data::record::RecordId;
use crate::system::auth::{guard, Session};

/// The five operations the CRUD layer issues per entity.
#[async_trait(?Send)]
pub trait EntityApi {
    async fn list(&self, session: &Session, ctx: &RequestContext) -> Result<RawBody, ApiError>;
    async fn get(&self, session: &Session, id: &RecordId) -> Result<RawBody, ApiError>;
    async fn create(
        &self,
        session: &Session,
        payload: Value,
        ctx: &RequestContext,
    ) -> Result<RawBody, ApiError>;
    async fn update(
        &self,
        session: &Session,
        id: &RecordId,
        payload: Value,
    ) -> Result<RawBody, ApiError>;
    async fn remove(&self, session: &Session, id: &RecordId) -> Result<bool, ApiError>;
}

/// Alternate list fetch against a search endpoint.
#[async_trait(?Send)]
pub trait SearchApi {
    async fn search(&self, session: &Session, query: &str) -> Result<RawBody, ApiError>;
}

/// Flat collection: `GET/POST {base}`, `GET/PATCH/DELETE {base}/{id}`.
pub struct RestApi {
    transport: Rc<dyn Transport>,
    base: Cow<'static, str>,
}

impl RestApi {
    pub fn new(transport: Rc<dyn Transport>, base: impl Into<Cow<'static, str>>) -> Rc<Self> {
        Rc::new(Self {
            transport,
            base: base.into(),
        })
    }
}

#[async_trait(?Send)]
impl EntityApi for RestApi {
    async fn list(&self, session: &Session, _ctx: &RequestContext) -> Result<RawBody, ApiError> {
        self.transport
            .request(session, Method::Get, &self.base, None)
            .await
    }

    async fn get(&self, session: &Session, id: &RecordId) -> Result<RawBody, ApiError> {
        let path = format!("{}/{}", self.base, id);
        self.transport.request(session, Method::Get, &path, None).await
    }

    async fn create(
        &self,
        session: &Session,
        payload: Value,
        _ctx: &RequestContext,
    ) -> Result<RawBody, ApiError> {
        self.transport
            .request(session, Method::Post, &self.base, Some(payload))
            .await
    }

    async fn update(
        &self,
        session: &Session,
        id: &RecordId,
        payload: Value,
    ) -> Result<RawBody, ApiError> {
        let path = format!("{}/{}", self.base, id);
        self.transport
            .request(session, Method::Patch, &path, Some(payload))
            .await
    }

    async fn remove(&self, session: &Session, id: &RecordId) -> Result<bool, ApiError> {
        let path = format!("{}/{}", self.base, id);
        self.transport
            .request(session, Method::Delete, &path, None)
            .await?;
        Ok(true)
    }
}

/// Parent-nested collection: list/create go through
/// `{parent_base}/{parent_id}/{child_segment}`, detail routes through the
/// flat `{base}`. Calling list/create without a resolved parent id is a
/// contract violation and fails with [`ApiError::MissingParent`].
pub struct NestedRestApi {
    transport: Rc<dyn Transport>,
    base: Cow<'static, str>,
    parent_base: Cow<'static, str>,
    child_segment: Cow<'static, str>,
    parent_param: &'static str,
}

impl NestedRestApi {
    pub fn new(
        transport: Rc<dyn Transport>,
        base: impl Into<Cow<'static, str>>,
        parent_base: impl Into<Cow<'static, str>>,
        child_segment: impl Into<Cow<'static, str>>,
        parent_param: &'static str,
    ) -> Rc<Self> {
        Rc::new(Self {
            transport,
            base: base.into(),
            parent_base: parent_base.into(),
            child_segment: child_segment.into(),
            parent_param,
        })
    }

    fn scoped_path(&self, ctx: &RequestContext) -> Result<String, ApiError> {
        let parent_id = ctx.parent_id.ok_or(ApiError::MissingParent {
            param: self.parent_param,
        })?;
        Ok(format!(
            "{}/{}/{}",
            self.parent_base, parent_id, self.child_segment
        ))
    }
}

#[async_trait(?Send)]
impl EntityApi for NestedRestApi {
    async fn list(&self, session: &Session, ctx: &RequestContext) -> Result<RawBody, ApiError> {
        let path = self.scoped_path(ctx)?;
        self.transport.request(session, Method::Get, &path, None).await
    }

    async fn get(&self, session: &Session, id: &RecordId) -> Result<RawBody, ApiError> {
        let path = format!("{}/{}", self.base, id);
        self.transport.request(session, Method::Get, &path, None).await
    }

    async fn create(
        &self,
        session: &Session,
        payload: Value,
        ctx: &RequestContext,
    ) -> Result<RawBody, ApiError> {
        let path = self.scoped_path(ctx)?;
        self.transport
            .request(session, Method::Post, &path, Some(payload))
            .await
    }

    async fn update(
        &self,
        session: &Session,
        id: &RecordId,
        payload: Value,
    ) -> Result<RawBody, ApiError> {
        let path = format!("{}/{}", self.base, id);
        self.transport
            .request(session, Method::Patch, &path, Some(payload))
            .await
    }

    async fn remove(&self, session: &Session, id: &RecordId) -> Result<bool, ApiError> {
        let path = format!("{}/{}", self.base, id);
        self.transport
            .request(session, Method::Delete, &path, None)
            .await?;
        Ok(true)
    }
}

/// Collection whose mutating routes live under an `/admin` prefix.
/// Reads optionally switch to the admin route for admin sessions (the
/// coded lookup tables expose soft-deleted rows only there).
pub struct AdminGatedApi {
    transport: Rc<dyn Transport>,
    public_base: Cow<'static, str>,
    admin_base: Cow<'static, str>,
    admin_reads: bool,
}

impl AdminGatedApi {
    /// Reads always public, writes admin-prefixed.
    pub fn new(
        transport: Rc<dyn Transport>,
        public_base: impl Into<Cow<'static, str>>,
        admin_base: impl Into<Cow<'static, str>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            transport,
            public_base: public_base.into(),
            admin_base: admin_base.into(),
            admin_reads: false,
        })
    }

    /// Reads switch to the admin route when the session holds the admin
    /// role.
    pub fn with_admin_reads(
        transport: Rc<dyn Transport>,
        public_base: impl Into<Cow<'static, str>>,
        admin_base: impl Into<Cow<'static, str>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            transport,
            public_base: public_base.into(),
            admin_base: admin_base.into(),
            admin_reads: true,
        })
    }

    fn read_base(&self, session: &Session) -> &str {
        if self.admin_reads && guard::is_admin(&session.roles) {
            &self.admin_base
        } else {
            &self.public_base
        }
    }
}

#[async_trait(?Send)]
impl EntityApi for AdminGatedApi {
    async fn list(&self, session: &Session, _ctx: &RequestContext) -> Result<RawBody, ApiError> {
        let path = self.read_base(session).to_string();
        self.transport.request(session, Method::Get, &path, None).await
    }

    async fn get(&self, session: &Session, id: &RecordId) -> Result<RawBody, ApiError> {
        let path = format!("{}/{}", self.read_base(session), id);
        self.transport.request(session, Method::Get, &path, None).await
    }

    async fn create(
        &self,
        session: &Session,
        payload: Value,
        _ctx: &RequestContext,
    ) -> Result<RawBody, ApiError> {
        self.transport
            .request(session, Method::Post, &self.admin_base, Some(payload))
            .await
    }

    async fn update(
        &self,
        session: &Session,
        id: &RecordId,
        payload: Value,
    ) -> Result<RawBody, ApiError> {
        let path = format!("{}/{}", self.admin_base, id);
        self.transport
            .request(session, Method::Patch, &path, Some(payload))
            .await
    }

    async fn remove(&self, session: &Session, id: &RecordId) -> Result<bool, ApiError> {
        let path = format!("{}/{}", self.admin_base, id);
        self.transport
            .request(session, Method::Delete, &path, None)
            .await?;
        Ok(true)
    }
}

/// `GET {base}/find/{query}` with the query percent-encoded.
pub struct RestSearchApi {
    transport: Rc<dyn Transport>,
    base: Cow<'static, str>,
}

impl RestSearchApi {
    pub fn new(transport: Rc<dyn Transport>, base: impl Into<Cow<'static, str>>) -> Rc<Self> {
        Rc::new(Self {
            transport,
            base: base.into(),
        })
    }
}

#[async_trait(?Send)]
impl SearchApi for RestSearchApi {
    async fn search(&self, session: &Session, query: &str) -> Result<RawBody, ApiError> {
        let path = format!("{}/find/{}", self.base, urlencoding::encode(query.trim()));
        self.transport.request(session, Method::Get, &path, None).await
    }
}
