//! CRUD orchestration: the flows behind the generic list/detail/form pages.
//!
//! Each operation resolves the entity, resolves the parent-scoping context,
//! validates and parses form input, calls the entity's API binding and
//! normalizes the result. Reads go through the list/detail cache; mutations
//! invalidate it. All failures come back as [`CrudError`], the
//! presentation-facing taxonomy; nothing here panics on bad input.

mod error;
mod validation;

pub use error::{CrudError, FieldViolation};
pub use validation::{prepare_payload, validate, FormMode};

use std::rc::Rc;

use serde_json::{Map, Value};

use crate::shared::data::cache::{DetailKey, ListCache, ListKey};
use crate::shared::data::context::{resolve_context, QueryParams};
use crate::shared::data::normalize::{normalize_body, NormalizeOptions, NormalizedList};
use crate::shared::data::record::RecordId;
use crate::shared::data::registry::Registry;
use crate::shared::data::schema::{EntityDef, SearchMode};
use crate::system::auth::Session;

pub struct Crud {
    registry: Rc<Registry>,
    cache: ListCache,
}

impl Crud {
    pub fn new(registry: Rc<Registry>) -> Self {
        Self {
            registry,
            cache: ListCache::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn entity(&self, key: &str) -> Result<&EntityDef, CrudError> {
        self.registry.resolve(key).ok_or_else(|| CrudError::EntityNotFound {
            key: key.to_string(),
        })
    }

    /// Fetch and normalize an entity's list. With a non-blank `search` term
    /// and a server search mode, the alternate search binding is used;
    /// client-mode filtering is the caller's job on the returned items.
    pub async fn list(
        &self,
        session: &Session,
        key: &str,
        params: &QueryParams,
        search: Option<&str>,
    ) -> Result<NormalizedList, CrudError> {
        let entity = self.entity(key)?;
        let ctx = resolve_context(entity, params)?;

        let server_query = match (search, entity.search.mode, &entity.server_search) {
            (Some(term), SearchMode::Server, Some(_)) if !term.trim().is_empty() => {
                Some(term.trim().to_string())
            }
            _ => None,
        };

        let cache_key = ListKey {
            entity_key: entity.key.to_string(),
            context: ctx,
            query: server_query.clone(),
        };
        if let Some(cached) = self.cache.get_list(&cache_key) {
            return Ok(cached);
        }

        let body = match (&server_query, &entity.server_search) {
            (Some(term), Some(search_api)) => search_api.search(session, term).await?,
            _ => entity.api.list(session, &ctx).await?,
        };

        let normalized = normalize_body(
            &entity.key,
            &body,
            NormalizeOptions {
                debug: true,
                accept_single_object_as_item: false,
            },
        );
        self.cache.put_list(cache_key, normalized.clone());
        Ok(normalized)
    }

    pub async fn detail(
        &self,
        session: &Session,
        key: &str,
        id: &RecordId,
    ) -> Result<Value, CrudError> {
        let entity = self.entity(key)?;
        let cache_key = DetailKey {
            entity_key: entity.key.to_string(),
            id: id.clone(),
        };
        if let Some(cached) = self.cache.get_detail(&cache_key) {
            return Ok(cached);
        }

        let record = entity.api.get(session, id).await?.into_value();
        self.cache.put_detail(cache_key, record.clone());
        Ok(record)
    }

    pub async fn create(
        &self,
        session: &Session,
        key: &str,
        input: &Map<String, Value>,
        params: &QueryParams,
    ) -> Result<Value, CrudError> {
        let entity = self.entity(key)?;
        let ctx = resolve_context(entity, params)?;

        let violations = validate(&entity.fields, input, FormMode::Create);
        if !violations.is_empty() {
            return Err(CrudError::Validation(violations));
        }
        let payload = prepare_payload(&entity.fields, input, FormMode::Create);

        let created = entity
            .api
            .create(session, Value::Object(payload), &ctx)
            .await?
            .into_value();
        self.cache.invalidate_lists(&entity.key);
        Ok(created)
    }

    pub async fn update(
        &self,
        session: &Session,
        key: &str,
        id: &RecordId,
        input: &Map<String, Value>,
    ) -> Result<Value, CrudError> {
        let entity = self.entity(key)?;

        let violations = validate(&entity.fields, input, FormMode::Edit);
        if !violations.is_empty() {
            return Err(CrudError::Validation(violations));
        }
        let payload = prepare_payload(&entity.fields, input, FormMode::Edit);

        let updated = entity
            .api
            .update(session, id, Value::Object(payload))
            .await?
            .into_value();
        self.cache.invalidate_lists(&entity.key);
        self.cache.invalidate_detail(&entity.key, id);
        Ok(updated)
    }

    pub async fn remove(
        &self,
        session: &Session,
        key: &str,
        id: &RecordId,
    ) -> Result<bool, CrudError> {
        let entity = self.entity(key)?;
        let removed = entity.api.remove(session, id).await?;
        self.cache.invalidate_lists(&entity.key);
        self.cache.invalidate_detail(&entity.key, id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingTransport;
    use crate::shared::api::{ApiError, Method, RawBody};
    use crate::shared::data::normalize::Pattern;
    use serde_json::json;

    fn setup(transport: Rc<RecordingTransport>) -> Crud {
        Crud::new(Rc::new(Registry::new(transport)))
    }

    fn session() -> Session {
        Session::new("tok", vec!["USER".into()])
    }

    fn admin() -> Session {
        Session::new("tok", vec!["ADMIN".into()])
    }

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn list_normalizes_and_caches() {
        let transport = RecordingTransport::returning(RawBody::Json(json!({
            "items": [{"id": 1, "nome": "ACME"}],
        })));
        let crud = setup(transport.clone());

        let first = crud
            .list(&session(), "aziende", &QueryParams::new(), None)
            .await
            .unwrap();
        assert_eq!(first.meta.pattern, Pattern::ObjItems);
        assert_eq!(first.items.len(), 1);

        // second read is served from the cache
        crud.list(&session(), "aziende", &QueryParams::new(), None)
            .await
            .unwrap();
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn list_of_unknown_entity_is_not_found() {
        let crud = setup(RecordingTransport::returning(RawBody::Empty));
        let err = crud
            .list(&session(), "sostanze", &QueryParams::new(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CrudError::EntityNotFound { .. }));
    }

    #[tokio::test]
    async fn parent_scoped_list_requires_the_parent_param() {
        let crud = setup(RecordingTransport::returning(RawBody::Empty));
        let err = crud
            .list(&session(), "aree", &QueryParams::new(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CrudError::ParentUnresolved { .. }));

        let err = crud
            .list(&session(), "aree", &params(&[("aziendaId", "0")]), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CrudError::ParentUnresolved { .. }));
    }

    #[tokio::test]
    async fn parent_scoped_list_routes_through_the_parent() {
        let transport = RecordingTransport::returning(RawBody::Json(json!([])));
        let crud = setup(transport.clone());
        crud.list(&session(), "aree", &params(&[("aziendaId", "42")]), None)
            .await
            .unwrap();
        assert_eq!(transport.calls()[0].path, "/aziende/42/aree");
    }

    #[tokio::test]
    async fn lists_are_cached_per_parent_context() {
        let transport = RecordingTransport::returning(RawBody::Json(json!([])));
        let crud = setup(transport.clone());
        crud.list(&session(), "aree", &params(&[("aziendaId", "1")]), None)
            .await
            .unwrap();
        crud.list(&session(), "aree", &params(&[("aziendaId", "2")]), None)
            .await
            .unwrap();
        crud.list(&session(), "aree", &params(&[("aziendaId", "1")]), None)
            .await
            .unwrap();
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn server_search_uses_the_find_endpoint() {
        let transport = RecordingTransport::returning(RawBody::Json(json!([])));
        let crud = setup(transport.clone());
        crud.list(
            &session(),
            "agenti-chimici",
            &QueryParams::new(),
            Some("acetone"),
        )
        .await
        .unwrap();
        assert_eq!(transport.calls()[0].path, "/agenti-chimici/find/acetone");

        // blank terms fall back to the plain list
        crud.list(&session(), "agenti-chimici", &QueryParams::new(), Some("  "))
            .await
            .unwrap();
        assert_eq!(transport.calls()[1].path, "/agenti-chimici");
    }

    #[tokio::test]
    async fn client_mode_search_never_hits_a_search_route() {
        let transport = RecordingTransport::returning(RawBody::Json(json!([])));
        let crud = setup(transport.clone());
        crud.list(&session(), "aziende", &QueryParams::new(), Some("acme"))
            .await
            .unwrap();
        assert_eq!(transport.calls()[0].path, "/aziende");
    }

    #[tokio::test]
    async fn create_validates_before_calling_the_backend() {
        let transport = RecordingTransport::returning(RawBody::Json(json!({})));
        let crud = setup(transport.clone());

        let err = crud
            .create(
                &session(),
                "aziende",
                &object(json!({"note": "senza nome"})),
                &QueryParams::new(),
            )
            .await
            .unwrap_err();
        let CrudError::Validation(violations) = err else {
            panic!("expected validation failure");
        };
        assert_eq!(violations[0].field, "nome");
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn create_parses_the_payload_and_invalidates_lists() {
        let transport = RecordingTransport::returning(RawBody::Json(json!([])));
        let crud = setup(transport.clone());

        crud.list(&session(), "frasih", &QueryParams::new(), None)
            .await
            .unwrap();
        crud.create(
            &admin(),
            "frasih",
            &object(json!({"codice": "H225", "descrizione": "Liquido...", "punteggio": "15"})),
            &QueryParams::new(),
        )
        .await
        .unwrap();
        crud.list(&session(), "frasih", &QueryParams::new(), None)
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 3, "create must invalidate the cached list");
        assert_eq!(calls[1].path, "/admin/frasih");
        assert_eq!(calls[1].method, Method::Post);
        // the numeric string was coerced by the field parser
        assert_eq!(calls[1].body.as_ref().unwrap()["punteggio"], json!(15));
    }

    #[tokio::test]
    async fn parent_scoped_create_requires_context() {
        let transport = RecordingTransport::returning(RawBody::Json(json!({})));
        let crud = setup(transport.clone());
        let err = crud
            .create(
                &session(),
                "aree",
                &object(json!({"nome": "Reparto"})),
                &QueryParams::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CrudError::ParentUnresolved { .. }));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn update_drops_hidden_fields_and_invalidates_detail() {
        let transport = RecordingTransport::returning(RawBody::Json(json!({"id": 9})));
        let crud = setup(transport.clone());

        crud.detail(&session(), "frasih", &RecordId::Int(9))
            .await
            .unwrap();
        crud.update(
            &admin(),
            "frasih",
            &RecordId::Int(9),
            &object(json!({"codice": "H226", "descrizione": "Aggiornata", "punteggio": 10})),
        )
        .await
        .unwrap();
        crud.detail(&session(), "frasih", &RecordId::Int(9))
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 3, "update must invalidate the cached detail");
        assert_eq!(calls[1].method, Method::Patch);
        // codice is create-only, the edit payload omits it
        assert!(calls[1].body.as_ref().unwrap().get("codice").is_none());
    }

    #[tokio::test]
    async fn remove_returns_true_on_204() {
        let transport = RecordingTransport::returning(RawBody::Empty);
        let crud = setup(transport.clone());
        let removed = crud
            .remove(&admin(), "frasih", &RecordId::Int(3))
            .await
            .unwrap();
        assert!(removed);
        assert_eq!(transport.calls()[0].method, Method::Delete);
    }

    #[tokio::test]
    async fn transport_failures_keep_their_taxonomy() {
        for (error, check) in [
            (
                ApiError::Unauthorized,
                CrudError::Api(ApiError::Unauthorized).to_string(),
            ),
            (ApiError::Forbidden, "Non autorizzato".to_string()),
            (ApiError::NotFound, "Risorsa non trovata".to_string()),
        ] {
            let transport = RecordingTransport::with_responses(vec![Err(error)]);
            let crud = setup(transport);
            let err = crud
                .list(&session(), "aziende", &QueryParams::new(), None)
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), check);
        }
    }

    #[tokio::test]
    async fn failed_mutation_does_not_invalidate_the_cache() {
        let transport = RecordingTransport::with_responses(vec![
            Ok(RawBody::Json(json!([{"id": 1, "nome": "ACME"}]))),
            Err(ApiError::Forbidden),
        ]);
        let crud = setup(transport.clone());

        crud.list(&session(), "aziende", &QueryParams::new(), None)
            .await
            .unwrap();
        let err = crud
            .create(
                &session(),
                "aziende",
                &object(json!({"nome": "Nuova"})),
                &QueryParams::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CrudError::Api(ApiError::Forbidden)));

        // prior state untouched: the cached list is still served
        let cached = crud
            .list(&session(), "aziende", &QueryParams::new(), None)
            .await
            .unwrap();
        assert_eq!(cached.items.len(), 1);
        assert_eq!(transport.calls().len(), 2);
    }
}
