//! Parent-scoping context derived from route query parameters.

use std::collections::HashMap;

use thiserror::Error;

use super::schema::EntityDef;

/// Decoded query parameters of the current route.
pub type QueryParams = HashMap<String, String>;

/// Parse a raw query string (with or without the leading `?`).
pub fn parse_query(query: &str) -> QueryParams {
    serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default()
}

/// Ephemeral per-request scoping value. Built fresh for every list/detail
/// render, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RequestContext {
    pub parent_id: Option<i64>,
}

/// Navigational precondition failure: the entity needs a parent id the
/// route does not carry. Distinct from any transport error; callers render
/// a pick-a-parent prompt, no request is issued.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("parametro `{param}` mancante o non valido")]
    ParentUnresolved { param: String },
}

/// Derive the request context for an entity from the current query
/// parameters. Only a strictly positive integer resolves; absent,
/// non-numeric, zero or negative values all signal `ParentUnresolved`.
pub fn resolve_context(
    entity: &EntityDef,
    params: &QueryParams,
) -> Result<RequestContext, ContextError> {
    let Some(parent) = &entity.parent else {
        return Ok(RequestContext::default());
    };

    let parsed = params
        .get(parent.param.as_ref())
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|id| *id > 0);

    match parsed {
        Some(id) => Ok(RequestContext {
            parent_id: Some(id),
        }),
        None => Err(ContextError::ParentUnresolved {
            param: parent.param.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain;
    use crate::shared::api::testing::RecordingTransport;
    use crate::shared::api::RawBody;

    fn parent_scoped() -> EntityDef {
        let transport = RecordingTransport::returning(RawBody::Empty);
        domain::a002_area::definition(transport)
    }

    fn unscoped() -> EntityDef {
        let transport = RecordingTransport::returning(RawBody::Empty);
        domain::a001_azienda::definition(transport)
    }

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn entities_without_parent_resolve_to_empty_context() {
        let ctx = resolve_context(&unscoped(), &QueryParams::new()).unwrap();
        assert_eq!(ctx.parent_id, None);
    }

    #[test]
    fn positive_integer_resolves() {
        let ctx = resolve_context(&parent_scoped(), &params(&[("aziendaId", "42")])).unwrap();
        assert_eq!(ctx.parent_id, Some(42));
    }

    #[test]
    fn invalid_values_are_unresolved() {
        let entity = parent_scoped();
        for raw in ["0", "-5", "abc", ""] {
            let err = resolve_context(&entity, &params(&[("aziendaId", raw)])).unwrap_err();
            assert_eq!(
                err,
                ContextError::ParentUnresolved {
                    param: "aziendaId".into()
                },
                "raw value {raw:?}"
            );
        }
    }

    #[test]
    fn missing_param_is_unresolved() {
        let err = resolve_context(&parent_scoped(), &QueryParams::new()).unwrap_err();
        assert!(matches!(err, ContextError::ParentUnresolved { .. }));
    }

    #[test]
    fn query_strings_parse_with_or_without_question_mark() {
        let parsed = parse_query("?aziendaId=7&tab=aree");
        assert_eq!(parsed.get("aziendaId").map(String::as_str), Some("7"));
        assert_eq!(parsed.get("tab").map(String::as_str), Some("aree"));

        let bare = parse_query("aziendaId=7");
        assert_eq!(bare.get("aziendaId").map(String::as_str), Some("7"));
    }
}
