use thiserror::Error;

use crate::shared::api::ApiError;
use crate::shared::data::context::ContextError;

/// One invalid form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Presentation-facing failure taxonomy of the CRUD flows.
///
/// `EntityNotFound` and `ParentUnresolved` are navigational states, not
/// network errors; `Validation` never reached the backend at all. Genuine
/// transport failures stay wrapped in `Api` with their status taxonomy
/// intact (401/403/404/other).
#[derive(Debug, Error)]
pub enum CrudError {
    #[error("Entity non trovata")]
    EntityNotFound { key: String },

    #[error("parametro `{param}` mancante o non valido")]
    ParentUnresolved { param: String },

    #[error("dati non validi")]
    Validation(Vec<FieldViolation>),

    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for CrudError {
    fn from(err: ApiError) -> Self {
        match err {
            // a binding invoked without its parent id surfaces as the same
            // state the context resolver yields
            ApiError::MissingParent { param } => CrudError::ParentUnresolved {
                param: param.to_string(),
            },
            other => CrudError::Api(other),
        }
    }
}

impl From<ContextError> for CrudError {
    fn from(err: ContextError) -> Self {
        match err {
            ContextError::ParentUnresolved { param } => CrudError::ParentUnresolved { param },
        }
    }
}
