//! Declarative entity metadata.
//!
//! Each manageable resource is described by an [`EntityDef`]: columns for
//! the list view, fields for the form, the API binding, hierarchy links and
//! access rules. Definitions are plain data built once at startup; the only
//! behavior they hold are the function/trait references injected from the
//! binding layer.

use std::borrow::Cow;
use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::api::ApiError;
use crate::shared::data::binding::{EntityApi, SearchApi};
use crate::system::auth::Session;

/// Semantic type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    String,
    Number,
    Boolean,
    Date,
    Enum,
    Relation,
}

/// One selectable option of an enum or relation field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: Value,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Async source of relation options. Loaders are stateless and idempotent:
/// they run on every render that shows their field.
#[async_trait(?Send)]
pub trait OptionLoader {
    async fn load(&self, session: &Session) -> Result<Vec<FieldOption>, ApiError>;
}

/// Converts a raw form value into the payload value, `None` meaning "omit
/// the field".
pub type ValueParser = fn(&Value) -> Option<Value>;

#[derive(Clone, Default)]
pub struct FieldDef {
    pub name: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub kind: FieldKind,
    pub required: bool,
    pub multiline: bool,
    pub multiple: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub placeholder: Option<Cow<'static, str>>,
    pub description: Option<Cow<'static, str>>,
    pub options: Option<Vec<FieldOption>>,
    pub load_options: Option<Rc<dyn OptionLoader>>,
    pub parse: Option<ValueParser>,
    pub hide_on_create: bool,
    pub hide_on_edit: bool,
}

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub key: Cow<'static, str>,
    pub label: Cow<'static, str>,
}

impl ColumnDef {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key: Cow::Borrowed(key),
            label: Cow::Borrowed(label),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Client,
    Server,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListSearch {
    pub enabled: bool,
    pub mode: SearchMode,
}

/// Marks an entity as scoped under a parent collection: list/create require
/// a resolved parent id carried in the named query parameter.
#[derive(Debug, Clone)]
pub struct ParentLink {
    pub param: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub route_base: Cow<'static, str>,
}

/// Child collection reachable from a detail view.
#[derive(Debug, Clone)]
pub struct ChildLink {
    pub label: Cow<'static, str>,
    pub route_base: Cow<'static, str>,
    pub param: Cow<'static, str>,
}

/// Read-only rule: fixed, or computed from the caller's roles.
#[derive(Clone)]
pub enum ReadOnlyRule {
    Static(bool),
    ByRole(fn(&[String]) -> bool),
}

impl Default for ReadOnlyRule {
    fn default() -> Self {
        ReadOnlyRule::Static(false)
    }
}

#[derive(Clone, Default)]
pub struct AccessRule {
    pub requires_admin: bool,
    pub read_only: ReadOnlyRule,
    pub hidden_from_menu: bool,
}

pub struct EntityDef {
    pub key: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub route_base: Cow<'static, str>,
    /// Attribute holding a record's identity. Extraction still falls back
    /// through `id`/`_id`/`Codice` for legacy rows.
    pub id_field: Cow<'static, str>,
    pub columns: Vec<ColumnDef>,
    pub fields: Vec<FieldDef>,
    pub api: Rc<dyn EntityApi>,
    /// Alternate list fetch used when `search.mode` is `Server`.
    pub server_search: Option<Rc<dyn SearchApi>>,
    pub search: ListSearch,
    pub parent: Option<ParentLink>,
    pub children: Vec<ChildLink>,
    pub access: AccessRule,
}
