//! The five coded lookup tables share one definition template; only key,
//! label and routes differ. Reads switch to the `/admin` route for admin
//! sessions (soft-deleted rows are visible only there), writes are always
//! admin-prefixed.

use std::rc::Rc;

use super::parsers;
use crate::shared::api::Transport;
use crate::shared::data::binding::AdminGatedApi;
use crate::shared::data::schema::{
    AccessRule, ColumnDef, EntityDef, FieldDef, FieldKind, ListSearch, ReadOnlyRule, SearchMode,
};
use crate::system::auth::guard;

const GROUPS: [(&str, &str); 5] = [
    ("stato-fisico-inal", "Stato fisico inal"),
    ("tipo-uso-inal", "Tipo uso inal"),
    ("tipo-controllo-inal", "Tipo controllo inal"),
    ("livelli-contatto-cutaneo", "Livelli contatto cutaneo"),
    ("tipo-controllo-proc", "Tipo controllo proc"),
];

pub fn definitions(transport: Rc<dyn Transport>) -> Vec<EntityDef> {
    GROUPS
        .iter()
        .map(|(slug, label)| group_definition(transport.clone(), slug, label))
        .collect()
}

fn group_definition(transport: Rc<dyn Transport>, slug: &str, label: &str) -> EntityDef {
    EntityDef {
        key: format!("codifiche-{slug}").into(),
        label: format!("Codifiche - {label}").into(),
        route_base: format!("/app/codifiche-{slug}").into(),
        id_field: "id".into(),
        columns: vec![
            ColumnDef::new("id", "ID"),
            ColumnDef::new("codice", "Codice"),
            ColumnDef::new("descrizione", "Descrizione"),
            ColumnDef::new("ordine", "Ordine"),
            ColumnDef::new("isActive", "Attivo"),
        ],
        fields: vec![
            FieldDef {
                name: "codice".into(),
                label: "Codice".into(),
                kind: FieldKind::String,
                required: true,
                ..FieldDef::default()
            },
            FieldDef {
                name: "descrizione".into(),
                label: "Descrizione".into(),
                kind: FieldKind::String,
                required: true,
                multiline: true,
                ..FieldDef::default()
            },
            FieldDef {
                name: "ordine".into(),
                label: "Ordine".into(),
                kind: FieldKind::Number,
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "isActive".into(),
                label: "Attivo".into(),
                kind: FieldKind::Boolean,
                ..FieldDef::default()
            },
        ],
        api: AdminGatedApi::with_admin_reads(
            transport,
            format!("/codifiche/{slug}"),
            format!("/admin/codifiche/{slug}"),
        ),
        server_search: None,
        search: ListSearch {
            enabled: true,
            mode: SearchMode::Client,
        },
        parent: None,
        children: Vec::new(),
        access: AccessRule {
            read_only: ReadOnlyRule::ByRole(guard::read_only_unless_admin),
            ..AccessRule::default()
        },
    }
}
