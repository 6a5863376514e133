use std::rc::Rc;

use super::parsers;
use crate::shared::api::Transport;
use crate::shared::data::binding::AdminGatedApi;
use crate::shared::data::schema::{
    AccessRule, ColumnDef, EntityDef, FieldDef, FieldKind, ListSearch, ReadOnlyRule, SearchMode,
};
use crate::system::auth::guard;

pub fn definition(transport: Rc<dyn Transport>) -> EntityDef {
    EntityDef {
        key: "frasih".into(),
        label: "Frasi H".into(),
        route_base: "/app/frasih".into(),
        id_field: "id".into(),
        columns: vec![
            ColumnDef::new("id", "ID"),
            ColumnDef::new("codice", "Codice"),
            ColumnDef::new("descrizione", "Descrizione"),
            ColumnDef::new("punteggio", "Punteggio"),
        ],
        fields: vec![
            FieldDef {
                name: "codice".into(),
                label: "Codice".into(),
                kind: FieldKind::String,
                required: true,
                hide_on_edit: true,
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
                name: "punteggio".into(),
                label: "Punteggio".into(),
                kind: FieldKind::Number,
                required: true,
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
        ],
        api: AdminGatedApi::new(transport, "/frasih", "/admin/frasih"),
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
