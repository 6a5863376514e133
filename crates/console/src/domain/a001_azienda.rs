use std::rc::Rc;

use crate::shared::api::Transport;
use crate::shared::data::binding::RestApi;
use crate::shared::data::schema::{
    AccessRule, ChildLink, ColumnDef, EntityDef, FieldDef, FieldKind, ListSearch, SearchMode,
};

pub fn definition(transport: Rc<dyn Transport>) -> EntityDef {
    EntityDef {
        key: "aziende".into(),
        label: "Aziende".into(),
        route_base: "/app/aziende".into(),
        id_field: "id".into(),
        columns: vec![
            ColumnDef::new("id", "ID"),
            ColumnDef::new("nome", "Nome"),
            ColumnDef::new("note", "Note"),
        ],
        fields: vec![
            FieldDef {
                name: "nome".into(),
                label: "Nome".into(),
                kind: FieldKind::String,
                required: true,
                ..FieldDef::default()
            },
            FieldDef {
                name: "note".into(),
                label: "Note".into(),
                kind: FieldKind::String,
                multiline: true,
                ..FieldDef::default()
            },
        ],
        api: RestApi::new(transport, "/aziende"),
        server_search: None,
        search: ListSearch {
            enabled: true,
            mode: SearchMode::Client,
        },
        parent: None,
        children: vec![ChildLink {
            label: "Aree".into(),
            route_base: "/app/aree".into(),
            param: "aziendaId".into(),
        }],
        access: AccessRule::default(),
    }
}
