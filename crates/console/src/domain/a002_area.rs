use std::rc::Rc;

use crate::shared::api::Transport;
use crate::shared::data::binding::NestedRestApi;
use crate::shared::data::schema::{
    AccessRule, ChildLink, ColumnDef, EntityDef, FieldDef, FieldKind, ListSearch, ParentLink,
    SearchMode,
};

pub fn definition(transport: Rc<dyn Transport>) -> EntityDef {
    EntityDef {
        key: "aree".into(),
        label: "Aree".into(),
        route_base: "/app/aree".into(),
        id_field: "id".into(),
        columns: vec![
            ColumnDef::new("id", "ID"),
            ColumnDef::new("aziendaId", "Azienda ID"),
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
        api: NestedRestApi::new(transport, "/aree", "/aziende", "aree", "aziendaId"),
        server_search: None,
        search: ListSearch {
            enabled: true,
            mode: SearchMode::Client,
        },
        parent: Some(ParentLink {
            param: "aziendaId".into(),
            label: "Aziende".into(),
            route_base: "/app/aziende".into(),
        }),
        children: vec![ChildLink {
            label: "Lavoratori".into(),
            route_base: "/app/lavoratori".into(),
            param: "areaId".into(),
        }],
        access: AccessRule::default(),
    }
}
