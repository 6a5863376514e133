use std::rc::Rc;

use crate::shared::api::Transport;
use crate::shared::data::binding::NestedRestApi;
use crate::shared::data::schema::{
    AccessRule, ChildLink, ColumnDef, EntityDef, FieldDef, FieldKind, ListSearch, ParentLink,
    SearchMode,
};

pub fn definition(transport: Rc<dyn Transport>) -> EntityDef {
    EntityDef {
        key: "lavoratori".into(),
        label: "Lavoratori".into(),
        route_base: "/app/lavoratori".into(),
        id_field: "id".into(),
        columns: vec![
            ColumnDef::new("id", "ID"),
            ColumnDef::new("areaId", "Area ID"),
            ColumnDef::new("codice", "Codice"),
            ColumnDef::new("mansione", "Mansione"),
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
                name: "mansione".into(),
                label: "Mansione".into(),
                kind: FieldKind::String,
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
        api: NestedRestApi::new(transport, "/lavoratori", "/aree", "lavoratori", "areaId"),
        server_search: None,
        search: ListSearch {
            enabled: true,
            mode: SearchMode::Client,
        },
        parent: Some(ParentLink {
            param: "areaId".into(),
            label: "Aree".into(),
            route_base: "/app/aree".into(),
        }),
        children: vec![ChildLink {
            label: "Valutazioni".into(),
            route_base: "/app/valutazioni".into(),
            param: "lavoratoreId".into(),
        }],
        access: AccessRule::default(),
    }
}
