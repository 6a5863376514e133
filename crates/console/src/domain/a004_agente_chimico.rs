use std::rc::Rc;

use contracts::domain::a004_agente_chimico::AgenteChimicoTipo;

use super::options::{AgentiChimiciOptions, FrasiHOptions};
use super::parsers;
use crate::shared::api::Transport;
use crate::shared::data::binding::{RestApi, RestSearchApi};
use crate::shared::data::schema::{
    AccessRule, ColumnDef, EntityDef, FieldDef, FieldKind, FieldOption, ListSearch, SearchMode,
};

pub fn definition(transport: Rc<dyn Transport>) -> EntityDef {
    let tipo_options = AgenteChimicoTipo::ALL
        .iter()
        .map(|tipo| FieldOption::new(tipo.as_str(), tipo.as_str()))
        .collect();

    EntityDef {
        key: "agenti-chimici".into(),
        label: "Agenti chimici".into(),
        route_base: "/app/agenti-chimici".into(),
        id_field: "id".into(),
        columns: vec![
            ColumnDef::new("id", "ID"),
            ColumnDef::new("nome", "Nome"),
            ColumnDef::new("identificativo", "Identificativo"),
            ColumnDef::new("tipo", "Tipo"),
            ColumnDef::new("vlep", "VLEP"),
            ColumnDef::new("alta_emissione", "Alta emissione"),
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
                name: "identificativo".into(),
                label: "Identificativo".into(),
                kind: FieldKind::String,
                required: true,
                ..FieldDef::default()
            },
            FieldDef {
                name: "tipo".into(),
                label: "Tipo".into(),
                kind: FieldKind::Enum,
                required: true,
                options: Some(tipo_options),
                ..FieldDef::default()
            },
            FieldDef {
                name: "vlep".into(),
                label: "VLEP".into(),
                kind: FieldKind::Boolean,
                required: true,
                ..FieldDef::default()
            },
            FieldDef {
                name: "alta_emissione".into(),
                label: "Alta emissione".into(),
                kind: FieldKind::Boolean,
                required: true,
                ..FieldDef::default()
            },
            FieldDef {
                name: "frasiHIds".into(),
                label: "Frasi H".into(),
                kind: FieldKind::Relation,
                multiple: true,
                load_options: Some(FrasiHOptions::new(transport.clone())),
                parse: Some(parsers::parse_id_list),
                ..FieldDef::default()
            },
            FieldDef {
                name: "sostanzeComponentiIds".into(),
                label: "Sostanze componenti".into(),
                kind: FieldKind::Relation,
                multiple: true,
                load_options: Some(AgentiChimiciOptions::solo_sostanze(transport.clone())),
                parse: Some(parsers::parse_id_list),
                ..FieldDef::default()
            },
        ],
        api: RestApi::new(transport.clone(), "/agenti-chimici"),
        server_search: Some(RestSearchApi::new(transport, "/agenti-chimici")),
        search: ListSearch {
            enabled: true,
            mode: SearchMode::Server,
        },
        parent: None,
        children: Vec::new(),
        access: AccessRule::default(),
    }
}
