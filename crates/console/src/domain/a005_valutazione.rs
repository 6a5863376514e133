use std::rc::Rc;

use super::options::{AgentiChimiciOptions, CodificaOptions};
use super::parsers;
use crate::shared::api::Transport;
use crate::shared::data::binding::NestedRestApi;
use crate::shared::data::schema::{
    AccessRule, ColumnDef, EntityDef, FieldDef, FieldKind, ListSearch, ParentLink, SearchMode,
};

fn codifica_loader(
    transport: &Rc<dyn Transport>,
    entity_key: &'static str,
    path: &'static str,
) -> Rc<CodificaOptions> {
    CodificaOptions::new(transport.clone(), entity_key, path)
}

pub fn definition(transport: Rc<dyn Transport>) -> EntityDef {
    EntityDef {
        key: "valutazioni".into(),
        label: "Valutazioni".into(),
        route_base: "/app/valutazioni".into(),
        id_field: "id".into(),
        columns: vec![
            ColumnDef::new("id", "ID"),
            ColumnDef::new("lavoratoreId", "Lavoratore ID"),
            ColumnDef::new("agenteChimicoId", "Agente ID"),
            ColumnDef::new("nome", "Nome"),
            ColumnDef::new("data", "Data"),
        ],
        fields: vec![
            FieldDef {
                name: "agenteChimicoId".into(),
                label: "Agente chimico".into(),
                kind: FieldKind::Relation,
                required: true,
                load_options: Some(AgentiChimiciOptions::new(transport.clone())),
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "nome".into(),
                label: "Nome".into(),
                kind: FieldKind::String,
                required: true,
                ..FieldDef::default()
            },
            FieldDef {
                name: "data".into(),
                label: "Data".into(),
                kind: FieldKind::Date,
                required: true,
                parse: Some(parsers::parse_date),
                ..FieldDef::default()
            },
            FieldDef {
                name: "einal".into(),
                label: "Einal".into(),
                kind: FieldKind::Number,
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "statoFisicoInal".into(),
                label: "Stato fisico inalazione".into(),
                kind: FieldKind::Relation,
                load_options: Some(codifica_loader(
                    &transport,
                    "codifiche-stato-fisico-inal",
                    "/codifiche/stato-fisico-inal",
                )),
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "quantitaKg".into(),
                label: "Quantita (kg)".into(),
                kind: FieldKind::Number,
                description: Some("Unita: kg".into()),
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "tipoUsoInal".into(),
                label: "Tipo uso inalazione".into(),
                kind: FieldKind::Relation,
                load_options: Some(codifica_loader(
                    &transport,
                    "codifiche-tipo-uso-inal",
                    "/codifiche/tipo-uso-inal",
                )),
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "tipoControlloInal".into(),
                label: "Tipo controllo inalazione".into(),
                kind: FieldKind::Relation,
                load_options: Some(codifica_loader(
                    &transport,
                    "codifiche-tipo-controllo-inal",
                    "/codifiche/tipo-controllo-inal",
                )),
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "tempoInalMin".into(),
                label: "Tempo inalazione (min)".into(),
                kind: FieldKind::Number,
                description: Some("Unita: minuti".into()),
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "distanzaM".into(),
                label: "Distanza (m)".into(),
                kind: FieldKind::Number,
                description: Some("Unita: metri".into()),
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "ecute".into(),
                label: "Ecute".into(),
                kind: FieldKind::Number,
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "esposizioneCutanea".into(),
                label: "Esposizione cutanea".into(),
                kind: FieldKind::Boolean,
                ..FieldDef::default()
            },
            FieldDef {
                name: "livelliContattoCutaneo".into(),
                label: "Livelli contatto cutaneo".into(),
                kind: FieldKind::Relation,
                load_options: Some(codifica_loader(
                    &transport,
                    "codifiche-livelli-contatto-cutaneo",
                    "/codifiche/livelli-contatto-cutaneo",
                )),
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "tipoControlloProc".into(),
                label: "Tipo controllo processo".into(),
                kind: FieldKind::Relation,
                load_options: Some(codifica_loader(
                    &transport,
                    "codifiche-tipo-controllo-proc",
                    "/codifiche/tipo-controllo-proc",
                )),
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "quantitaProcKg".into(),
                label: "Quantita processo (kg)".into(),
                kind: FieldKind::Number,
                description: Some("Unita: kg".into()),
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
            FieldDef {
                name: "tempoProcMin".into(),
                label: "Tempo processo (min)".into(),
                kind: FieldKind::Number,
                description: Some("Unita: minuti".into()),
                parse: Some(parsers::parse_number),
                ..FieldDef::default()
            },
        ],
        api: NestedRestApi::new(
            transport,
            "/valutazioni",
            "/lavoratori",
            "valutazioni",
            "lavoratoreId",
        ),
        server_search: None,
        search: ListSearch {
            enabled: true,
            mode: SearchMode::Client,
        },
        parent: Some(ParentLink {
            param: "lavoratoreId".into(),
            label: "Lavoratori".into(),
            route_base: "/app/lavoratori".into(),
        }),
        children: Vec::new(),
        access: AccessRule::default(),
    }
}
