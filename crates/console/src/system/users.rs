//! Account management entity. Admin-only: hidden from the menu and
//! rejected by the access policy for everyone else.

use std::rc::Rc;

use crate::domain::parsers;
use crate::shared::api::Transport;
use crate::shared::data::binding::RestApi;
use crate::shared::data::schema::{
    AccessRule, ColumnDef, EntityDef, FieldDef, FieldKind, ListSearch, SearchMode,
};

pub fn definition(transport: Rc<dyn Transport>) -> EntityDef {
    EntityDef {
        key: "admin-users".into(),
        label: "Utenti".into(),
        route_base: "/app/admin-users".into(),
        id_field: "id".into(),
        columns: vec![
            ColumnDef::new("id", "ID"),
            ColumnDef::new("username", "Username"),
            ColumnDef::new("mail", "Email"),
            ColumnDef::new("name", "Nome"),
            ColumnDef::new("surname", "Cognome"),
            ColumnDef::new("isActive", "Attivo"),
        ],
        fields: vec![
            FieldDef {
                name: "username".into(),
                label: "Username".into(),
                kind: FieldKind::String,
                required: true,
                hide_on_edit: true,
                ..FieldDef::default()
            },
            FieldDef {
                name: "password".into(),
                label: "Password".into(),
                kind: FieldKind::String,
                required: true,
                hide_on_edit: true,
                description: Some("Minimo 8 caratteri.".into()),
                ..FieldDef::default()
            },
            FieldDef {
                name: "mail".into(),
                label: "Email".into(),
                kind: FieldKind::String,
                ..FieldDef::default()
            },
            FieldDef {
                name: "name".into(),
                label: "Nome".into(),
                kind: FieldKind::String,
                ..FieldDef::default()
            },
            FieldDef {
                name: "surname".into(),
                label: "Cognome".into(),
                kind: FieldKind::String,
                ..FieldDef::default()
            },
            // the roles field appears twice: the create variant always sends
            // the parsed list, the edit variant omits it when left blank
            FieldDef {
                name: "roles".into(),
                label: "Ruoli".into(),
                kind: FieldKind::String,
                required: true,
                multiline: true,
                placeholder: Some("ADMIN,USER".into()),
                parse: Some(parsers::parse_roles),
                hide_on_edit: true,
                ..FieldDef::default()
            },
            FieldDef {
                name: "roles".into(),
                label: "Ruoli".into(),
                kind: FieldKind::String,
                multiline: true,
                placeholder: Some("ADMIN,USER".into()),
                parse: Some(parsers::parse_roles_optional),
                hide_on_create: true,
                ..FieldDef::default()
            },
            FieldDef {
                name: "isActive".into(),
                label: "Attivo".into(),
                kind: FieldKind::Boolean,
                hide_on_create: true,
                ..FieldDef::default()
            },
        ],
        api: RestApi::new(transport, "/admin/users"),
        server_search: None,
        search: ListSearch {
            enabled: true,
            mode: SearchMode::Client,
        },
        parent: None,
        children: Vec::new(),
        access: AccessRule {
            requires_admin: true,
            ..AccessRule::default()
        },
    }
}
