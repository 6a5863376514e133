//! The entity catalog.
//!
//! Built once at startup against an injected transport; after that it is
//! read-only shared state. Lookup by key goes through a precomputed index,
//! and an unknown key is an ordinary `None`, never a panic, so the router
//! can show a not-found state.

use std::collections::HashMap;
use std::rc::Rc;

use crate::domain;
use crate::shared::api::Transport;
use crate::shared::data::schema::EntityDef;
use crate::system::auth::guard;
use crate::system::users;

pub struct Registry {
    entities: Vec<EntityDef>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        let mut entities = vec![
            domain::a001_azienda::definition(transport.clone()),
            domain::a002_area::definition(transport.clone()),
            domain::a003_lavoratore::definition(transport.clone()),
            domain::a004_agente_chimico::definition(transport.clone()),
            domain::a005_valutazione::definition(transport.clone()),
            domain::a006_frasi_h::definition(transport.clone()),
            users::definition(transport.clone()),
        ];
        entities.extend(domain::codifiche::definitions(transport));

        let mut index = HashMap::with_capacity(entities.len());
        for (position, entity) in entities.iter().enumerate() {
            let previous = index.insert(entity.key.to_string(), position);
            debug_assert!(previous.is_none(), "duplicate entity key `{}`", entity.key);
        }

        Self { entities, index }
    }

    /// Lookup by route key. `None` is the not-found sentinel.
    pub fn resolve(&self, key: &str) -> Option<&EntityDef> {
        self.index.get(key).map(|position| &self.entities[*position])
    }

    /// The full catalog in declaration order.
    pub fn entities(&self) -> &[EntityDef] {
        &self.entities
    }

    /// Catalog entries shown in the navigation menu for this role set,
    /// in declaration order.
    pub fn menu(&self, roles: &[String]) -> Vec<&EntityDef> {
        self.entities
            .iter()
            .filter(|entity| !entity.access.hidden_from_menu && guard::can_access(entity, roles))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingTransport;
    use crate::shared::api::RawBody;
    use std::collections::HashSet;

    fn registry() -> Registry {
        Registry::new(RecordingTransport::returning(RawBody::Empty))
    }

    #[test]
    fn resolves_every_catalog_key() {
        let registry = registry();
        for key in [
            "aziende",
            "aree",
            "lavoratori",
            "agenti-chimici",
            "valutazioni",
            "frasih",
            "admin-users",
            "codifiche-stato-fisico-inal",
            "codifiche-tipo-uso-inal",
            "codifiche-tipo-controllo-inal",
            "codifiche-livelli-contatto-cutaneo",
            "codifiche-tipo-controllo-proc",
        ] {
            assert!(registry.resolve(key).is_some(), "missing entity `{key}`");
        }
    }

    #[test]
    fn unknown_keys_resolve_to_none() {
        assert!(registry().resolve("sostanze").is_none());
        assert!(registry().resolve("").is_none());
    }

    #[test]
    fn keys_are_unique() {
        let registry = registry();
        let keys: HashSet<_> = registry.entities().iter().map(|e| e.key.clone()).collect();
        assert_eq!(keys.len(), registry.entities().len());
    }

    #[test]
    fn menu_hides_admin_entities_from_plain_users() {
        let registry = registry();
        let user_menu = registry.menu(&["USER".to_string()]);
        assert!(user_menu.iter().all(|e| e.key != "admin-users"));

        let admin_menu = registry.menu(&["admin".to_string()]);
        assert!(admin_menu.iter().any(|e| e.key == "admin-users"));
    }

    #[test]
    fn menu_preserves_catalog_order() {
        let registry = registry();
        let menu = registry.menu(&["admin".to_string()]);
        let positions: Vec<usize> = menu
            .iter()
            .map(|entry| {
                registry
                    .entities()
                    .iter()
                    .position(|e| e.key == entry.key)
                    .unwrap()
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn hierarchy_links_are_consistent() {
        let registry = registry();
        for entity in registry.entities() {
            for child in &entity.children {
                // every advertised child is a parent-scoped entity whose
                // parent param matches the link
                let child_entity = registry
                    .entities()
                    .iter()
                    .find(|e| e.route_base == child.route_base)
                    .expect("child route must exist in the catalog");
                let parent = child_entity.parent.as_ref().expect("child must be scoped");
                assert_eq!(parent.param, child.param);
            }
        }
    }
}
