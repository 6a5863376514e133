//! Request-scoped read cache.
//!
//! Normalization is pure, so a list result can be reused as long as nothing
//! mutated the entity. Keys carry the resolved context and the server-search
//! query; mutations invalidate by entity key (lists) and by id (details).
//! Single-threaded interior mutability; the console's event model never
//! touches this from two threads.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use super::context::RequestContext;
use super::normalize::NormalizedList;
use super::record::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListKey {
    pub entity_key: String,
    pub context: RequestContext,
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetailKey {
    pub entity_key: String,
    pub id: RecordId,
}

#[derive(Default)]
pub struct ListCache {
    lists: RefCell<HashMap<ListKey, NormalizedList>>,
    details: RefCell<HashMap<DetailKey, Value>>,
}

impl ListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_list(&self, key: &ListKey) -> Option<NormalizedList> {
        self.lists.borrow().get(key).cloned()
    }

    pub fn put_list(&self, key: ListKey, value: NormalizedList) {
        self.lists.borrow_mut().insert(key, value);
    }

    pub fn get_detail(&self, key: &DetailKey) -> Option<Value> {
        self.details.borrow().get(key).cloned()
    }

    pub fn put_detail(&self, key: DetailKey, value: Value) {
        self.details.borrow_mut().insert(key, value);
    }

    /// Drop every cached list of an entity, whatever context or query it
    /// was fetched under.
    pub fn invalidate_lists(&self, entity_key: &str) {
        self.lists
            .borrow_mut()
            .retain(|key, _| key.entity_key != entity_key);
    }

    pub fn invalidate_detail(&self, entity_key: &str, id: &RecordId) {
        self.details.borrow_mut().remove(&DetailKey {
            entity_key: entity_key.to_string(),
            id: id.clone(),
        });
    }
}
