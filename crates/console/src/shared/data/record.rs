//! Helpers over the opaque records the normalizer hands back.

use std::fmt;

use serde_json::Value;

use super::schema::ColumnDef;

/// Identity of a record. Most of the backend keys records with integer
/// `id`s; some legacy tables still expose `_id` or a `Codice` business key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    pub fn from_value(value: &Value) -> Option<RecordId> {
        match value {
            Value::Number(n) => n.as_i64().map(RecordId::Int),
            Value::String(s) if !s.trim().is_empty() => Some(RecordId::Text(s.trim().to_string())),
            _ => None,
        }
    }

    /// Parse a route segment: decimal integers become `Int`, anything else
    /// non-empty becomes `Text`.
    pub fn parse(segment: &str) -> Option<RecordId> {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Some(RecordId::Int(n)),
            Err(_) => Some(RecordId::Text(trimmed.to_string())),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Extract a record's identity, trying the entity's configured id field
/// first and then the legacy fallbacks in order: `id`, `_id`, `Codice`.
///
/// The fallbacks track tables the backend never migrated; drop them only
/// once the backend contract is confirmed simplified.
pub fn record_id(record: &Value, id_field: &str) -> Option<RecordId> {
    let obj = record.as_object()?;
    for key in [id_field, "id", "_id", "Codice"] {
        if let Some(id) = obj.get(key).and_then(RecordId::from_value) {
            return Some(id);
        }
    }
    None
}

/// Client-side list filtering: case-insensitive substring match over the
/// entity's string-valued columns. Non-string cells never match.
pub fn filter_items(columns: &[ColumnDef], items: &[Value], query: &str) -> Vec<Value> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            columns.iter().any(|column| {
                item.get(column.key.as_ref())
                    .and_then(Value::as_str)
                    .map(|cell| cell.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_field_then_fallback_chain() {
        assert_eq!(record_id(&json!({"id": 7}), "id"), Some(RecordId::Int(7)));
        assert_eq!(record_id(&json!({"_id": 3}), "id"), Some(RecordId::Int(3)));
        assert_eq!(
            record_id(&json!({"Codice": "H225"}), "id"),
            Some(RecordId::Text("H225".into()))
        );
        assert_eq!(record_id(&json!({}), "id"), None);
    }

    #[test]
    fn custom_id_field_takes_precedence() {
        let record = json!({"codice": "W-01", "id": 9});
        assert_eq!(
            record_id(&record, "codice"),
            Some(RecordId::Text("W-01".into()))
        );
    }

    #[test]
    fn blank_or_non_scalar_ids_are_skipped() {
        assert_eq!(record_id(&json!({"id": "  "}), "id"), None);
        assert_eq!(
            record_id(&json!({"id": [1], "_id": 4}), "id"),
            Some(RecordId::Int(4))
        );
    }

    #[test]
    fn parses_route_segments() {
        assert_eq!(RecordId::parse("42"), Some(RecordId::Int(42)));
        assert_eq!(RecordId::parse("H225"), Some(RecordId::Text("H225".into())));
        assert_eq!(RecordId::parse("  "), None);
    }

    #[test]
    fn filter_matches_string_columns_case_insensitively() {
        let columns = vec![
            ColumnDef::new("nome", "Nome"),
            ColumnDef::new("note", "Note"),
        ];
        let items = vec![
            json!({"id": 1, "nome": "Officina Nord", "note": "turno A"}),
            json!({"id": 2, "nome": "Magazzino", "note": null}),
        ];
        let hits = filter_items(&columns, &items, "NORD");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["id"], json!(1));
    }

    #[test]
    fn filter_ignores_non_string_cells_and_blank_queries() {
        let columns = vec![ColumnDef::new("id", "ID")];
        let items = vec![json!({"id": 12})];
        assert!(filter_items(&columns, &items, "12").is_empty());
        assert_eq!(filter_items(&columns, &items, "   ").len(), 1);
    }
}
