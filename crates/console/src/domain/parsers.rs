//! Field value parsers: raw form value in, payload value out, `None`
//! meaning "omit the field".

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

/// Numbers pass through; numeric strings are coerced (integers stay
/// integers); everything else is omitted.
pub fn parse_number(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) => Some(Value::Number(n.clone())),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            if let Ok(n) = trimmed.parse::<i64>() {
                return Some(Value::from(n));
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
        }
        _ => None,
    }
}

/// Date inputs arrive either as `YYYY-MM-DD` (the date widget) or already
/// RFC 3339; both normalize to an UTC RFC 3339 timestamp.
pub fn parse_date(value: &Value) -> Option<Value> {
    let raw = value.as_str()?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(Value::String(parsed.with_timezone(&Utc).to_rfc3339()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Some(Value::String(Utc.from_utc_datetime(&naive).to_rfc3339()));
        }
    }
    None
}

/// Multi-relation values: keep non-empty arrays, omit everything else.
pub fn parse_id_list(value: &Value) -> Option<Value> {
    match value {
        Value::Array(items) if !items.is_empty() => Some(value.clone()),
        _ => None,
    }
}

fn split_roles(value: &Value) -> Vec<Value> {
    match value {
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(|role| Value::String(role.to_string()))
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter(|item| item.as_str().map(|s| !s.trim().is_empty()).unwrap_or(false))
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

/// Comma-separated role list, always emitted (create form).
pub fn parse_roles(value: &Value) -> Option<Value> {
    Some(Value::Array(split_roles(value)))
}

/// Comma-separated role list, omitted when empty (edit form leaves roles
/// untouched).
pub fn parse_roles_optional(value: &Value) -> Option<Value> {
    let roles = split_roles(value);
    if roles.is_empty() {
        None
    } else {
        Some(Value::Array(roles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_coerce_from_strings() {
        assert_eq!(parse_number(&json!("42")), Some(json!(42)));
        assert_eq!(parse_number(&json!("2.5")), Some(json!(2.5)));
        assert_eq!(parse_number(&json!(7)), Some(json!(7)));
        assert_eq!(parse_number(&json!("")), None);
        assert_eq!(parse_number(&json!("abc")), None);
        assert_eq!(parse_number(&Value::Null), None);
    }

    #[test]
    fn dates_normalize_to_rfc3339_utc() {
        let parsed = parse_date(&json!("2024-03-01")).unwrap();
        assert_eq!(parsed, json!("2024-03-01T00:00:00+00:00"));

        let already = parse_date(&json!("2024-03-01T10:30:00+02:00")).unwrap();
        assert_eq!(already, json!("2024-03-01T08:30:00+00:00"));

        assert_eq!(parse_date(&json!("")), None);
        assert_eq!(parse_date(&json!("01/03/2024")), None);
    }

    #[test]
    fn id_lists_drop_when_empty() {
        assert_eq!(parse_id_list(&json!([1, 2])), Some(json!([1, 2])));
        assert_eq!(parse_id_list(&json!([])), None);
        assert_eq!(parse_id_list(&json!("x")), None);
    }

    #[test]
    fn roles_split_on_commas_and_trim() {
        assert_eq!(
            parse_roles(&json!("ADMIN, USER ,")),
            Some(json!(["ADMIN", "USER"]))
        );
        assert_eq!(parse_roles(&json!("")), Some(json!([])));
        assert_eq!(parse_roles_optional(&json!("")), None);
        assert_eq!(
            parse_roles_optional(&json!(["ADMIN"])),
            Some(json!(["ADMIN"]))
        );
    }
}
