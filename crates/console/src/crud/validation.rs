//! Form validation and payload preparation, driven by the entity's field
//! definitions.
//!
//! Validation runs on the raw form values (numeric strings count as
//! numbers, the way the widgets deliver them); preparation then applies
//! each field's parser and drops everything hidden in the current mode.

use serde_json::{Map, Value};

use super::error::FieldViolation;
use crate::shared::data::schema::{FieldDef, FieldKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

fn visible(field: &FieldDef, mode: FormMode) -> bool {
    match mode {
        FormMode::Create => !field.hide_on_create,
        FormMode::Edit => !field.hide_on_edit,
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

fn as_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn missing_message(field: &FieldDef) -> &'static str {
    match field.kind {
        FieldKind::Number => "Valore numerico obbligatorio",
        FieldKind::Date => "Data obbligatoria",
        FieldKind::Enum => "Seleziona un valore valido",
        FieldKind::Relation if field.multiple => "Seleziona almeno un valore",
        FieldKind::Relation => "Seleziona un valore valido",
        _ => "Campo obbligatorio",
    }
}

fn check_present(field: &FieldDef, value: &Value) -> Option<&'static str> {
    match field.kind {
        FieldKind::Number => {
            let Some(numeric) = as_numeric(value) else {
                return Some("Valore numerico non valido");
            };
            if let Some(min) = field.min {
                if numeric < min {
                    return Some("Valore sotto il minimo");
                }
            }
            if let Some(max) = field.max {
                if numeric > max {
                    return Some("Valore sopra il massimo");
                }
            }
            None
        }
        FieldKind::Boolean => (!value.is_boolean()).then_some("Valore non valido"),
        FieldKind::Date => (!value.is_string()).then_some("Data non valida"),
        FieldKind::Enum => {
            let allowed = field
                .options
                .as_ref()
                .map(|options| options.iter().any(|option| option.value == *value))
                .unwrap_or(false);
            (!allowed).then_some("Seleziona un valore valido")
        }
        FieldKind::Relation if field.multiple => match value {
            Value::Array(items) if !items.is_empty() => None,
            Value::Array(_) if !field.required => None,
            _ => Some("Seleziona almeno un valore"),
        },
        FieldKind::Relation => {
            (!(value.is_number() || value.is_string())).then_some("Seleziona un valore valido")
        }
        FieldKind::String => (!value.is_string()).then_some("Valore non valido"),
    }
}

/// Check the raw form values against the fields visible in `mode`,
/// returning every violation.
pub fn validate(
    fields: &[FieldDef],
    input: &Map<String, Value>,
    mode: FormMode,
) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    for field in fields.iter().filter(|f| visible(f, mode)) {
        let value = input.get(field.name.as_ref());

        if is_blank(value) {
            if field.required {
                violations.push(FieldViolation {
                    field: field.name.to_string(),
                    message: missing_message(field).to_string(),
                });
            }
            continue;
        }

        if let Some(message) = value.and_then(|value| check_present(field, value)) {
            violations.push(FieldViolation {
                field: field.name.to_string(),
                message: message.to_string(),
            });
        }
    }

    violations
}

/// Build the request payload: visible fields only, each run through its
/// parser (`None` omits the field), unparsed values passed through as-is.
pub fn prepare_payload(
    fields: &[FieldDef],
    input: &Map<String, Value>,
    mode: FormMode,
) -> Map<String, Value> {
    let mut payload = Map::new();

    for field in fields.iter().filter(|f| visible(f, mode)) {
        let Some(raw) = input.get(field.name.as_ref()) else {
            continue;
        };
        let parsed = match field.parse {
            Some(parse) => parse(raw),
            None if raw.is_null() => None,
            None => Some(raw.clone()),
        };
        if let Some(value) = parsed {
            payload.insert(field.name.to_string(), value);
        }
    }

    payload
}
