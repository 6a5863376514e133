//! List-response normalization.
//!
//! The backend has gone through several envelope conventions: bare arrays,
//! `{items}`, `{data}`, `{data:{items}}`, `{results}`, `{content}`, `{rows}`,
//! `{value}`, and occasionally JSON shipped as a string body. Rather than
//! special-casing endpoints, every list read funnels through
//! [`normalize_list`], which classifies the payload and extracts the item
//! sequence along with diagnostics. Malformed input never errors: the worst
//! case is an empty list carrying warnings.

use std::collections::HashSet;
use std::fmt;

use serde_json::{json, Map, Value};

use crate::shared::api::RawBody;

const MAX_STRING_PREVIEW: usize = 1200;
const MAX_KEYS_PREVIEW: usize = 12;
const MAX_SAMPLE_KEYS: usize = 4;
const MAX_SAMPLE_STRING: usize = 200;

/// Envelope shape a raw payload was classified as.
///
/// The matching order in [`normalize_list`] is part of the contract: an
/// object carrying both `items` and `data` arrays resolves as `ObjItems`,
/// never `ObjData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Nullish,
    Array,
    StringJsonParseFailed,
    StringNonJson,
    ObjItems,
    ObjData,
    ObjDataItems,
    ObjResults,
    ObjContent,
    ObjRows,
    ObjValue,
    SingleObject,
    ObjUnknown,
    Unsupported,
}

impl Pattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Nullish => "nullish",
            Pattern::Array => "array",
            Pattern::StringJsonParseFailed => "string.json.parse-failed",
            Pattern::StringNonJson => "string.non-json",
            Pattern::ObjItems => "obj.items",
            Pattern::ObjData => "obj.data",
            Pattern::ObjDataItems => "obj.data.items",
            Pattern::ObjResults => "obj.results",
            Pattern::ObjContent => "obj.content",
            Pattern::ObjRows => "obj.rows",
            Pattern::ObjValue => "obj.value",
            Pattern::SingleObject => "single.object",
            Pattern::ObjUnknown => "obj.unknown",
            Pattern::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Emit the per-call diagnostic line.
    pub debug: bool,
    /// Treat an unrecognized object as a single-element list instead of
    /// `ObjUnknown`. Used by detail reads against sloppy endpoints.
    pub accept_single_object_as_item: bool,
}

#[derive(Debug, Clone)]
pub struct NormalizeMeta {
    pub entity_key: String,
    pub raw_type: &'static str,
    pub pattern: Pattern,
    pub parsed_json: bool,
    /// Top-level keys of the payload when it was an object.
    pub keys: Option<Vec<String>>,
    pub length: usize,
}

/// Canonical result of a list read. Constructed fresh per call and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct NormalizedList {
    pub items: Vec<Value>,
    pub meta: NormalizeMeta,
    /// Deduplicated, first occurrence wins.
    pub warnings: Vec<String>,
    /// Bounded sample of the input, for diagnostics only, never the full
    /// payload.
    pub raw_preview: Value,
}

fn raw_type_of(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Object(_) => "object",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
    }
}

fn truncate_chars(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let mut out: String = value.chars().take(max).collect();
        out.push('…');
        out
    } else {
        value.to_string()
    }
}

fn sample_value(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Array(items) => Value::String(format!("[Array({})]", items.len())),
        Value::String(s) => Value::String(truncate_chars(s.trim(), MAX_SAMPLE_STRING)),
        Value::Object(_) => Value::String("[Object]".into()),
        other => other.clone(),
    }
}

fn raw_preview(raw: &Value) -> Value {
    match raw {
        Value::String(s) => Value::String(truncate_chars(s.trim(), MAX_STRING_PREVIEW)),
        Value::Array(items) => json!({
            "type": "array",
            "length": items.len(),
            "sample": items.iter().take(2).map(sample_value).collect::<Vec<_>>(),
        }),
        Value::Object(map) => {
            let keys: Vec<&String> = map.keys().collect();
            let mut sample = Map::new();
            for key in keys.iter().take(MAX_SAMPLE_KEYS) {
                sample.insert((*key).clone(), sample_value(&map[key.as_str()]));
            }
            json!({
                "type": "object",
                "keys": keys.iter().take(MAX_KEYS_PREVIEW).collect::<Vec<_>>(),
                "sample": sample,
            })
        }
        other => other.clone(),
    }
}

fn dedupe_warnings(warnings: &mut Vec<String>) {
    let mut seen = HashSet::new();
    warnings.retain(|w| seen.insert(w.clone()));
}

fn log_normalization(result: &NormalizedList) {
    let keys_preview = match &result.meta.keys {
        Some(keys) => keys
            .iter()
            .take(MAX_KEYS_PREVIEW)
            .cloned()
            .collect::<Vec<_>>()
            .join(","),
        None => "null".to_string(),
    };
    let line = format!(
        "[normalize_list] entity={} rawType={} pattern={} parsedJson={} keys={} itemsLen={} warningsCount={}",
        result.meta.entity_key,
        result.meta.raw_type,
        result.meta.pattern,
        result.meta.parsed_json,
        keys_preview,
        result.meta.length,
        result.warnings.len(),
    );

    if result.warnings.is_empty() {
        log::debug!("{line}");
    } else {
        log::warn!("{line}");
        log::warn!("warnings={:?}", result.warnings);
        log::debug!("rawPreview={}", result.raw_preview);
    }
}

fn finalize(mut result: NormalizedList, debug: bool) -> NormalizedList {
    dedupe_warnings(&mut result.warnings);
    result.meta.length = result.items.len();
    if debug {
        log_normalization(&result);
    }
    result
}

/// Normalize a decoded transport body.
pub fn normalize_body(entity_key: &str, body: &RawBody, options: NormalizeOptions) -> NormalizedList {
    let value = match body {
        RawBody::Json(value) => value.clone(),
        RawBody::Text(text) => Value::String(text.clone()),
        RawBody::Empty => Value::Null,
    };
    normalize_list(entity_key, &value, options)
}

/// Classify a raw payload and extract its item list.
///
/// First match wins, in this order: nullish, array, string (JSON-looking
/// strings are decoded and re-normalized), object envelopes in the fixed
/// `items` → `data` → `data.items` → `results` → `content` → `rows` →
/// `value` priority, single-object opt-in, unknown object, unsupported
/// primitive. Never returns an error for any input.
pub fn normalize_list(entity_key: &str, raw: &Value, options: NormalizeOptions) -> NormalizedList {
    let raw_type = raw_type_of(raw);
    let preview = raw_preview(raw);
    let mut warnings: Vec<String> = Vec::new();

    let base_meta = |pattern: Pattern, keys: Option<Vec<String>>| NormalizeMeta {
        entity_key: entity_key.to_string(),
        raw_type,
        pattern,
        parsed_json: false,
        keys,
        length: 0,
    };

    let result = match raw {
        Value::Null => NormalizedList {
            items: Vec::new(),
            meta: base_meta(Pattern::Nullish, None),
            warnings,
            raw_preview: preview,
        },

        Value::Array(items) => NormalizedList {
            items: items.clone(),
            meta: base_meta(Pattern::Array, None),
            warnings,
            raw_preview: preview,
        },

        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.starts_with('[') || trimmed.starts_with('{') {
                match serde_json::from_str::<Value>(trimmed) {
                    Ok(parsed) => {
                        // diagnostics off for the inner pass so the decoded
                        // payload is not logged twice
                        let inner = normalize_list(
                            entity_key,
                            &parsed,
                            NormalizeOptions {
                                debug: false,
                                ..options
                            },
                        );
                        let mut meta = inner.meta;
                        meta.raw_type = raw_type;
                        meta.parsed_json = true;
                        warnings.extend(inner.warnings);
                        NormalizedList {
                            items: inner.items,
                            meta,
                            warnings,
                            raw_preview: preview,
                        }
                    }
                    Err(err) => {
                        warnings.push(format!(
                            "[normalize_list] entity={entity_key} pattern=string.json.parse-failed rawType={raw_type} error={err}"
                        ));
                        NormalizedList {
                            items: Vec::new(),
                            meta: base_meta(Pattern::StringJsonParseFailed, None),
                            warnings,
                            raw_preview: preview,
                        }
                    }
                }
            } else {
                warnings.push(format!(
                    "[normalize_list] entity={entity_key} pattern=string.non-json rawType={raw_type} warning=raw string not json"
                ));
                NormalizedList {
                    items: Vec::new(),
                    meta: base_meta(Pattern::StringNonJson, None),
                    warnings,
                    raw_preview: preview,
                }
            }
        }

        Value::Object(map) => {
            let keys: Vec<String> = map.keys().cloned().collect();
            let envelope = [
                ("items", Pattern::ObjItems),
                ("data", Pattern::ObjData),
            ]
            .iter()
            .find_map(|(key, pattern)| {
                map.get(*key)
                    .and_then(Value::as_array)
                    .map(|items| (items.clone(), *pattern))
            })
            .or_else(|| {
                map.get("data")
                    .and_then(Value::as_object)
                    .and_then(|data| data.get("items"))
                    .and_then(Value::as_array)
                    .map(|items| (items.clone(), Pattern::ObjDataItems))
            })
            .or_else(|| {
                [
                    ("results", Pattern::ObjResults),
                    ("content", Pattern::ObjContent),
                    ("rows", Pattern::ObjRows),
                    ("value", Pattern::ObjValue),
                ]
                .iter()
                .find_map(|(key, pattern)| {
                    map.get(*key)
                        .and_then(Value::as_array)
                        .map(|items| (items.clone(), *pattern))
                })
            });

            match envelope {
                Some((items, pattern)) => NormalizedList {
                    items,
                    meta: base_meta(pattern, Some(keys)),
                    warnings,
                    raw_preview: preview,
                },
                None if options.accept_single_object_as_item => NormalizedList {
                    items: vec![raw.clone()],
                    meta: base_meta(Pattern::SingleObject, Some(keys)),
                    warnings,
                    raw_preview: preview,
                },
                None => {
                    warnings.push(format!(
                        "[normalize_list] entity={entity_key} pattern=obj.unknown rawType={raw_type} keys={}",
                        keys.join(",")
                    ));
                    NormalizedList {
                        items: Vec::new(),
                        meta: base_meta(Pattern::ObjUnknown, Some(keys)),
                        warnings,
                        raw_preview: preview,
                    }
                }
            }
        }

        _ => {
            warnings.push(format!(
                "[normalize_list] entity={entity_key} pattern=unsupported rawType={raw_type} warning=unsupported raw type"
            ));
            NormalizedList {
                items: Vec::new(),
                meta: base_meta(Pattern::Unsupported, None),
                warnings,
                raw_preview: preview,
            }
        }
    };

    finalize(result, options.debug)
}
