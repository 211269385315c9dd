//! serde_json <-> Value conversion utilities
//!
//! Drivers usually accept filters as JSON. Plain JSON types map across
//! directly; decimals and regex literals use the extended-JSON wrappers
//! `{"$numberDecimal": "..."}` and
//! `{"$regularExpression": {"pattern": "...", "options": "..."}}`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, json};

use crate::{
    error::{QueryError, Result},
    pattern::Pattern,
    value::{Document, Value},
};

const NUMBER_DECIMAL: &str = "$numberDecimal";
const REGULAR_EXPRESSION: &str = "$regularExpression";

/// Convert a Value to serde_json::Value
pub fn to_json_value(v: &Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => match serde_json::Number::from_f64(*f) {
            Some(n) => serde_json::Value::Number(n),
            None => {
                log::trace!("non-finite float {} rendered as null", f);
                serde_json::Value::Null
            }
        },
        Value::Decimal(d) => json!({ NUMBER_DECIMAL: d.to_string() }),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Regex(p) => json!({
            REGULAR_EXPRESSION: { "pattern": p.source(), "options": p.options() }
        }),
        Value::Array(arr) => serde_json::Value::Array(arr.iter().map(to_json_value).collect()),
        Value::Object(doc) => serde_json::Value::Object(document_to_map(doc)),
    }
}

/// Convert a Document to a JSON object, keeping key order
pub fn document_to_json(doc: &Document) -> serde_json::Value {
    serde_json::Value::Object(document_to_map(doc))
}

fn document_to_map(doc: &Document) -> Map<String, serde_json::Value> {
    doc.iter()
        .map(|(k, v)| (k.clone(), to_json_value(v)))
        .collect()
}

/// Convert serde_json::Value to Value
///
/// Objects shaped like the extended-JSON decimal and regex wrappers come
/// back as [`Value::Decimal`] and [`Value::Regex`]. Anything else that
/// looks similar but does not parse is kept as an ordinary object.
pub fn from_json_value(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            // u64 beyond i64::MAX also lands here
            None => n.as_f64().map_or(Value::Null, Value::Float),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::Array(arr.into_iter().map(from_json_value).collect())
        }
        serde_json::Value::Object(obj) => {
            if let Some(special) = extended(&obj) {
                return special;
            }
            Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, from_json_value(v)))
                    .collect(),
            )
        }
    }
}

fn extended(obj: &Map<String, serde_json::Value>) -> Option<Value> {
    if obj.len() != 1 {
        return None;
    }
    if let Some(text) = obj.get(NUMBER_DECIMAL).and_then(|v| v.as_str()) {
        return Decimal::from_str(text).ok().map(Value::Decimal);
    }
    let inner = obj.get(REGULAR_EXPRESSION)?.as_object()?;
    let source = inner.get("pattern")?.as_str()?;
    let options = inner.get("options").and_then(|o| o.as_str()).unwrap_or("");
    Some(Value::Regex(Pattern::with_options(source, options)))
}

/// Convert a JSON object into a Document
pub fn document_from_json(v: serde_json::Value) -> Result<Document> {
    match from_json_value(v) {
        Value::Object(doc) => Ok(doc),
        other => Err(QueryError::NotADocument(other.type_name())),
    }
}

/// Parse JSON text into a Document
pub fn parse_document(text: &str) -> Result<Document> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    document_from_json(json)
}
