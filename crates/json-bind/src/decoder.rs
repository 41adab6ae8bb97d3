//! JSON text to record.
//!
//! Missing keys are never an error: a required field becomes `Null`, an
//! optional field becomes `Empty`. An explicit `null` maps the same way.
//! Keys the schema does not declare are ignored.

use serde_json::{Map, Value};

use crate::canonical;
use crate::error::DecodeError;
use crate::schema::{FieldSchema, RecordSchema};
use crate::value::{Record, Slot};

pub fn decode(text: &str, schema: &RecordSchema) -> Result<Record, DecodeError> {
    decode_value(&parse_text(text)?, schema)
}

pub fn decode_array(text: &str, schema: &RecordSchema) -> Result<Vec<Record>, DecodeError> {
    match parse_text(text)? {
        Value::Array(items) => items
            .iter()
            .map(|item| decode_value(item, schema))
            .collect(),
        other => Err(DecodeError::UnexpectedShape {
            expected: "array",
            found: shape_name(&other),
        }),
    }
}

/// Decodes an already parsed JSON value, which must be an object.
pub fn decode_value(value: &Value, schema: &RecordSchema) -> Result<Record, DecodeError> {
    match value {
        Value::Object(doc) => decode_document(doc, schema),
        other => Err(DecodeError::UnexpectedShape {
            expected: "object",
            found: shape_name(other),
        }),
    }
}

pub fn decode_document(
    doc: &Map<String, Value>,
    schema: &RecordSchema,
) -> Result<Record, DecodeError> {
    let mut record = Record::new();
    for field in schema.fields() {
        let slot = decode_slot(field, doc.get(&field.name))?;
        record.set(field.name.clone(), slot);
    }
    Ok(record)
}

fn decode_slot(field: &FieldSchema, raw: Option<&Value>) -> Result<Slot, DecodeError> {
    match raw {
        None | Some(Value::Null) if field.kind.is_optional() => Ok(Slot::Empty),
        None | Some(Value::Null) => Ok(Slot::Null),
        Some(raw) => canonical::parse(&field.type_, raw)
            .map(Slot::Present)
            .ok_or_else(|| DecodeError::MalformedValue {
                field: field.name.clone(),
                raw: raw.to_string(),
            }),
    }
}

fn parse_text(text: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(text).map_err(|e| DecodeError::Syntax(e.to_string()))
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
