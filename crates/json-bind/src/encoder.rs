//! Record to JSON text.
//!
//! Field presence per kind:
//!
//! | kind              | Null      | Empty        | Present(v) |
//! |-------------------|-----------|--------------|------------|
//! | required          | omitted   | error        | `v`        |
//! | optional-default  | omitted   | omitted      | `v`        |
//! | optional-nillable | omitted   | `null`       | `v`        |

use serde_json::{Map, Value};

use crate::canonical;
use crate::error::EncodeError;
use crate::schema::{FieldKind, FieldSchema, RecordSchema};
use crate::value::{Record, Slot};

/// Order in which keys are written to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyOrder {
    /// Schema declaration order.
    #[default]
    Declared,
    /// Sorted by key, as most JSON-B style binders do by default.
    Lexicographical,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    order: PropertyOrder,
    pretty: bool,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: PropertyOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn order(&self) -> PropertyOrder {
        self.order
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Builds the JSON object for one record without rendering text.
    ///
    /// A key the schema does not declare is rejected unless its slot is
    /// Null, which is indistinguishable from not setting the key at all.
    pub fn encode_document(
        &self,
        record: &Record,
        schema: &RecordSchema,
    ) -> Result<Map<String, Value>, EncodeError> {
        let undeclared = record
            .iter()
            .find(|(k, slot)| !slot.is_null() && schema.get_field(k).is_none());
        if let Some((name, _)) = undeclared {
            return Err(EncodeError::UnknownField {
                field: name.to_string(),
                schema: schema.name().to_string(),
            });
        }

        let mut fields: Vec<&FieldSchema> = schema.fields().iter().collect();
        if self.order == PropertyOrder::Lexicographical {
            fields.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let mut doc = Map::new();
        for field in fields {
            if let Some(value) = encode_slot(field, record.get(&field.name))? {
                doc.insert(field.name.clone(), value);
            }
        }
        Ok(doc)
    }

    pub fn encode(&self, record: &Record, schema: &RecordSchema) -> Result<String, EncodeError> {
        let doc = Value::Object(self.encode_document(record, schema)?);
        self.to_text(&doc)
    }

    pub fn encode_array(
        &self,
        records: &[Record],
        schema: &RecordSchema,
    ) -> Result<String, EncodeError> {
        let items = records
            .iter()
            .map(|r| self.encode_document(r, schema).map(Value::Object))
            .collect::<Result<Vec<_>, _>>()?;
        self.to_text(&Value::Array(items))
    }

    fn to_text(&self, doc: &Value) -> Result<String, EncodeError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(doc)?
        } else {
            serde_json::to_string(doc)?
        };
        Ok(text)
    }
}

/// Returns `None` when the key must be left out of the document.
fn encode_slot(field: &FieldSchema, slot: &Slot) -> Result<Option<Value>, EncodeError> {
    match (field.kind, slot) {
        (_, Slot::Null) => Ok(None),
        (FieldKind::Required, Slot::Empty) => Err(EncodeError::UnsupportedType {
            field: field.name.clone(),
            reason: "empty optional held by a required field".to_string(),
        }),
        (FieldKind::OptionalDefault, Slot::Empty) => Ok(None),
        (FieldKind::OptionalNillable, Slot::Empty) => Ok(Some(Value::Null)),
        (_, Slot::Present(value)) => canonical::render(&field.type_, value)
            .map(Some)
            .map_err(|reason| EncodeError::UnsupportedType {
                field: field.name.clone(),
                reason,
            }),
    }
}

/// Encodes with declared order and compact output.
pub fn encode(record: &Record, schema: &RecordSchema) -> Result<String, EncodeError> {
    Encoder::new().encode(record, schema)
}

pub fn encode_array(records: &[Record], schema: &RecordSchema) -> Result<String, EncodeError> {
    Encoder::new().encode_array(records, schema)
}
