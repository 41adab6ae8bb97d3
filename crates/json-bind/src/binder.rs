//! Reusable binding handle.
//!
//! A `Binder` is created once, shared between threads, and closed at
//! shutdown. It holds no per-call state; every operation takes `&self`.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::decoder;
use crate::encoder::{Encoder, PropertyOrder};
use crate::entity::Entity;
use crate::error::BindError;
use crate::schema::RecordSchema;
use crate::value::Record;

#[derive(Debug, Clone, Copy, Default)]
pub struct BinderOptions {
    /// Emit indented JSON.
    pub pretty: bool,
    pub property_order: PropertyOrder,
}

#[derive(Debug)]
pub struct Binder {
    encoder: Encoder,
    closed: AtomicBool,
}

impl Binder {
    pub fn new() -> Self {
        Self::with_options(BinderOptions::default())
    }

    pub fn with_options(opts: BinderOptions) -> Self {
        tracing::debug!(pretty = opts.pretty, order = ?opts.property_order, "binder created");
        Self {
            encoder: Encoder::new()
                .with_order(opts.property_order)
                .with_pretty(opts.pretty),
            closed: AtomicBool::new(false),
        }
    }

    pub fn options(&self) -> BinderOptions {
        BinderOptions {
            pretty: self.encoder.pretty(),
            property_order: self.encoder.order(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Releases the binder. Later calls fail with [`BindError::Closed`].
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!("binder closed");
        }
    }

    fn ensure_open(&self) -> Result<(), BindError> {
        if self.is_closed() {
            return Err(BindError::Closed);
        }
        Ok(())
    }

    pub fn encode(&self, record: &Record, schema: &RecordSchema) -> Result<String, BindError> {
        self.ensure_open()?;
        let text = self.encoder.encode(record, schema).inspect_err(|e| {
            tracing::debug!(schema = schema.name(), error = %e, "encode failed");
        })?;
        tracing::trace!(schema = schema.name(), len = text.len(), "encoded record");
        Ok(text)
    }

    pub fn decode(&self, text: &str, schema: &RecordSchema) -> Result<Record, BindError> {
        self.ensure_open()?;
        let record = decoder::decode(text, schema).inspect_err(|e| {
            tracing::debug!(schema = schema.name(), error = %e, "decode failed");
        })?;
        tracing::trace!(schema = schema.name(), len = text.len(), "decoded record");
        Ok(record)
    }

    pub fn encode_array(
        &self,
        records: &[Record],
        schema: &RecordSchema,
    ) -> Result<String, BindError> {
        self.ensure_open()?;
        let text = self.encoder.encode_array(records, schema).inspect_err(|e| {
            tracing::debug!(schema = schema.name(), error = %e, "array encode failed");
        })?;
        tracing::trace!(schema = schema.name(), count = records.len(), "encoded array");
        Ok(text)
    }

    pub fn decode_array(&self, text: &str, schema: &RecordSchema) -> Result<Vec<Record>, BindError> {
        self.ensure_open()?;
        let records = decoder::decode_array(text, schema).inspect_err(|e| {
            tracing::debug!(schema = schema.name(), error = %e, "array decode failed");
        })?;
        tracing::trace!(schema = schema.name(), count = records.len(), "decoded array");
        Ok(records)
    }

    pub fn to_json<E: Entity>(&self, entity: &E) -> Result<String, BindError> {
        self.encode(&entity.to_record(), &E::schema())
    }

    pub fn from_json<E: Entity>(&self, text: &str) -> Result<E, BindError> {
        E::from_record(&self.decode(text, &E::schema())?)
    }

    pub fn to_json_array<E: Entity>(&self, entities: &[E]) -> Result<String, BindError> {
        let records: Vec<Record> = entities.iter().map(E::to_record).collect();
        self.encode_array(&records, &E::schema())
    }

    pub fn from_json_array<E: Entity>(&self, text: &str) -> Result<Vec<E>, BindError> {
        self.decode_array(text, &E::schema())?
            .iter()
            .map(E::from_record)
            .collect()
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Binder {
    fn drop(&mut self) {
        if !self.is_closed() {
            tracing::debug!("binder dropped without close");
        }
    }
}
