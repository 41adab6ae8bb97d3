//! In-memory record representation.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use indexmap::IndexMap;

use crate::optional::Optional;

/// A populated field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Str(String),
    Date(NaiveDate),
    Instant(DateTime<FixedOffset>),
    /// Enumeration member, by declared name.
    Enum(String),
}

impl FieldValue {
    pub fn enumeration(member: impl Into<String>) -> Self {
        FieldValue::Enum(member.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "str",
            Self::Date(_) => "date",
            Self::Instant(_) => "instant",
            Self::Enum(_) => "enum",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        FieldValue::Instant(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Instant(value.fixed_offset())
    }
}

/// Storage cell of one record field.
///
/// `Null` means the slot holds nothing; `Empty` means it holds an optional
/// wrapper with no value. The two compare unequal even where they encode to
/// the same document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Null,
    Empty,
    Present(FieldValue),
}

impl Slot {
    pub fn present(value: impl Into<FieldValue>) -> Self {
        Slot::Present(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Slot::Null)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn as_present(&self) -> Option<&FieldValue> {
        match self {
            Slot::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Slot for a required field: `None` is Null.
    pub fn from_value<V: Into<FieldValue>>(value: Option<V>) -> Self {
        match value {
            Some(value) => Slot::Present(value.into()),
            None => Slot::Null,
        }
    }

    /// Slot for an optional field: outer `None` is Null, inner Empty is Empty.
    pub fn from_optional<V: Into<FieldValue>>(value: Option<Optional<V>>) -> Self {
        match value {
            None => Slot::Null,
            Some(Optional::Empty) => Slot::Empty,
            Some(Optional::Present(value)) => Slot::Present(value.into()),
        }
    }
}

impl From<FieldValue> for Slot {
    fn from(value: FieldValue) -> Self {
        Slot::Present(value)
    }
}

impl From<Optional<FieldValue>> for Slot {
    fn from(value: Optional<FieldValue>) -> Self {
        match value {
            Optional::Present(value) => Slot::Present(value),
            Optional::Empty => Slot::Empty,
        }
    }
}

static NULL_SLOT: Slot = Slot::Null;

/// Named slots in insertion order.
///
/// Equality is field-wise: a field that was never set reads as `Null`, so a
/// record without `x` equals a record with `x` explicitly set to `Null`.
#[derive(Debug, Clone, Default)]
pub struct Record {
    slots: IndexMap<String, Slot>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, slot: impl Into<Slot>) -> Self {
        self.set(name, slot);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, slot: impl Into<Slot>) {
        self.slots.insert(name.into(), slot.into());
    }

    pub fn get(&self, name: &str) -> &Slot {
        self.slots.get(name).unwrap_or(&NULL_SLOT)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.slots.iter().all(|(k, v)| other.get(k) == v)
            && other.slots.iter().all(|(k, v)| self.get(k) == v)
    }
}

impl Eq for Record {}
