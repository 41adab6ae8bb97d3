//! Present-or-empty wrapper for optional fields.
//!
//! `Optional<T>` is the value held by an optional field when the slot itself
//! is populated. A slot that holds nothing at all is modeled one level up
//! (see [`crate::value::Slot`] or an outer `Option`), so the three states
//! Present, Empty and Null never collapse into each other.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional value that is either present or deliberately empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Optional<T> {
    #[default]
    Empty,
    Present(T),
}

impl<T> Optional<T> {
    pub fn of(value: T) -> Self {
        Optional::Present(value)
    }

    pub fn empty() -> Self {
        Optional::Empty
    }

    /// Used as `skip_serializing_if` predicate for fields whose empty state
    /// should be omitted from the document.
    pub fn is_empty(&self) -> bool {
        matches!(self, Optional::Empty)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Empty => Optional::Empty,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Empty => Optional::Empty,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Empty => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}
