//! Typed entities bound through a [`RecordSchema`].
//!
//! An entity is a plain struct with an explicit constructor. Required fields
//! are held as `Option<T>` (`None` is the Null slot); optional fields as
//! `Option<Optional<T>>`, so Null, Empty and Present stay apart.

mod character;
mod gender;
mod person;

pub use character::Character;
pub use gender::Gender;
pub use person::Person;

use crate::error::BindError;
use crate::optional::Optional;
use crate::schema::RecordSchema;
use crate::value::{FieldValue, Record, Slot};

pub trait Entity: Sized {
    /// Name used in error messages.
    const NAME: &'static str;

    fn schema() -> RecordSchema;

    fn to_record(&self) -> Record;

    fn from_record(record: &Record) -> Result<Self, BindError>;
}

/// Reads a required field slot.
pub(crate) fn required<E, T>(
    record: &Record,
    field: &str,
    extract: impl FnOnce(&FieldValue) -> Option<T>,
) -> Result<Option<T>, BindError>
where
    E: Entity,
{
    match record.get(field) {
        Slot::Null => Ok(None),
        Slot::Empty => Err(mismatch::<E>(field, "empty optional")),
        Slot::Present(value) => extract(value)
            .map(Some)
            .ok_or_else(|| mismatch::<E>(field, value.kind())),
    }
}

/// Reads an optional field slot.
pub(crate) fn optional<E, T>(
    record: &Record,
    field: &str,
    extract: impl FnOnce(&FieldValue) -> Option<T>,
) -> Result<Option<Optional<T>>, BindError>
where
    E: Entity,
{
    match record.get(field) {
        Slot::Null => Ok(None),
        Slot::Empty => Ok(Some(Optional::Empty)),
        Slot::Present(value) => extract(value)
            .map(|v| Some(Optional::Present(v)))
            .ok_or_else(|| mismatch::<E>(field, value.kind())),
    }
}

fn mismatch<E: Entity>(field: &str, found: &str) -> BindError {
    BindError::Entity {
        entity: E::NAME,
        reason: format!("unexpected {found} in field `{field}`"),
    }
}
