use chrono::NaiveDate;

use super::{optional, required, Entity};
use crate::error::BindError;
use crate::optional::Optional;
use crate::schema::{RecordSchema, ValueType};
use crate::value::{FieldValue, Record, Slot};

/// Two-field entity whose nillable optional holds a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Character {
    pub name: Option<String>,
    pub wedding_date: Option<Optional<NaiveDate>>,
}

impl Character {
    pub fn new(name: impl Into<String>, wedding_date: Optional<NaiveDate>) -> Self {
        Self {
            name: Some(name.into()),
            wedding_date: Some(wedding_date),
        }
    }
}

impl Entity for Character {
    const NAME: &'static str = "Character";

    fn schema() -> RecordSchema {
        RecordSchema::new(Self::NAME)
            .prop("name", ValueType::Str)
            .nillable("weddingDate", ValueType::Date)
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("name", Slot::from_value(self.name.clone()))
            .with("weddingDate", Slot::from_optional(self.wedding_date))
    }

    fn from_record(record: &Record) -> Result<Self, BindError> {
        Ok(Self {
            name: required::<Self, _>(record, "name", |v| match v {
                FieldValue::Str(s) => Some(s.clone()),
                _ => None,
            })?,
            wedding_date: optional::<Self, _>(record, "weddingDate", |v| match v {
                FieldValue::Date(d) => Some(*d),
                _ => None,
            })?,
        })
    }
}
