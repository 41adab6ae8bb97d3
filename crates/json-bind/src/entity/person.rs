use chrono::{DateTime, FixedOffset, NaiveDate};

use super::{optional, required, Entity, Gender};
use crate::error::BindError;
use crate::optional::Optional;
use crate::schema::{RecordSchema, ValueType};
use crate::value::{FieldValue, Record, Slot};

/// A business entity with two kinds of date.
///
/// `wedding_date` is nillable: an empty optional is written as `null` so it
/// survives a round trip as Empty rather than coming back as missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub wedding_date: Option<Optional<DateTime<FixedOffset>>>,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        gender: Gender,
        birth_date: Option<NaiveDate>,
        wedding_date: Optional<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            gender: Some(gender),
            birth_date,
            wedding_date: Some(wedding_date),
        }
    }
}

impl Entity for Person {
    const NAME: &'static str = "Person";

    fn schema() -> RecordSchema {
        RecordSchema::new(Self::NAME)
            .prop("name", ValueType::Str)
            .prop("gender", Gender::value_type())
            .prop("birthDate", ValueType::Date)
            .nillable("weddingDate", ValueType::Instant)
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("name", Slot::from_value(self.name.clone()))
            .with(
                "gender",
                Slot::from_value(self.gender.map(|g| FieldValue::enumeration(g.name()))),
            )
            .with("birthDate", Slot::from_value(self.birth_date))
            .with("weddingDate", Slot::from_optional(self.wedding_date))
    }

    fn from_record(record: &Record) -> Result<Self, BindError> {
        Ok(Self {
            name: required::<Self, _>(record, "name", |v| match v {
                FieldValue::Str(s) => Some(s.clone()),
                _ => None,
            })?,
            gender: required::<Self, _>(record, "gender", |v| match v {
                FieldValue::Enum(name) => Gender::from_name(name),
                _ => None,
            })?,
            birth_date: required::<Self, _>(record, "birthDate", |v| match v {
                FieldValue::Date(d) => Some(*d),
                _ => None,
            })?,
            wedding_date: optional::<Self, _>(record, "weddingDate", |v| match v {
                FieldValue::Instant(t) => Some(*t),
                _ => None,
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_mapping() {
        let birth = NaiveDate::from_ymd_opt(1992, 10, 9).unwrap();
        let paul = Person::new("Paul", Gender::Male, Some(birth), Optional::Empty);
        let record = paul.to_record();
        assert_eq!(record.get("gender"), &Slot::present(FieldValue::enumeration("MALE")));
        assert_eq!(record.get("weddingDate"), &Slot::Empty);
        assert_eq!(Person::from_record(&record).unwrap(), paul);
    }

    #[test]
    fn test_default_person_is_all_null() {
        let record = Person::default().to_record();
        assert!(record.iter().all(|(_, slot)| slot.is_null()));
        assert_eq!(Person::from_record(&record).unwrap(), Person::default());
    }

    #[test]
    fn test_type_mismatch() {
        let record = Record::new().with("birthDate", Slot::present("1971-05-28"));
        let err = Person::from_record(&record).unwrap_err();
        assert!(matches!(err, BindError::Entity { entity: "Person", .. }));

        let record = Record::new().with("name", Slot::Empty);
        assert!(Person::from_record(&record).is_err());
    }
}
