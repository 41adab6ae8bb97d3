//! Record schema: the declarative field table both encoder and decoder consult.

/// Presence policy of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Always serialized unless the slot is Null.
    Required,
    /// Empty optionals are omitted from the document.
    OptionalDefault,
    /// Empty optionals are written as an explicit `null`.
    OptionalNillable,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::OptionalDefault => "optional-default",
            Self::OptionalNillable => "optional-nillable",
        }
    }

    pub fn is_optional(self) -> bool {
        !matches!(self, Self::Required)
    }
}

/// Enumeration type with its declared member names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<String>,
}

impl EnumType {
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_member(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }
}

/// Semantic type of a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    Str,
    /// Calendar date without a time component.
    Date,
    /// Point in time with an explicit offset.
    Instant,
    Enum(EnumType),
}

impl ValueType {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Date => "date",
            Self::Instant => "instant",
            Self::Enum(_) => "enum",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: String,
    pub kind: FieldKind,
    pub type_: ValueType,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, kind: FieldKind, type_: ValueType) -> Self {
        Self {
            name: name.into(),
            kind,
            type_,
        }
    }
}

/// Ordered list of fields describing one record shape.
///
/// ```
/// use json_bind::schema::{FieldKind, RecordSchema, ValueType};
///
/// let schema = RecordSchema::new("Character")
///     .prop("name", ValueType::Str)
///     .nillable("weddingDate", ValueType::Date);
///
/// assert_eq!(schema.fields().len(), 2);
/// assert_eq!(
///     schema.get_field("weddingDate").map(|f| f.kind),
///     Some(FieldKind::OptionalNillable)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldSchema>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Adds a field, replacing any previous declaration with the same name
    /// in place so declared order stays stable.
    pub fn field(mut self, field: FieldSchema) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn prop(self, name: impl Into<String>, type_: ValueType) -> Self {
        self.field(FieldSchema::new(name, FieldKind::Required, type_))
    }

    pub fn opt(self, name: impl Into<String>, type_: ValueType) -> Self {
        self.field(FieldSchema::new(name, FieldKind::OptionalDefault, type_))
    }

    pub fn nillable(self, name: impl Into<String>, type_: ValueType) -> Self {
        self.field(FieldSchema::new(name, FieldKind::OptionalNillable, type_))
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}
