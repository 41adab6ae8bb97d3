//! `json-bind`: JSON data binding for flat records.
//!
//! Each field of a [`RecordSchema`] carries a presence policy that decides
//! how a missing value, an empty optional and a present value look on the
//! wire:
//!
//! - `required`: written when present, omitted when Null.
//! - `optional-default`: omitted when Empty.
//! - `optional-nillable`: written as `null` when Empty.
//!
//! A Null slot is always omitted. On read, a missing key or `null` becomes
//! Null for required fields and Empty for optional ones; a missing required
//! field is not an error.
//!
//! # Example
//!
//! ```
//! use json_bind::{decode, encode, Record, RecordSchema, Slot, ValueType};
//!
//! let schema = RecordSchema::new("Character")
//!     .prop("name", ValueType::Str)
//!     .nillable("weddingDate", ValueType::Date);
//!
//! let jim = Record::new()
//!     .with("name", Slot::present("Jim"))
//!     .with("weddingDate", Slot::Empty);
//!
//! let text = encode(&jim, &schema).unwrap();
//! assert_eq!(text, r#"{"name":"Jim","weddingDate":null}"#);
//! assert_eq!(decode(&text, &schema).unwrap(), jim);
//! ```

pub mod binder;
pub mod canonical;
pub mod decoder;
pub mod encoder;
pub mod entity;
pub mod error;
pub mod optional;
pub mod schema;
pub mod value;

pub use binder::{Binder, BinderOptions};
pub use decoder::{decode, decode_array};
pub use encoder::{encode, encode_array, Encoder, PropertyOrder};
pub use entity::{Character, Entity, Gender, Person};
pub use error::{BindError, DecodeError, EncodeError};
pub use optional::Optional;
pub use schema::{EnumType, FieldKind, FieldSchema, RecordSchema, ValueType};
pub use value::{FieldValue, Record, Slot};
