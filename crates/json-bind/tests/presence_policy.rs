use chrono::NaiveDate;
use json_bind::{
    decode, decode_array, encode, encode_array, DecodeError, EnumType, FieldValue, Record,
    RecordSchema, Slot, ValueType,
};
use serde_json::{json, Value};

fn schema() -> RecordSchema {
    RecordSchema::new("Member")
        .prop("name", ValueType::Str)
        .prop(
            "tier",
            ValueType::Enum(EnumType::new("Tier", ["GOLD", "SILVER"])),
        )
        .opt("nickname", ValueType::Str)
        .opt("leftOn", ValueType::Date)
        .nillable("joinedOn", ValueType::Date)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn full() -> Record {
    Record::new()
        .with("name", Slot::present("Ada"))
        .with("tier", Slot::present(FieldValue::enumeration("GOLD")))
        .with("nickname", Slot::present("ada"))
        .with("leftOn", Slot::present(date(2020, 1, 31)))
        .with("joinedOn", Slot::present(date(2010, 6, 1)))
}

fn doc(text: &str) -> Value {
    serde_json::from_str(text).expect("valid json")
}

#[test]
fn all_present_record_round_trips() {
    let record = full();
    let text = encode(&record, &schema()).expect("encode");
    assert_eq!(
        doc(&text),
        json!({
            "name": "Ada",
            "tier": "GOLD",
            "nickname": "ada",
            "leftOn": "2020-01-31",
            "joinedOn": "2010-06-01"
        })
    );
    assert_eq!(decode(&text, &schema()).expect("decode"), record);
}

#[test]
fn empty_default_optional_is_omitted_and_decodes_empty() {
    let record = full().with("nickname", Slot::Empty);
    let text = encode(&record, &schema()).expect("encode");
    assert!(doc(&text).get("nickname").is_none(), "{text}");

    let decoded = decode(&text, &schema()).expect("decode");
    assert_eq!(decoded.get("nickname"), &Slot::Empty);
    assert_eq!(decoded, record);
}

#[test]
fn empty_nillable_optional_is_null_and_decodes_empty() {
    let record = full().with("joinedOn", Slot::Empty);
    let text = encode(&record, &schema()).expect("encode");
    assert_eq!(doc(&text).get("joinedOn"), Some(&Value::Null));

    let decoded = decode(&text, &schema()).expect("decode");
    assert_eq!(decoded.get("joinedOn"), &Slot::Empty);
    assert_eq!(decoded, record);
}

#[test]
fn null_required_field_is_omitted_and_decodes_null() {
    let record = full().with("name", Slot::Null);
    let text = encode(&record, &schema()).expect("encode");
    assert!(doc(&text).get("name").is_none(), "{text}");

    let decoded = decode(&text, &schema()).expect("decode");
    assert_eq!(decoded.get("name"), &Slot::Null);
    assert_eq!(decoded, record);
}

#[test]
fn missing_required_fields_are_not_an_error() {
    let decoded = decode("{}", &schema()).expect("decode");
    assert_eq!(decoded.get("name"), &Slot::Null);
    assert_eq!(decoded.get("tier"), &Slot::Null);
    assert_eq!(decoded.get("nickname"), &Slot::Empty);
    assert_eq!(decoded.get("leftOn"), &Slot::Empty);
    assert_eq!(decoded.get("joinedOn"), &Slot::Empty);
}

#[test]
fn null_slot_in_nillable_field_is_omitted() {
    let record = full().with("joinedOn", Slot::Null);
    let text = encode(&record, &schema()).expect("encode");
    assert!(doc(&text).get("joinedOn").is_none(), "{text}");

    // Reads back as Empty: the Null slot does not survive a round trip.
    let decoded = decode(&text, &schema()).expect("decode");
    assert_eq!(decoded.get("joinedOn"), &Slot::Empty);
    assert_ne!(decoded, record);
}

#[test]
fn empty_and_null_default_optionals_share_a_document_but_differ_as_records() {
    let empty = full().with("leftOn", Slot::Empty);
    let null = full().with("leftOn", Slot::Null);

    let empty_text = encode(&empty, &schema()).expect("encode");
    let null_text = encode(&null, &schema()).expect("encode");
    assert_eq!(empty_text, null_text);
    assert_ne!(empty, null);

    let decoded = decode(&null_text, &schema()).expect("decode");
    assert_eq!(decoded, empty);
    assert_ne!(decoded, null);
}

#[test]
fn document_is_stable_across_a_second_round_trip() {
    let records = [
        full(),
        full().with("nickname", Slot::Empty).with("joinedOn", Slot::Empty),
        full().with("name", Slot::Null).with("leftOn", Slot::Null),
        Record::new().with("joinedOn", Slot::Empty),
    ];
    for record in records {
        let first = encode(&record, &schema()).expect("encode");
        let again = encode(&decode(&first, &schema()).expect("decode"), &schema()).expect("encode");
        assert_eq!(again, first);
    }
}

#[test]
fn null_nillable_slot_gains_explicit_null_on_second_encoding() {
    let record = full().with("joinedOn", Slot::Null);
    let first = encode(&record, &schema()).expect("encode");
    let second = encode(&decode(&first, &schema()).expect("decode"), &schema()).expect("encode");
    assert!(doc(&first).get("joinedOn").is_none(), "{first}");
    assert_eq!(doc(&second).get("joinedOn"), Some(&Value::Null));

    let third = encode(&decode(&second, &schema()).expect("decode"), &schema()).expect("encode");
    assert_eq!(third, second);
}

#[test]
fn array_round_trip_keeps_length_and_order() {
    let records = vec![
        full(),
        full().with("joinedOn", Slot::Empty),
        full().with("name", Slot::Null),
    ];
    let text = encode_array(&records, &schema()).expect("encode");
    let decoded = decode_array(&text, &schema()).expect("decode");
    assert_eq!(decoded.len(), records.len());
    assert_eq!(decoded, records);
}

#[test]
fn decode_failure_names_field_and_raw_text() {
    let err = decode(r#"{"leftOn":"2020-02-30"}"#, &schema()).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MalformedValue {
            field: "leftOn".to_string(),
            raw: "\"2020-02-30\"".to_string(),
        }
    );

    let err = decode(r#"[{"name":"a"},{"tier":"BRONZE"}]"#, &schema());
    assert!(err.is_err());
    let err = decode_array(r#"[{"name":"a"},{"tier":"BRONZE"}]"#, &schema()).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedValue { ref field, .. } if field == "tier"));
}
