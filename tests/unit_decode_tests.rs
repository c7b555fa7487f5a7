mod common;

use common::{at, decision_line, load_line, make_load};
use rust_decimal_macros::dec;
use velocity_limits::error::LoadError;
use velocity_limits::models::{parse_amount, Load, LoadDecision, LoadKey};

#[test]
fn test_decode_well_formed_record() {
    let line = r#"{"id": "1234","customer_id": "2345","load_amount": "$123.45","time": "2018-01-01T00:00:00Z"}"#;

    let load = Load::from_json(line).unwrap();

    assert_eq!(
        load,
        make_load("1234", "2345", dec!(123.45), at(2018, 1, 1, 0, 0, 0))
    );
}

#[test]
fn test_decode_converts_offset_to_utc() {
    let line = r#"{"id":"1","customer_id":"1","load_amount":"$1.00","time":"2018-01-01T02:00:00+02:00"}"#;

    let load = Load::from_json(line).unwrap();

    assert_eq!(load.time, at(2018, 1, 1, 0, 0, 0));
}

#[test]
fn test_malformed_amount_is_amount_format_error() {
    let line = r#"{"id": "1234","customer_id": "2345","load_amount": "AAAAAAAAAA","time": "2018-01-01T00:00:00Z"}"#;

    let err = Load::from_json(line).unwrap_err();

    assert!(matches!(err, LoadError::AmountFormat { ref literal } if literal == "AAAAAAAAAA"));
    assert!(err.is_decode());
}

#[test]
fn test_amount_without_prefix_rejected() {
    assert!(matches!(
        parse_amount("123.45"),
        Err(LoadError::AmountFormat { .. })
    ));
}

#[test]
fn test_amount_with_other_currency_rejected() {
    assert!(parse_amount("€123.45").is_err());
}

#[test]
fn test_amount_with_trailing_characters_rejected() {
    assert!(parse_amount("$123.45 ").is_err());
    assert!(parse_amount("$123.45USD").is_err());
}

#[test]
fn test_negative_amount_rejected() {
    assert!(parse_amount("$-5.00").is_err());
}

#[test]
fn test_empty_amount_rejected() {
    assert!(parse_amount("$").is_err());
    assert!(parse_amount("").is_err());
    assert!(parse_amount("$.").is_err());
}

#[test]
fn test_amount_variants_parse() {
    assert_eq!(parse_amount("$0.00").unwrap(), dec!(0));
    assert_eq!(parse_amount("$5000").unwrap(), dec!(5000));
    assert_eq!(parse_amount("$3318.47").unwrap(), dec!(3318.47));
}

#[test]
fn test_numeric_amount_is_generic_decode_error() {
    let line = r#"{"id":"1","customer_id":"1","load_amount":123.45,"time":"2018-01-01T00:00:00Z"}"#;

    let err = Load::from_json(line).unwrap_err();

    assert!(matches!(err, LoadError::Decode(_)));
}

#[test]
fn test_missing_field_is_decode_error() {
    let line = r#"{"id":"1","load_amount":"$1.00","time":"2018-01-01T00:00:00Z"}"#;

    assert!(matches!(
        Load::from_json(line).unwrap_err(),
        LoadError::Decode(_)
    ));
}

#[test]
fn test_bad_timestamp_is_decode_error() {
    let line = r#"{"id":"1","customer_id":"1","load_amount":"$1.00","time":"yesterday"}"#;

    assert!(matches!(
        Load::from_json(line).unwrap_err(),
        LoadError::Decode(_)
    ));
}

#[test]
fn test_not_json_is_decode_error() {
    let err = Load::from_json("anerrorinjson").unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn test_load_key_pairs_load_and_customer() {
    let load = make_load("7", "42", dec!(1), at(2018, 1, 1, 0, 0, 0));

    assert_eq!(
        load.key(),
        LoadKey {
            load_id: "7".to_string(),
            customer_id: "42".to_string(),
        }
    );
}

#[test]
fn test_decision_encoding_field_order() {
    let load = make_load("1234", "2345", dec!(123.45), at(2018, 1, 1, 0, 0, 0));

    let encoded = LoadDecision::new(&load, true).to_json().unwrap();

    assert_eq!(encoded, r#"{"id":"1234","customer_id":"2345","accepted":true}"#);
}

#[test]
fn test_load_line_helper_decodes() {
    let line = load_line("1", "2", "$3.00", "2000-01-01T10:00:00Z");
    let load = Load::from_json(&line).unwrap();
    assert_eq!(load, make_load("1", "2", dec!(3.00), at(2000, 1, 1, 10, 0, 0)));
}

#[test]
fn test_decision_line_helper_matches_encoding() {
    let load = make_load("1", "2", dec!(1), at(2000, 1, 1, 10, 0, 0));
    assert_eq!(
        LoadDecision::new(&load, false).to_json().unwrap(),
        decision_line("1", "2", false)
    );
}

#[test]
fn test_huge_amount_still_decodes() {
    assert_eq!(
        parse_amount("$79228162514264337593543950335").unwrap(),
        rust_decimal::Decimal::MAX
    );
}
