//! Integration tests for api_facades crate
//!
//! These tests verify the facade re-exports work together end-to-end.

use api_facades::*;

#[test]
fn test_facade_types_interoperate() {
    let custom = SymbolTable::new("0123456789abcdefghijklmnopqrstuvwxyz").unwrap();
    let value = NumericValue::from_native(35u64, Some(&custom)).unwrap();
    assert_eq!(value.to_string(), "z");

    let hex = value.convert_to(predefined::hexadecimal());
    assert_eq!(hex.to_string(), "23");
    assert_eq!(BaseConverter::decode("23", predefined::hexadecimal()), Ok(35));
}

#[test]
fn test_convert_between_names_and_literals() {
    assert_eq!(convert_between("zz", "base58", "decimal").as_deref(), Ok("3363"));
    assert_eq!(convert_between("/", "base64", "hex").as_deref(), Ok("3F"));
    assert!(matches!(
        convert_between("1", "binary", "1"),
        Err(NumeralError::Configuration(ConfigurationError::TooFewSymbols { count: 1 }))
    ));
}

#[test]
fn test_big_values_through_facade() {
    let value = NumericValue::from_big(Integer::from(u64::MAX), None).unwrap();
    assert_eq!(value.to_string(), "18446744073709551615");
    assert_eq!(value.to_big_value(), &BigNumber::from_u64(u64::MAX));
}
