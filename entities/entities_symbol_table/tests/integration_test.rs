//! Integration tests for entities_symbol_table crate
//!
//! These tests verify alphabet construction and lookup end-to-end through the
//! public re-exports.

use entities_symbol_table::*;

#[test]
fn test_common_alphabets_build() {
    let cases = [
        ("01", 2),
        ("01234567", 8),
        ("0123456789", 10),
        ("0123456789ABCDEF", 16),
        ("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz", 58),
        ("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/", 64),
    ];

    for (alphabet, base) in cases {
        let table = SymbolTable::new(alphabet).unwrap();
        assert_eq!(table.base(), base, "alphabet {}", alphabet);
        assert_eq!(table.to_string(), alphabet);
    }
}

#[test]
fn test_validation_errors_through_public_api() {
    let too_few = SymbolTable::new("0");
    assert_eq!(
        too_few,
        Err(NumeralError::Configuration(ConfigurationError::TooFewSymbols { count: 1 }))
    );

    let duplicate = SymbolTable::new("001");
    assert_eq!(
        duplicate,
        Err(NumeralError::Configuration(ConfigurationError::DuplicateSymbol { symbol: '0' }))
    );

    let wide_entry = SymbolTable::from_symbols(&["0".to_string(), "1".to_string(), "xy".to_string()]);
    assert!(matches!(
        wide_entry,
        Err(NumeralError::Configuration(ConfigurationError::MultiCharacterSymbol { .. }))
    ));
}

#[test]
fn test_unicode_symbols_are_single_characters() {
    let table = SymbolTable::from_symbols(&["α", "β", "γ"]).unwrap();
    assert_eq!(table.base(), 3);
    assert_eq!(table.value_of_symbol('γ'), Some(2));
    assert_eq!(table.symbol_of_value(0), Some('α'));
}

#[test]
fn test_tables_are_shareable_across_threads() {
    let table = std::sync::Arc::new(SymbolTable::new("0123456789").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let table = table.clone();
            std::thread::spawn(move || table.symbol_of_value(i))
        })
        .collect();

    let symbols: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(symbols, vec![Some('0'), Some('1'), Some('2'), Some('3')]);
}
