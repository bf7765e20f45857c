use infrastructure_base_encoding::*;
use proptest::prelude::*;

fn table_strategy() -> impl Strategy<Value = &'static SymbolTable> {
    prop_oneof![
        Just(predefined::binary()),
        Just(predefined::octal()),
        Just(predefined::decimal()),
        Just(predefined::hexadecimal()),
        Just(predefined::base58()),
        Just(predefined::base64()),
    ]
}

/// Magnitudes up to 224 bits, built from random 32-bit limbs
fn big_strategy() -> impl Strategy<Value = BigNumber> {
    prop::collection::vec(any::<u32>(), 1..8).prop_map(|limbs| {
        limbs
            .into_iter()
            .fold(BigNumber::zero(), |acc, limb| acc.mul_add_small(1 << 32, u64::from(limb)))
    })
}

proptest! {
    #[test]
    fn test_native_round_trip(m in 0..=F64_EXACT_MAX, table in table_strategy()) {
        let encoded = BaseConverter::encode(m, table).unwrap();
        prop_assert_eq!(BaseConverter::decode(&encoded, table), Ok(m));
    }

    #[test]
    fn test_wide_round_trip(m in big_strategy(), table in table_strategy()) {
        let encoded = BaseConverter::encode_big(&m, table).unwrap();
        prop_assert_eq!(BaseConverter::decode_big(&encoded, table), Ok(m));
    }

    #[test]
    fn test_base_invariance(m in big_strategy(), a in table_strategy(), b in table_strategy()) {
        let encoded = BaseConverter::encode_big(&m, a).unwrap();
        let converted = BaseConverter::convert(&encoded, a, b).unwrap();
        prop_assert_eq!(BaseConverter::decode_big(&converted, b), Ok(m));
    }

    #[test]
    fn test_encoding_is_canonical(m in big_strategy(), table in table_strategy()) {
        let encoded = NumericValue::from_big(m.clone(), Some(table)).unwrap().to_string();
        prop_assert!(!encoded.is_empty());
        if !m.is_zero() {
            prop_assert!(!encoded.starts_with(table.zero_symbol()));
        }
    }

    #[test]
    fn test_native_and_wide_paths_agree(m in 0..=F64_EXACT_MAX, table in table_strategy()) {
        let native = NumericValue::from_native(m, Some(table)).unwrap();
        let wide = NumericValue::from_big(m, Some(table)).unwrap();
        prop_assert_eq!(native.to_string(), wide.to_string());
        prop_assert_eq!(native.to_big_value(), wide.to_big_value());
    }
}
