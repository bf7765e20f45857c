//! Numeric Value Module
//!
//! Provides [`NumericValue`], a non-negative magnitude paired with the symbol
//! table it is written in.
//!
//! ## Representations
//!
//! A value has three interchangeable representations:
//!
//! - **Encoded**: a string of symbols from its table
//! - **Narrow**: a native `u64`, only for magnitudes up to [`NATIVE_MAX`]
//! - **Wide**: an arbitrary-precision [`BigNumber`]
//!
//! The representation a value was built from is kept as its origin. The others
//! are derived on first request and cached in `OnceLock` slots, so every slot is
//! written at most once and never invalidated. Derivation is a pure function of
//! the origin; two threads racing on the same slot compute the same value.
//!
//! ## Safe Range
//!
//! [`NumericValue::can_fit_native`] decides whether the magnitude can be narrowed
//! without loss. The answer is computed at most once per value and drives
//! [`NumericValue::to_native`] and [`NumericValue::convert_to`].
//!
//! ## Examples
//!
//! ```rust
//! use infrastructure_base_encoding::{predefined, NumericValue};
//!
//! let value = NumericValue::from_encoded("FF", predefined::hexadecimal()).unwrap();
//! assert_eq!(value.to_native(), Ok(255));
//!
//! let decimal = value.convert_to(predefined::decimal());
//! assert_eq!(decimal.to_string(), "255");
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::fmt;
use std::sync::OnceLock;

use entities_symbol_table::{NumeralError, SymbolTable};
use entities_utilities::BigNumber;
use tracing::{debug, trace};

use crate::common;
use crate::native::{NativeInput, NATIVE_MAX};
use crate::predefined;

/// The representation a value was constructed from
#[derive(Debug, Clone)]
enum Origin {
    Encoded(String),
    Narrow(u64),
    Wide(BigNumber),
}

/// A non-negative integer magnitude in a custom base
///
/// Conversions never change an existing value's table; [`convert_to`](Self::convert_to)
/// returns a new, independent value. Cloning copies every populated cache slot.
#[derive(Debug, Clone)]
pub struct NumericValue<'t> {
    table: &'t SymbolTable,
    origin: Origin,
    encoded: OnceLock<String>,
    narrow: OnceLock<u64>,
    wide: OnceLock<BigNumber>,
    fits_narrow: OnceLock<bool>,
}

impl<'t> NumericValue<'t> {
    fn with_origin(origin: Origin, fits_narrow: Option<bool>, table: &'t SymbolTable) -> Self {
        Self {
            table,
            origin,
            encoded: OnceLock::new(),
            narrow: OnceLock::new(),
            wide: OnceLock::new(),
            fits_narrow: fits_narrow.map(OnceLock::from).unwrap_or_default(),
        }
    }

    /// Create a value from a string of symbols
    ///
    /// Every character must belong to `table`. The string is stored as given
    /// and decoded only when a numeric view is requested. An empty string is
    /// the magnitude zero and is stored as the table's zero symbol.
    ///
    /// # Returns
    /// * `Ok(NumericValue)` - The value
    /// * `Err(NumeralError::InvalidSymbol)` - The first character not in `table`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_base_encoding::{predefined, NumericValue};
    /// use entities_symbol_table::NumeralError;
    ///
    /// let value = NumericValue::from_encoded("1011", predefined::binary()).unwrap();
    /// assert_eq!(value.to_native(), Ok(11));
    ///
    /// let err = NumericValue::from_encoded("102", predefined::binary()).unwrap_err();
    /// assert_eq!(err, NumeralError::InvalidSymbol { symbol: '2', position: 2 });
    /// ```
    pub fn from_encoded(encoded: &str, table: &'t SymbolTable) -> Result<Self, NumeralError> {
        common::validate_symbols(encoded, table)?;
        let encoded = if encoded.is_empty() {
            table.zero_symbol().to_string()
        } else {
            encoded.to_string()
        };
        Ok(Self::with_origin(Origin::Encoded(encoded), None, table))
    }

    /// Create a value from a native number
    ///
    /// `table` defaults to decimal. Fractional input fails with
    /// [`NumeralError::NotInteger`], negative input with
    /// [`NumeralError::NegativeValue`], and input above the native ceiling with
    /// [`NumeralError::MagnitudeOverflow`].
    pub fn from_native<N: NativeInput>(
        value: N,
        table: Option<&'t SymbolTable>,
    ) -> Result<Self, NumeralError> {
        let narrow = value.into_native()?;
        let table = table.unwrap_or_else(|| predefined::decimal());
        Ok(Self::with_origin(Origin::Narrow(narrow), Some(true), table))
    }

    /// Create a value from an arbitrary-precision integer
    ///
    /// `table` defaults to decimal. Negative input fails with
    /// [`NumeralError::NegativeValue`]. Whether the magnitude fits the native
    /// range is not decided until it is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_base_encoding::{predefined, NumericValue};
    ///
    /// let value = NumericValue::from_big(255u64, Some(predefined::hexadecimal())).unwrap();
    /// assert_eq!(value.to_string(), "FF");
    /// ```
    pub fn from_big<B: Into<BigNumber>>(
        value: B,
        table: Option<&'t SymbolTable>,
    ) -> Result<Self, NumeralError> {
        let wide = value.into();
        if wide.is_negative() {
            return Err(NumeralError::NegativeValue);
        }
        let table = table.unwrap_or_else(|| predefined::decimal());
        Ok(Self::with_origin(Origin::Wide(wide), None, table))
    }

    /// The symbol table this value is written in
    pub fn table(&self) -> &'t SymbolTable {
        self.table
    }

    /// Radix of this value's table
    pub fn base(&self) -> usize {
        self.table.base()
    }

    /// Whether the magnitude can be held natively without loss
    ///
    /// Computed at most once. A value built from a native number starts out
    /// known to fit. Any other value materializes the arbitrary-precision form
    /// first, so a later [`to_native`](Self::to_native) only narrows it.
    pub fn can_fit_native(&self) -> bool {
        *self.fits_narrow.get_or_init(|| {
            let fits = self.to_big_value().fits_within(NATIVE_MAX);
            if !fits {
                debug!(
                    base = self.base(),
                    "magnitude exceeds native range, keeping arbitrary precision"
                );
            }
            fits
        })
    }

    /// Arbitrary-precision view of the magnitude
    ///
    /// Never fails; derived from the native or encoded form on first use.
    pub fn to_big_value(&self) -> &BigNumber {
        match &self.origin {
            Origin::Wide(wide) => wide,
            Origin::Narrow(narrow) => self.wide.get_or_init(|| BigNumber::from_u64(*narrow)),
            Origin::Encoded(encoded) => self.wide.get_or_init(|| {
                trace!(len = encoded.len(), base = self.base(), "decoding with arbitrary precision");
                common::accumulate_wide(encoded, self.table)
            }),
        }
    }

    /// Native view of the magnitude
    ///
    /// # Returns
    /// * `Ok(u64)` - The magnitude
    /// * `Err(NumeralError::UnsafeNativeConversion)` - The magnitude exceeds
    ///   [`NATIVE_MAX`]. The value remains usable through
    ///   [`to_big_value`](Self::to_big_value) and [`encoded`](Self::encoded).
    pub fn to_native(&self) -> Result<u64, NumeralError> {
        if !self.can_fit_native() {
            return Err(NumeralError::UnsafeNativeConversion);
        }
        if let Origin::Narrow(narrow) = self.origin {
            return Ok(narrow);
        }
        if let Some(&narrow) = self.narrow.get() {
            return Ok(narrow);
        }

        let narrow = self
            .to_big_value()
            .to_u64()
            .ok_or(NumeralError::UnsafeNativeConversion)?;
        Ok(*self.narrow.get_or_init(|| narrow))
    }

    /// Encoded view of the magnitude in this value's table
    ///
    /// A value built from a string returns that string unchanged. Otherwise
    /// the canonical encoding is computed once with the same arithmetic as the
    /// origin: native division for native values, arbitrary precision for
    /// wide ones. Zero encodes as the single zero symbol.
    pub fn encoded(&self) -> &str {
        match &self.origin {
            Origin::Encoded(encoded) => encoded,
            Origin::Narrow(narrow) => self
                .encoded
                .get_or_init(|| common::encode_native(*narrow, self.table)),
            Origin::Wide(wide) => self
                .encoded
                .get_or_init(|| common::encode_wide(wide, self.table)),
        }
    }

    /// Re-express the magnitude in another table
    ///
    /// Uses native arithmetic when [`can_fit_native`](Self::can_fit_native)
    /// holds and arbitrary precision otherwise. The magnitude is the same
    /// either way. The returned value shares no cache state with `self`.
    pub fn convert_to<'u>(&self, target: &'u SymbolTable) -> NumericValue<'u> {
        if self.can_fit_native() {
            if let Ok(narrow) = self.to_native() {
                return NumericValue::with_origin(Origin::Narrow(narrow), Some(true), target);
            }
        }

        // Same magnitude, same answer
        NumericValue::with_origin(Origin::Wide(self.to_big_value().clone()), Some(false), target)
    }
}

impl fmt::Display for NumericValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encoded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predefined::{binary, decimal, hexadecimal};

    #[test]
    fn test_from_encoded_is_lazy() {
        let value = NumericValue::from_encoded("1011", binary()).unwrap();
        assert!(value.wide.get().is_none());
        assert!(value.narrow.get().is_none());
        assert!(value.fits_narrow.get().is_none());
        assert_eq!(value.encoded(), "1011");
        assert!(value.wide.get().is_none());
    }

    #[test]
    fn test_can_fit_native_materializes_wide_once() {
        let value = NumericValue::from_encoded("FF", hexadecimal()).unwrap();
        assert!(value.can_fit_native());
        assert_eq!(value.wide.get().and_then(BigNumber::to_u64), Some(255));
        assert_eq!(value.fits_narrow.get(), Some(&true));
        assert!(value.narrow.get().is_none());
        assert!(value.can_fit_native());
    }

    #[test]
    fn test_to_native_narrows_cached_wide() {
        let value = NumericValue::from_encoded("FF", hexadecimal()).unwrap();
        assert_eq!(value.to_native(), Ok(255));
        assert_eq!(value.wide.get().and_then(BigNumber::to_u64), Some(255));
        assert_eq!(value.narrow.get(), Some(&255));

        let copy = value.clone();
        assert_eq!(copy.narrow.get(), Some(&255));
        assert_eq!(copy.to_native(), Ok(255));
    }

    #[test]
    fn test_oversized_encoded_never_narrows() {
        let value = NumericValue::from_encoded("10000000000000000", hexadecimal()).unwrap();
        assert!(!value.can_fit_native());
        assert_eq!(value.to_native(), Err(NumeralError::UnsafeNativeConversion));
        assert!(value.narrow.get().is_none());
        assert_eq!(value.to_big_value().to_string(), "18446744073709551616");
    }

    #[test]
    fn test_native_origin_fits_without_wide() {
        let value = NumericValue::from_native(32u64, None).unwrap();
        assert!(value.can_fit_native());
        assert!(value.wide.get().is_none());
        assert!(std::ptr::eq(value.table(), decimal()));
        assert_eq!(value.to_string(), "32");
    }

    #[test]
    fn test_to_native_caches_narrow() {
        let value = NumericValue::from_big(16u64, Some(binary())).unwrap();
        assert_eq!(value.to_native(), Ok(16));
        assert_eq!(value.narrow.get(), Some(&16));
        assert_eq!(value.to_string(), "10000");
    }

    #[test]
    fn test_to_big_value_from_each_origin() {
        let from_native = NumericValue::from_native(7u64, None).unwrap();
        let from_encoded = NumericValue::from_encoded("111", binary()).unwrap();
        let from_big = NumericValue::from_big(7u64, None).unwrap();
        for value in [&from_native, &from_encoded, &from_big] {
            assert_eq!(value.to_big_value(), &BigNumber::from_u64(7));
        }
    }

    #[test]
    fn test_empty_input_is_zero() {
        let value = NumericValue::from_encoded("", hexadecimal()).unwrap();
        assert_eq!(value.encoded(), "0");
        assert_eq!(value.to_native(), Ok(0));
    }

    #[test]
    fn test_non_canonical_input_is_kept() {
        let value = NumericValue::from_encoded("0011", binary()).unwrap();
        assert_eq!(value.to_string(), "0011");
        assert_eq!(value.to_native(), Ok(3));
        assert_eq!(value.convert_to(binary()).to_string(), "11");
    }

    #[test]
    fn test_negative_big_rejected() {
        assert_eq!(
            NumericValue::from_big(-1i64, None).unwrap_err(),
            NumeralError::NegativeValue
        );
    }

    #[test]
    fn test_convert_to_is_independent() {
        let source = NumericValue::from_encoded("FF", hexadecimal()).unwrap();
        let converted = source.convert_to(decimal());
        assert!(matches!(converted.origin, Origin::Narrow(255)));
        assert_eq!(converted.fits_narrow.get(), Some(&true));
        assert_eq!(converted.to_string(), "255");
        assert!(source.encoded.get().is_none());
        assert_eq!(source.encoded(), "FF");
        assert!(std::ptr::eq(source.table(), hexadecimal()));
        assert!(std::ptr::eq(converted.table(), decimal()));
    }

    #[cfg(not(feature = "full-width-native"))]
    #[test]
    fn test_convert_beyond_native_uses_wide() {
        let source = NumericValue::from_encoded("20000000000000", hexadecimal()).unwrap();
        let converted = source.convert_to(decimal());
        assert!(matches!(converted.origin, Origin::Wide(_)));
        assert_eq!(converted.fits_narrow.get(), Some(&false));
        assert!(converted.wide.get().is_none());
        assert_eq!(converted.to_string(), "9007199254740992");
    }

    #[test]
    fn test_clone_copies_populated_slots() {
        let value = NumericValue::from_native(255u64, Some(hexadecimal())).unwrap();
        assert_eq!(value.encoded(), "FF");
        let copy = value.clone();
        assert_eq!(copy.encoded.get().map(String::as_str), Some("FF"));
        assert!(copy.wide.get().is_none());
        let _ = copy.to_big_value();
        assert!(value.wide.get().is_none());
    }

    #[test]
    fn test_concurrent_reads_agree() {
        let value = NumericValue::from_encoded("zz", predefined::base58()).unwrap();
        let results: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| value.convert_to(decimal()).to_string()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(results.iter().all(|r| r == "3363"));
    }
}
