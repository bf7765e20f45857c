//! Base Codec Module
//!
//! Provides stateless encode/decode/convert functions for callers that do not
//! need to keep a [`NumericValue`] around.

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

use entities_symbol_table::{NumeralError, SymbolTable};
use entities_utilities::BigNumber;

use crate::common;
use crate::native::NativeInput;
use crate::numeric_value::NumericValue;

/// Base codec
pub struct BaseConverter;

impl BaseConverter {
    /// Decode an encoded string to a native integer
    ///
    /// # Returns
    /// * `Ok(u64)` - The magnitude
    /// * `Err(NumeralError::InvalidSymbol)` - A character is not in `table`
    /// * `Err(NumeralError::UnsafeNativeConversion)` - The magnitude exceeds the native range;
    ///   use [`decode_big`](Self::decode_big) instead
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_base_encoding::{predefined, BaseConverter};
    ///
    /// assert_eq!(BaseConverter::decode("1011", predefined::binary()), Ok(11));
    /// assert_eq!(BaseConverter::decode("FF", predefined::hexadecimal()), Ok(255));
    /// ```
    pub fn decode(encoded: &str, table: &SymbolTable) -> Result<u64, NumeralError> {
        common::validate_symbols(encoded, table)?;
        common::accumulate_native(encoded, table).ok_or(NumeralError::UnsafeNativeConversion)
    }

    /// Decode an encoded string to an arbitrary-precision integer
    pub fn decode_big(encoded: &str, table: &SymbolTable) -> Result<BigNumber, NumeralError> {
        common::validate_symbols(encoded, table)?;
        Ok(common::accumulate_wide(encoded, table))
    }

    /// Encode a native number in `table`
    ///
    /// Input is validated as by [`NumericValue::from_native`].
    pub fn encode<N: NativeInput>(value: N, table: &SymbolTable) -> Result<String, NumeralError> {
        Ok(common::encode_native(value.into_native()?, table))
    }

    /// Encode an arbitrary-precision integer in `table`
    ///
    /// Negative input fails with [`NumeralError::NegativeValue`].
    pub fn encode_big(value: &BigNumber, table: &SymbolTable) -> Result<String, NumeralError> {
        if value.is_negative() {
            return Err(NumeralError::NegativeValue);
        }
        Ok(common::encode_wide(value, table))
    }

    /// Re-encode a string from one table into another
    ///
    /// Equivalent to building a [`NumericValue`] from `encoded`, converting it
    /// to `target` and taking its string form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_base_encoding::{predefined, BaseConverter};
    ///
    /// let decimal = BaseConverter::convert("FF", predefined::hexadecimal(), predefined::decimal());
    /// assert_eq!(decimal.as_deref(), Ok("255"));
    /// ```
    pub fn convert(
        encoded: &str,
        original: &SymbolTable,
        target: &SymbolTable,
    ) -> Result<String, NumeralError> {
        let value = NumericValue::from_encoded(encoded, original)?;
        Ok(value.convert_to(target).encoded().to_string())
    }
}
