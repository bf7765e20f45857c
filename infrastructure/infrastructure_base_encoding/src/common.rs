//! Common Encoding/Decoding Utilities
//!
//! Digit-level positional codec shared by [`NumericValue`](crate::NumericValue) and
//! [`BaseConverter`](crate::BaseConverter).
//!
//! ## Overview
//!
//! Decoding folds digits left to right with `value = value * base + digit`.
//! Encoding repeatedly divides by the base and emits the symbol for each
//! remainder, most significant digit last, then reverses. Each direction has a
//! native (`u64`) and a wide (`BigNumber`) form; a single call never switches
//! between them.
//!
//! The accumulation helpers assume input already checked with
//! [`validate_symbols`].

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

use crate::native::NATIVE_MAX;

/// Check that every character of `encoded` belongs to `table`
///
/// Reports the first offending character and its character position.
pub(crate) fn validate_symbols(encoded: &str, table: &SymbolTable) -> Result<(), NumeralError> {
    match encoded
        .chars()
        .enumerate()
        .find(|&(_, symbol)| !table.has_symbol(symbol))
    {
        Some((position, symbol)) => Err(NumeralError::InvalidSymbol { symbol, position }),
        None => Ok(()),
    }
}

fn digit_values<'a>(encoded: &'a str, table: &'a SymbolTable) -> impl Iterator<Item = u64> + 'a {
    encoded
        .chars()
        .filter_map(move |symbol| table.value_of_symbol(symbol))
        .map(|digit| digit as u64)
}

/// Decode validated input with arbitrary precision
pub(crate) fn accumulate_wide(encoded: &str, table: &SymbolTable) -> BigNumber {
    let base = table.base() as u64;
    digit_values(encoded, table).fold(BigNumber::zero(), |value, digit| {
        value.mul_add_small(base, digit)
    })
}

/// Decode validated input with native arithmetic
///
/// Returns None as soon as the running value leaves the native safe range.
pub(crate) fn accumulate_native(encoded: &str, table: &SymbolTable) -> Option<u64> {
    let base = table.base() as u64;
    digit_values(encoded, table).try_fold(0u64, |value, digit| {
        value
            .checked_mul(base)?
            .checked_add(digit)
            .filter(|&next| next <= NATIVE_MAX)
    })
}

/// Encode a native magnitude
pub(crate) fn encode_native(value: u64, table: &SymbolTable) -> String {
    if value == 0 {
        return table.zero_symbol().to_string();
    }

    let base = table.base() as u64;
    let symbols = table.as_slice();
    let mut digits = Vec::new();
    let mut n = value;
    while n > 0 {
        digits.push(symbols[(n % base) as usize]);
        n /= base;
    }
    digits.iter().rev().collect()
}

/// Encode an arbitrary-precision magnitude
///
/// `value` must be non-negative.
pub(crate) fn encode_wide(value: &BigNumber, table: &SymbolTable) -> String {
    if value.is_zero() {
        return table.zero_symbol().to_string();
    }

    let base = table.base() as u64;
    let symbols = table.as_slice();
    let mut digits = Vec::new();
    let mut n = value.clone();
    while !n.is_zero() {
        let Some((quotient, remainder)) = n.div_rem_small(base) else {
            break;
        };
        digits.push(symbols[remainder as usize]);
        n = quotient;
    }
    digits.iter().rev().collect()
}
