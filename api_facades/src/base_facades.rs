//! Base Conversion Facades
//!
//! Convenience entry points that accept alphabets either as predefined names
//! or as literal symbol strings, for callers that do not want to manage
//! symbol tables themselves.

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

use std::borrow::Cow;

use entities_symbol_table::{NumeralError, SymbolTable};
use infrastructure_base_encoding::{predefined, BaseConverter};

/// Resolve an alphabet given by predefined name or by its symbols
///
/// A name known to [`predefined::by_name`] wins; anything else is treated as
/// the literal alphabet and validated.
///
/// # Examples
///
/// ```rust
/// use api_facades::resolve_alphabet;
///
/// assert_eq!(resolve_alphabet("hex").unwrap().base(), 16);
/// assert_eq!(resolve_alphabet("abc").unwrap().base(), 3);
/// assert!(resolve_alphabet("aab").is_err());
/// ```
pub fn resolve_alphabet(alphabet: &str) -> Result<Cow<'static, SymbolTable>, NumeralError> {
    match predefined::by_name(alphabet) {
        Some(table) => Ok(Cow::Borrowed(table)),
        None => SymbolTable::new(alphabet).map(Cow::Owned),
    }
}

/// Convert `encoded` between two alphabets given by name or symbols
///
/// # Examples
///
/// ```rust
/// use api_facades::convert_between;
///
/// assert_eq!(convert_between("FF", "hex", "decimal").as_deref(), Ok("255"));
/// assert_eq!(convert_between("ba", "ab", "binary").as_deref(), Ok("10"));
/// ```
pub fn convert_between(encoded: &str, from: &str, to: &str) -> Result<String, NumeralError> {
    let original = resolve_alphabet(from)?;
    let target = resolve_alphabet(to)?;
    BaseConverter::convert(encoded, &original, &target)
}
