//! Predefined Alphabets Module
//!
//! Provides process-wide symbol tables for the common numeral systems. Each
//! table is built on first use and then shared read-only for the lifetime of
//! the process.
//!
//! | Name | Base | Symbols |
//! |------|------|---------|
//! | binary | 2 | `01` |
//! | octal | 8 | `01234567` |
//! | decimal | 10 | `0123456789` |
//! | hexadecimal | 16 | `0123456789ABCDEF` |
//! | base58 | 58 | digits and letters without `0`, `O`, `I`, `l` |
//! | base64 | 64 | `A-Z`, `a-z`, `0-9`, `+`, `/` |

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

use std::sync::OnceLock;

use entities_symbol_table::SymbolTable;

pub const BINARY_SYMBOLS: &str = "01";
pub const OCTAL_SYMBOLS: &str = "01234567";
pub const DECIMAL_SYMBOLS: &str = "0123456789";
pub const HEXADECIMAL_SYMBOLS: &str = "0123456789ABCDEF";
pub const BASE58_SYMBOLS: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const BASE64_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

static BINARY: OnceLock<SymbolTable> = OnceLock::new();
static OCTAL: OnceLock<SymbolTable> = OnceLock::new();
static DECIMAL: OnceLock<SymbolTable> = OnceLock::new();
static HEXADECIMAL: OnceLock<SymbolTable> = OnceLock::new();
static BASE58: OnceLock<SymbolTable> = OnceLock::new();
static BASE64: OnceLock<SymbolTable> = OnceLock::new();

fn get_or_build(cell: &'static OnceLock<SymbolTable>, symbols: &'static str) -> &'static SymbolTable {
    cell.get_or_init(|| {
        // The alphabets above are fixed, unique and longer than one symbol
        SymbolTable::new(symbols).expect("predefined alphabet is valid")
    })
}

/// Base 2
pub fn binary() -> &'static SymbolTable {
    get_or_build(&BINARY, BINARY_SYMBOLS)
}

/// Base 8
pub fn octal() -> &'static SymbolTable {
    get_or_build(&OCTAL, OCTAL_SYMBOLS)
}

/// Base 10, the default table for native and arbitrary-precision input
pub fn decimal() -> &'static SymbolTable {
    get_or_build(&DECIMAL, DECIMAL_SYMBOLS)
}

/// Base 16 with upper-case letters
pub fn hexadecimal() -> &'static SymbolTable {
    get_or_build(&HEXADECIMAL, HEXADECIMAL_SYMBOLS)
}

/// Base 58, as used for compact identifiers and addresses
pub fn base58() -> &'static SymbolTable {
    get_or_build(&BASE58, BASE58_SYMBOLS)
}

/// Base 64 digit alphabet (no padding)
pub fn base64() -> &'static SymbolTable {
    get_or_build(&BASE64, BASE64_SYMBOLS)
}

/// Look up a predefined table by name
///
/// Names are case-insensitive. Accepted names:
/// `bin`/`binary`/`base2`, `oct`/`octal`/`base8`, `dec`/`decimal`/`base10`,
/// `hex`/`hexadecimal`/`base16`, `base58`, `base64`.
///
/// # Examples
///
/// ```rust
/// use infrastructure_base_encoding::predefined;
///
/// let hex = predefined::by_name("HEX").unwrap();
/// assert_eq!(hex.base(), 16);
/// assert!(predefined::by_name("base3").is_none());
/// ```
pub fn by_name(name: &str) -> Option<&'static SymbolTable> {
    match name.to_ascii_lowercase().as_str() {
        "bin" | "binary" | "base2" => Some(binary()),
        "oct" | "octal" | "base8" => Some(octal()),
        "dec" | "decimal" | "base10" => Some(decimal()),
        "hex" | "hexadecimal" | "base16" => Some(hexadecimal()),
        "base58" => Some(base58()),
        "base64" => Some(base64()),
        _ => None,
    }
}
