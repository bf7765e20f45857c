//! Infrastructure Layer: Base Encoding
//!
//! Provides numeric values that convert losslessly between custom positional
//! numeral systems.
//!
//! ## Overview
//!
//! The `infrastructure_base_encoding` crate is part of the infrastructure layer. It
//! builds on the symbol tables and big numbers of the entities layer to encode,
//! decode and convert non-negative integers of any size between alphabets.
//!
//! ## Modules
//!
//! - **[`numeric_value`](numeric_value/index.html)**: [`NumericValue`], a magnitude
//!   that lazily moves between encoded, native and arbitrary-precision forms,
//!   using native arithmetic whenever the magnitude is in the safe range.
//!
//! - **[`base_codec`](base_codec/index.html)**: [`BaseConverter`], stateless
//!   `encode`/`decode`/`convert` functions.
//!
//! - **[`native`](native/index.html)**: The native safe range ([`NATIVE_MAX`])
//!   and validation of native numeric input ([`NativeInput`]).
//!
//! - **[`predefined`](predefined/index.html)**: Shared binary, octal, decimal,
//!   hexadecimal, base58 and base64 tables.
//!
//! ## Features
//!
//! - `full-width-native`: widen the native ceiling from `2^53 - 1` to `u64::MAX`.
//!
//! ## See Also
//!
//! - [`entities_symbol_table`](../entities_symbol_table/index.html): SymbolTable and NumeralError
//! - [`entities_utilities`](../entities_utilities/index.html): BigNumber

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

mod common;

pub mod base_codec;
pub mod native;
pub mod numeric_value;
pub mod predefined;

pub use base_codec::BaseConverter;
pub use native::{NativeInput, F64_EXACT_MAX, NATIVE_MAX};
pub use numeric_value::NumericValue;

// Re-export entity types for convenience
pub use entities_symbol_table::{ConfigurationError, NumeralError, SymbolTable};
pub use entities_utilities::BigNumber;
pub use malachite::Integer;
