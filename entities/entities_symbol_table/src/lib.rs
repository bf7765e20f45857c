//! Entities Layer: Symbol Table
//!
//! This crate provides the digit alphabets that define custom positional numeral
//! systems, and the error type shared by every crate in the workspace.
//!
//! ## Overview
//!
//! The `entities_symbol_table` crate is the innermost layer of the workspace. It has
//! no dependencies on other workspace crates, making it the foundation for the
//! encoding infrastructure built on top of it.
//!
//! ## Modules
//!
//! - **[`symbol_table`](symbol_table/index.html)**: The [`SymbolTable`] type: an
//!   immutable ordered alphabet of unique single-character symbols, with
//!   symbol-to-value and value-to-symbol lookup.
//!
//! - **[`error`](error/index.html)**: [`NumeralError`] and [`ConfigurationError`],
//!   used for alphabet validation and for every value conversion.
//!
//! ## Usage
//!
//! ```rust
//! use entities_symbol_table::{SymbolTable, NumeralError};
//!
//! let hex = SymbolTable::new("0123456789ABCDEF").unwrap();
//! assert_eq!(hex.base(), 16);
//! assert_eq!(hex.value_of_symbol('F'), Some(15));
//!
//! assert!(matches!(SymbolTable::new("001"), Err(NumeralError::Configuration(_))));
//! ```
//!
//! ## See Also
//!
//! - [`infrastructure_base_encoding`](../infrastructure_base_encoding/index.html):
//!   Numeric values and conversions over symbol tables

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

pub mod error;
pub mod symbol_table;

// Re-export main types for convenience
pub use error::{ConfigurationError, NumeralError};
pub use symbol_table::{SymbolTable, MIN_SYMBOLS};
