//! API Facades Layer
//!
//! Single entry point for custom base conversion. Re-exports the symbol
//! tables, numeric values and converters of the inner layers, and adds
//! name-based conversion helpers.
//!
//! ```rust
//! use api_facades::{predefined, NumericValue};
//!
//! let value = NumericValue::from_encoded("FF", predefined::hexadecimal()).unwrap();
//! assert_eq!(value.convert_to(predefined::binary()).to_string(), "11111111");
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

pub mod base_facades;

pub use base_facades::{convert_between, resolve_alphabet};

// Re-export main types
pub use entities_symbol_table::{ConfigurationError, NumeralError, SymbolTable};
pub use entities_utilities::BigNumber;
pub use infrastructure_base_encoding::{
    predefined, BaseConverter, Integer, NativeInput, NumericValue, F64_EXACT_MAX, NATIVE_MAX,
};
