//! Numeral Errors Module
//!
//! Error types shared by every layer of the workspace. Symbol table
//! construction reports [`ConfigurationError`]; value construction and
//! conversion report the remaining [`NumeralError`] variants.

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

use thiserror::Error;

/// Reasons a symbol table cannot be built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Fewer than two symbols were supplied
    #[error("at least two symbols are required for a base, got {count}")]
    TooFewSymbols { count: usize },
    /// A sequence entry was empty or longer than one character
    #[error("each symbol must be a single character, got \"{symbol}\"")]
    MultiCharacterSymbol { symbol: String },
    /// The same symbol appears more than once
    #[error("symbols must be unique, \"{symbol}\" is repeated")]
    DuplicateSymbol { symbol: char },
}

/// Errors raised while building or converting numeric values
///
/// Every error is raised at the point of violation. There is no partial
/// result: a value is either fully constructed or not constructed at all.
/// The one exception is [`NumeralError::UnsafeNativeConversion`], which is
/// reported by a native view of an otherwise valid value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// The alphabet itself is invalid
    #[error("invalid symbol table: {0}")]
    Configuration(#[from] ConfigurationError),
    /// An encoded string contains a character the alphabet does not define
    #[error("invalid symbol \"{symbol}\" at position {position} for this symbol table")]
    InvalidSymbol { symbol: char, position: usize },
    /// A native numeric input has a fractional part, or is NaN or infinite
    #[error("native input must be an integer value")]
    NotInteger,
    /// Native or arbitrary-precision input is below zero
    #[error("input must not be negative")]
    NegativeValue,
    /// Native input exceeds the largest exactly representable native integer
    #[error("native input exceeds the maximum safe integer {max}")]
    MagnitudeOverflow { max: u64 },
    /// The magnitude needs arbitrary precision and cannot be narrowed
    #[error("this value cannot be converted to a native integer safely")]
    UnsafeNativeConversion,
}
