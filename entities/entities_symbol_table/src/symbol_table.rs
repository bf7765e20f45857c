//! Symbol Table Module
//!
//! Provides the ordered digit alphabet that defines a positional numeral system.
//!
//! ## Overview
//!
//! A symbol table is an immutable, ordered set of unique single-character
//! symbols. The position of a symbol in the table is its digit value, and the
//! number of symbols is the base (radix) of the numeral system. Two lookup
//! structures are built once at construction:
//!
//! - **Symbol to value**: a `HashMap<char, usize>`
//! - **Value to symbol**: the ordered `Vec<char>` itself
//!
//! Both lookups are exact inverses for every digit value in `0..base`.
//!
//! ## Examples
//!
//! ```rust
//! use entities_symbol_table::SymbolTable;
//!
//! let table = SymbolTable::new("ABCD").unwrap();
//! assert_eq!(table.base(), 4);
//! assert_eq!(table.value_of_symbol('C'), Some(2));
//! assert_eq!(table.symbol_of_value(1), Some('B'));
//! assert_eq!(table.value_of_symbol('E'), None);
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

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{ConfigurationError, NumeralError};

/// Minimum number of symbols in a table
pub const MIN_SYMBOLS: usize = 2;

/// Ordered alphabet of unique single-character digit symbols
///
/// The table is immutable after construction and is meant to be shared by
/// reference between any number of numeric values.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Digit value to symbol
    symbols: Vec<char>,
    /// Symbol to digit value
    values: HashMap<char, usize>,
}

impl SymbolTable {
    /// Create a symbol table from a string of symbols
    ///
    /// Each `char` of `symbols` becomes one digit, in order.
    ///
    /// # Returns
    /// * `Ok(SymbolTable)` - The table
    /// * `Err(NumeralError::Configuration)` - Fewer than two symbols, or a repeated symbol
    pub fn new(symbols: &str) -> Result<Self, NumeralError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < MIN_SYMBOLS {
            return Err(ConfigurationError::TooFewSymbols {
                count: symbols.len(),
            }
            .into());
        }
        Self::build(symbols)
    }

    /// Create a symbol table from an explicit sequence of one-character strings
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_symbol_table::SymbolTable;
    ///
    /// let table = SymbolTable::from_symbols(&["0", "1", "2"]).unwrap();
    /// assert_eq!(table.base(), 3);
    /// assert!(SymbolTable::from_symbols(&["0", "12"]).is_err());
    /// ```
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Self, NumeralError> {
        if symbols.len() < MIN_SYMBOLS {
            return Err(ConfigurationError::TooFewSymbols {
                count: symbols.len(),
            }
            .into());
        }

        let mut chars = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let symbol = symbol.as_ref();
            let mut iter = symbol.chars();
            match (iter.next(), iter.next()) {
                (Some(ch), None) => chars.push(ch),
                _ => {
                    return Err(ConfigurationError::MultiCharacterSymbol {
                        symbol: symbol.to_string(),
                    }
                    .into())
                }
            }
        }
        Self::build(chars)
    }

    fn build(symbols: Vec<char>) -> Result<Self, NumeralError> {
        let mut values = HashMap::with_capacity(symbols.len());
        let mut first_repeat = None;
        for (value, &symbol) in symbols.iter().enumerate() {
            if values.insert(symbol, value).is_some() {
                first_repeat.get_or_insert(symbol);
            }
        }

        match first_repeat {
            Some(symbol) => Err(ConfigurationError::DuplicateSymbol { symbol }.into()),
            None => Ok(Self { symbols, values }),
        }
    }

    /// Number of symbols, which is the radix of the numeral system
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Check whether `symbol` belongs to the table
    pub fn has_symbol(&self, symbol: char) -> bool {
        self.values.contains_key(&symbol)
    }

    /// Digit value of `symbol`, or `None` if the table does not define it
    pub fn value_of_symbol(&self, symbol: char) -> Option<usize> {
        self.values.get(&symbol).copied()
    }

    /// Symbol for digit `value`, or `None` if `value` is outside `0..base`
    pub fn symbol_of_value(&self, value: usize) -> Option<char> {
        self.symbols.get(value).copied()
    }

    /// Symbol for digit value zero
    pub fn zero_symbol(&self) -> char {
        // Construction guarantees at least two symbols
        self.symbols[0]
    }

    /// Copy of the ordered alphabet
    ///
    /// The returned vector is owned by the caller; changing it has no effect
    /// on the table.
    pub fn symbols(&self) -> Vec<char> {
        self.symbols.clone()
    }

    /// Borrow the ordered alphabet
    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }
}

impl PartialEq for SymbolTable {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for SymbolTable {}

impl Hash for SymbolTable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbols.hash(state);
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for SymbolTable {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for SymbolTable {
    type Error = NumeralError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
