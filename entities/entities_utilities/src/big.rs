//! Big Number Operations
//!
//! Provides the arbitrary precision integer used for magnitudes that do not fit
//! the native integer range.
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic.
//! Only the digit-level operations needed by positional encoding are exposed:
//! multiply-and-add a small digit, divide with remainder by a small radix, and
//! narrowing back to `u64`.

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

use malachite::Integer;

/// Big number representation using malachite's Integer
///
/// The wrapped value may be negative so that callers can validate signed
/// input; the encoding layer rejects negative values before storing them.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Zero
    pub fn zero() -> Self {
        Self {
            value: Integer::from(0u32),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Parse a base-10 string, with an optional leading `-`
    ///
    /// Returns None if the string is not a decimal integer
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        s.parse::<Integer>().ok().map(Self::from_integer)
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Check whether the value lies in `0..=max`
    pub fn fits_within(&self, max: u64) -> bool {
        self.to_u64().is_some_and(|value| value <= max)
    }

    /// Check if the number is negative
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Multiply by a radix and add a digit: x * radix + digit
    ///
    /// This is the accumulation step of positional decoding.
    pub fn mul_add_small(&self, radix: u64, digit: u64) -> Self {
        Self {
            value: &self.value * Integer::from(radix) + Integer::from(digit),
        }
    }

    /// Divide by a small divisor, returning quotient and remainder
    ///
    /// For non-negative values the remainder is in `0..divisor`. This is the
    /// extraction step of positional encoding.
    ///
    /// Returns None if dividing by zero or if the value is negative
    pub fn div_rem_small(&self, divisor: u64) -> Option<(Self, u64)> {
        if divisor == 0 || self.is_negative() {
            return None;
        }
        let divisor = Integer::from(divisor);
        let quotient = &self.value / &divisor;
        let remainder = u64::try_from(&(&self.value % &divisor)).ok()?;
        Some((Self { value: quotient }, remainder))
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    /// Unwrap into the internal Integer value
    pub fn into_integer(self) -> Integer {
        self.value
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
