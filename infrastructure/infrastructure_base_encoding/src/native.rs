//! Native Integer Module
//!
//! Defines the native safe range and the validation applied to native numeric
//! input before it is stored as a fixed-width integer.
//!
//! ## Safe Range
//!
//! By default the native ceiling is `2^53 - 1`, the largest integer an IEEE-754
//! double represents exactly. With the `full-width-native` feature the ceiling is
//! `u64::MAX`. Floating-point input is always limited to `2^53 - 1`, whatever the
//! feature setting, because larger doubles are not exact integers.

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

use entities_symbol_table::NumeralError;

/// Largest integer exactly representable by `f64`
pub const F64_EXACT_MAX: u64 = (1 << 53) - 1;

/// Largest magnitude held in native form
#[cfg(not(feature = "full-width-native"))]
pub const NATIVE_MAX: u64 = F64_EXACT_MAX;

/// Largest magnitude held in native form
#[cfg(feature = "full-width-native")]
pub const NATIVE_MAX: u64 = u64::MAX;

/// Native numeric input accepted by value constructors
///
/// Validation order is: integral, then non-negative, then within the ceiling.
pub trait NativeInput {
    /// Validate and narrow to the native representation
    fn into_native(self) -> Result<u64, NumeralError>;
}

fn check_ceiling(value: u64, max: u64) -> Result<u64, NumeralError> {
    if value > max {
        Err(NumeralError::MagnitudeOverflow { max })
    } else {
        Ok(value)
    }
}

impl NativeInput for u64 {
    fn into_native(self) -> Result<u64, NumeralError> {
        check_ceiling(self, NATIVE_MAX)
    }
}

impl NativeInput for u32 {
    fn into_native(self) -> Result<u64, NumeralError> {
        Ok(u64::from(self))
    }
}

impl NativeInput for usize {
    fn into_native(self) -> Result<u64, NumeralError> {
        let value =
            u64::try_from(self).map_err(|_| NumeralError::MagnitudeOverflow { max: NATIVE_MAX })?;
        check_ceiling(value, NATIVE_MAX)
    }
}

impl NativeInput for i64 {
    fn into_native(self) -> Result<u64, NumeralError> {
        let value = u64::try_from(self).map_err(|_| NumeralError::NegativeValue)?;
        check_ceiling(value, NATIVE_MAX)
    }
}

impl NativeInput for i32 {
    fn into_native(self) -> Result<u64, NumeralError> {
        i64::from(self).into_native()
    }
}

impl NativeInput for f64 {
    fn into_native(self) -> Result<u64, NumeralError> {
        if !self.is_finite() || self.fract() != 0.0 {
            return Err(NumeralError::NotInteger);
        }
        if self < 0.0 {
            return Err(NumeralError::NegativeValue);
        }
        let max = F64_EXACT_MAX.min(NATIVE_MAX);
        if self > max as f64 {
            return Err(NumeralError::MagnitudeOverflow { max });
        }
        Ok(self as u64)
    }
}
