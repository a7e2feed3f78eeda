// Copyright 2026 The Factorial Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

/*!
 * Method-call access to the factorial for every primitive integer type.
 *
 * ```
 * use factorial::Factorial;
 *
 * assert_eq!(5u8.factorial(), 120);
 * assert!(21usize.checked_factorial().is_err());
 * ```
 *
 * Arguments are taken at their mathematical value, so wide types behave the
 * same as `i32` would on the same number: `(-7i64).factorial()` is `1` and
 * `u64::max_value().factorial()` is `0`.
 */

use num_traits::{PrimInt, ToPrimitive};

use error::FactorialError;
use fact;

/// Factorial of an integer taken by value.
pub trait Factorial {
    /// `self!`, wrapping modulo 2^64. See `fact::factorial`.
    fn factorial(self) -> u64;
    /// `self!`, or an error if `self` is negative or too large.
    fn checked_factorial(self) -> Result<u64, FactorialError>;
}

// 66! is the first factorial with 64 factors of two, so it and everything
// after it wraps to zero.
const FIRST_ZERO: i32 = 66;

// Out of range values saturate, which keeps them on the same side of every
// threshold the factorial cares about.
fn saturate_i32<T: PrimInt>(n: T) -> i32 {
    match ToPrimitive::to_i32(&n) {
        Some(v) => v,
        None if n < T::zero() => ::std::i32::MIN,
        None => ::std::i32::MAX,
    }
}

macro_rules! impl_factorial (
    ($($t:ty),*) => (
        $(impl Factorial for $t {
            #[inline]
            fn factorial(self) -> u64 {
                let n = saturate_i32(self);
                if n >= FIRST_ZERO {
                    0
                } else {
                    fact::factorial(n)
                }
            }

            #[inline]
            fn checked_factorial(self) -> Result<u64, FactorialError> {
                fact::checked_factorial(saturate_i32(self))
            }
        })*
    )
);

impl_factorial!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod test {
    use super::*;
    use std::{i32, i64, u64};

    #[test]
    fn matches_fact() {
        for n in -10i32..100 {
            assert_eq!(n.factorial(), fact::factorial(n));
            assert_eq!((n as i64).factorial(), fact::factorial(n));
            assert_eq!(n.checked_factorial(), fact::checked_factorial(n));
        }
    }

    #[test]
    fn unsigned() {
        assert_eq!(0u8.factorial(), 1);
        assert_eq!(5u8.factorial(), 120);
        assert_eq!(200u8.factorial(), 0);
        assert_eq!(20u16.checked_factorial(), Ok(2432902008176640000));
        assert_eq!(21usize.checked_factorial(), Err(FactorialError::Overflow(21)));
    }

    #[test]
    fn saturates() {
        assert_eq!(u64::MAX.factorial(), 0);
        assert_eq!(i64::MIN.factorial(), 1);
        assert_eq!(u64::MAX.checked_factorial(), Err(FactorialError::Overflow(i32::MAX)));
        assert_eq!(i64::MIN.checked_factorial(), Err(FactorialError::Negative(i32::MIN)));
    }
}
