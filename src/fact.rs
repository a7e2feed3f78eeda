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

//! The factorial itself.
//!
//! `factorial` keeps plain machine semantics: anything at or below one is
//! `1`, and the product wraps modulo 2^64 once `n` passes `MAX_EXACT`.
//! `checked_factorial` is the validating form and never wraps.

use error::FactorialError;

// Include MAX_EXACT and FACTORIALS
include!(concat!(env!("OUT_DIR"), "/factorials_table.rs"));

/**
 * Calculates `n!`, wrapping on overflow.
 *
 * Returns `1` for every `n <= 1`, negative values included. Recursion depth
 * is `n`.
 */
pub fn factorial(n: i32) -> u64 {
    if n <= 1 {
        return 1;
    }

    (n as u64).wrapping_mul(factorial(n - 1))
}

/**
 * Same results as `factorial`, computed with a loop instead of recursion so
 * large `n` cannot run out of stack.
 */
pub fn wrapping_factorial_iter(n: i32) -> u64 {
    let mut a : u64 = 1;

    let mut i = 2;
    while i <= n {
        a = a.wrapping_mul(i as u64);
        if a == 0 {
            break;
        }
        i += 1;
    }

    a
}

/**
 * Calculates `n!`, rejecting negative `n` and any `n` whose factorial does
 * not fit in a `u64`.
 */
pub fn checked_factorial(n: i32) -> Result<u64, FactorialError> {
    if n < 0 {
        return Err(FactorialError::Negative(n));
    }
    if n > MAX_EXACT {
        return Err(FactorialError::Overflow(n));
    }

    Ok(FACTORIALS[n as usize])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small() {
        let cases = [
            (0,  1u64),
            (1,  1),
            (2,  2),
            (5,  120),
            (10, 3628800),
            (12, 479001600),
            (20, 2432902008176640000),
        ];

        for &(n, f) in cases.iter() {
            assert_eq!(factorial(n), f);
            assert_eq!(wrapping_factorial_iter(n), f);
            assert_eq!(checked_factorial(n), Ok(f));
        }
    }

    #[test]
    fn non_positive() {
        for &n in [-1, -2, -100, ::std::i32::MIN].iter() {
            assert_eq!(factorial(n), 1);
            assert_eq!(wrapping_factorial_iter(n), 1);
            assert_eq!(checked_factorial(n), Err(FactorialError::Negative(n)));
        }
    }

    #[test]
    fn wraps() {
        // 21! = 51090942171709440000, reduced mod 2^64
        assert_eq!(factorial(21), 14197454024290336768);
        assert_eq!(wrapping_factorial_iter(21), 14197454024290336768);
        assert_eq!(checked_factorial(21), Err(FactorialError::Overflow(21)));
    }

    #[test]
    fn zero_from_66() {
        // 65! has 63 factors of two, 66! has 64
        assert!(factorial(65) != 0);
        assert_eq!(factorial(66), 0);
        assert_eq!(factorial(200), 0);
        assert_eq!(wrapping_factorial_iter(66), 0);
        assert_eq!(wrapping_factorial_iter(::std::i32::MAX), 0);
    }

    #[test]
    fn iter_matches_recursive() {
        for n in -5..300 {
            assert_eq!(factorial(n), wrapping_factorial_iter(n), "n = {}", n);
        }
    }

    #[test]
    fn table() {
        assert_eq!(MAX_EXACT, 20);
        assert_eq!(FACTORIALS.len(), 21);
        for k in 1..FACTORIALS.len() {
            assert_eq!(FACTORIALS[k], FACTORIALS[k - 1] * k as u64);
        }
        assert!(FACTORIALS[20].checked_mul(21).is_none());
    }
}
