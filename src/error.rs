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

use std::error::Error;
use std::fmt;

/// Reasons `checked_factorial` refuses an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorialError {
    /// The argument was below zero.
    Negative(i32),
    /// The argument was above `MAX_EXACT`, so the result does not fit in a `u64`.
    Overflow(i32),
}

impl FactorialError {
    /// The argument that was rejected.
    pub fn input(&self) -> i32 {
        match *self {
            FactorialError::Negative(n) | FactorialError::Overflow(n) => n,
        }
    }
}

impl Error for FactorialError {}

impl fmt::Display for FactorialError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FactorialError::Negative(n) =>
                write!(f, "factorial of negative number {}", n),
            FactorialError::Overflow(n) =>
                write!(f, "factorial of {} overflows u64", n),
        }
    }
}
