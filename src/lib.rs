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

//! Factorial of a machine integer.
//!
//! `factorial` wraps on overflow and returns `1` for anything at or below
//! one. `checked_factorial` reports both cases as a `FactorialError`
//! instead. With the `ffi` feature the wrapping form is also exported to C
//! as `Factorial`.

#![crate_name = "factorial"]

extern crate num_traits;

pub mod error;
pub mod fact;
pub mod traits;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports

pub use error::FactorialError;
pub use fact::{factorial, checked_factorial, wrapping_factorial_iter, FACTORIALS, MAX_EXACT};
pub use traits::Factorial;
