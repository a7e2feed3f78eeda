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

//! C ABI export.
//!
//! Declared on the C side as `uint64_t Factorial(int n);`.

use std::os::raw::c_int;

use fact;

/// Exported as `Factorial`. Forwards to `fact::factorial` unchanged; that
/// function cannot panic, so nothing unwinds into the caller.
#[export_name = "Factorial"]
pub extern "C" fn factorial_c(n: c_int) -> u64 {
    fact::factorial(n as i32)
}
