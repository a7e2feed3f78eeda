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

extern crate factorial;

use factorial::{checked_factorial, Factorial};

fn main() {
    println!("5!: {}", factorial::factorial(5));
    println!("10!: {}", factorial::factorial(10));
    println!("20!: {}", factorial::factorial(20));
    println!("21! (wrapped): {}", factorial::factorial(21));
    println!("-1!: {}", factorial::factorial(-1));
    println!("12u8!: {}", 12u8.factorial());

    for &n in [-1, 20, 21].iter() {
        match checked_factorial(n) {
            Ok(v) => println!("checked {}!: {}", n, v),
            Err(e) => println!("checked {}!: error: {}", n, e),
        }
    }
}
