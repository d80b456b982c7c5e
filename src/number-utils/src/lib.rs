// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Classification of special integers.
//!
//! An integer is **special** when it is an odd prime: 3, 5, 7, 11, 13, and so
//! on. The classifier is a pure function; see [`special::is_special`].
//!
//! The remaining modules carry the plumbing shared by the `number-utils`
//! binary and the tests: argument parsing, logging setup, and test helpers.

#![deny(missing_docs, missing_debug_implementations)]

// Lets `#[number_utils::test]` expand to `::number_utils::...` paths inside
// this crate too.
extern crate self as number_utils;

pub mod cli;
pub mod special;
pub mod tracing;

pub use number_utils_proc::test;

pub use crate::special::{classify, is_special, special_numbers, Classification, SpecialNumbers};
