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

//! Procedural macros for `number_utils`.
//!
//! Note: This is separate from the `number_utils` crate because `proc-macro`
//! crates are only allowed to export procedural macros and nothing else.

use proc_macro::TokenStream;


/// Wrapper around the `test` macro.
///
/// The wrapper automatically initializes logging for the test via
/// `number_utils::test::init_logging`, so `tracing` output from the code under
/// test shows up in the captured test output.
///
/// ```ignore
/// #[number_utils::test]
/// fn test_three_is_special() {
///     assert!(number_utils::is_special(3));
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    test::test_impl(attr, item)
}
