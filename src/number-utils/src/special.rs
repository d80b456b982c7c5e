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

//! Special number classification.
//!
//! A number is special when it is an odd prime. In particular `2` is not
//! special, and neither is any number below `3`, so zero and negative numbers
//! are never special. Classification is total over `i64` and never panics.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Bases for the Miller-Rabin test that are sufficient to decide primality
/// deterministically for every 64-bit integer.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Reports whether `n` is special.
pub fn is_special(n: i64) -> bool {
    let special = match u64::try_from(n) {
        Ok(n) => n > 2 && n % 2 == 1 && is_prime(n),
        Err(_) => false,
    };
    trace!(n, special, "classified number");
    special
}

/// Reports whether `n` is prime.
///
/// Uses a deterministic Miller-Rabin test, so the cost is logarithmic in `n`
/// even for the largest `u64` values.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for p in WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }
    // `n` is odd and larger than every witness from here on.
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    WITNESSES.iter().all(|a| passes_round(n, d, s, *a))
}

/// Runs one Miller-Rabin round for witness `a`, where `n - 1 = d * 2^s`.
fn passes_round(n: u64, d: u64, s: u32, a: u64) -> bool {
    let mut x = pow_mod(a, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    for _ in 1..s {
        x = mul_mod(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    let r = u128::from(a) * u128::from(b) % u128::from(m);
    u64::try_from(r).expect("remainder is less than a u64 modulus")
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// The result of classifying a single number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// The classified number.
    pub n: i64,
    /// Whether `n` is special.
    pub special: bool,
}

/// Classifies `n`.
pub fn classify(n: i64) -> Classification {
    Classification {
        n,
        special: is_special(n),
    }
}

/// Returns an iterator over all special numbers in ascending order.
pub fn special_numbers() -> SpecialNumbers {
    SpecialNumbers::starting_at(i64::MIN)
}

/// Iterator type returned by [`special_numbers`].
///
/// The iterator ends after the largest special `i64` rather than overflowing.
#[derive(Debug, Clone)]
pub struct SpecialNumbers {
    /// The next candidate to test, or `None` once `i64` is exhausted.
    next: Option<i64>,
}

impl SpecialNumbers {
    /// Returns an iterator over the special numbers greater than or equal to
    /// `n`, in ascending order.
    pub fn starting_at(n: i64) -> SpecialNumbers {
        // Special numbers are odd, and the smallest is 3.
        SpecialNumbers {
            next: Some(n.max(3) | 1),
        }
    }
}

impl Iterator for SpecialNumbers {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let mut candidate = self.next?;
        loop {
            let following = candidate.checked_add(2);
            if is_special(candidate) {
                self.next = following;
                return Some(candidate);
            }
            match following {
                Some(n) => candidate = n,
                None => {
                    self.next = None;
                    return None;
                }
            }
        }
    }
}

impl FusedIterator for SpecialNumbers {}
