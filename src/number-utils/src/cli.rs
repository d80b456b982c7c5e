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

//! Command-line parsing utilities.

use std::fmt;
use std::num::ParseIntError;
use std::ops::{Range, RangeInclusive};
use std::str::FromStr;

use clap::Parser;

/// A help template for use with clap that does not include the name of the
/// binary or the version in the help output.
const NO_VERSION_HELP_TEMPLATE: &str = "{about}

USAGE:
    {usage}

{all-args}";

/// Parses command-line arguments according to a clap parser after applying
/// our customizations.
///
/// Exits the process with a usage message if the arguments are invalid.
pub fn parse_args<O>() -> O
where
    O: Parser,
{
    let clap = O::command()
        .disable_version_flag(true)
        .args_override_self(true)
        .help_template(NO_VERSION_HELP_TEMPLATE);
    O::from_arg_matches(&clap.get_matches()).unwrap_or_else(|e| e.exit())
}

/// A command-line operand naming the integers to classify.
///
/// Parses from one of three forms:
///
///   * `N`, a single integer;
///   * `LO..HI`, the integers from `LO` up to but excluding `HI`;
///   * `LO..=HI`, the integers from `LO` up to and including `HI`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A single integer.
    Single(i64),
    /// A half-open range of integers.
    Range(Range<i64>),
    /// A closed range of integers.
    Inclusive(RangeInclusive<i64>),
}

impl Operand {
    /// Returns an iterator over the integers named by this operand, in
    /// ascending order.
    pub fn values(&self) -> impl Iterator<Item = i64> {
        let bounds = match self {
            Operand::Single(n) => Some(*n..=*n),
            // Parsing guarantees `start <= end`, so `end - 1` cannot underflow
            // when the range is non-empty.
            Operand::Range(r) if r.start == r.end => None,
            Operand::Range(r) => Some(r.start..=r.end - 1),
            Operand::Inclusive(r) => Some(r.clone()),
        };
        bounds.into_iter().flatten()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Single(n) => write!(f, "{}", n),
            Operand::Range(r) => write!(f, "{}..{}", r.start, r.end),
            Operand::Inclusive(r) => write!(f, "{}..={}", r.start(), r.end()),
        }
    }
}

impl FromStr for Operand {
    type Err = ParseOperandError;

    fn from_str(s: &str) -> Result<Operand, ParseOperandError> {
        if let Some((start, end)) = s.split_once("..=") {
            let (start, end) = (parse_int(start)?, parse_int(end)?);
            if end < start {
                return Err(ParseOperandError::EmptyRange { start, end });
            }
            Ok(Operand::Inclusive(start..=end))
        } else if let Some((start, end)) = s.split_once("..") {
            let (start, end) = (parse_int(start)?, parse_int(end)?);
            if end < start {
                return Err(ParseOperandError::EmptyRange { start, end });
            }
            Ok(Operand::Range(start..end))
        } else {
            Ok(Operand::Single(parse_int(s)?))
        }
    }
}

fn parse_int(s: &str) -> Result<i64, ParseOperandError> {
    s.parse().map_err(|source| ParseOperandError::InvalidInteger {
        input: s.to_string(),
        source,
    })
}

/// An error returned when parsing an [`Operand`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseOperandError {
    /// A bound or single value was not a valid `i64`.
    #[error("invalid integer {input:?}: {source}")]
    InvalidInteger {
        /// The text that failed to parse.
        input: String,
        /// The underlying parse failure.
        source: ParseIntError,
    },
    /// The end of a range precedes its start.
    #[error("range end {end} precedes range start {start}")]
    EmptyRange {
        /// The start of the range.
        start: i64,
        /// The end of the range.
        end: i64,
    },
}
