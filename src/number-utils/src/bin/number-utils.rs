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

//! Classifies integers as special or not.

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use number_utils::cli::{self, Operand};
use number_utils::tracing::StderrLogConfig;
use tracing::debug;
use tracing_subscriber::filter::Targets;

/// Classify integers as special (odd primes) or not.
#[derive(clap::Parser)]
struct Args {
    /// Output format.
    #[clap(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Only print the numbers that are special.
    #[clap(long)]
    only_special: bool,
    /// Which tracing events to log to stderr.
    #[clap(
        long,
        env = "NUMBER_UTILS_LOG_FILTER",
        value_name = "FILTER",
        default_value = "warn"
    )]
    log_filter: Targets,
    /// Integers to classify, as `N`, `LO..HI`, or `LO..=HI`.
    ///
    /// Negative operands must follow `--`.
    #[clap(required = true, value_name = "OPERAND")]
    operands: Vec<Operand>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One `N<TAB>true|false` line per number.
    Text,
    /// One JSON object per line.
    Json,
}

fn main() -> anyhow::Result<()> {
    let args: Args = cli::parse_args();
    number_utils::tracing::configure(StderrLogConfig {
        prefix: None,
        filter: args.log_filter,
    })?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for operand in &args.operands {
        debug!(%operand, "classifying operand");
        for n in operand.values() {
            let classification = number_utils::classify(n);
            if args.only_special && !classification.special {
                continue;
            }
            match args.format {
                OutputFormat::Text => {
                    writeln!(out, "{}\t{}", classification.n, classification.special)?
                }
                OutputFormat::Json => {
                    serde_json::to_writer(&mut out, &classification)?;
                    writeln!(out)?;
                }
            }
        }
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}
