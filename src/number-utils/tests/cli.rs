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

use std::process::{Command, Output};

fn command(args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_number-utils"));
    command.args(args).env_remove("NUMBER_UTILS_LOG_FILTER");
    command
}

fn run(args: &[&str]) -> Output {
    command(args).output().expect("running number-utils")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("stdout is utf-8")
}

#[number_utils::test]
fn test_text_output() {
    let output = run(&["1", "2", "3", "13"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\tfalse\n2\tfalse\n3\ttrue\n13\ttrue\n");
}

#[number_utils::test]
fn test_ranges_and_only_special() {
    let output = run(&["--only-special", "0..=10", "11..18"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "3\ttrue\n5\ttrue\n7\ttrue\n11\ttrue\n13\ttrue\n17\ttrue\n"
    );
}

#[number_utils::test]
fn test_negative_operands() {
    let output = run(&["--", "-3..=-1", "-7"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-3\tfalse\n-2\tfalse\n-1\tfalse\n-7\tfalse\n");
}

#[number_utils::test]
fn test_flags_after_operands() {
    let output = run(&["5", "--format", "json"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), "{\"n\":5,\"special\":true}\n");

    let output = run(&[
        "9223372036854775780..=9223372036854775807",
        "--only-special",
    ]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), "9223372036854775783\ttrue\n");
}

#[number_utils::test]
fn test_json_output() {
    let output = run(&["--format", "json", "7", "8"]);
    assert!(output.status.success());
    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid json"))
        .collect();
    assert_eq!(
        lines,
        [
            serde_json::json!({"n": 7, "special": true}),
            serde_json::json!({"n": 8, "special": false}),
        ]
    );
}

#[number_utils::test]
fn test_invalid_operand() {
    let output = run(&["4", "nine"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid integer \"nine\""), "stderr: {stderr}");
}

#[number_utils::test]
fn test_missing_operands() {
    let output = run(&[]);
    assert!(!output.status.success());
}

#[number_utils::test]
fn test_default_log_filter_is_quiet() {
    let output = run(&["5"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{output:?}");
}

#[number_utils::test]
fn test_log_filter_flag() {
    let output = run(&["--log-filter", "debug", "5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5\ttrue\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("classifying operand"), "stderr: {stderr}");
    assert!(!stderr.contains("classified number"), "stderr: {stderr}");
}

#[number_utils::test]
fn test_log_filter_env() {
    let output = command(&["3"])
        .env("NUMBER_UTILS_LOG_FILTER", "number_utils=trace")
        .output()
        .expect("running number-utils");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3\ttrue\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("classified number"), "stderr: {stderr}");
    assert!(stderr.contains("classifying operand"), "stderr: {stderr}");
}
