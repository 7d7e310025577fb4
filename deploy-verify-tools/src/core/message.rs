// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::process::Output;

use serde::{Deserialize, Serialize};

use crate::utils::strip_color;

#[derive(Debug, Deserialize, Serialize)]
pub struct ProcessOutput {
    pub process_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    /// Capture a finished process, with colour codes stripped.
    pub fn new(process_name: impl Into<String>, output: Output) -> Self {
        Self {
            process_name: process_name.into(),
            stdout: strip_color(String::from_utf8_lossy(&output.stdout)),
            stderr: strip_color(String::from_utf8_lossy(&output.stderr)),
            exit_code: output.status.code(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Both streams, for pattern matching.
    pub fn text(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// The most specific line of output: the last one on stderr, falling back to stdout.
    pub fn summary(&self) -> String {
        last_line(&self.stderr)
            .or_else(|| last_line(&self.stdout))
            .map(str::to_owned)
            .unwrap_or_else(|| match self.exit_code {
                Some(code) => format!("{} exited with code {code}", self.process_name),
                None => format!("{} was terminated by a signal", self.process_name),
            })
    }
}

fn last_line(s: &str) -> Option<&str> {
    s.lines().rev().map(str::trim).find(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(stdout: &str, stderr: &str, exit_code: Option<i32>) -> ProcessOutput {
        ProcessOutput {
            process_name: "npx".to_owned(),
            stdout: stdout.to_owned(),
            stderr: stderr.to_owned(),
            exit_code,
        }
    }

    #[test]
    fn summary_prefers_stderr() {
        let out = output("Compiling...\n", "Error HH303\nUnrecognized task\n\n", Some(1));
        assert_eq!(out.summary(), "Unrecognized task");
        let out = output("Compiling...\nNothing to compile\n", "", Some(1));
        assert_eq!(out.summary(), "Nothing to compile");
        assert_eq!(output("", "", Some(2)).summary(), "npx exited with code 2");
        assert!(!output("", "", None).success());
    }
}
