// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use regex::Regex;

pub mod color;

lazy_static::lazy_static! {
    static ref ANSI_ESCAPE: Regex =
        Regex::new(r"\x1b\[[0-9;]*[ABCDHJKSTfGmsu]").expect("valid ANSI escape regex");
}

/// Remove ANSI colour codes from captured process output.
pub fn strip_color(s: impl AsRef<str>) -> String {
    ANSI_ESCAPE.replace_all(s.as_ref(), "").into_owned()
}
