// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use deploy_verify_tools::{
    core::{explorer::ExplorerLink, verification::VerificationOutcome},
    ops::RunReport,
};

use style::{BOLD, ERROR, WARN};

mod style;

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

/// Print the batch summary, any failures, and the explorer links.
pub fn print_report(report: &RunReport) {
    println!(
        "Verification summary: {} verified, {} skipped, {} failed",
        report.verified(),
        report.skipped(),
        report.failed()
    );
    for job in &report.outcomes {
        if let VerificationOutcome::Failed(failure) = &job.outcome {
            let retry = if failure.kind.is_retryable() {
                " (transient, re-run to retry)"
            } else {
                ""
            };
            println!(
                "{WARN}- {} at {}: {failure}{retry}{WARN:#}",
                job.contract_name, job.address
            );
        }
    }
    print_links(&report.links);
}

/// Explorer links grouped under a heading per category. Prints nothing without links.
pub fn print_links(links: &[ExplorerLink]) {
    if links.is_empty() {
        return;
    }
    println!("Explorer links:");
    let mut category = None;
    for link in links {
        if category != Some(link.category.as_str()) {
            println!("{BOLD}{}:{BOLD:#}", link.category);
            category = Some(link.category.as_str());
        }
        println!("{link}");
    }
}
