//! Handlers for the `check` command group.

use std::path::Path;

use crate::cli::{output, CheckEngineArgs};
use crate::config::Config;
use crate::engine::selftest;
use crate::error::{Error, Result};

/// Execute `check engine`: run the self-test suite and report counts.
pub fn execute_engine(args: &CheckEngineArgs) -> Result<()> {
    let report = selftest::run(args.seed);

    output::section("Engine self-test");
    for outcome in report.outcomes() {
        if outcome.passed() {
            output::success(outcome.name());
        } else {
            output::error(&format!(
                "{}: {}",
                outcome.name(),
                outcome.failure().unwrap_or("failed")
            ));
        }
    }

    output::field("Passed", report.passed());
    output::field("Failed", report.failed());

    if !report.all_passed() {
        return Err(Error::SelftestFailed {
            failed: report.failed(),
            total: report.outcomes().len(),
        });
    }

    output::success("All engine checks passed");
    Ok(())
}

/// Execute `check config`: validate the configuration file.
pub fn execute_config(path: &Path) -> Result<()> {
    Config::load(path)?;
    output::success("Configuration is valid");
    Ok(())
}
