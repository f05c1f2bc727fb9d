//! Child process execution — spawn the translated command and report
//! its exit status verbatim.

use anyhow::{Context, Result};
use std::process::Command;

use crate::args::SpawnParams;

/// Run the translated command and block until it exits.
///
/// The child's exit status is returned as-is; the wrapper never
/// reinterprets it or retries. A child killed by a signal carries no
/// exit code, which is reported as a general error.
pub fn run(params: &SpawnParams) -> Result<i32> {
    tracing::debug!(command = params.command, args = ?params.args, "spawning");

    let status = Command::new(params.command)
        .args(&params.args)
        .status()
        .with_context(|| format!("Failed to execute {}", params.command))?;

    Ok(status.code().unwrap_or(1))
}
