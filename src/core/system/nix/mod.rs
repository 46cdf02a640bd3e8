#![cfg(unix)]
use crate::core::strategy::*;
use std::process::Command;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
use linux as os;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
use macos as os;

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod os {
    use crate::core::strategy::*;

    pub fn available_strategies() -> &'static [StrategyKind] {
        &[]
    }

    pub fn create(_kind: StrategyKind) -> Option<Box<dyn AccessStrategy>> {
        None
    }
}

use super::System;

/// Runs tray utilities as child processes, capturing their output.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<(), RunFailure> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            tracing::debug!(program, error = %e, "unable to start tray utility");
            RunFailure::NotStarted(e.raw_os_error().unwrap_or(libc::ENOENT) as RawCode)
        })?;

        if output.status.success() {
            return Ok(());
        }

        tracing::debug!(
            program,
            status = ?output.status.code(),
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "tray utility failed"
        );

        // killed by a signal
        Err(RunFailure::Exited(
            output.status.code().map(|c| c as RawCode).unwrap_or(RawCode::MAX),
        ))
    }
}

impl System {
    pub fn available_strategies() -> &'static [StrategyKind] {
        os::available_strategies()
    }

    pub(super) fn create(kind: StrategyKind) -> Option<Box<dyn AccessStrategy>> {
        os::create(kind)
    }

    pub fn is_elevated() -> bool {
        unsafe { libc::geteuid() == 0 }
    }

    /// Everything but a finished utility reports an `errno`.
    pub fn describe_code(_kind: StrategyKind, step: Step, code: RawCode) -> String {
        match step {
            Step::RunUtility if code == RawCode::MAX => "terminated by signal".to_owned(),
            Step::RunUtility => format!("exit status {}", code),
            _ => ::nix::errno::Errno::from_i32(code as i32).desc().to_owned(),
        }
    }
}
