//! Command Execution
//!
//! This module defines the process boundary every facade operation goes
//! through. [`CommandRunner`] is the seam: the facade only ever sees a command
//! string in and a [`ProcessResult`] out, so tests substitute a scripted runner
//! and production uses [`SystemRunner`].
//!
//! # Execution Contract
//! - A spawn failure (missing shell, permission denied) is an
//!   [`HanaError::Environment`](crate::HanaError::Environment) error
//! - A non-zero exit code is NOT an error at this layer; callers decide
//! - No retries and no timeout

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::Result;

mod process;

pub use process::ProcessResult;

/// Shell used to run the final command line
const SHELL: &str = "/bin/sh";

/// Process execution primitive
///
/// Implementations run `command` as `user` (when given), feeding `password`
/// to the process when one is required.
pub trait CommandRunner {
    /// Execute a command and capture its result
    ///
    /// Returns `Err` only when the process could not be run at all.
    fn execute(
        &self,
        command: &str,
        user: Option<&str>,
        password: Option<&str>,
    ) -> Result<ProcessResult>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn execute(
        &self,
        command: &str,
        user: Option<&str>,
        password: Option<&str>,
    ) -> Result<ProcessResult> {
        (**self).execute(command, user, password)
    }
}

/// Wrap a command so it runs in a login shell of `user`
///
/// The command text is embedded as-is; templates that contain double quotes
/// escape them already.
#[must_use]
pub fn format_su_cmd(command: &str, user: &str) -> String {
    format!("su -lc \"{command}\" {user}")
}

/// Runner backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(
        &self,
        command: &str,
        user: Option<&str>,
        password: Option<&str>,
    ) -> Result<ProcessResult> {
        let cmd = match user {
            Some(user) => format_su_cmd(command, user),
            None => command.to_string(),
        };
        debug!(command = %cmd, user = ?user, "Executing command");

        let mut child = Command::new(SHELL)
            .arg("-c")
            .arg(&cmd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Dropping stdin closes it, so tools waiting on input see EOF.
        if let Some(mut stdin) = child.stdin.take() {
            if let Some(password) = password {
                // A child that exits without reading its input is not a spawn failure
                if let Err(e) = writeln!(stdin, "{password}") {
                    if e.kind() != ErrorKind::BrokenPipe {
                        return Err(e.into());
                    }
                }
            }
        }

        let output = child.wait_with_output()?;
        let returncode = output.status.code().unwrap_or(-1);
        debug!(command = %cmd, returncode, "Command finished");

        Ok(ProcessResult::new(
            cmd,
            returncode,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        ))
    }
}
