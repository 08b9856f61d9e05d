//! Process Result and Output Inspection
//!
//! A [`ProcessResult`] is what every command execution returns: the exit code,
//! both captured streams and the command line that actually ran. Facade
//! operations query it with [`ProcessResult::find_pattern`] to recover textual
//! markers from tools that only report in free-form text.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Outcome of a single command execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Command line as executed (after any user wrapping)
    pub cmd: String,

    /// Exit code, -1 when the process was terminated by a signal
    pub returncode: i32,

    /// Captured standard output
    pub output: String,

    /// Captured standard error
    pub err: String,
}

impl ProcessResult {
    /// Create a new process result
    pub fn new(
        cmd: impl Into<String>,
        returncode: i32,
        output: impl Into<String>,
        err: impl Into<String>,
    ) -> Self {
        Self { cmd: cmd.into(), returncode, output: output.into(), err: err.into() }
    }

    /// Whether the command exited with code 0
    #[must_use]
    pub const fn success(&self) -> bool {
        self.returncode == 0
    }

    /// Lines of stdout followed by lines of stderr
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.output.lines().chain(self.err.lines())
    }

    /// Test `pattern` against every output line, stopping at the first match
    ///
    /// The pattern is matched from the start of each line. Inline flags such as
    /// `(?i)` apply. Absence of a match is `Ok(false)`, never an error; only a
    /// pattern that fails to compile is.
    pub fn find_pattern(&self, pattern: &str) -> Result<bool> {
        let regex = Regex::new(&format!("^(?:{pattern})"))?;
        Ok(self.find_regex(&regex))
    }

    /// Same as [`find_pattern`](Self::find_pattern) with a precompiled regex
    #[must_use]
    pub fn find_regex(&self, regex: &Regex) -> bool {
        self.lines().any(|line| regex.is_match(line))
    }
}
