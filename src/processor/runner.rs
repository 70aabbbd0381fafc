//! Command Runner - the OS boundary
//!
//! Backends never touch `std::process` or PATH directly. They go through a
//! `CommandRunner`, so tests can substitute a recording fake.

use std::io;
use std::process::Command;

/// Result of one finished external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Human-readable exit status, e.g. `exit status: 1`.
    pub status: String,
    /// stdout followed by stderr.
    pub combined: String,
}

impl CommandOutput {
    pub fn ok() -> Self {
        Self {
            success: true,
            status: "exit status: 0".to_string(),
            combined: String::new(),
        }
    }

    pub fn failed(status: impl Into<String>, combined: impl Into<String>) -> Self {
        Self {
            success: false,
            status: status.into(),
            combined: combined.into(),
        }
    }
}

/// Lookup and execution of external programs
pub trait CommandRunner: Send + Sync {
    /// Whether `program` resolves on PATH. Never fails, only reports.
    fn exists(&self, program: &str) -> bool;

    /// Run `program` to completion, capturing its output.
    ///
    /// `Err` means the process could not be started at all.
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Runner backed by the real PATH and `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn exists(&self, program: &str) -> bool {
        let found = which::which(program).is_ok();
        tracing::debug!(program, found, "PATH lookup");
        found
    }

    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        tracing::debug!(program, args = ?args, "running external command");

        let output = Command::new(program).args(args).output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            combined,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_not_found() {
        assert!(!SystemRunner.exists("nonexistent_command_xyz_123"));
    }

    #[test]
    fn test_spawn_failure_is_io_error() {
        let result = SystemRunner.run("nonexistent_command_xyz_123", &[]);
        assert!(result.is_err());
    }
}
