//! Command execution.
//!
//! Runs a resolved command to completion in a shell child process with
//! inherited stdio. Process creation sits behind the [`Spawn`] trait so tests
//! can substitute a fake; the real implementation is [`ShellSpawner`].

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use colored::Colorize;

use crate::context::RunContext;
use crate::error::exit_code;
use crate::output;
use crate::resolve::Resolution;

/// Outcome of a completed child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Exit code of the child; `None` when it was terminated by a signal.
    pub code: Option<i32>,
}

impl ExecutionOutcome {
    /// Whether the child exited successfully.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Process creation abstraction.
pub trait Spawn {
    /// Run a shell-interpreted command to completion.
    ///
    /// # Errors
    ///
    /// Returns an error when the process cannot be spawned at all (e.g. the
    /// shell is unavailable).
    fn spawn(&self, command: &str, cwd: &Path) -> io::Result<ExecutionOutcome>;
}

/// Real spawner: `sh -c` on Unix, `cmd /C` on Windows, with the parent's
/// stdin/stdout/stderr inherited so the child's output is not captured or
/// transformed.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellSpawner;

impl Spawn for ShellSpawner {
    fn spawn(&self, command: &str, cwd: &Path) -> io::Result<ExecutionOutcome> {
        let (shell, flag) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };

        let status = Command::new(shell)
            .arg(flag)
            .arg(command)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(ExecutionOutcome {
            code: status.code(),
        })
    }
}

/// Execute a resolution and report its lifecycle.
///
/// Prints the command before running it (suppressed with `--quiet`; with
/// `--dry-run` the command is printed instead of run). A zero exit is
/// silent; a nonzero exit, a signal termination or a spawn failure each
/// produce exactly one error diagnostic. The returned code becomes the
/// parent's exit code.
pub fn run_resolution(spawner: &dyn Spawn, ctx: &RunContext, resolution: &Resolution) -> i32 {
    if ctx.dry_run {
        output::info(&format!("Would run: {}", resolution.command));
        return exit_code::SUCCESS;
    }

    if !ctx.quiet {
        output::info(&format!(
            "{} {}",
            format!("{}:", resolution.source.execution_heading()).green(),
            resolution.command
        ));
    }

    match spawner.spawn(&resolution.command, &ctx.cwd) {
        Err(e) => {
            output::error(&format!(
                "Error executing {}: {e}",
                resolution.source.error_noun()
            ));
            exit_code::GENERAL_ERROR
        }
        Ok(outcome) => match outcome.code {
            Some(0) => exit_code::SUCCESS,
            Some(code) => {
                output::error(&format!(
                    "{} exited with code {code}",
                    resolution.source.failure_noun()
                ));
                code
            }
            None => {
                output::error(&format!(
                    "{} terminated by signal (no exit code)",
                    resolution.source.failure_noun()
                ));
                exit_code::INTERRUPTED
            }
        },
    }
}
