//! Per-invocation run context.
//!
//! Collects the working directory and output-mode flags once at startup and
//! threads them through the resolution pipeline and executor call sites, so
//! no component reads process-global mutable state.

use std::io;
use std::path::PathBuf;

/// Context for one invocation of the tool.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Working directory the invocation runs in.
    pub cwd: PathBuf,
    /// Suppress informational output (the `Executing: ...` line).
    pub quiet: bool,
    /// Print commands without executing them.
    pub dry_run: bool,
}

impl RunContext {
    /// Build a context from the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new(quiet: bool, dry_run: bool) -> io::Result<Self> {
        Ok(Self {
            cwd: std::env::current_dir()?,
            quiet,
            dry_run,
        })
    }

    /// Build a context rooted at an explicit directory (used in tests).
    pub fn with_cwd(cwd: PathBuf, quiet: bool, dry_run: bool) -> Self {
        Self {
            cwd,
            quiet,
            dry_run,
        }
    }

    /// The directory-script key for this invocation.
    ///
    /// This is the raw working directory string; lookups match it exactly,
    /// with no canonicalization, so `/a/b` and a symlinked equivalent are
    /// distinct keys.
    pub fn cwd_key(&self) -> String {
        self.cwd.to_string_lossy().into_owned()
    }
}
