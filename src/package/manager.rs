//! Package manager detection and command composition.
//!
//! The package manager is inferred from lock-file markers in the working
//! directory, checked in a fixed order. The first marker found wins; no
//! marker means no runner, which callers surface as a user-facing error
//! rather than assuming a default.

use std::path::Path;

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runner {
    /// Node Package Manager (npm)
    Npm,
    /// Yarn package manager
    Yarn,
    /// pnpm - Fast, disk space efficient package manager
    Pnpm,
    /// Bun - Fast all-in-one JavaScript runtime
    Bun,
    /// Deno runtime
    Deno,
}

impl Runner {
    /// Get the executable name for this runner.
    pub fn executable(&self) -> &'static str {
        match self {
            Runner::Npm => "npm",
            Runner::Yarn => "yarn",
            Runner::Pnpm => "pnpm",
            Runner::Bun => "bun",
            Runner::Deno => "deno",
        }
    }

    /// Lock-file markers that identify this runner.
    pub fn marker_files(&self) -> &'static [&'static str] {
        match self {
            Runner::Npm => &["package-lock.json"],
            Runner::Yarn => &["yarn.lock"],
            Runner::Pnpm => &["pnpm-lock.yaml"],
            Runner::Bun => &["bun.lockb", "bun.lock"],
            Runner::Deno => &["deno.lock"],
        }
    }

    /// All supported runners, in detection priority order.
    pub fn all() -> &'static [Runner] {
        &[
            Runner::Npm,
            Runner::Yarn,
            Runner::Pnpm,
            Runner::Bun,
            Runner::Deno,
        ]
    }

    /// Command that runs a manifest script.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_runner::package::Runner;
    ///
    /// assert_eq!(Runner::Npm.run_command("dev"), "npm run dev");
    /// assert_eq!(Runner::Yarn.run_command("build"), "yarn run build");
    /// ```
    pub fn run_command(&self, script: &str) -> String {
        format!("{} run {script}", self.executable())
    }

    /// Command that forwards a raw subcommand to the runner.
    ///
    /// Used by the resolution fallback: `rsr install` becomes `npm install`
    /// when npm is detected.
    pub fn fallback_command(&self, input: &str) -> String {
        format!("{} {input}", self.executable())
    }
}

impl std::fmt::Display for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.executable())
    }
}

/// Detect the package manager for a directory.
///
/// Checks each runner's lock-file markers in the fixed order npm, yarn, pnpm,
/// bun, deno; the first marker present wins. Returns `None` when no marker
/// exists.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use rs_runner::package::detect_runner;
///
/// if let Some(runner) = detect_runner(Path::new(".")) {
///     println!("Using: {runner}");
/// }
/// ```
pub fn detect_runner(dir: &Path) -> Option<Runner> {
    detect_runner_reason(dir).map(|(runner, _)| runner)
}

/// Detect the package manager and report which marker file matched.
pub fn detect_runner_reason(dir: &Path) -> Option<(Runner, String)> {
    for runner in Runner::all() {
        for marker in runner.marker_files() {
            if dir.join(marker).exists() {
                log::debug!("detected {runner} via {marker}");
                return Some((*runner, format!("found {marker}")));
            }
        }
    }
    None
}
