//! Script resolution pipeline.
//!
//! Given a script name, the sources are tried in a fixed order: manifest
//! scripts, then directory scripts, then global scripts, then the
//! package-manager fallback. The first match wins; there are no retries.
//! Manifest hits and the fallback need a detected package manager — when
//! none is found, resolution fails with a user-facing error instead of
//! guessing a default.

use thiserror::Error;

use crate::config::ScriptMap;
use crate::package::Runner;

/// Which source a resolution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptSource {
    /// A script declared in package.json.
    Manifest,
    /// A user script bound to the current directory.
    Directory,
    /// A user script available everywhere.
    Global,
    /// No source matched; the input is forwarded to the package manager.
    Fallback,
}

impl ScriptSource {
    /// Heading for the pre-execution info line.
    pub fn execution_heading(&self) -> &'static str {
        match self {
            ScriptSource::Manifest => "Executing",
            ScriptSource::Directory => "Executing directory script",
            ScriptSource::Global => "Executing global script",
            ScriptSource::Fallback => "Executing command",
        }
    }

    /// Noun used in failure diagnostics.
    pub fn failure_noun(&self) -> &'static str {
        match self {
            ScriptSource::Manifest => "Script",
            ScriptSource::Directory => "Directory script",
            ScriptSource::Global => "Global script",
            ScriptSource::Fallback => "Command",
        }
    }

    /// Noun used in spawn-error diagnostics.
    pub fn error_noun(&self) -> &'static str {
        match self {
            ScriptSource::Manifest => "script",
            ScriptSource::Directory => "directory script",
            ScriptSource::Global => "global script",
            ScriptSource::Fallback => "command",
        }
    }
}

/// A resolved script: where it came from and the concrete command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The source that matched.
    pub source: ScriptSource,
    /// The full shell command to execute.
    pub command: String,
}

/// The three script mappings resolution consults, gathered for one
/// invocation.
#[derive(Debug, Default, Clone)]
pub struct ScriptSources {
    /// Scripts from the project's package.json.
    pub manifest: ScriptMap,
    /// User scripts bound to the current directory.
    pub directory: ScriptMap,
    /// User scripts available everywhere.
    pub global: ScriptMap,
}

/// Resolution failed because no package manager could be detected.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("No package manager detected. Please ensure you have a lock file (package-lock.json, yarn.lock, etc.)")]
pub struct NoRunnerDetected;

/// Resolve a script name against all sources in priority order.
///
/// Extra arguments are appended to the composed command, shell-quoted.
/// Manifest hits run as `<runner> run <name>`; directory and global hits run
/// their stored command verbatim; the fallback forwards the whole input to
/// the package manager (`rsr install lodash` becomes `npm install lodash`).
///
/// # Errors
///
/// Returns [`NoRunnerDetected`] when the match requires a package manager
/// (manifest hit or fallback) and none was detected.
pub fn resolve(
    name: &str,
    extra_args: &[String],
    sources: &ScriptSources,
    runner: Option<Runner>,
) -> Result<Resolution, NoRunnerDetected> {
    if sources.manifest.contains_key(name) {
        let runner = runner.ok_or(NoRunnerDetected)?;
        return Ok(Resolution {
            source: ScriptSource::Manifest,
            command: with_args(runner.run_command(name), extra_args),
        });
    }
    log::debug!("'{name}' not in manifest scripts");

    if let Some(command) = sources.directory.get(name) {
        return Ok(Resolution {
            source: ScriptSource::Directory,
            command: with_args(command.clone(), extra_args),
        });
    }
    log::debug!("'{name}' not in directory scripts");

    if let Some(command) = sources.global.get(name) {
        return Ok(Resolution {
            source: ScriptSource::Global,
            command: with_args(command.clone(), extra_args),
        });
    }
    log::debug!("'{name}' not in global scripts, falling back to the package manager");

    let runner = runner.ok_or(NoRunnerDetected)?;
    Ok(Resolution {
        source: ScriptSource::Fallback,
        command: with_args(runner.fallback_command(name), extra_args),
    })
}

/// Append extra arguments to a composed command, quoting where needed.
fn with_args(base: String, args: &[String]) -> String {
    if args.is_empty() {
        base
    } else {
        format!("{base} {}", shell_words::join(args))
    }
}
