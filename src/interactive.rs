//! Interactive script selection.
//!
//! Builds one flat menu over all sources, labeled by origin, and maps the
//! choice back to a [`Resolution`] with the same dispatch semantics as the
//! resolution pipeline: manifest scripts get the runner prefix, user scripts
//! run verbatim. Selecting from the menu never hits the fallback.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::package::Runner;
use crate::resolve::{NoRunnerDetected, Resolution, ScriptSource, ScriptSources};

/// One selectable menu entry.
struct Choice<'a> {
    source: ScriptSource,
    name: &'a str,
    command: &'a str,
}

impl Choice<'_> {
    fn label(&self) -> String {
        let origin = match self.source {
            ScriptSource::Manifest => "package",
            ScriptSource::Directory => "directory",
            // Fallback is never listed in the menu.
            ScriptSource::Global | ScriptSource::Fallback => "global",
        };
        format!("[{origin}] {}", self.name)
    }
}

/// Prompt the user to pick a script from all sources.
///
/// Returns `Ok(None)` when there is nothing to pick or the prompt was
/// dismissed (Escape).
///
/// # Errors
///
/// Returns an error when the terminal interaction fails, or with
/// [`NoRunnerDetected`] when a manifest script is chosen and no package
/// manager was detected.
pub fn select_script(sources: &ScriptSources, runner: Option<Runner>) -> Result<Option<Resolution>> {
    let mut choices = Vec::new();

    for (name, command) in &sources.manifest {
        choices.push(Choice {
            source: ScriptSource::Manifest,
            name,
            command,
        });
    }
    for (name, command) in &sources.directory {
        choices.push(Choice {
            source: ScriptSource::Directory,
            name,
            command,
        });
    }
    for (name, command) in &sources.global {
        choices.push(Choice {
            source: ScriptSource::Global,
            name,
            command,
        });
    }

    if choices.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = choices.iter().map(Choice::label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a script to run")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    let Some(index) = selection else {
        return Ok(None);
    };
    let choice = &choices[index];

    let command = match choice.source {
        ScriptSource::Manifest => {
            let runner = runner.ok_or(NoRunnerDetected)?;
            runner.run_command(choice.name)
        }
        _ => choice.command.to_string(),
    };

    Ok(Some(Resolution {
        source: choice.source,
        command,
    }))
}
