//! Non-interactive script listing.
//!
//! Prints the three script sources in resolution order: package.json scripts
//! (with the detected package manager), directory scripts for the current
//! working directory, then global scripts. Listing is lenient about a broken
//! package.json — the other sources are still shown.

use crate::context::RunContext;
use crate::output;
use crate::package::{detect_runner, manifest_scripts};
use crate::registry::ScriptRegistry;

/// List all scripts visible from the current invocation.
pub fn list_scripts(ctx: &RunContext, registry: &ScriptRegistry<'_>) {
    let directory_scripts = registry.directory_scripts();
    let global_scripts = registry.global_scripts();

    match manifest_scripts(&ctx.cwd) {
        Ok(manifest) => {
            let runner = detect_runner(&ctx.cwd);
            let header = match runner {
                Some(runner) => format!("Package.json ({runner}):"),
                None => "Package.json:".to_string(),
            };
            output::heading(&header);
            for (name, command) in &manifest {
                output::info(&output::script_entry(name, command));
            }
        }
        Err(e) => output::error(&format!("Error listing scripts: {e}")),
    }

    if !directory_scripts.is_empty() {
        output::heading(&format!("\nDirectory scripts ({}):", registry.dir_key()));
        for (name, command) in &directory_scripts {
            output::info(&output::script_entry(name, command));
        }
    }

    if global_scripts.is_empty() {
        output::warn("\nNo global scripts found");
        return;
    }
    output::heading("\nGlobal scripts:");
    for (name, command) in &global_scripts {
        output::info(&output::script_entry(name, command));
    }
}
