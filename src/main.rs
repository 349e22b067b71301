//! rsr - run scripts
//!
//! Entry point for the rsr CLI application.

use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use rs_runner::cli::Cli;
use rs_runner::config::{import_config, import_conflicts, Config, ConfigStore};
use rs_runner::context::RunContext;
use rs_runner::display;
use rs_runner::error::{exit_code, RsrError};
use rs_runner::interactive;
use rs_runner::output;
use rs_runner::package::{detect_runner, manifest_scripts};
use rs_runner::registry::ScriptRegistry;
use rs_runner::resolve::{resolve, ScriptSources};
use rs_runner::runner::{run_resolution, ShellSpawner};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            if let Some(rsr_err) = err.downcast_ref::<RsrError>() {
                eprintln!("Error: {rsr_err}");
                return ExitCode::from(rsr_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    init_logging(cli.verbose);

    let ctx = RunContext::new(cli.quiet, cli.dry_run)
        .context("Failed to determine current directory")?;
    let store = ConfigStore::new(cli.config_dir.clone());
    let registry = ScriptRegistry::new(&store, ctx.cwd_key());

    if cli.list {
        display::list_scripts(&ctx, &registry);
        return Ok(exit_code::SUCCESS);
    }

    if let Some(key) = &cli.add {
        let Some(value) = cli.command_value() else {
            output::warn("Please specify a value for the script");
            return Ok(exit_code::SUCCESS);
        };
        registry.add_global_script(key, &value);
        return Ok(exit_code::SUCCESS);
    }

    if let Some(key) = &cli.add_dir {
        let Some(value) = cli.command_value() else {
            output::warn("Please specify a value for the directory script");
            return Ok(exit_code::SUCCESS);
        };
        registry.add_directory_script(key, &value);
        return Ok(exit_code::SUCCESS);
    }

    if let Some(key) = &cli.delete {
        registry.remove_global_script(key);
        return Ok(exit_code::SUCCESS);
    }

    if let Some(key) = &cli.delete_dir {
        registry.remove_directory_script(key);
        return Ok(exit_code::SUCCESS);
    }

    if cli.export {
        return export_config(&store);
    }

    if let Some(file) = &cli.import {
        return import_from_file(&store, file, cli.replace);
    }

    if cli.interactive {
        return run_interactive(&ctx, &registry);
    }

    let Some(script) = cli.script() else {
        // No script given: show what could be run.
        display::list_scripts(&ctx, &registry);
        return Ok(exit_code::SUCCESS);
    };

    // Order of lookup: package.json -> directory -> global -> runner <command>
    let sources = ScriptSources {
        manifest: manifest_scripts(&ctx.cwd)?,
        directory: registry.directory_scripts(),
        global: registry.global_scripts(),
    };
    let runner = detect_runner(&ctx.cwd);

    match resolve(script, cli.script_args(), &sources, runner) {
        Ok(resolution) => Ok(run_resolution(&ShellSpawner, &ctx, &resolution)),
        Err(e) => {
            output::error(&e.to_string());
            Ok(exit_code::GENERAL_ERROR)
        }
    }
}

/// Initialize env_logger; `--verbose` raises the default filter to debug.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Print the serialized configuration to stdout.
fn export_config(store: &ConfigStore) -> Result<i32> {
    match store.export() {
        Some(json) => {
            println!("{json}");
            Ok(exit_code::SUCCESS)
        }
        None => {
            output::warn("No configuration found to export.");
            Ok(exit_code::SUCCESS)
        }
    }
}

/// Read, validate and apply a configuration file.
fn import_from_file(store: &ConfigStore, file: &Path, replace: bool) -> Result<i32> {
    let content = match std::fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            output::error(&format!("Error reading import file: {e}"));
            return Ok(exit_code::GENERAL_ERROR);
        }
    };

    let candidate = match Config::from_json(&content) {
        Ok(candidate) => candidate,
        Err(e) => {
            output::error(&format!("Invalid configuration: {e}"));
            return Ok(exit_code::GENERAL_ERROR);
        }
    };

    if replace {
        if !confirm("Replace the entire configuration?")? {
            output::info("Import cancelled.");
            return Ok(exit_code::SUCCESS);
        }
    } else {
        let current = store.load().unwrap_or_default();
        let conflicts = import_conflicts(&current, &candidate);
        if !conflicts.is_empty() {
            output::warn(&format!(
                "{} existing script(s) will be overwritten:",
                conflicts.len()
            ));
            for conflict in &conflicts {
                output::warn(&format!("  {conflict}"));
            }
            if !confirm("Continue with import?")? {
                output::info("Import cancelled.");
                return Ok(exit_code::SUCCESS);
            }
        }
    }

    match import_config(store, candidate, replace) {
        Some(summary) => {
            output::success(&summary);
            Ok(exit_code::SUCCESS)
        }
        None => Ok(exit_code::GENERAL_ERROR),
    }
}

/// Ask the user to confirm a destructive import step.
///
/// Off a terminal (scripts, CI) the confirmation is skipped and the
/// operation proceeds.
fn confirm(prompt: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Ok(true);
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

/// Run the interactive selection menu and execute the chosen script.
fn run_interactive(ctx: &RunContext, registry: &ScriptRegistry<'_>) -> Result<i32> {
    let sources = ScriptSources {
        manifest: manifest_scripts(&ctx.cwd)?,
        directory: registry.directory_scripts(),
        global: registry.global_scripts(),
    };
    let runner = detect_runner(&ctx.cwd);

    match interactive::select_script(&sources, runner) {
        Ok(Some(resolution)) => Ok(run_resolution(&ShellSpawner, ctx, &resolution)),
        Ok(None) => {
            output::warn("No script selected.");
            Ok(exit_code::SUCCESS)
        }
        Err(e) => {
            output::error(&format!("{e}"));
            Ok(exit_code::GENERAL_ERROR)
        }
    }
}
