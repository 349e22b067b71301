//! CLI argument definitions for rsr.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! The positional words double as "script name plus arguments" when running
//! and as the command text when adding a script, mirroring how the flags
//! compose: `rsr -a lint eslint . --fix` stores `eslint . --fix` under
//! `lint`.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

/// CLI tool for detecting and running package.json scripts.
#[derive(Parser, Debug)]
#[command(name = "rsr")]
#[command(author, version, long_about = None)]
#[command(arg_required_else_help = false)]
pub struct Cli {
    /// Script to run, followed by arguments to pass along
    #[arg(value_name = "SCRIPT", trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,

    /// List all scripts
    #[arg(short, long)]
    pub list: bool,

    /// Run in interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Add a global script under KEY (command taken from the remaining words)
    #[arg(short, long, value_name = "KEY")]
    pub add: Option<String>,

    /// Delete a global script
    #[arg(short, long, value_name = "KEY")]
    pub delete: Option<String>,

    /// Add a directory script under KEY (command taken from the remaining words)
    #[arg(long = "add-dir", value_name = "KEY")]
    pub add_dir: Option<String>,

    /// Delete a directory script
    #[arg(long = "delete-dir", value_name = "KEY")]
    pub delete_dir: Option<String>,

    /// Print the current configuration as JSON
    #[arg(long)]
    pub export: bool,

    /// Import configuration from a JSON file
    #[arg(long, value_name = "FILE")]
    pub import: Option<PathBuf>,

    /// Replace the whole configuration on import instead of merging
    #[arg(long, requires = "import")]
    pub replace: bool,

    /// Show the command without executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the configuration directory
    #[arg(long, value_name = "PATH", env = "RSR_CONFIG_DIR", hide = true)]
    pub config_dir: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The script name to resolve, if any.
    pub fn script(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Arguments following the script name.
    pub fn script_args(&self) -> &[String] {
        if self.words.is_empty() {
            &[]
        } else {
            &self.words[1..]
        }
    }

    /// All positional words joined into a command string (used by the add
    /// flags).
    pub fn command_value(&self) -> Option<String> {
        if self.words.is_empty() {
            None
        } else {
            Some(self.words.join(" "))
        }
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "rsr", &mut std::io::stdout());
    }
}
