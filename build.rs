//! Build script for rsr.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "rsr")]
#[command(
    author,
    version,
    about = "CLI tool for detecting and running package.json scripts"
)]
#[command(
    long_about = "rsr resolves a script name against the project's package.json scripts, \
    per-directory user scripts, and global user scripts, in that order, and runs the first \
    match. Unmatched names are forwarded to the detected package manager \
    (npm, yarn, pnpm, bun, or deno)."
)]
struct Cli {
    /// Script to run, followed by arguments to pass along
    #[arg(value_name = "SCRIPT", trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,

    /// List all scripts
    #[arg(short, long)]
    list: bool,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Add a global script under KEY (command taken from the remaining words)
    #[arg(short, long, value_name = "KEY")]
    add: Option<String>,

    /// Delete a global script
    #[arg(short, long, value_name = "KEY")]
    delete: Option<String>,

    /// Add a directory script under KEY (command taken from the remaining words)
    #[arg(long = "add-dir", value_name = "KEY")]
    add_dir: Option<String>,

    /// Delete a directory script
    #[arg(long = "delete-dir", value_name = "KEY")]
    delete_dir: Option<String>,

    /// Print the current configuration as JSON
    #[arg(long)]
    export: bool,

    /// Import configuration from a JSON file
    #[arg(long, value_name = "FILE")]
    import: Option<PathBuf>,

    /// Replace the whole configuration on import instead of merging
    #[arg(long, requires = "import")]
    replace: bool,

    /// Show the command without executing it
    #[arg(long)]
    dry_run: bool,

    /// Suppress informational output
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("RSR_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer)
        .expect("Failed to generate man page");

    // Write to the build output directory
    let man_path = out_dir.join("rsr.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");

    // Also copy to docs directory for distribution
    let docs_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap()).join("docs");
    if docs_dir.exists() {
        let _ = fs::copy(&man_path, docs_dir.join("rsr.1"));
    }

    println!("cargo:rerun-if-changed=build.rs");
}
