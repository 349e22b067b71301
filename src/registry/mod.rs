//! User script registry.
//!
//! Answers "which scripts exist for this invocation" across the persisted
//! sources and owns the add/remove operations on them. Directory scripts are
//! keyed by the raw working-directory string captured at add time and matched
//! exactly on lookup.

mod validate;

pub use validate::{validate_script, ScriptCheck};

use crate::config::{Config, ConfigStore, ScriptMap};
use crate::output;

/// Registry over the persisted script sources for one invocation.
#[derive(Debug)]
pub struct ScriptRegistry<'a> {
    store: &'a ConfigStore,
    dir_key: String,
}

impl<'a> ScriptRegistry<'a> {
    /// Create a registry bound to a config store and a directory key.
    pub fn new(store: &'a ConfigStore, dir_key: impl Into<String>) -> Self {
        Self {
            store,
            dir_key: dir_key.into(),
        }
    }

    /// The directory key this registry resolves directory scripts against.
    pub fn dir_key(&self) -> &str {
        &self.dir_key
    }

    /// Globally available user scripts, or empty when not configured.
    pub fn global_scripts(&self) -> ScriptMap {
        self.store
            .load()
            .map(|config| config.global_scripts)
            .unwrap_or_default()
    }

    /// User scripts bound to the current directory, or empty.
    pub fn directory_scripts(&self) -> ScriptMap {
        self.store
            .load()
            .and_then(|mut config| config.directory_scripts.remove(&self.dir_key))
            .unwrap_or_default()
    }

    /// Add (or overwrite) a global script.
    ///
    /// Validates the command first; an invalid command aborts with an error
    /// diagnostic and nothing is written. Advisory warnings are printed but
    /// do not block. After writing, the config is re-read to confirm the
    /// value round-tripped.
    pub fn add_global_script(&self, key: &str, command: &str) {
        if !self.check_command(command) {
            return;
        }

        let mut config = self.store.load().unwrap_or_default();

        if config.global_scripts.contains_key(key) {
            output::warn(&format!("Global script '{key}' already exists. Overwriting..."));
        }

        config
            .global_scripts
            .insert(key.to_string(), command.to_string());

        if let Err(e) = self.store.write(&config) {
            output::error(&format!("Failed to write configuration: {e}"));
            return;
        }

        match self.store.load() {
            Some(updated) if updated.global_scripts.get(key).map(String::as_str) == Some(command) =>
            {
                output::success(&format!("Global script '{key}' added successfully."));
                if let Ok(json) = serde_json::to_string_pretty(&updated.global_scripts) {
                    output::detail(&json);
                }
            }
            _ => output::error("Failed to verify script was saved correctly."),
        }
    }

    /// Remove a global script.
    pub fn remove_global_script(&self, key: &str) {
        let Some(mut config) = self.store.load() else {
            output::warn("No global scripts configuration found.");
            return;
        };

        if config.global_scripts.remove(key).is_some() {
            if self.write_or_report(&config) {
                output::success(&format!("Global script '{key}' removed successfully."));
            }
        } else if config.global_scripts.is_empty() {
            output::warn(&format!(
                "Global script '{key}' not found. No global scripts defined."
            ));
        } else {
            let available: Vec<&str> =
                config.global_scripts.keys().map(String::as_str).collect();
            output::warn(&format!(
                "Global script '{key}' not found. Available: {}",
                available.join(", ")
            ));
        }
    }

    /// Add (or overwrite) a script bound to the current directory.
    pub fn add_directory_script(&self, key: &str, command: &str) {
        if !self.check_command(command) {
            return;
        }

        let mut config = self.store.load().unwrap_or_default();
        let dir = self.dir_key.clone();
        let entry = config.directory_scripts.entry(dir).or_default();

        if entry.contains_key(key) {
            output::warn(&format!(
                "Directory script '{key}' already exists for {}. Overwriting...",
                self.dir_key
            ));
        }

        entry.insert(key.to_string(), command.to_string());

        if let Err(e) = self.store.write(&config) {
            output::error(&format!("Failed to write configuration: {e}"));
            return;
        }

        let confirmed = self.store.load().is_some_and(|updated| {
            updated
                .directory_entry(&self.dir_key)
                .and_then(|scripts| scripts.get(key))
                .map(String::as_str)
                == Some(command)
        });

        if confirmed {
            output::success(&format!(
                "Directory script '{key}' added successfully for {}",
                self.dir_key
            ));
            if let Some(updated) = self.store.load() {
                if let Some(scripts) = updated.directory_entry(&self.dir_key) {
                    if let Ok(json) = serde_json::to_string_pretty(scripts) {
                        output::detail(&json);
                    }
                }
            }
        } else {
            output::error("Failed to verify script was saved correctly.");
        }
    }

    /// Remove a script bound to the current directory.
    ///
    /// Removing the last script of a directory deletes the directory's entry
    /// entirely, so no empty mappings persist.
    pub fn remove_directory_script(&self, key: &str) {
        let Some(mut config) = self.store.load() else {
            output::warn("No directory scripts found for current directory.");
            return;
        };

        let Some(entry) = config.directory_scripts.get_mut(&self.dir_key) else {
            output::warn("No directory scripts found for current directory.");
            return;
        };

        if entry.remove(key).is_some() {
            if entry.is_empty() {
                config.directory_scripts.remove(&self.dir_key);
            }
            if self.write_or_report(&config) {
                output::success(&format!("Directory script '{key}' removed successfully."));
            }
        } else if entry.is_empty() {
            output::warn(&format!(
                "Directory script '{key}' not found in current directory."
            ));
        } else {
            let available: Vec<&str> = entry.keys().map(String::as_str).collect();
            output::warn(&format!(
                "Directory script '{key}' not found. Available: {}",
                available.join(", ")
            ));
        }
    }

    /// Validate a command, printing diagnostics. Returns false when the
    /// command must not be saved.
    fn check_command(&self, command: &str) -> bool {
        let check = validate_script(command);
        if !check.valid {
            if let Some(message) = check.warnings.first() {
                output::error(message);
            }
            return false;
        }
        for warning in &check.warnings {
            output::warn(&format!("Warning: {warning}"));
        }
        true
    }

    fn write_or_report(&self, config: &Config) -> bool {
        if let Err(e) = self.store.write(config) {
            output::error(&format!("Failed to write configuration: {e}"));
            return false;
        }
        true
    }
}
