//! Configuration import: conflict detection, key-level merge, full replace.

use crate::output;

use super::store::ConfigStore;
use super::types::Config;

/// Counters for one merge application, split by scope.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Global scripts that did not exist before.
    pub global_added: usize,
    /// Global scripts whose key already existed (identical values included).
    pub global_updated: usize,
    /// Directory scripts that did not exist before.
    pub directory_added: usize,
    /// Directory scripts whose key already existed.
    pub directory_updated: usize,
}

impl MergeOutcome {
    /// Total number of keys touched.
    pub fn total(&self) -> usize {
        self.global_added + self.global_updated + self.directory_added + self.directory_updated
    }

    /// Human-readable summary of the merge.
    pub fn summary(&self) -> String {
        format!(
            "Global scripts: {} added, {} updated. Directory scripts: {} added, {} updated.",
            self.global_added, self.global_updated, self.directory_added, self.directory_updated
        )
    }
}

/// List the keys of `candidate` that already exist in `current`.
///
/// One identifier per colliding key: `global:<key>` for global scripts and
/// `dir:<path>:<key>` for directory scripts. A key colliding with an
/// identical value is still reported; whether to re-apply it is the caller's
/// decision.
pub fn conflicts(current: &Config, candidate: &Config) -> Vec<String> {
    let mut found = Vec::new();

    for key in candidate.global_scripts.keys() {
        if current.global_scripts.contains_key(key) {
            found.push(format!("global:{key}"));
        }
    }

    for (dir, scripts) in &candidate.directory_scripts {
        if let Some(existing) = current.directory_entry(dir) {
            for key in scripts.keys() {
                if existing.contains_key(key) {
                    found.push(format!("dir:{dir}:{key}"));
                }
            }
        }
    }

    found
}

/// Merge `candidate` into `current` key by key.
///
/// Global scripts merge flatly; directory scripts merge per directory,
/// creating new directory entries as needed. An existing key is overwritten
/// and counted as updated even when the value is identical.
pub fn merge_into(current: &mut Config, candidate: &Config) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for (key, command) in &candidate.global_scripts {
        if current.global_scripts.contains_key(key) {
            outcome.global_updated += 1;
        } else {
            outcome.global_added += 1;
        }
        current
            .global_scripts
            .insert(key.clone(), command.clone());
    }

    for (dir, scripts) in &candidate.directory_scripts {
        let entry = current.directory_scripts.entry(dir.clone()).or_default();
        for (key, command) in scripts {
            if entry.contains_key(key) {
                outcome.directory_updated += 1;
            } else {
                outcome.directory_added += 1;
            }
            entry.insert(key.clone(), command.clone());
        }
    }

    outcome
}

/// Apply an already-validated candidate configuration.
///
/// With `replace` the whole configuration is overwritten and the summary
/// reports what was imported; otherwise the candidate is merged into the
/// current configuration (an empty one when none exists). Returns
/// `"No changes made"` when a merge touches nothing, and `None` when the
/// underlying write fails.
pub fn apply(store: &ConfigStore, candidate: Config, replace: bool) -> Option<String> {
    if replace {
        let globals = candidate.global_scripts.len();
        let directory = candidate.directory_script_count();
        if let Err(e) = store.write(&candidate) {
            output::error(&format!("Failed to write configuration: {e}"));
            return None;
        }
        return Some(format!(
            "Imported {globals} global script(s) and {directory} directory script(s)"
        ));
    }

    let mut current = store.load().unwrap_or_default();
    let outcome = merge_into(&mut current, &candidate);

    if outcome.total() == 0 {
        return Some("No changes made".to_string());
    }

    if let Err(e) = store.write(&current) {
        output::error(&format!("Failed to write configuration: {e}"));
        return None;
    }

    Some(outcome.summary())
}
