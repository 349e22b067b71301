//! Configuration type definitions.
//!
//! The persisted configuration is a JSON object with camelCase keys:
//!
//! ```json
//! { "globalScripts": { "lint": "eslint ." },
//!   "directoryScripts": { "/home/user/app": { "dev": "vite dev" } } }
//! ```
//!
//! Structural validation is the typed serde parse itself: `globalScripts`
//! must be present and be a string-to-string object, `directoryScripts` is
//! optional for backward compatibility and normalized to an empty object on
//! write. Anything else fails to parse and is treated as "no config".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Script name to shell command mapping.
pub type ScriptMap = BTreeMap<String, String>;

/// The user's persisted configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Scripts available from any working directory.
    pub global_scripts: ScriptMap,
    /// Scripts scoped to one exact working directory path.
    #[serde(default)]
    pub directory_scripts: BTreeMap<String, ScriptMap>,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from serialized JSON.
    ///
    /// # Errors
    ///
    /// Returns the structured serde error when the content is not valid JSON
    /// or does not match the configuration shape.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize with stable, human-readable formatting.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (not expected for this shape).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Scripts stored for one directory key, if any.
    pub fn directory_entry(&self, dir_key: &str) -> Option<&ScriptMap> {
        self.directory_scripts.get(dir_key)
    }

    /// Total number of directory scripts across all directories.
    pub fn directory_script_count(&self) -> usize {
        self.directory_scripts.values().map(ScriptMap::len).sum()
    }
}
