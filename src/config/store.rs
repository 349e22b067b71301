//! Configuration file loading and persistence.
//!
//! One JSON file per user, at `<config-dir>/rsr/config.json`. The directory
//! is created on demand. Reads degrade silently: a missing, unparsable or
//! structurally invalid file all surface as "no config", so callers cannot
//! tell "never configured" from "corrupt" — by design, the file is
//! user-editable. Writes are whole-file overwrites with no locking; two
//! racing invocations lose the earlier write (accepted single-user
//! limitation).

use std::io;
use std::path::PathBuf;

use crate::output;

use super::types::Config;

/// Handle to the per-user configuration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: Option<PathBuf>,
}

impl ConfigStore {
    /// File name of the persisted configuration.
    pub const FILE_NAME: &'static str = "config.json";

    /// Create a store, optionally overriding the configuration directory.
    ///
    /// Without an override the directory is `<platform config dir>/rsr`.
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self {
            dir: override_dir.or_else(|| dirs::config_dir().map(|p| p.join("rsr"))),
        }
    }

    /// Path of the configuration file, if a directory could be determined.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(Self::FILE_NAME))
    }

    /// Create the configuration directory if it does not exist.
    fn ensure_dir(&self) -> io::Result<&PathBuf> {
        let dir = self.dir.as_ref().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine the user configuration directory",
            )
        })?;
        std::fs::create_dir_all(dir)?;
        Ok(dir)
    }

    /// Load the current configuration.
    ///
    /// Returns `None` when the file does not exist, cannot be read, or fails
    /// the structural parse. Only the inability to create the configuration
    /// directory produces a (non-fatal) warning.
    pub fn load(&self) -> Option<Config> {
        let dir = match self.ensure_dir() {
            Ok(dir) => dir,
            Err(e) => {
                output::warn(&format!("Could not prepare configuration directory: {e}"));
                return None;
            }
        };

        let path = dir.join(Self::FILE_NAME);
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                log::debug!("failed to read {}: {e}", path.display());
                return None;
            }
        };

        match Config::from_json(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                // Corrupt or hand-edited into an invalid shape; treated the
                // same as no config at all.
                log::debug!("ignoring invalid config at {}: {e}", path.display());
                None
            }
        }
    }

    /// Persist the full configuration, overwriting the previous file.
    ///
    /// The write is a direct overwrite, not an atomic rename.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or the file
    /// cannot be written. No partial content is left behind on serialization
    /// failure.
    pub fn write(&self, config: &Config) -> io::Result<()> {
        let dir = self.ensure_dir()?;
        let content = config
            .to_json_pretty()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(dir.join(Self::FILE_NAME), content)
    }

    /// Export the current configuration as portable JSON.
    ///
    /// Returns `None` when no configuration exists.
    pub fn export(&self) -> Option<String> {
        self.load().and_then(|config| config.to_json_pretty().ok())
    }
}
