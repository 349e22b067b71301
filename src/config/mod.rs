//! Configuration system for rsr.
//!
//! Owns the user's persisted global and per-directory scripts: typed config
//! shape, file store, and the export/import surface.

pub mod import;
mod store;
mod types;

pub use import::{apply as import_config, conflicts as import_conflicts, MergeOutcome};
pub use store::ConfigStore;
pub use types::{Config, ScriptMap};
