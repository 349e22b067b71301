//! Script execution for rsr.

mod executor;

pub use executor::{run_resolution, ExecutionOutcome, ShellSpawner, Spawn};
