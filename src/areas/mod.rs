//! Session state and the git execution layer
//!
//! - `session`: working directory, console and executor for one run
//! - `executor`: spawns git invocations and interprets their exit status
//! - `inspector`: repository questions answered through the executor
//! - `workspace`: filesystem helpers for the working directory

pub mod executor;
pub mod inspector;
pub mod session;
#[cfg(test)]
pub(crate) mod testing;
pub mod workspace;
