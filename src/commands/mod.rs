//! Menu actions
//!
//! Each action is an `impl Session` block that talks to the user, runs its
//! git steps through the executor, and stops at the first failing step.
//! Actions return `Err` only for console I/O failures; every git or input
//! problem is reported on the console and the action returns `Ok`.
//!
//! - `menu`: the interactive loop and dispatch
//! - `status`: show branch and short status
//! - `sync`: full sync, just commit, pull, reset
//! - `repository`: start new project, clone
//! - `navigation`: change the session's working directory

pub mod menu;
pub mod navigation;
pub mod repository;
pub mod status;
pub mod sync;
