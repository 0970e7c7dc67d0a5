//! mygit: an interactive menu over the `git` command line
//!
//! - `areas`: the session, the git executor and the repository inspector
//! - `artifacts`: git invocations, console formatting, menu tables
//! - `commands`: the menu actions and the interactive loop

pub mod areas;
pub mod artifacts;
pub mod commands;
