//! Git invocations and their results
//!
//! - `git_command`: the closed set of git argument lists the menu issues
//! - `outcome`: raw and interpreted results of a child process
//! - `error`: execution failures reported to the console

pub mod error;
pub mod git_command;
pub mod outcome;
