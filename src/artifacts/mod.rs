//! Value types shared by the session and the actions
//!
//! - `command`: git argument lists, execution outcomes and errors
//! - `console`: colored message and header formatting
//! - `menu`: main and reset menu lookup tables
//! - `navigation`: quick links and navigation choices

pub mod command;
pub mod console;
pub mod menu;
pub mod navigation;
