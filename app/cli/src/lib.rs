//! Lantern CLI application — terminal front end for the lantern
//! assistant core.

pub use cmd::{Cli, Command, ConfigCommand};

pub mod cmd;
pub mod files;
pub mod prefs;
pub mod terminal;
