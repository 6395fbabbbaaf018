//! Atrium Admin Library
//!
//! Command-line console for the Atrium admin API: configuration, argument
//! parsing and command execution. The binary only wires these together.

pub mod cli;
pub mod config;
pub mod console;
pub mod error;

pub use cli::Cli;
pub use config::AdminConfig;
pub use console::Console;
pub use error::{AdminError, Result};
