//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod console;

pub use console::{ConsoleOutcome, ConsoleSystem};
