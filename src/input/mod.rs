//! Input handling module
//!
//! Maps console lines to semantic actions.

mod console_mapper;

pub use console_mapper::{ConsoleAction, ConsoleMapper};
