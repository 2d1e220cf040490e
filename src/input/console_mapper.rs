//! Console line mapping
//!
//! Maps a line typed at the console to a semantic action. Lines that name
//! a command become `Invoke`; a handful of words control the console itself.

use cambind_input::{parse_activation, BindingError};

/// Actions a console line can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleAction {
    /// Run a binding: `MoveForward 1`
    Invoke { command: String, active: bool },
    /// Print the binding table
    ListBindings,
    /// Print the registered cameras
    ListCameras,
    /// Print the calls the current camera has received
    History,
    /// Forget recorded calls
    Clear,
    /// Leave the console
    Exit,
}

/// Maps console lines to actions
pub struct ConsoleMapper;

impl ConsoleMapper {
    /// Map one line of input
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments. An omitted
    /// activation value means the input is active.
    pub fn map_line(line: &str) -> Result<Option<ConsoleAction>, BindingError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = parts.collect();

        let action = match (head, rest.as_slice()) {
            ("bindings", []) => ConsoleAction::ListBindings,
            ("cameras", []) => ConsoleAction::ListCameras,
            ("history", []) => ConsoleAction::History,
            ("clear", []) => ConsoleAction::Clear,
            ("quit" | "exit", []) => ConsoleAction::Exit,
            (command, []) => ConsoleAction::Invoke {
                command: command.to_string(),
                active: true,
            },
            (command, [value]) => ConsoleAction::Invoke {
                command: command.to_string(),
                active: parse_activation(value)?,
            },
            (_, values) => return Err(BindingError::InvalidActivation(values.join(" "))),
        };
        Ok(Some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke(command: &str, active: bool) -> Option<ConsoleAction> {
        Some(ConsoleAction::Invoke {
            command: command.to_string(),
            active,
        })
    }

    #[test]
    fn test_command_defaults_to_active() {
        assert_eq!(
            ConsoleMapper::map_line("MoveForward"),
            Ok(invoke("MoveForward", true))
        );
    }

    #[test]
    fn test_command_with_activation() {
        assert_eq!(
            ConsoleMapper::map_line("MoveLeft 0"),
            Ok(invoke("MoveLeft", false))
        );
        assert_eq!(
            ConsoleMapper::map_line("  RotateLeft   true "),
            Ok(invoke("RotateLeft", true))
        );
    }

    #[test]
    fn test_console_words() {
        assert_eq!(ConsoleMapper::map_line("bindings"), Ok(Some(ConsoleAction::ListBindings)));
        assert_eq!(ConsoleMapper::map_line("cameras"), Ok(Some(ConsoleAction::ListCameras)));
        assert_eq!(ConsoleMapper::map_line("history"), Ok(Some(ConsoleAction::History)));
        assert_eq!(ConsoleMapper::map_line("clear"), Ok(Some(ConsoleAction::Clear)));
        assert_eq!(ConsoleMapper::map_line("quit"), Ok(Some(ConsoleAction::Exit)));
        assert_eq!(ConsoleMapper::map_line("exit"), Ok(Some(ConsoleAction::Exit)));
    }

    #[test]
    fn test_blank_and_comment_lines_ignored() {
        assert_eq!(ConsoleMapper::map_line(""), Ok(None));
        assert_eq!(ConsoleMapper::map_line("   "), Ok(None));
        assert_eq!(ConsoleMapper::map_line("# MoveForward 1"), Ok(None));
    }

    #[test]
    fn test_bad_activation() {
        assert_eq!(
            ConsoleMapper::map_line("MoveUp maybe"),
            Err(BindingError::InvalidActivation("maybe".to_string()))
        );
        assert_eq!(
            ConsoleMapper::map_line("MoveUp 1 2"),
            Err(BindingError::InvalidActivation("1 2".to_string()))
        );
    }
}
