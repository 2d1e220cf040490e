//! Binding error types

use cambind_math::ParseVec3Error;
use std::fmt;

/// Error type for binding operations
#[derive(Debug, Clone, PartialEq)]
pub enum BindingError {
    /// No binding exists for the command name
    UnknownCommand(String),
    /// The scene has no camera to receive the call
    NoActiveCamera,
    /// Activation value could not be read as a boolean
    InvalidActivation(String),
    /// Capability name is not pan, rotate or translate
    UnknownCapability(String),
    /// Binding vector could not be parsed
    InvalidVector(ParseVec3Error),
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
            BindingError::NoActiveCamera => write!(f, "No active camera"),
            BindingError::InvalidActivation(value) => {
                write!(f, "Invalid activation value: '{}'", value)
            }
            BindingError::UnknownCapability(name) => {
                write!(f, "Unknown camera capability: {}", name)
            }
            BindingError::InvalidVector(err) => write!(f, "Invalid binding vector: {}", err),
        }
    }
}

impl std::error::Error for BindingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BindingError::InvalidVector(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseVec3Error> for BindingError {
    fn from(err: ParseVec3Error) -> Self {
        BindingError::InvalidVector(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let msg = BindingError::UnknownCommand("Jump".to_string()).to_string();
        assert!(msg.contains("Unknown command"));
        assert!(msg.contains("Jump"));

        assert_eq!(BindingError::NoActiveCamera.to_string(), "No active camera");
    }

    #[test]
    fn test_from_vector_error() {
        let err: BindingError = ParseVec3Error::ComponentCount(2).into();
        assert!(matches!(err, BindingError::InvalidVector(_)));
        assert!(err.source().is_some());
        assert!(BindingError::NoActiveCamera.source().is_none());
    }
}
