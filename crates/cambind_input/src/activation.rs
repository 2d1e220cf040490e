//! Activation values
//!
//! Input callbacks receive their activation as text from the host
//! scripting layer. Words `true`/`false` are accepted in any case;
//! numbers are truthy when non-zero; an empty value is falsy.

use crate::error::BindingError;

/// Read an activation value as a boolean
pub fn parse_activation(value: &str) -> Result<bool, BindingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(false);
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Ok(false);
    }

    match trimmed.parse::<f64>() {
        Ok(n) if !n.is_nan() => Ok(n != 0.0),
        _ => Err(BindingError::InvalidActivation(value.to_string())),
    }
}
