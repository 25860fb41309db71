use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::error::AppError;

/// Checks applied after a record has been deserialized.
///
/// Serde already rejects missing fields and wrong types; implementors add the
/// rules serde cannot express, such as non-empty strings.
pub trait Validate {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] describing the first offending field.
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Fails with [`AppError::Validation`] when `value` is empty or only whitespace.
///
/// # Errors
///
/// Returns a validation error naming `field`.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "field `{field}` must be a non-empty string"
        )));
    }
    Ok(())
}

/// Deserializes `value` into `T` and runs its [`Validate`] checks.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if a field is missing, has the wrong type or
/// fails validation.
pub fn parse_validated<T>(value: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T = serde_json::from_value(value)
        .map_err(|e| AppError::Validation(format!("Failed to parse request: {e}")))?;
    parsed.validate()?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("severity", "High").is_ok());
        assert!(matches!(
            require_non_empty("severity", "   "),
            Err(AppError::Validation(msg)) if msg.contains("severity")
        ));
    }
}
