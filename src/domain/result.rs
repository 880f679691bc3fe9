//! Result type alias for AHMS

use super::errors::AhmsError;

/// Result type alias for AHMS operations
///
/// # Examples
///
/// ```
/// use ahms::domain::result::Result;
/// use ahms::domain::errors::AhmsError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AhmsError::Input("stdin closed".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AhmsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::AhmsError;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(AhmsError::InputClosed);
        assert!(result.is_err());
    }
}
