//! Result type alias for medrec
//!
//! This module provides a convenient Result type alias that uses MedrecError
//! as the error type.

use super::errors::MedrecError;

/// Result type alias for medrec operations
///
/// This is a convenience type alias that uses `MedrecError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use medrec::domain::result::Result;
/// use medrec::domain::errors::MedrecError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MedrecError::invalid_input("name", "must not be empty"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MedrecError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::MedrecError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
        if let Ok(value) = result {
            assert_eq!(value, 42);
        }
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(MedrecError::storage("test error"));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
