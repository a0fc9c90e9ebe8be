//! Extension traits for error handling

use super::types::{Error, Result};

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Configuration {
            message: format!("{}: {}", message.into(), e),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::Configuration {
            message: format!("{}: {}", f(), e),
        })
    }
}

/// Validation helpers shared by constructors
pub struct Validate;

impl Validate {
    /// Reject an empty collection
    pub fn not_empty<T>(items: &[T], field: &str) -> Result<()> {
        if items.is_empty() {
            return Err(Error::invalid_input(
                field,
                "must contain at least one element",
            ));
        }
        Ok(())
    }

    /// Reject a zero duration
    pub fn positive_duration(value: std::time::Duration, field: &str) -> Result<()> {
        if value.is_zero() {
            return Err(Error::invalid_input(field, "must be greater than zero"));
        }
        Ok(())
    }
}
