//! # Error Types
//!
//! This module defines the error type shared by every fallible operation in the
//! crate. Configuration problems are reported once, when options are built or
//! parsed; the evolutionary operators themselves only fail on contract
//! violations such as an out-of-range bit index or a fitness read before the
//! entity was evaluated.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bitga::error::{GeneticError, Result};
//!
//! fn check_width(width: usize) -> Result<()> {
//!     if width == 0 {
//!         return Err(GeneticError::Configuration("zero genome width".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_width(0).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use bitga::error::{Result, ResultExt};
//!
//! fn parse_size(raw: &str) -> Result<usize> {
//!     raw.parse::<usize>().context("Failed to parse population size")
//! }
//!
//! assert!(parse_size("forty").is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use bitga::error::{GeneticError, OptionExt};
//!
//! fn first_score(scores: &[f64]) -> bitga::error::Result<f64> {
//!     scores.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_score(&[]).is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm library.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A bit index outside `[0, width)` was passed to a genome accessor.
    #[error("Bit index {index} is out of range for a genome of width {width}")]
    BitIndexOutOfRange { index: usize, width: usize },

    /// The fitness of an entity was read after a structural change and before
    /// the next evaluation pass.
    #[error("Fitness read before the entity was evaluated")]
    NotEvaluated,

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// This trait provides a convenient way to add context to errors when
/// converting from one error type to `GeneticError`.
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    ///
    /// This method converts the error to a `GeneticError` with the provided context.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_index_message() {
        let err = GeneticError::BitIndexOutOfRange {
            index: 31,
            width: 30,
        };
        assert_eq!(err.to_string(), "Bit index 31 is out of range for a genome of width 30");
    }

    #[test]
    fn test_context_wraps_error() {
        let result: Result<u32> = "x".parse::<u32>().context("Failed to parse");
        match result {
            Err(GeneticError::Other(msg)) => assert!(msg.starts_with("Failed to parse: ")),
            _ => panic!("Expected Other error"),
        }
    }

    #[test]
    fn test_io_conversion() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(GeneticError::Io(_))));
    }

    #[test]
    fn test_option_ext() {
        let none: Option<u8> = None;
        assert!(matches!(
            none.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        ));
        assert_eq!(Some(3).ok_or_else_genetic(|| GeneticError::NotEvaluated).unwrap(), 3);
    }
}
