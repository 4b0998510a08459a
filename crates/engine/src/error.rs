//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidDate`] returned when a date string is not in `DD.MM.YYYY` form.
//! - [`InvalidCurrency`] returned when a currency code is not in the rate table.
//!
//!  [`InvalidDate`]: EngineError::InvalidDate
//!  [`InvalidCurrency`]: EngineError::InvalidCurrency
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid currency: \"{0}\"")]
    InvalidCurrency(String),
}
