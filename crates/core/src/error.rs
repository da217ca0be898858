//! Error types for the axis-hsl core.

use thiserror::Error;

/// Errors produced while reading converter inputs.
///
/// The conversion math itself never fails; non-finite values flow through
/// unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    /// A color component string could not be read as a float.
    #[error("could not convert string to float: '{0}'")]
    InvalidComponent(String),
}
