//! Error type for the fallible parse paths.
//!
//! Only construction from loosely-typed input can fail; canonicalization and
//! the role views are total over well-formed values. Name collisions are not
//! errors anywhere in the model — they resolve by silent overwrite.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A required field was absent or explicitly null in a loosely-typed map.
    #[error("required field '{0}' is missing or null")]
    MissingField(&'static str),

    /// A field was present but carried a value of the wrong shape.
    #[error("field '{field}' could not be converted: expected {expected}")]
    TypeConversion {
        field: &'static str,
        expected: &'static str,
    },

    /// A version string did not parse as a dotted MAJOR.MINOR.PATCH triple.
    #[error("invalid version '{0}': expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),
}
