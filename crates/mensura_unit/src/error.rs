//! Error type for unit conversion failures.

use std::{error, fmt};

use crate::dimension::Dimension;

/// Error raised when converting between units whose dimensions differ.
///
/// Conversion without an explicit dimension transform is only defined
/// between units that share a dimension; anything else surfaces this error
/// to the caller and is never silently coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unconvertible {
    /// The dimension of the source unit
    pub from: Dimension,
    /// The dimension of the target unit
    pub to: Dimension,
}

impl fmt::Display for Unconvertible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot convert between dimensions {} and {}",
            self.from, self.to
        )
    }
}

impl error::Error for Unconvertible {}
