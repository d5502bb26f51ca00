//! Error types for quantity arithmetic.

use std::{error, fmt};

use mensura_unit::Unconvertible;

use crate::number::NumberKind;

/// An operation that is mathematically undefined for its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateOp {
    /// Integral division by zero
    DivisionByZero,
    /// Inversion of a zero value
    ZeroInverse,
    /// Inversion of an integral kind without explicit promotion
    IntegralInverse,
    /// A non-finite floating value reached the generic-number kind
    NonFinite,
}

/// Error raised by quantity construction, conversion, and arithmetic.
///
/// Every failure is reported to the immediate caller; nothing is retried,
/// downgraded to a default value, or logged.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// The operand units have differing dimensions
    Unconvertible(Unconvertible),
    /// A result exceeded the range of its numeric kind
    Overflow {
        /// The kind whose range was exceeded
        kind: NumberKind,
    },
    /// The operation is undefined for the given representation
    Degenerate(DegenerateOp),
}

impl From<Unconvertible> for QuantityError {
    fn from(error: Unconvertible) -> Self {
        Self::Unconvertible(error)
    }
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconvertible(error) => write!(f, "{error}"),
            Self::Overflow { kind } => {
                write!(f, "result exceeds the range of the {kind} kind")
            }
            Self::Degenerate(DegenerateOp::DivisionByZero) => {
                write!(f, "integral division by zero")
            }
            Self::Degenerate(DegenerateOp::ZeroInverse) => {
                write!(f, "cannot invert a zero value")
            }
            Self::Degenerate(DegenerateOp::IntegralInverse) => {
                write!(
                    f,
                    "cannot invert an integral quantity; promote it to a floating kind first"
                )
            }
            Self::Degenerate(DegenerateOp::NonFinite) => {
                write!(f, "non-finite value has no generic-number representation")
            }
        }
    }
}

impl error::Error for QuantityError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Unconvertible(error) => Some(error),
            Self::Overflow { .. } | Self::Degenerate(_) => None,
        }
    }
}
