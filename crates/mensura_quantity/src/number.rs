//! The closed set of numeric kinds backing a quantity.
//!
//! Rather than dispatching on numeric types at runtime, the backing value is
//! a tagged union over the supported kinds and every mixed-kind operation
//! goes through one promotion function, so the promotion matrix is
//! exhaustively checked at compile time.

use std::{cmp::Ordering, fmt};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::error::{DegenerateOp, QuantityError};

/// The backing kind of a [`Number`].
///
/// The order of the variants is the promotion order: when two kinds combine,
/// the result kind is the later of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumberKind {
    /// 16-bit signed integer
    Short,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// Arbitrary-precision rational, standing in for any other numeric type
    Big,
}

impl NumberKind {
    /// Returns the result kind of combining two operand kinds.
    ///
    /// Integral kinds combine to the wider integral kind; any floating
    /// operand promotes the result to the widest floating kind involved;
    /// any generic-number operand promotes the result to generic-number.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        self.max(other)
    }

    /// Checks if values of this kind are guaranteed exact in their own unit.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(self, Self::Short | Self::Int | Self::Long)
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short => write!(f, "short"),
            Self::Int => write!(f, "int"),
            Self::Long => write!(f, "long"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
            Self::Big => write!(f, "big"),
        }
    }
}

/// A numeric value of one of the supported kinds.
#[derive(Debug, Clone)]
pub enum Number {
    /// 16-bit signed integer
    Short(i16),
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit floating point
    Float(f32),
    /// 64-bit floating point
    Double(f64),
    /// Arbitrary-precision rational
    Big(BigRational),
}

impl Number {
    /// Returns the kind of the value.
    #[must_use]
    pub const fn kind(&self) -> NumberKind {
        match self {
            Self::Short(_) => NumberKind::Short,
            Self::Int(_) => NumberKind::Int,
            Self::Long(_) => NumberKind::Long,
            Self::Float(_) => NumberKind::Float,
            Self::Double(_) => NumberKind::Double,
            Self::Big(_) => NumberKind::Big,
        }
    }

    /// Checks if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Short(v) => *v == 0,
            Self::Int(v) => *v == 0,
            Self::Long(v) => *v == 0,
            Self::Float(v) => *v == 0.0,
            Self::Double(v) => *v == 0.0,
            Self::Big(v) => v.is_zero(),
        }
    }

    /// Returns the value as a double, rounding where the kind demands it.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Short(v) => f64::from(*v),
            Self::Int(v) => f64::from(*v),
            #[expect(
                clippy::cast_precision_loss,
                reason = "stating a long as a double is defined to round"
            )]
            Self::Long(v) => *v as f64,
            Self::Float(v) => f64::from(*v),
            Self::Double(v) => *v,
            Self::Big(v) => v.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Widens the value to the given kind.
    ///
    /// The target kind is expected to come from [`NumberKind::combine`] with
    /// this value's kind as one operand, so the conversion is always a
    /// widening in the promotion order; a non-widening target returns the
    /// value unchanged.
    ///
    /// # Errors
    ///
    /// Returns a `Degenerate(NonFinite)` error when a non-finite floating
    /// value is widened to the generic-number kind, which cannot represent
    /// infinities or NaN.
    pub fn promote(self, kind: NumberKind) -> Result<Self, QuantityError> {
        if self.kind() == kind {
            return Ok(self);
        }

        let value = match (self, kind) {
            (Self::Short(v), NumberKind::Int) => Self::Int(i32::from(v)),
            (Self::Short(v), NumberKind::Long) => Self::Long(i64::from(v)),
            (Self::Short(v), NumberKind::Float) => Self::Float(f32::from(v)),
            (Self::Short(v), NumberKind::Double) => Self::Double(f64::from(v)),
            (Self::Int(v), NumberKind::Long) => Self::Long(i64::from(v)),
            #[expect(
                clippy::cast_precision_loss,
                reason = "int-to-float widening is defined to round, as in ordinary numeric promotion"
            )]
            (Self::Int(v), NumberKind::Float) => Self::Float(v as f32),
            (Self::Int(v), NumberKind::Double) => Self::Double(f64::from(v)),
            #[expect(
                clippy::cast_precision_loss,
                reason = "long-to-float widening is defined to round, as in ordinary numeric promotion"
            )]
            (Self::Long(v), NumberKind::Float) => Self::Float(v as f32),
            #[expect(
                clippy::cast_precision_loss,
                reason = "long-to-double widening is defined to round, as in ordinary numeric promotion"
            )]
            (Self::Long(v), NumberKind::Double) => Self::Double(v as f64),
            (Self::Float(v), NumberKind::Double) => Self::Double(f64::from(v)),
            (Self::Short(v), NumberKind::Big) => Self::Big(BigRational::from_integer(v.into())),
            (Self::Int(v), NumberKind::Big) => Self::Big(BigRational::from_integer(v.into())),
            (Self::Long(v), NumberKind::Big) => Self::Big(BigRational::from_integer(v.into())),
            (Self::Float(v), NumberKind::Big) => Self::Big(
                BigRational::from_float(v)
                    .ok_or(QuantityError::Degenerate(DegenerateOp::NonFinite))?,
            ),
            (Self::Double(v), NumberKind::Big) => Self::Big(
                BigRational::from_float(v)
                    .ok_or(QuantityError::Degenerate(DegenerateOp::NonFinite))?,
            ),
            (value, _) => value,
        };

        Ok(value)
    }

    /// Adds two values under the promotion rule.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when an integral sum exceeds its kind's range.
    pub fn checked_add(self, rhs: Self) -> Result<Self, QuantityError> {
        let kind = self.kind().combine(rhs.kind());
        match (self.promote(kind)?, rhs.promote(kind)?) {
            (Self::Short(a), Self::Short(b)) => a
                .checked_add(b)
                .map(Self::Short)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map(Self::Int)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Long(a), Self::Long(b)) => a
                .checked_add(b)
                .map(Self::Long)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Float(a), Self::Float(b)) => Ok(Self::Float(a + b)),
            (Self::Double(a), Self::Double(b)) => Ok(Self::Double(a + b)),
            (Self::Big(a), Self::Big(b)) => Ok(Self::Big(a + b)),
            (lhs, rhs) => unreachable!("operands promote to one kind: {lhs:?}, {rhs:?}"),
        }
    }

    /// Subtracts two values under the promotion rule.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when an integral difference exceeds its kind's
    /// range.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, QuantityError> {
        let kind = self.kind().combine(rhs.kind());
        match (self.promote(kind)?, rhs.promote(kind)?) {
            (Self::Short(a), Self::Short(b)) => a
                .checked_sub(b)
                .map(Self::Short)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Int(a), Self::Int(b)) => a
                .checked_sub(b)
                .map(Self::Int)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Long(a), Self::Long(b)) => a
                .checked_sub(b)
                .map(Self::Long)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Float(a), Self::Float(b)) => Ok(Self::Float(a - b)),
            (Self::Double(a), Self::Double(b)) => Ok(Self::Double(a - b)),
            (Self::Big(a), Self::Big(b)) => Ok(Self::Big(a - b)),
            (lhs, rhs) => unreachable!("operands promote to one kind: {lhs:?}, {rhs:?}"),
        }
    }

    /// Multiplies two values under the promotion rule.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when an integral product exceeds its kind's range.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, QuantityError> {
        let kind = self.kind().combine(rhs.kind());
        match (self.promote(kind)?, rhs.promote(kind)?) {
            (Self::Short(a), Self::Short(b)) => a
                .checked_mul(b)
                .map(Self::Short)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Int(a), Self::Int(b)) => a
                .checked_mul(b)
                .map(Self::Int)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Long(a), Self::Long(b)) => a
                .checked_mul(b)
                .map(Self::Long)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Float(a), Self::Float(b)) => Ok(Self::Float(a * b)),
            (Self::Double(a), Self::Double(b)) => Ok(Self::Double(a * b)),
            (Self::Big(a), Self::Big(b)) => Ok(Self::Big(a * b)),
            (lhs, rhs) => unreachable!("operands promote to one kind: {lhs:?}, {rhs:?}"),
        }
    }

    /// Divides two values under the promotion rule.
    ///
    /// Integral division truncates, matching the primitive semantics of the
    /// integral kinds; floating division follows IEEE rules (a floating
    /// division by zero is an infinity, not an error).
    ///
    /// # Errors
    ///
    /// Returns `Degenerate(DivisionByZero)` for an integral or
    /// generic-number division by zero, and `Overflow` when an integral
    /// quotient exceeds its kind's range.
    pub fn checked_div(self, rhs: Self) -> Result<Self, QuantityError> {
        let kind = self.kind().combine(rhs.kind());
        if (kind.is_integral() || kind == NumberKind::Big) && rhs.is_zero() {
            return Err(QuantityError::Degenerate(DegenerateOp::DivisionByZero));
        }

        match (self.promote(kind)?, rhs.promote(kind)?) {
            (Self::Short(a), Self::Short(b)) => a
                .checked_div(b)
                .map(Self::Short)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Int(a), Self::Int(b)) => a
                .checked_div(b)
                .map(Self::Int)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Long(a), Self::Long(b)) => a
                .checked_div(b)
                .map(Self::Long)
                .ok_or(QuantityError::Overflow { kind }),
            (Self::Float(a), Self::Float(b)) => Ok(Self::Float(a / b)),
            (Self::Double(a), Self::Double(b)) => Ok(Self::Double(a / b)),
            (Self::Big(a), Self::Big(b)) => Ok(Self::Big(a / b)),
            (lhs, rhs) => unreachable!("operands promote to one kind: {lhs:?}, {rhs:?}"),
        }
    }
}

impl PartialEq for Number {
    /// Numeric equality across kinds.
    ///
    /// Two values are equal when they are numerically equal after promotion
    /// to their combined kind, so `Int(15)` equals `Long(15)`.
    fn eq(&self, other: &Self) -> bool {
        let kind = self.kind().combine(other.kind());
        let (Ok(lhs), Ok(rhs)) = (self.clone().promote(kind), other.clone().promote(kind)) else {
            return false;
        };

        match (lhs, rhs) {
            (Self::Short(a), Self::Short(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::Big(a), Self::Big(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let kind = self.kind().combine(other.kind());
        let (Ok(lhs), Ok(rhs)) = (self.clone().promote(kind), other.clone().promote(kind)) else {
            return None;
        };

        match (lhs, rhs) {
            (Self::Short(a), Self::Short(b)) => a.partial_cmp(&b),
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(&b),
            (Self::Long(a), Self::Long(b)) => a.partial_cmp(&b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Double(a), Self::Double(b)) => a.partial_cmp(&b),
            (Self::Big(a), Self::Big(b)) => a.partial_cmp(&b),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Big(v) => write!(f, "{v}"),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Self::Short(i16::from(value))
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Self::Short(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Self::Short(i16::from(value))
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Self::Int(i32::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Long(i64::from(value))
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

// Kinds with no primitive representation fall back to the generic-number
// kind rather than failing, keeping the factory total.

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::Big(BigRational::from_integer(value.into()))
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Self::Big(BigRational::from_integer(value.into()))
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        Self::Big(BigRational::from_integer(value.into()))
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::Big(BigRational::from_integer(value))
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        Self::Big(value)
    }
}
