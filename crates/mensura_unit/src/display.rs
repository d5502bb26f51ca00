//! Human-readable display expressions for units.
//!
//! A display expression is what a unit renders as, kept separate from the
//! unit's dimension and converter. It uses an AST-like structure so that
//! derived units print the way they were composed (`m/s`, `kg*m/s^2`)
//! rather than as a normalized exponent soup.

use std::{fmt, ops};

/// The display expression of a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitExpr {
    /// The dimensionless unit `1`
    One,
    /// A single named unit, possibly with an exponent
    Symbol {
        /// The symbol of the unit
        name: String,
        /// The exponent of the unit
        exponent: i32,
    },
    /// A product of two unit expressions
    Multiply(Box<UnitExpr>, Box<UnitExpr>),
    /// A quotient of two unit expressions
    Divide(Box<UnitExpr>, Box<UnitExpr>),
    /// A unit expression raised to a power
    Power {
        /// The base of the power
        base: Box<UnitExpr>,
        /// The exponent of the power
        exponent: i32,
    },
}

impl UnitExpr {
    /// Creates a plain symbol expression.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol {
            name: name.into(),
            exponent: 1,
        }
    }

    /// Raises the display expression to the power of the given exponent.
    #[must_use]
    pub fn pow(self, pow_exponent: i32) -> Self {
        if pow_exponent == 0 {
            return Self::One;
        }

        match self {
            Self::One => Self::One,
            Self::Symbol { name, exponent } => Self::Symbol {
                name,
                exponent: exponent * pow_exponent,
            },
            Self::Multiply(_, _) | Self::Divide(_, _) => Self::Power {
                base: Box::new(self),
                exponent: pow_exponent,
            },
            Self::Power { base, exponent } => Self::Power {
                base,
                exponent: exponent * pow_exponent,
            },
        }
    }
}

impl ops::Mul for UnitExpr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Multiply(Box::new(self), Box::new(rhs))
    }
}

impl ops::Div for UnitExpr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Divide(Box::new(self), Box::new(rhs))
    }
}

impl fmt::Display for UnitExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "1")?,
            Self::Symbol { name, exponent } => {
                write!(f, "{name}")?;
                if *exponent != 1 {
                    write!(f, "^{exponent}")?;
                }
            }
            Self::Multiply(left, right) => write!(f, "{left}*{right}")?,
            Self::Divide(left, right) => match **right {
                Self::Multiply(_, _) | Self::Divide(_, _) => write!(f, "{left}/({right})")?,
                Self::One | Self::Symbol { .. } | Self::Power { .. } => {
                    write!(f, "{left}/{right}")?;
                }
            },
            Self::Power { base, exponent } => write!(f, "({base})^{exponent}")?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_renders_as_one() {
        assert_eq!(UnitExpr::One.to_string(), "1");
    }

    #[test]
    fn symbol_renders_name_and_exponent() {
        assert_eq!(UnitExpr::symbol("m").to_string(), "m");
        assert_eq!(UnitExpr::symbol("m").pow(2).to_string(), "m^2");
        assert_eq!(UnitExpr::symbol("s").pow(-1).to_string(), "s^-1");
    }

    #[test]
    fn quotient_parenthesizes_compound_divisor() {
        let metre = UnitExpr::symbol("m");
        let second = UnitExpr::symbol("s");
        let speed = metre / second.clone();

        assert_eq!(speed.to_string(), "m/s");

        let kilogram = UnitExpr::symbol("kg");
        let odd = kilogram / (UnitExpr::symbol("m") * second);
        assert_eq!(odd.to_string(), "kg/(m*s)");
    }

    #[test]
    fn power_of_compound_is_parenthesized() {
        let area_per_time = (UnitExpr::symbol("m") * UnitExpr::symbol("m")).pow(2);

        assert_eq!(area_per_time.to_string(), "(m*m)^2");
    }
}
