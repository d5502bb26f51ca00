//! Dimensions for dimensional analysis.
//!
//! A dimension is the structural "kind" of a unit: length, time, mass, and
//! products or quotients thereof. Two units can be converted into each other
//! exactly when their dimensions are equal.

use std::{fmt, ops};

use indexmap::IndexMap;

/// A base dimension of a system of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// Reference unit is 'metre'
    Length,
    /// Reference unit is 'kilogram'
    Mass,
    /// Reference unit is 'second'
    Time,
    /// Reference unit is 'ampere'
    Current,
    /// Reference unit is 'kelvin'
    Temperature,
    /// Reference unit is 'mole'
    AmountOfSubstance,
    /// Reference unit is 'candela'
    LuminousIntensity,
}

impl BaseDimension {
    /// Returns the conventional single-letter symbol for the base dimension.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Length => "L",
            Self::Mass => "M",
            Self::Time => "T",
            Self::Current => "I",
            Self::Temperature => "Th",
            Self::AmountOfSubstance => "N",
            Self::LuminousIntensity => "J",
        }
    }
}

/// A map of base dimensions and their exponents.
///
/// For example, acceleration is represented as
/// `Dimension` over `{Length: 1, Time: -2}`. Zero exponents are never
/// stored, so the dimensionless dimension is the empty map and structural
/// equality never depends on spurious entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dimension(IndexMap<BaseDimension, i32>);

impl Dimension {
    /// Creates the dimensionless dimension, which has no base components.
    #[must_use]
    pub fn none() -> Self {
        Self(IndexMap::new())
    }

    /// Creates the dimension of a single base dimension.
    #[must_use]
    pub fn base(base: BaseDimension) -> Self {
        Self(IndexMap::from([(base, 1)]))
    }

    /// Checks if the dimension is dimensionless (has no base components).
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the exponent of the given base dimension, `0` when absent.
    #[must_use]
    pub fn exponent(&self, base: BaseDimension) -> i32 {
        self.0.get(&base).copied().unwrap_or(0)
    }

    /// Raises the dimension to the power of the given exponent.
    #[must_use]
    pub fn pow(self, exponent: i32) -> Self {
        if exponent == 0 {
            return Self::none();
        }

        Self(
            self.0
                .into_iter()
                .map(|(key, value)| (key, value * exponent))
                .collect(),
        )
    }

    /// Returns the reciprocal dimension, with every exponent negated.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(key, value)| (key, -value))
                .collect(),
        )
    }
}

impl ops::Mul for Dimension {
    type Output = Self;

    /// Multiplies two dimensions together
    ///
    /// For example, `(L/T) * (M) = (M*L/T)`
    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = self.0;

        for (key, value) in rhs.0 {
            result
                .entry(key)
                .and_modify(|v| *v += value)
                .or_insert(value);
        }

        Self(result.into_iter().filter(|(_, value)| *value != 0).collect())
    }
}

impl ops::Div for Dimension {
    type Output = Self;

    /// Divides two dimensions
    ///
    /// For example, `(M*L/T) / (M) = (L/T)`
    fn div(self, rhs: Self) -> Self::Output {
        let mut result = self.0;

        for (key, value) in rhs.0 {
            #[expect(
                clippy::suspicious_arithmetic_impl,
                reason = "division is defined as subtraction of the exponent"
            )]
            result
                .entry(key)
                .and_modify(|v| *v -= value)
                .or_insert(-value);
        }

        Self(result.into_iter().filter(|(_, value)| *value != 0).collect())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "1");
        }

        for (index, (base, exponent)) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "*")?;
            }
            write!(f, "{}", base.symbol())?;
            if *exponent != 1 {
                write!(f, "^{exponent}")?;
            }
        }

        Ok(())
    }
}
