//! The unit type and its algebra.

use std::{fmt, ops};

use crate::converter::Converter;
use crate::dimension::{BaseDimension, Dimension};
use crate::display::UnitExpr;
use crate::error::Unconvertible;

/// A unit of measurement.
///
/// A unit has three parts: a [`Dimension`], a [`Converter`] relating it to
/// the reference unit of that dimension, and a display expression.
///
/// Units are immutable; every operation returns a new unit and composite
/// units own derived converters built from their operands' converters.
/// Equality compares the dimension and the converter only: two units that
/// measure the same thing the same way are equal even when they print
/// differently.
#[derive(Debug, Clone)]
pub struct Unit {
    dimension: Dimension,
    to_reference: Converter,
    display: UnitExpr,
}

impl Unit {
    /// Creates the dimensionless unit `1`.
    #[must_use]
    pub fn one() -> Self {
        Self {
            dimension: Dimension::none(),
            to_reference: Converter::IDENTITY,
            display: UnitExpr::One,
        }
    }

    /// Creates the reference unit of a base dimension.
    #[must_use]
    pub fn base(base: BaseDimension, symbol: &str) -> Self {
        Self {
            dimension: Dimension::base(base),
            to_reference: Converter::IDENTITY,
            display: UnitExpr::symbol(symbol),
        }
    }

    /// Returns the dimension of the unit.
    #[must_use]
    pub const fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Returns the converter relating this unit to its reference unit.
    #[must_use]
    pub const fn to_reference(&self) -> Converter {
        self.to_reference
    }

    /// Returns the display expression of the unit.
    #[must_use]
    pub const fn display(&self) -> &UnitExpr {
        &self.display
    }

    /// Renders the unit's human-readable symbol.
    #[must_use]
    pub fn symbol(&self) -> String {
        self.display.to_string()
    }

    /// Replaces the display expression with a single symbol.
    ///
    /// Derived and transformed units keep the display of their operands;
    /// named units (`km`, `°C`, `Hz`) relabel themselves with this.
    #[must_use]
    pub fn with_symbol(self, symbol: &str) -> Self {
        Self {
            display: UnitExpr::symbol(symbol),
            ..self
        }
    }

    /// Checks if this unit can be converted into the given unit.
    ///
    /// Compatibility is purely a function of the declared dimensions, not of
    /// unit identity: any two units sharing a dimension are convertible.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.dimension == other.dimension
    }

    /// Returns the converter from this unit to the given unit.
    ///
    /// The conversion is resolved through at most two hops: this unit to the
    /// dimension's reference unit, then reference unit to the target.
    /// `u.converter_to(&u)` is the identity.
    ///
    /// # Errors
    ///
    /// Returns [`Unconvertible`] if the dimensions differ.
    pub fn converter_to(&self, target: &Self) -> Result<Converter, Unconvertible> {
        if !self.is_compatible(target) {
            return Err(Unconvertible {
                from: self.dimension.clone(),
                to: target.dimension.clone(),
            });
        }

        Ok(target.to_reference.inverse().concat(&self.to_reference))
    }

    /// Multiplies this unit by the given unit.
    ///
    /// The result's dimension is the product of the operand dimensions and
    /// its converter composes the *linear* components of the operand
    /// converters only: offsets (as in Celsius) are never propagated into a
    /// derived unit, so products of offset scales are expressed purely in
    /// terms of the operands' reference scales.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            dimension: self.dimension.clone() * other.dimension.clone(),
            to_reference: self.to_reference.linear().concat(&other.to_reference.linear()),
            display: self.display.clone() * other.display.clone(),
        }
    }

    /// Divides this unit by the given unit.
    ///
    /// Symmetric to [`Unit::multiply`]; dividing a unit by itself yields a
    /// dimensionless unit.
    #[must_use]
    pub fn divide(&self, other: &Self) -> Self {
        Self {
            dimension: self.dimension.clone() / other.dimension.clone(),
            to_reference: self
                .to_reference
                .linear()
                .concat(&other.to_reference.linear().inverse()),
            display: self.display.clone() / other.display.clone(),
        }
    }

    /// Returns the reciprocal of this unit.
    ///
    /// Equivalent to dividing the dimensionless unit by this unit.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::one().divide(self)
    }

    /// Raises this unit to the power of the given exponent.
    #[must_use]
    pub fn pow(&self, exponent: i32) -> Self {
        Self {
            dimension: self.dimension.clone().pow(exponent),
            to_reference: Converter::scaling(self.to_reference.scale().powi(exponent)),
            display: self.display.clone().pow(exponent),
        }
    }

    /// Returns this unit scaled by the given factor.
    ///
    /// A value in the scaled unit is worth `factor` of this unit, so
    /// `metre().scaled(1000.0)` is the kilometre.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            dimension: self.dimension.clone(),
            to_reference: self.to_reference.concat(&Converter::scaling(factor)),
            display: self.display.clone(),
        }
    }

    /// Returns this unit shifted by the given offset.
    ///
    /// A zero in the shifted unit sits at `offset` of this unit, so
    /// `kelvin().shifted(273.15)` is the Celsius scale.
    #[must_use]
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            dimension: self.dimension.clone(),
            to_reference: self.to_reference.concat(&Converter::translation(offset)),
            display: self.display.clone(),
        }
    }
}

impl PartialEq for Unit {
    /// Units are equal when they share a dimension and a converter.
    ///
    /// The display expression is deliberately ignored: `m/m*m` and `m`
    /// measure the same thing the same way.
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.to_reference == other.to_reference
    }
}

impl ops::Mul for Unit {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl ops::Div for Unit {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(&rhs)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}
