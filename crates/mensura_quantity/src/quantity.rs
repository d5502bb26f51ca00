//! The quantity type: a numeric value paired with a unit.

use std::fmt;

use mensura_unit::{Unit, UnitExpr};

use crate::error::{DegenerateOp, QuantityError};
use crate::number::{Number, NumberKind};

/// An amount of a physical quantity: a [`Number`] stated in a [`Unit`].
///
/// Quantities are immutable; every operation returns a new quantity and the
/// unit of an existing quantity never changes. The backing numeric kind of
/// a result follows the promotion rule of [`NumberKind::combine`].
#[derive(Debug, Clone)]
pub struct Quantity {
    value: Number,
    unit: Unit,
}

impl Quantity {
    /// Creates the quantity for the given value stated in the given unit.
    ///
    /// The backing representation is selected by the numeric type of
    /// `value`; every supported numeric type maps to exactly one kind, and
    /// types with no primitive kind fall back to the generic-number kind.
    #[must_use]
    pub fn of(value: impl Into<Number>, unit: Unit) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }

    /// Returns the numeric value, stated in this quantity's unit.
    #[must_use]
    pub const fn value(&self) -> &Number {
        &self.value
    }

    /// Returns the unit of the quantity.
    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Returns the backing numeric kind of the value.
    #[must_use]
    pub const fn kind(&self) -> NumberKind {
        self.value.kind()
    }

    /// Indicates if the quantity is exact.
    ///
    /// An exact quantity is guaranteed exact only when stated in its own
    /// unit. Exactness is derived from the backing kind, never stored: the
    /// integral kinds are exact, and every conversion or mixed-kind
    /// operation that can introduce rounding changes the kind, so an exact
    /// quantity can only degrade, never recover.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.kind().is_integral()
    }

    /// States this quantity in the given unit.
    ///
    /// A conversion with an identity converter (the unit itself, or an
    /// equal unit) preserves the backing kind and therefore exactness; any
    /// real conversion goes through the converter's double contract and
    /// yields the double kind.
    ///
    /// # Errors
    ///
    /// Returns `Unconvertible` if the dimensions differ.
    pub fn to(&self, unit: &Unit) -> Result<Self, QuantityError> {
        let converter = self.unit.converter_to(unit)?;

        if converter.is_identity() {
            return Ok(Self {
                value: self.value.clone(),
                unit: unit.clone(),
            });
        }

        Ok(Self {
            value: Number::Double(converter.convert(self.value.to_f64())),
            unit: unit.clone(),
        })
    }

    /// Returns this quantity with its value promoted to the double kind.
    ///
    /// This is the explicit promotion required before inverting an
    /// integral quantity.
    #[must_use]
    pub fn to_double(&self) -> Self {
        Self {
            value: Number::Double(self.value.to_f64()),
            unit: self.unit.clone(),
        }
    }

    /// Adds a quantity to this quantity.
    ///
    /// The operand is first stated in this quantity's unit and the result
    /// is expressed in this quantity's unit, so repeated accumulation in a
    /// known unit stays stable across calls.
    ///
    /// # Errors
    ///
    /// Returns `Unconvertible` if the dimensions differ and `Overflow` if
    /// an integral sum exceeds its kind's range.
    pub fn checked_add(&self, that: &Self) -> Result<Self, QuantityError> {
        let that = that.to(&self.unit)?;
        Ok(Self {
            value: self.value.clone().checked_add(that.value)?,
            unit: self.unit.clone(),
        })
    }

    /// Subtracts a quantity from this quantity.
    ///
    /// # Errors
    ///
    /// Returns `Unconvertible` if the dimensions differ and `Overflow` if
    /// an integral difference exceeds its kind's range.
    pub fn checked_sub(&self, that: &Self) -> Result<Self, QuantityError> {
        let that = that.to(&self.unit)?;
        Ok(Self {
            value: self.value.clone().checked_sub(that.value)?,
            unit: self.unit.clone(),
        })
    }

    /// Multiplies this quantity by another quantity.
    ///
    /// The result's unit is the product of the operand units.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if an integral product exceeds its kind's range.
    pub fn checked_mul(&self, that: &Self) -> Result<Self, QuantityError> {
        Ok(Self {
            value: self.value.clone().checked_mul(that.value.clone())?,
            unit: self.unit.multiply(&that.unit),
        })
    }

    /// Divides this quantity by another quantity.
    ///
    /// The result's unit is the quotient of the operand units.
    ///
    /// # Errors
    ///
    /// Returns `Degenerate(DivisionByZero)` for an integral division by
    /// zero and `Overflow` if an integral quotient exceeds its kind's
    /// range.
    pub fn checked_div(&self, that: &Self) -> Result<Self, QuantityError> {
        Ok(Self {
            value: self.value.clone().checked_div(that.value.clone())?,
            unit: self.unit.divide(&that.unit),
        })
    }

    /// Multiplies this quantity by a bare number; the unit is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if an integral product exceeds its kind's range.
    pub fn checked_mul_scalar(&self, that: impl Into<Number>) -> Result<Self, QuantityError> {
        Ok(Self {
            value: self.value.clone().checked_mul(that.into())?,
            unit: self.unit.clone(),
        })
    }

    /// Divides this quantity by a bare number; the unit is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Degenerate(DivisionByZero)` for an integral division by
    /// zero and `Overflow` if an integral quotient exceeds its kind's
    /// range.
    pub fn checked_div_scalar(&self, that: impl Into<Number>) -> Result<Self, QuantityError> {
        Ok(Self {
            value: self.value.clone().checked_div(that.into())?,
            unit: self.unit.clone(),
        })
    }

    /// Returns the reciprocal of this quantity, in the reciprocal unit.
    ///
    /// # Errors
    ///
    /// Returns `Degenerate(ZeroInverse)` for a zero value and
    /// `Degenerate(IntegralInverse)` for an integral kind, which must be
    /// promoted to a floating kind (see [`Quantity::to_double`]) before
    /// inverting so the loss of exactness is explicit at the call site.
    pub fn inverse(&self) -> Result<Self, QuantityError> {
        if self.value.is_zero() {
            return Err(QuantityError::Degenerate(DegenerateOp::ZeroInverse));
        }
        if self.kind().is_integral() {
            return Err(QuantityError::Degenerate(DegenerateOp::IntegralInverse));
        }

        let value = match &self.value {
            Number::Float(v) => Number::Float(1.0 / v),
            Number::Double(v) => Number::Double(1.0 / v),
            Number::Big(v) => Number::Big(v.recip()),
            Number::Short(_) | Number::Int(_) | Number::Long(_) => {
                return Err(QuantityError::Degenerate(DegenerateOp::IntegralInverse));
            }
        };

        Ok(Self {
            value,
            unit: self.unit.inverse(),
        })
    }

    /// States this quantity in the given unit and returns it as a double.
    ///
    /// # Errors
    ///
    /// Returns `Unconvertible` if the dimensions differ.
    pub fn double_value(&self, unit: &Unit) -> Result<f64, QuantityError> {
        let converter = self.unit.converter_to(unit)?;
        Ok(converter.convert(self.value.to_f64()))
    }

    /// States this quantity in the given unit and returns it as a long.
    ///
    /// # Errors
    ///
    /// Returns `Unconvertible` if the dimensions differ and `Overflow` if
    /// the converted value exceeds the long range; the value is never
    /// truncated or wrapped.
    pub fn long_value(&self, unit: &Unit) -> Result<i64, QuantityError> {
        let converter = self.unit.converter_to(unit)?;

        if converter.is_identity() {
            if let Some(value) = integral_value(&self.value) {
                return Ok(value);
            }
        }

        let converted = converter.convert(self.value.to_f64());
        #[expect(
            clippy::cast_precision_loss,
            reason = "the bounds are compared in double precision, the only precision the converted value has"
        )]
        if !converted.is_finite() || converted < i64::MIN as f64 || converted > i64::MAX as f64 {
            return Err(QuantityError::Overflow {
                kind: NumberKind::Long,
            });
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "range-checked directly above"
        )]
        let value = converted as i64;
        Ok(value)
    }

    /// States this quantity in the given unit and returns it as an int.
    ///
    /// # Errors
    ///
    /// Returns `Unconvertible` if the dimensions differ and `Overflow` if
    /// the converted value exceeds the int range.
    pub fn int_value(&self, unit: &Unit) -> Result<i32, QuantityError> {
        let value = self.long_value(unit)?;
        i32::try_from(value).map_err(|_| QuantityError::Overflow {
            kind: NumberKind::Int,
        })
    }
}

/// Returns the exact integral value held by the integral kinds.
fn integral_value(value: &Number) -> Option<i64> {
    match value {
        Number::Short(v) => Some(i64::from(*v)),
        Number::Int(v) => Some(i64::from(*v)),
        Number::Long(v) => Some(*v),
        Number::Float(_) | Number::Double(_) | Number::Big(_) => None,
    }
}

impl PartialEq for Quantity {
    /// Quantities are equal when their units are equal and their values are
    /// numerically equal under promotion.
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value == other.value
    }
}

impl fmt::Display for Quantity {
    /// Renders the quantity as `"<value> <unit-symbol>"` with a single
    /// separating space; dimensionless quantities render the bare value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.dimension().is_none() && *self.unit.display() == UnitExpr::One {
            return write!(f, "{}", self.value);
        }

        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensura_unit::si;

    mod conversion_tests {
        use super::*;

        #[test]
        fn identity_conversion_preserves_kind_and_exactness() {
            let distance = Quantity::of(10, si::metre());
            let same = distance.to(&si::metre()).expect("should convert");

            assert_eq!(same.kind(), NumberKind::Int);
            assert!(same.is_exact());
            assert_eq!(same, distance);
        }

        #[test]
        fn real_conversion_yields_double_and_degrades_exactness() {
            let kilometre = si::kilo(&si::metre());
            let distance = Quantity::of(3, kilometre);
            assert!(distance.is_exact());

            let in_metres = distance.to(&si::metre()).expect("should convert");

            assert_eq!(in_metres.kind(), NumberKind::Double);
            assert!(!in_metres.is_exact());
            assert_eq!(*in_metres.value(), Number::Double(3000.0));
        }

        #[test]
        fn round_trip_is_stable_between_linear_units() {
            let kilometre = si::kilo(&si::metre());
            let distance = Quantity::of(2.5, si::metre());

            let round_tripped = distance
                .to(&kilometre)
                .expect("should convert")
                .to(&si::metre())
                .expect("should convert");

            assert_eq!(*round_tripped.value(), Number::Double(2.5));
        }

        #[test]
        fn conversion_between_incompatible_dimensions_fails() {
            let distance = Quantity::of(10, si::metre());
            let result = distance.to(&si::second());

            assert!(matches!(result, Err(QuantityError::Unconvertible(_))));
        }

        #[test]
        fn offset_units_convert_through_the_reference() {
            let temperature = Quantity::of(25.0, si::celsius());
            let in_kelvin = temperature.to(&si::kelvin()).expect("should convert");

            assert_eq!(*in_kelvin.value(), Number::Double(298.15));
        }
    }

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn addition_in_the_same_unit_stays_exact() {
            let total = Quantity::of(10, si::metre())
                .checked_add(&Quantity::of(5, si::metre()))
                .expect("should add");

            assert_eq!(*total.value(), Number::Int(15));
            assert_eq!(*total.unit(), si::metre());
            assert!(total.is_exact());
        }

        #[test]
        fn addition_converts_the_operand_into_this_unit() {
            let kilometre = si::kilo(&si::metre());
            let total = Quantity::of(250.0, si::metre())
                .checked_add(&Quantity::of(1, kilometre))
                .expect("should add");

            assert_eq!(*total.unit(), si::metre());
            assert_eq!(*total.value(), Number::Double(1250.0));
        }

        #[test]
        fn subtraction_is_expressed_in_this_unit() {
            let kilometre = si::kilo(&si::metre());
            let rest = Quantity::of(2, kilometre.clone())
                .checked_sub(&Quantity::of(500.0, si::metre()))
                .expect("should subtract");

            assert_eq!(*rest.unit(), kilometre);
            assert_eq!(*rest.value(), Number::Double(1.5));
        }

        #[test]
        fn multiplication_composes_units() {
            let area = Quantity::of(3, si::metre())
                .checked_mul(&Quantity::of(4, si::metre()))
                .expect("should multiply");

            assert_eq!(*area.value(), Number::Int(12));
            assert_eq!(*area.unit(), si::metre().pow(2));
        }

        #[test]
        fn division_composes_units() {
            let speed = Quantity::of(10.0, si::metre())
                .checked_div(&Quantity::of(2, si::second()))
                .expect("should divide");

            assert_eq!(speed.kind(), NumberKind::Double);
            assert_eq!(*speed.value(), Number::Double(5.0));
            assert_eq!(*speed.unit(), si::metre().divide(&si::second()));
        }

        #[test]
        fn scalar_operations_keep_the_unit() {
            let doubled = Quantity::of(21, si::second())
                .checked_mul_scalar(2)
                .expect("should multiply");

            assert_eq!(*doubled.value(), Number::Int(42));
            assert_eq!(*doubled.unit(), si::second());

            let halved = doubled.checked_div_scalar(2).expect("should divide");
            assert_eq!(*halved.value(), Number::Int(21));
            assert_eq!(*halved.unit(), si::second());
        }

        #[test]
        fn mixed_kind_addition_follows_the_promotion_table() {
            let sum = Quantity::of(1, si::metre())
                .checked_add(&Quantity::of(0.5, si::metre()))
                .expect("should add");

            assert_eq!(sum.kind(), NumberKind::Double);
            assert!(!sum.is_exact());
        }

        #[test]
        fn exactness_never_recovers_through_further_arithmetic() {
            let inexact = Quantity::of(1.5, si::metre());
            let still_inexact = inexact
                .checked_add(&Quantity::of(1, si::metre()))
                .expect("should add")
                .checked_sub(&Quantity::of(1, si::metre()))
                .expect("should subtract");

            assert!(!still_inexact.is_exact());
        }
    }

    mod inverse_tests {
        use super::*;

        #[test]
        fn inverse_inverts_value_and_unit() {
            let period = Quantity::of(0.5, si::second());
            let frequency = period.inverse().expect("should invert");

            assert_eq!(*frequency.value(), Number::Double(2.0));
            assert_eq!(*frequency.unit(), si::second().inverse());
        }

        #[test]
        fn inverse_of_zero_fails() {
            let result = Quantity::of(0.0, si::second()).inverse();

            assert_eq!(
                result,
                Err(QuantityError::Degenerate(DegenerateOp::ZeroInverse))
            );
        }

        #[test]
        fn inverse_of_integral_kind_requires_promotion() {
            let period = Quantity::of(2, si::second());

            assert_eq!(
                period.inverse(),
                Err(QuantityError::Degenerate(DegenerateOp::IntegralInverse))
            );

            let frequency = period.to_double().inverse().expect("should invert");
            assert_eq!(*frequency.value(), Number::Double(0.5));
            assert!(!frequency.is_exact());
        }
    }

    mod extraction_tests {
        use super::*;

        #[test]
        fn long_value_converts_and_rounds() {
            let kilometre = si::kilo(&si::metre());
            let distance = Quantity::of(2, kilometre);

            assert_eq!(distance.long_value(&si::metre()), Ok(2000));
        }

        #[test]
        fn long_value_in_own_unit_is_exact() {
            let distance = Quantity::of(i64::MAX, si::metre());

            assert_eq!(distance.long_value(&si::metre()), Ok(i64::MAX));
        }

        #[test]
        fn long_value_overflow_is_detected() {
            let distance = Quantity::of(1e30, si::metre());

            assert_eq!(
                distance.long_value(&si::metre()),
                Err(QuantityError::Overflow {
                    kind: NumberKind::Long
                })
            );
        }

        #[test]
        fn big_beyond_long_range_overflows_extraction() {
            let value = num_bigint::BigInt::from(i64::MAX) * 16;
            let distance = Quantity::of(value, si::metre());

            assert_eq!(
                distance.long_value(&si::metre()),
                Err(QuantityError::Overflow {
                    kind: NumberKind::Long
                })
            );
        }

        #[test]
        fn int_value_narrows_with_a_range_check() {
            let distance = Quantity::of(70_000, si::metre());

            assert_eq!(distance.int_value(&si::metre()), Ok(70_000));
            assert_eq!(
                Quantity::of(i64::from(i32::MAX) + 1, si::metre()).int_value(&si::metre()),
                Err(QuantityError::Overflow {
                    kind: NumberKind::Int
                })
            );
        }

        #[test]
        fn double_value_converts() {
            let temperature = Quantity::of(0.0, si::celsius());

            assert_eq!(temperature.double_value(&si::kelvin()), Ok(273.15));
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn renders_value_space_symbol() {
            let distance = Quantity::of(60, si::metre());
            assert_eq!(distance.to_string(), "60 m");

            let speed = Quantity::of(5.0, si::metre().divide(&si::second()));
            assert_eq!(speed.to_string(), "5 m/s");
        }

        #[test]
        fn dimensionless_renders_the_bare_value() {
            let ratio = Quantity::of(3, si::one());
            assert_eq!(ratio.to_string(), "3");
        }
    }
}
