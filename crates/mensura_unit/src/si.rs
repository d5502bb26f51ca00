//! A seed set of SI units and metric-prefix transforms.
//!
//! This is not a full catalog of named units (catalogs are caller-owned and
//! live outside the core); it is the small set of reference and derived
//! units that the default catalog and the tests build on.

use crate::dimension::BaseDimension;
use crate::unit::Unit;

/// The dimensionless unit `1`.
#[must_use]
pub fn one() -> Unit {
    Unit::one()
}

/// The metre, reference unit of length.
#[must_use]
pub fn metre() -> Unit {
    Unit::base(BaseDimension::Length, "m")
}

/// The kilogram, reference unit of mass.
#[must_use]
pub fn kilogram() -> Unit {
    Unit::base(BaseDimension::Mass, "kg")
}

/// The second, reference unit of time.
#[must_use]
pub fn second() -> Unit {
    Unit::base(BaseDimension::Time, "s")
}

/// The ampere, reference unit of electric current.
#[must_use]
pub fn ampere() -> Unit {
    Unit::base(BaseDimension::Current, "A")
}

/// The kelvin, reference unit of thermodynamic temperature.
#[must_use]
pub fn kelvin() -> Unit {
    Unit::base(BaseDimension::Temperature, "K")
}

/// The mole, reference unit of amount of substance.
#[must_use]
pub fn mole() -> Unit {
    Unit::base(BaseDimension::AmountOfSubstance, "mol")
}

/// The candela, reference unit of luminous intensity.
#[must_use]
pub fn candela() -> Unit {
    Unit::base(BaseDimension::LuminousIntensity, "cd")
}

/// The gram, one thousandth of a kilogram.
#[must_use]
pub fn gram() -> Unit {
    kilogram().scaled(1e-3).with_symbol("g")
}

/// The minute, sixty seconds.
#[must_use]
pub fn minute() -> Unit {
    second().scaled(60.0).with_symbol("min")
}

/// The hour, sixty minutes.
#[must_use]
pub fn hour() -> Unit {
    second().scaled(3600.0).with_symbol("h")
}

/// The degree Celsius, the kelvin scale shifted by 273.15.
#[must_use]
pub fn celsius() -> Unit {
    kelvin().shifted(273.15).with_symbol("degC")
}

/// The hertz, the reciprocal second.
#[must_use]
pub fn hertz() -> Unit {
    second().inverse().with_symbol("Hz")
}

/// The newton, `kg*m/s^2`.
#[must_use]
pub fn newton() -> Unit {
    kilogram()
        .multiply(&metre())
        .divide(&second().pow(2))
        .with_symbol("N")
}

fn prefixed(unit: &Unit, prefix: &str, factor: f64) -> Unit {
    let symbol = format!("{prefix}{}", unit.symbol());
    unit.scaled(factor).with_symbol(&symbol)
}

/// Scales a unit by `1e9` and prefixes its symbol with `G`.
#[must_use]
pub fn giga(unit: &Unit) -> Unit {
    prefixed(unit, "G", 1e9)
}

/// Scales a unit by `1e6` and prefixes its symbol with `M`.
#[must_use]
pub fn mega(unit: &Unit) -> Unit {
    prefixed(unit, "M", 1e6)
}

/// Scales a unit by `1e3` and prefixes its symbol with `k`.
#[must_use]
pub fn kilo(unit: &Unit) -> Unit {
    prefixed(unit, "k", 1e3)
}

/// Scales a unit by `1e-2` and prefixes its symbol with `c`.
#[must_use]
pub fn centi(unit: &Unit) -> Unit {
    prefixed(unit, "c", 1e-2)
}

/// Scales a unit by `1e-3` and prefixes its symbol with `m`.
#[must_use]
pub fn milli(unit: &Unit) -> Unit {
    prefixed(unit, "m", 1e-3)
}

/// Scales a unit by `1e-6` and prefixes its symbol with `u`.
#[must_use]
pub fn micro(unit: &Unit) -> Unit {
    prefixed(unit, "u", 1e-6)
}

/// Scales a unit by `1e-9` and prefixes its symbol with `n`.
#[must_use]
pub fn nano(unit: &Unit) -> Unit {
    prefixed(unit, "n", 1e-9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_compose_with_base_units() {
        let kilometre = kilo(&metre());

        assert_eq!(kilometre.symbol(), "km");
        assert_eq!(kilometre.to_reference().scale(), 1000.0);
        assert!(kilometre.is_compatible(&metre()));
    }

    #[test]
    fn kilogram_is_a_prefixed_gram() {
        let from_prefix = kilo(&gram());

        assert_eq!(from_prefix.symbol(), "kg");
        assert_eq!(from_prefix, kilogram());
    }

    #[test]
    fn hertz_is_the_reciprocal_second() {
        let converter = hertz()
            .converter_to(&second().inverse())
            .expect("hertz should convert to 1/s");

        assert!(converter.is_identity());
    }

    #[test]
    fn celsius_has_an_offset_converter() {
        assert!(!celsius().to_reference().is_linear());
        assert_eq!(celsius().to_reference().offset(), 273.15);
    }
}
