//! Type-safe physical quantities: values paired with units of measurement.
//!
//! A [`Quantity`] is an immutable numeric value stated in a [`Unit`].
//! Quantities support arithmetic under a single numeric promotion table,
//! conversion between units of equal [`Dimension`], and a textual boundary
//! for parsing and formatting. Everything is immutable after construction,
//! so quantities and units can be shared freely across threads.
//!
//! ```
//! use mensura::{Quantity, UnitCatalog, parse_quantity, si};
//!
//! let distance = Quantity::of(10, si::metre());
//! let total = distance
//!     .checked_add(&Quantity::of(5, si::metre()))
//!     .expect("same dimension");
//! assert_eq!(total.to_string(), "15 m");
//! assert!(total.is_exact());
//!
//! let catalog = UnitCatalog::common();
//! let parsed = parse_quantity("60 m", &catalog).expect("valid quantity text");
//! assert_eq!(*parsed.unit(), si::metre());
//! ```

pub use mensura_format::{
    ParseError, ParseErrorReason, UnitCatalog, format_quantity, parse_quantity,
};
pub use mensura_quantity::{
    DegenerateOp, Number, NumberKind, Quantity, QuantityError, Range,
};
pub use mensura_unit::{BaseDimension, Converter, Dimension, Unconvertible, Unit, UnitExpr, si};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_accumulation_in_a_known_unit() {
        let total = Quantity::of(10, si::metre())
            .checked_add(&Quantity::of(5, si::metre()))
            .expect("should add");

        assert_eq!(*total.value(), Number::Int(15));
        assert_eq!(*total.unit(), si::metre());
        assert!(total.is_exact());
    }

    #[test]
    fn division_produces_a_derived_unit() {
        let speed = Quantity::of(10.0, si::metre())
            .checked_div(&Quantity::of(2, si::second()))
            .expect("should divide");

        assert_eq!(speed.kind(), NumberKind::Double);
        assert_eq!(*speed.value(), Number::Double(5.0));
        assert_eq!(*speed.unit(), si::metre().divide(&si::second()));
    }

    #[test]
    fn parsed_quantities_feed_the_algebra() {
        let catalog = UnitCatalog::common();
        let distance = parse_quantity("60 m", &catalog).expect("should parse");
        let time = parse_quantity("30 s", &catalog).expect("should parse");

        let speed = distance.checked_div(&time).expect("should divide");

        assert_eq!(*speed.value(), Number::Long(2));
        assert_eq!(*speed.unit(), si::metre().divide(&si::second()));
    }
}
