//! The textual boundary of the Mensura quantity library.
//!
//! Parsing resolves `"<value> <unit>"` text into a quantity against a
//! caller-owned [`UnitCatalog`]; formatting renders a quantity back as
//! `"<value> <unit-symbol>"`. Neither direction touches core invariants:
//! the boundary only constructs and reads quantities and units.

mod catalog;
mod error;
mod parse;

pub use catalog::UnitCatalog;
pub use error::{ParseError, ParseErrorReason};
pub use parse::{InputSpan, parse_quantity};

use mensura_quantity::Quantity;

/// Renders a quantity as `"<value> <unit-symbol>"` with a single separating
/// space; dimensionless quantities render the bare value.
#[must_use]
pub fn format_quantity(quantity: &Quantity) -> String {
    quantity.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensura_quantity::Quantity;
    use mensura_unit::si;

    #[test]
    fn formatting_round_trips_through_the_parser() {
        let catalog = UnitCatalog::common();
        let quantity = Quantity::of(60, si::metre());

        let text = format_quantity(&quantity);
        assert_eq!(text, "60 m");

        let parsed = parse_quantity(&text, &catalog).expect("should parse");
        assert_eq!(parsed, quantity);
    }

    #[test]
    fn compound_symbols_round_trip() {
        let catalog = UnitCatalog::common();
        let speed = Quantity::of(5.0, si::metre().divide(&si::second()));

        let text = format_quantity(&speed);
        assert_eq!(text, "5 m/s");

        let parsed = parse_quantity(&text, &catalog).expect("should parse");
        assert_eq!(*parsed.unit(), *speed.unit());
    }
}
