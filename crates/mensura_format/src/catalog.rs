//! The caller-owned catalog of named units.

use indexmap::IndexMap;

use mensura_unit::{Dimension, Unit, si};

/// A catalog mapping unit symbols to units.
///
/// The catalog is an explicit, caller-owned object passed into parsing
/// calls; there is no process-wide registry. Callers that mutate a shared
/// catalog serialize their own updates; the core only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    units: IndexMap<String, Unit>,
}

impl UnitCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            units: IndexMap::new(),
        }
    }

    /// Creates a catalog seeded with the common SI units and their usual
    /// prefixed forms.
    #[must_use]
    pub fn common() -> Self {
        let mut catalog = Self::new();

        for unit in [
            si::metre(),
            si::kilogram(),
            si::second(),
            si::ampere(),
            si::kelvin(),
            si::mole(),
            si::candela(),
            si::gram(),
            si::minute(),
            si::hour(),
            si::celsius(),
            si::hertz(),
            si::newton(),
            si::kilo(&si::metre()),
            si::centi(&si::metre()),
            si::milli(&si::metre()),
            si::milli(&si::gram()),
            si::milli(&si::second()),
            si::micro(&si::second()),
            si::kilo(&si::hertz()),
            si::mega(&si::hertz()),
        ] {
            let symbol = unit.symbol();
            catalog.insert(symbol, unit);
        }

        catalog
    }

    /// Adds a unit to the catalog under the given symbol, replacing any
    /// previous unit with that symbol.
    pub fn insert(&mut self, symbol: impl Into<String>, unit: Unit) {
        self.units.insert(symbol.into(), unit);
    }

    /// Looks up a unit by its symbol.
    #[must_use]
    pub fn lookup(&self, symbol: &str) -> Option<&Unit> {
        self.units.get(symbol)
    }

    /// Returns every catalogued unit of the given dimension.
    pub fn units_of_dimension<'a>(
        &'a self,
        dimension: &'a Dimension,
    ) -> impl Iterator<Item = (&'a str, &'a Unit)> {
        self.units
            .iter()
            .filter(move |(_, unit)| unit.dimension() == dimension)
            .map(|(symbol, unit)| (symbol.as_str(), unit))
    }

    /// Returns the number of catalogued units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Checks if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
