//! Quantity representations for the Mensura quantity library.
//!
//! A [`Quantity`] is an immutable pair of a [`Number`] and a unit. The
//! backing numeric kinds form a closed set with one promotion table
//! ([`NumberKind::combine`]); integral results are overflow-checked,
//! narrowing extractions are range-checked, and exactness is derived from
//! the backing kind rather than tracked as state.

mod error;
mod number;
mod quantity;
mod range;

pub use error::{DegenerateOp, QuantityError};
pub use number::{Number, NumberKind};
pub use quantity::Quantity;
pub use range::Range;
