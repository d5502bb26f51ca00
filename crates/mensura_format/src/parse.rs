//! Parsing of quantity text.
//!
//! The grammar is a numeric literal followed by an optional unit
//! expression:
//!
//! ```text
//! quantity  = number [ unit-expr ]
//! number    = [+-] digits [ "." digits ] [ ("e"|"E") [+-] digits ]
//! unit-expr = term { ("*"|"/") term }
//! term      = symbol [ "^" [+-] digits ] | "1" | "(" unit-expr ")"
//! ```
//!
//! Unit symbols resolve through a caller-owned [`UnitCatalog`]; the parser
//! defines no unit names of its own. A parse failure surfaces as a
//! [`ParseError`] carrying the offending text and byte offset, with no
//! partial recovery.

use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_while1},
    character::complete::{digit1, one_of, space0},
    combinator::{opt, recognize},
};
use nom_locate::LocatedSpan;
use num_bigint::BigInt;
use num_rational::BigRational;

use mensura_quantity::{Number, Quantity};
use mensura_unit::Unit;

use crate::catalog::UnitCatalog;
use crate::error::{ParseError, ParseErrorReason};

/// A span of text in the input string.
pub type InputSpan<'a> = LocatedSpan<&'a str>;

/// Parses a quantity: a numeric literal optionally followed by unit text.
///
/// Integer literals parse to the long kind (or the generic-number kind when
/// they exceed it); literals with a decimal point or exponent parse to the
/// double kind. Without unit text the quantity is dimensionless.
///
/// # Errors
///
/// Returns a [`ParseError`] with the offending text and offset when the
/// input is not a complete quantity or a unit symbol is not in the catalog.
pub fn parse_quantity(input: &str, catalog: &UnitCatalog) -> Result<Quantity, ParseError> {
    let span = InputSpan::new(input);

    let rest = skip_spaces(span);
    let (rest, lexeme) = number_token(rest).map_err(|_| {
        ParseError::new(
            rest.location_offset(),
            fragment_head(&rest),
            ParseErrorReason::ExpectedNumber,
        )
    })?;
    let value = number_from_lexeme(lexeme.fragment());

    let rest = skip_spaces(rest);
    let (rest, unit) = if rest.fragment().is_empty() {
        (rest, Unit::one())
    } else {
        match unit_expr(rest, catalog) {
            Ok((rest, unit)) => (rest, unit),
            // Input that does not even start a unit term is trailing
            // garbage, not a malformed unit.
            Err(error)
                if error.reason == ParseErrorReason::MissingTerm
                    && error.offset == rest.location_offset() =>
            {
                return Err(ParseError::new(
                    rest.location_offset(),
                    fragment_head(&rest),
                    ParseErrorReason::TrailingInput,
                ));
            }
            Err(error) => return Err(error),
        }
    };

    let rest = skip_spaces(rest);
    if !rest.fragment().is_empty() {
        return Err(ParseError::new(
            rest.location_offset(),
            fragment_head(&rest),
            ParseErrorReason::TrailingInput,
        ));
    }

    Ok(Quantity::of(value, unit))
}

/// Parses a unit expression with left-associative `*` and `/`.
fn unit_expr<'a>(
    input: InputSpan<'a>,
    catalog: &UnitCatalog,
) -> Result<(InputSpan<'a>, Unit), ParseError> {
    let (mut rest, mut unit) = unit_term(input, catalog)?;

    while let Ok((after_op, op)) = operator_token(rest) {
        match unit_term(after_op, catalog) {
            Ok((after_term, term)) => {
                unit = if *op.fragment() == "*" {
                    unit.multiply(&term)
                } else {
                    unit.divide(&term)
                };
                rest = after_term;
            }
            Err(error) if error.reason == ParseErrorReason::MissingTerm => {
                return Err(ParseError::new(
                    after_op.location_offset(),
                    *op.fragment(),
                    ParseErrorReason::MissingTerm,
                ));
            }
            Err(error) => return Err(error),
        }
    }

    Ok((rest, unit))
}

/// Parses a unit term: a catalogued symbol with an optional exponent, the
/// dimensionless `1`, or a parenthesized unit expression.
fn unit_term<'a>(
    input: InputSpan<'a>,
    catalog: &UnitCatalog,
) -> Result<(InputSpan<'a>, Unit), ParseError> {
    if let Ok((rest, _)) = unit_one_token(input) {
        return Ok((rest, Unit::one()));
    }

    if let Ok((rest, open)) = paren_left(input) {
        let (rest, unit) = unit_expr(rest, catalog)?;
        let Ok((rest, _)) = paren_right(rest) else {
            return Err(ParseError::new(
                open.location_offset(),
                *open.fragment(),
                ParseErrorReason::UnclosedParen,
            ));
        };
        return Ok((rest, unit));
    }

    let Ok((rest, symbol)) = symbol_token(input) else {
        return Err(ParseError::new(
            input.location_offset(),
            fragment_head(&input),
            ParseErrorReason::MissingTerm,
        ));
    };

    let unit = catalog.lookup(symbol.fragment()).ok_or_else(|| {
        ParseError::new(
            symbol.location_offset(),
            *symbol.fragment(),
            ParseErrorReason::UnknownUnit,
        )
    })?;

    let (rest, exponent) = exponent(rest)?;
    let unit = match exponent {
        Some(exponent) => unit.pow(exponent),
        None => unit.clone(),
    };

    Ok((rest, unit))
}

/// Parses an optional `^`-prefixed signed integer exponent.
fn exponent(input: InputSpan<'_>) -> Result<(InputSpan<'_>, Option<i32>), ParseError> {
    let Ok((rest, caret)) = caret(input) else {
        return Ok((input, None));
    };

    let missing_exponent = || {
        ParseError::new(
            rest.location_offset(),
            *caret.fragment(),
            ParseErrorReason::MissingExponent,
        )
    };

    let (rest, digits) = exponent_token(rest).map_err(|_| missing_exponent())?;
    let exponent = digits
        .fragment()
        .parse::<i32>()
        .map_err(|_| missing_exponent())?;

    Ok((rest, Some(exponent)))
}

fn number_from_lexeme(lexeme: &str) -> Number {
    if lexeme.contains(['.', 'e', 'E']) {
        let value = lexeme.parse::<f64>();
        let value = value.expect("all valid numbers should parse correctly");
        return Number::Double(value);
    }

    match lexeme.parse::<i64>() {
        Ok(value) => Number::Long(value),
        Err(_) => {
            // Longer than a long: fall back to the generic-number kind.
            let value = lexeme.parse::<BigInt>();
            let value = value.expect("all valid integers should parse correctly");
            Number::Big(BigRational::from_integer(value))
        }
    }
}

fn skip_spaces(input: InputSpan<'_>) -> InputSpan<'_> {
    space0::<_, nom::error::Error<InputSpan<'_>>>(input).map_or(input, |(rest, _)| rest)
}

fn fragment_head<'a>(input: &InputSpan<'a>) -> &'a str {
    input
        .fragment()
        .split_whitespace()
        .next()
        .unwrap_or_default()
}

/// Parses a number literal, supporting optional sign, decimal, and exponent.
fn number_token(input: InputSpan<'_>) -> IResult<InputSpan<'_>, InputSpan<'_>> {
    recognize((
        opt(one_of("+-")),
        digit1,
        opt((tag("."), digit1)),
        opt((one_of("eE"), opt(one_of("+-")), digit1)),
    ))
    .parse(input)
}

/// Parses the dimensionless unit `1`, rejecting it when it starts a number.
fn unit_one_token(input: InputSpan<'_>) -> IResult<InputSpan<'_>, InputSpan<'_>> {
    let (rest, token) = tag("1").parse(input)?;

    if rest.fragment().starts_with(|c: char| c.is_ascii_digit()) {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )));
    }

    Ok((rest, token))
}

fn symbol_token(input: InputSpan<'_>) -> IResult<InputSpan<'_>, InputSpan<'_>> {
    take_while1(|c: char| c.is_alphabetic() || matches!(c, '%' | '$')).parse(input)
}

fn exponent_token(input: InputSpan<'_>) -> IResult<InputSpan<'_>, InputSpan<'_>> {
    recognize((opt(one_of("+-")), digit1)).parse(input)
}

fn operator_token(input: InputSpan<'_>) -> IResult<InputSpan<'_>, InputSpan<'_>> {
    recognize(one_of("*/")).parse(input)
}

fn caret(input: InputSpan<'_>) -> IResult<InputSpan<'_>, InputSpan<'_>> {
    tag("^").parse(input)
}

fn paren_left(input: InputSpan<'_>) -> IResult<InputSpan<'_>, InputSpan<'_>> {
    tag("(").parse(input)
}

fn paren_right(input: InputSpan<'_>) -> IResult<InputSpan<'_>, InputSpan<'_>> {
    tag(")").parse(input)
}
