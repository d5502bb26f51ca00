//! Parse errors for the textual boundary.

use std::{error, fmt};

/// Why a parse failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorReason {
    /// The input does not start with a numeric literal
    ExpectedNumber,
    /// A unit symbol is not present in the catalog
    UnknownUnit,
    /// A `^` with no exponent after it
    MissingExponent,
    /// A `*` or `/` with no unit term after it
    MissingTerm,
    /// A `(` with no matching `)`
    UnclosedParen,
    /// Input left over after the quantity
    TrailingInput,
}

/// Error raised by the parsing boundary.
///
/// Carries the offending text and its byte offset in the input. The parser
/// never attempts partial recovery; the first failure surfaces to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset of the failure in the input
    pub offset: usize,
    /// The offending fragment of the input
    pub text: String,
    /// The failure reason
    pub reason: ParseErrorReason,
}

impl ParseError {
    pub(crate) fn new(offset: usize, text: impl Into<String>, reason: ParseErrorReason) -> Self {
        Self {
            offset,
            text: text.into(),
            reason,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match &self.reason {
            ParseErrorReason::ExpectedNumber => "expected a number",
            ParseErrorReason::UnknownUnit => "unknown unit",
            ParseErrorReason::MissingExponent => "expected an exponent after '^'",
            ParseErrorReason::MissingTerm => "expected a unit after the operator",
            ParseErrorReason::UnclosedParen => "unclosed parenthesis",
            ParseErrorReason::TrailingInput => "unexpected trailing input",
        };

        write!(f, "{reason} at offset {}: {:?}", self.offset, self.text)
    }
}

impl error::Error for ParseError {}
