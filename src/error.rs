use alloc::string::String;
use core::fmt;

/// Everything that can go wrong, recoverably.
///
/// Division by zero and malformed input are reported here by the `Result` APIs;
/// the operators panic instead, like the native integers do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Division or remainder by zero.
    DivideByZero,
    /// Text that is not a number, or not one that fits.
    Parse(ParseError),
    /// A float that is negative, not finite, or too large for the target.
    FloatConversion(FloatError),
    /// A value that does not fit a narrower integer type.
    OutOfRange,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Nothing but whitespace and separators.
    Empty,
    /// A character that is not a digit of the detected base.
    InvalidDigit,
    /// A decimal number with a leading zero (not the number zero itself).
    LeadingZero,
    /// A base prefix without digits.
    MissingDigits,
    /// More than the type can hold.
    Overflow,
}

impl ParseErrorKind {
    pub const fn description(self) -> &'static str {
        match self {
            Self::Empty => "no digits",
            Self::InvalidDigit => "invalid digit",
            Self::LeadingZero => "leading zero in decimal number",
            Self::MissingDigits => "prefix without digits",
            Self::Overflow => "number too large",
        }
    }
}

/// A failed parse, with the text that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub text: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FloatError {
    Negative,
    NotANumber,
    Infinite,
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivideByZero => f.write_str("division or modulus by zero"),
            Self::Parse(error) => fmt::Display::fmt(error, f),
            Self::FloatConversion(error) => fmt::Display::fmt(error, f),
            Self::OutOfRange => f.write_str("value out of range of the target type"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot parse {:?}: {}", self.text, self.kind.description())
    }
}

impl fmt::Display for FloatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Negative => "negative float has no unsigned value",
            Self::NotANumber => "NaN has no integer value",
            Self::Infinite => "infinite float has no integer value",
            Self::OutOfRange => "float out of range of the integer type",
        })
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::FloatConversion(error) => Some(error),
            _ => None,
        }
    }
}

impl core::error::Error for ParseError {}
impl core::error::Error for FloatError {}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<FloatError> for Error {
    fn from(error: FloatError) -> Self {
        Self::FloatConversion(error)
    }
}
