use alloc::string::String;
use core::fmt;

/// Result type for this crate with specific error enum.
pub type Result<T> = ::core::result::Result<T, Error>;

/// Offset in UTF-16 code units into the pattern source.
pub type ParseErrorPosition = usize;

/// An error for the result of parsing a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The pattern is not valid ECMAScript regular expression syntax.
    ParseError(ParseErrorPosition, ParseError),
}

impl Error {
    /// The code-unit offset at which parsing stopped.
    pub fn position(&self) -> ParseErrorPosition {
        match self {
            Error::ParseError(position, _) => *position,
        }
    }

    /// The kind of syntax error.
    pub fn kind(&self) -> &ParseError {
        match self {
            Error::ParseError(_, kind) => kind,
        }
    }
}

/// The kinds of syntax error a pattern can have.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Opening parenthesis without closing parenthesis, e.g. `(a|b`
    UnterminatedGroup,
    /// Closing parenthesis without an open group, e.g. `a)`
    UnmatchedRightParen,
    /// Quantifier with no quantifiable atom before it, e.g. `*a` or `\b+`
    NothingToRepeat,
    /// Interval quantifier whose maximum is below its minimum, e.g. `a{3,2}`
    NumbersOutOfOrder,
    /// Character class without closing bracket
    UnterminatedCharacterClass,
    /// Class range whose start is above its end, e.g. `[z-a]`
    BadClassRange,
    /// Class range with a class escape endpoint in Unicode mode, e.g. `[\d-z]`
    RangeWithClassEscape,
    /// Backslash without following character
    EscapeAtEndOfPattern,
    /// Escape of a character that may not be escaped in Unicode mode
    InvalidIdentityEscape,
    /// Malformed `\u` escape
    InvalidUnicodeEscape,
    /// Braced Unicode escape above U+10FFFF
    UnicodeOverflow,
    /// `\0` followed by a decimal digit in Unicode mode
    InvalidDecimalEscape,
    /// Numeric back-reference above the number of groups in Unicode mode
    BackReferenceOutOfRange,
    /// Unknown `(?` group syntax
    InvalidGroup,
    /// Group name that is not an identifier or is not terminated by `>`
    InvalidCaptureGroupName,
    /// Two groups with the same name
    DuplicateCaptureGroupName(String),
    /// `\k` not followed by `<name>` where named back-references apply
    InvalidNamedReference,
    /// `\k<name>` with no group of that name
    InvalidNamedCaptureReference(String),
    /// Unknown `\p`/`\P` property outside a class
    InvalidPropertyName,
    /// Unknown `\p`/`\P` property inside a class
    InvalidClassPropertyName,
    /// More than 65536 capture groups
    TooManyCaptures,
    /// Groups nested more than 256 deep
    NestingTooDeep,
    /// Unescaped `{` or `}` in Unicode mode
    RawBraceInPattern,
    /// Unescaped `]` in Unicode mode
    RawBracketInPattern,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ParseError(position, parse_error) => {
                write!(f, "Parsing error at position {}: {}", position, parse_error)
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnterminatedGroup => write!(f, "Unterminated group"),
            ParseError::UnmatchedRightParen => write!(f, "Unmatched ')'"),
            ParseError::NothingToRepeat => write!(f, "Nothing to repeat"),
            ParseError::NumbersOutOfOrder => {
                write!(f, "Numbers out of order in {{}} quantifier")
            }
            ParseError::UnterminatedCharacterClass => write!(f, "Unterminated character class"),
            ParseError::BadClassRange => write!(f, "Range out of order in character class"),
            ParseError::RangeWithClassEscape => {
                write!(f, "Character class escape used as range endpoint")
            }
            ParseError::EscapeAtEndOfPattern => write!(f, "\\ at end of pattern"),
            ParseError::InvalidIdentityEscape => write!(f, "Invalid escape"),
            ParseError::InvalidUnicodeEscape => write!(f, "Invalid Unicode escape"),
            ParseError::UnicodeOverflow => {
                write!(f, "Unicode escape must not be greater than 0x10FFFF")
            }
            ParseError::InvalidDecimalEscape => write!(f, "Invalid decimal escape"),
            ParseError::BackReferenceOutOfRange => write!(f, "Back reference out of range"),
            ParseError::InvalidGroup => write!(f, "Invalid group"),
            ParseError::InvalidCaptureGroupName => write!(f, "Invalid capture group name"),
            ParseError::DuplicateCaptureGroupName(name) => {
                write!(f, "Duplicate capture group name '{}'", name)
            }
            ParseError::InvalidNamedReference => write!(f, "Invalid named reference"),
            ParseError::InvalidNamedCaptureReference(name) => {
                write!(f, "Invalid named capture referenced: '{}'", name)
            }
            ParseError::InvalidPropertyName => write!(f, "Invalid property name"),
            ParseError::InvalidClassPropertyName => {
                write!(f, "Invalid property name in character class")
            }
            ParseError::TooManyCaptures => write!(f, "Too many captures"),
            ParseError::NestingTooDeep => write!(f, "Pattern too deeply nested"),
            ParseError::RawBraceInPattern => write!(f, "Lone quantifier brackets"),
            ParseError::RawBracketInPattern => write!(f, "Lone ']' in pattern"),
        }
    }
}
