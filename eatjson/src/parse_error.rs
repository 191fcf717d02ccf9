// SPDX-License-Identifier: Apache-2.0

use crate::shared::offset_of;

/// Why a document was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input was empty or contained only whitespace.
    EmptyInput,
    /// The input ended where a token was still required.
    UnexpectedEnd,
    /// A token other than the one the grammar requires was found.
    UnexpectedToken,
    /// A `-` was not followed by a digit.
    InvalidNumber,
    /// A string literal had no closing quote.
    UnterminatedString,
    /// Strict mode only: a backslash was followed by a character outside the escape alphabet.
    InvalidEscapeSequence,
    /// Strict mode only: a `\u` escape was not followed by four hex digits.
    InvalidUnicodeHex,
    /// Strict mode only: a string contained an unescaped control character.
    ControlCharacter,
    /// Arrays and objects were nested deeper than the configured limit.
    MaxDepthReached,
    /// Something other than whitespace followed the top-level value.
    TrailingCharacters,
}

impl core::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseErrorKind::EmptyInput => "empty input",
            ParseErrorKind::UnexpectedEnd => "unexpected end of input",
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::InvalidNumber => "invalid number",
            ParseErrorKind::UnterminatedString => "unterminated string",
            ParseErrorKind::InvalidEscapeSequence => "invalid escape sequence",
            ParseErrorKind::InvalidUnicodeHex => "invalid unicode escape",
            ParseErrorKind::ControlCharacter => "unescaped control character in string",
            ParseErrorKind::MaxDepthReached => "maximum nesting depth exceeded",
            ParseErrorKind::TrailingCharacters => "trailing characters after value",
        };
        f.write_str(msg)
    }
}

/// A rejected document, with the byte offset where the failing production started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

impl ParseError {
    pub const fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Byte offset into the original input.
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

impl core::error::Error for ParseError {}

/// A failure inside the descent, positioned by the input left at the failure point.
///
/// The position is kept as a suffix of the document rather than an index so
/// recognizers never have to know where their input started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rejection<'a> {
    pub kind: ParseErrorKind,
    pub at: &'a str,
}

impl<'a> Rejection<'a> {
    pub const fn new(kind: ParseErrorKind, at: &'a str) -> Self {
        Self { kind, at }
    }

    /// Resolves the position against the full document.
    pub fn locate(self, document: &str) -> ParseError {
        ParseError::new(self.kind, offset_of(document, self.at))
    }
}
