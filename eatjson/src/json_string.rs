// SPDX-License-Identifier: Apache-2.0

use crate::eat::{eat, skip_whitespace};
use crate::escape_processor::EscapeProcessor;
use crate::parse_error::{ParseErrorKind, Rejection};
use crate::shared::{tail, Match};

/// Recognizes a double-quoted JSON string at the front of `input`, after
/// optional whitespace.
///
/// A backslash always takes the following character with it, so `\"` never
/// closes the literal. Other than that, any character is accepted between
/// the quotes; use a strict [`Parser`](crate::Parser) to validate escapes.
///
/// ```
/// use eatjson::{string, Match};
///
/// assert_eq!(string(r#""This is a string"ok"#), Match::Matched("ok"));
/// assert_eq!(string(r#""unterminated"#), Match::NoMatch);
/// ```
pub fn string(input: &str) -> Match<'_> {
    scan_string(input, false).ok().into()
}

/// String recognizer shared by the permissive and strict paths.
///
/// In strict mode every escape must come from the JSON escape alphabet and
/// raw control characters are rejected.
pub(crate) fn scan_string(input: &str, strict: bool) -> Result<&str, Rejection<'_>> {
    let start = skip_whitespace(input);
    let body = match eat(start, "\"") {
        Match::Matched(body) => body,
        Match::NoMatch if start.is_empty() => {
            return Err(Rejection::new(ParseErrorKind::UnexpectedEnd, start))
        }
        Match::NoMatch => return Err(Rejection::new(ParseErrorKind::UnexpectedToken, start)),
    };

    let bytes = body.as_bytes();
    let mut pos = 0;
    while let Some(&byte) = bytes.get(pos) {
        match byte {
            b'"' => return Ok(tail(body, pos + 1)),
            b'\\' => {
                let escape = bytes.get(pos + 1..).unwrap_or(&[]);
                let len = if strict {
                    EscapeProcessor::escape_len(escape)
                        .map_err(|kind| Rejection::new(kind, tail(body, pos)))?
                } else if escape.is_empty() {
                    break;
                } else {
                    1
                };
                pos += 1 + len;
            }
            0x00..=0x1F if strict => {
                return Err(Rejection::new(
                    ParseErrorKind::ControlCharacter,
                    tail(body, pos),
                ))
            }
            _ => pos += 1,
        }
    }
    Err(Rejection::new(ParseErrorKind::UnterminatedString, start))
}
