// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseErrorKind;

/// Validation of JSON escape sequences for strict mode.
///
/// Only checks that escapes are well-formed. Nothing is unescaped, and
/// `\uXXXX` escapes are not checked for surrogate pairing since the JSON
/// grammar itself accepts lone surrogates.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Returns `true` if `escape_char` may follow a backslash on its own.
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert!(EscapeProcessor::is_simple_escape(b'n'));
    /// ```
    pub fn is_simple_escape(escape_char: u8) -> bool {
        matches!(
            escape_char,
            b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't'
        )
    }

    /// Returns `true` if `byte` is a hexadecimal digit of either case.
    pub fn is_hex_digit(byte: u8) -> bool {
        byte.is_ascii_hexdigit()
    }

    /// Checks that `hex` is exactly the four hex digits of a `\uXXXX` escape.
    pub fn validate_unicode_hex(hex: &[u8]) -> Result<(), ParseErrorKind> {
        if hex.len() == 4 && hex.iter().all(|&byte| Self::is_hex_digit(byte)) {
            Ok(())
        } else {
            Err(ParseErrorKind::InvalidUnicodeHex)
        }
    }

    /// Validates the escape sequence following a backslash.
    ///
    /// # Arguments
    /// * `after_backslash` - The bytes of the string body starting right after the `\`.
    ///
    /// # Returns
    /// How many bytes the escape occupies after the backslash: 1 for simple
    /// escapes, 5 for `\uXXXX`.
    pub fn escape_len(after_backslash: &[u8]) -> Result<usize, ParseErrorKind> {
        match after_backslash.first() {
            None => Err(ParseErrorKind::UnterminatedString),
            Some(&b'u') => {
                let hex = after_backslash.get(1..5).unwrap_or(&[]);
                Self::validate_unicode_hex(hex)?;
                Ok(5)
            }
            Some(&c) if Self::is_simple_escape(c) => Ok(1),
            Some(_) => Err(ParseErrorKind::InvalidEscapeSequence),
        }
    }
}
