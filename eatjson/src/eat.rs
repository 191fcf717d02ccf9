// SPDX-License-Identifier: Apache-2.0

use crate::shared::{Match, WHITESPACE};

/// Strips leading space, tab, newline and carriage return characters.
///
/// ```
/// assert_eq!(eatjson::skip_whitespace(" \t\r\n[1]"), "[1]");
/// ```
pub fn skip_whitespace(input: &str) -> &str {
    input.trim_start_matches(WHITESPACE)
}

/// Consumes `token` from the front of `input`, after any leading whitespace.
///
/// Returns the input strictly after the token, which may be empty. Fails with
/// [`Match::NoMatch`] if nothing but whitespace is left while a non-empty
/// token is required, or if the input does not start with `token`.
///
/// Whitespace is skipped only before the token, never after it. An empty
/// token matches any input and yields the input without its leading
/// whitespace.
///
/// ```
/// use eatjson::{eat, Match};
///
/// assert_eq!(eat("abc123", "abc"), Match::Matched("123"));
/// assert_eq!(eat("  {}", "{"), Match::Matched("}"));
/// assert_eq!(eat("abc123", "123"), Match::NoMatch);
/// ```
pub fn eat<'a>(input: &'a str, token: &str) -> Match<'a> {
    let rest = skip_whitespace(input);
    if rest.is_empty() && !token.is_empty() {
        return Match::NoMatch;
    }
    rest.strip_prefix(token).into()
}
