// SPDX-License-Identifier: Apache-2.0

//! Shared components for the recognizers

/// Characters JSON treats as insignificant whitespace between tokens.
pub(crate) const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

/// Outcome of a single recognizer step.
///
/// Recognizers never fail with an error: a missing production is an ordinary
/// value the caller branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match<'a> {
    /// The production was found. Holds the input left after it, which may be empty.
    Matched(&'a str),
    /// The production was not found at the current position.
    NoMatch,
}

impl<'a> Match<'a> {
    /// Returns `true` for [`Match::Matched`].
    pub const fn is_match(&self) -> bool {
        matches!(self, Match::Matched(_))
    }

    /// The unconsumed remainder, if the production matched.
    pub const fn remainder(self) -> Option<&'a str> {
        match self {
            Match::Matched(rest) => Some(rest),
            Match::NoMatch => None,
        }
    }

    /// Chains another recognizer onto the remainder of a successful match.
    ///
    /// ```
    /// use eatjson::{eat, Match};
    ///
    /// let pair = eat("[ ]", "[").and_then(|rest| eat(rest, "]"));
    /// assert_eq!(pair, Match::Matched(""));
    /// ```
    pub fn and_then<F>(self, f: F) -> Match<'a>
    where
        F: FnOnce(&'a str) -> Match<'a>,
    {
        match self {
            Match::Matched(rest) => f(rest),
            Match::NoMatch => Match::NoMatch,
        }
    }
}

impl<'a> From<Option<&'a str>> for Match<'a> {
    fn from(rest: Option<&'a str>) -> Self {
        match rest {
            Some(rest) => Match::Matched(rest),
            None => Match::NoMatch,
        }
    }
}

impl<'a> From<Match<'a>> for Option<&'a str> {
    fn from(m: Match<'a>) -> Self {
        m.remainder()
    }
}

/// Byte offset at which `rest` starts inside `input`.
///
/// `rest` must be a suffix of `input`, which every recognizer guarantees.
pub(crate) fn offset_of(input: &str, rest: &str) -> usize {
    input.len().saturating_sub(rest.len())
}

/// The suffix of `s` starting at byte `pos`, or `""` if `pos` is out of range
/// or not on a character boundary.
pub(crate) fn tail(s: &str, pos: usize) -> &str {
    s.get(pos..).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_accessors() {
        let hit = Match::Matched("rest");
        assert!(hit.is_match());
        assert_eq!(hit.remainder(), Some("rest"));

        let miss = Match::NoMatch;
        assert!(!miss.is_match());
        assert_eq!(miss.remainder(), None);
    }

    #[test]
    fn test_empty_remainder_is_still_a_match() {
        // An exhausted input after a successful match must not look like a failure
        let hit = Match::Matched("");
        assert!(hit.is_match());
        assert_eq!(Option::<&str>::from(hit), Some(""));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let mut called = false;
        let result = Match::NoMatch.and_then(|rest| {
            called = true;
            Match::Matched(rest)
        });
        assert_eq!(result, Match::NoMatch);
        assert!(!called);
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Match::from(Some("x")), Match::Matched("x"));
        assert_eq!(Match::from(None), Match::NoMatch);
    }

    #[test]
    fn test_offset_of_suffix() {
        let input = "[1, 2]";
        assert_eq!(offset_of(input, &input[3..]), 3);
        assert_eq!(offset_of(input, ""), input.len());
        assert_eq!(offset_of(input, input), 0);
    }

    #[test]
    fn test_tail_out_of_range() {
        assert_eq!(tail("abc", 1), "bc");
        assert_eq!(tail("abc", 3), "");
        assert_eq!(tail("abc", 10), "");
        // Byte 1 is inside the two-byte 'é'
        assert_eq!(tail("é", 1), "");
    }
}
