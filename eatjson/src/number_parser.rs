// SPDX-License-Identifier: Apache-2.0

use crate::eat::skip_whitespace;
use crate::shared::Match;

/// Recognizes a JSON number at the front of `input`, after optional whitespace.
///
/// The grammar is
/// `'-'? digit+ ('.' digit+)? (('e'|'E') ('+'|'-')? digit+)?`, matched
/// greedily in a single pass. A fraction or exponent that is not
/// well-formed is simply not part of the match: `1.` matches `1` and leaves
/// `.` in the remainder for the caller to reject.
///
/// ```
/// use eatjson::{integer, Match};
///
/// assert_eq!(integer("-123"), Match::Matched(""));
/// assert_eq!(integer("1e12ok"), Match::Matched("ok"));
/// assert_eq!(integer("ok"), Match::NoMatch);
/// ```
pub fn integer(input: &str) -> Match<'_> {
    let rest = skip_whitespace(input);
    match number_len(rest.as_bytes()) {
        Some(len) => rest.get(len..).into(),
        None => Match::NoMatch,
    }
}

/// Length in bytes of the longest number prefix of `bytes`, if there is one.
fn number_len(bytes: &[u8]) -> Option<usize> {
    let mut pos = 0;
    if bytes.first() == Some(&b'-') {
        pos = 1;
    }

    let int_digits = count_digits(bytes, pos);
    if int_digits == 0 {
        return None;
    }
    pos += int_digits;

    if bytes.get(pos) == Some(&b'.') {
        let frac_digits = count_digits(bytes, pos + 1);
        if frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_start = pos + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(bytes, exp_start);
        if exp_digits > 0 {
            pos = exp_start + exp_digits;
        }
    }

    Some(pos)
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
}
