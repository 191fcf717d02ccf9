// SPDX-License-Identifier: Apache-2.0

//! # eatjson
//!
//! A recursive-descent recognizer for strict JSON text.
//!
//! Instead of a tokenizer pass or a generated grammar, every production is
//! recognized by consuming the input from the front with one primitive,
//! [`eat`]: skip insignificant whitespace, require a literal token, hand back
//! the remainder. [`integer`] and [`string`] recognize the two non-literal
//! lexical productions, and [`parse`] drives the descent over a whole
//! document.
//!
//! Nothing is allocated and no value tree is built. Each recognizer is a pure
//! function from `&str` to a [`Match`], so the "remaining input" is always a
//! suffix of the original string.
//!
//! ```
//! use eatjson::{eat, integer, parse, string, Match};
//!
//! assert_eq!(eat(" {}", "{"), Match::Matched("}"));
//! assert_eq!(integer("-1.5e3, 2"), Match::Matched(", 2"));
//! assert_eq!(string(r#""a \"quoted\" word"ok"#), Match::Matched("ok"));
//!
//! assert!(parse(r#"{"apple": [1, true, null]}"#));
//! assert!(!parse("[1, 2,]"));
//! ```
//!
//! For a diagnostic instead of a plain accept/reject answer, use
//! [`validate`]. Strict escape validation and a nesting limit are configured
//! through [`ParserConfig`] on a [`Parser`].

#![cfg_attr(not(test), no_std)]

mod config;
pub use config::ParserConfig;

mod eat;
pub use eat::{eat, skip_whitespace};

mod escape_processor;

mod json_string;
pub use json_string::string;

mod number_parser;
pub use number_parser::integer;

mod parse_error;
pub use parse_error::{ParseError, ParseErrorKind};

mod parser;
pub use parser::Parser;

mod shared;
pub use shared::Match;

/// Returns `true` if `input` is exactly one well-formed JSON value,
/// surrounded by nothing but optional whitespace.
///
/// Uses the default [`ParserConfig`]: permissive string escapes and no
/// nesting limit.
///
/// ```
/// assert!(eatjson::parse("[[], [[], []]]"));
/// assert!(!eatjson::parse(""));
/// ```
pub fn parse(input: &str) -> bool {
    Parser::new().parse(input)
}

/// Like [`parse`], but reports why and where the input was rejected.
///
/// ```
/// use eatjson::{validate, ParseErrorKind};
///
/// let err = validate("[1, 2] x").unwrap_err();
/// assert_eq!(err.kind(), ParseErrorKind::TrailingCharacters);
/// assert_eq!(err.offset(), 7);
/// ```
pub fn validate(input: &str) -> Result<(), ParseError> {
    Parser::new().validate(input)
}
