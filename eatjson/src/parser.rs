// SPDX-License-Identifier: Apache-2.0

use crate::config::ParserConfig;
use crate::eat::{eat, skip_whitespace};
use crate::json_string::scan_string;
use crate::number_parser::integer;
use crate::parse_error::{ParseError, ParseErrorKind, Rejection};
use crate::shared::Match;

type Step<'a> = Result<&'a str, Rejection<'a>>;

/// Recursive-descent JSON recognizer.
///
/// A `Parser` carries only its [`ParserConfig`]; every call is independent,
/// so one parser can be shared freely across threads.
///
/// ```
/// use eatjson::Parser;
///
/// let parser = Parser::new();
/// assert!(parser.parse(r#"{"apple":{"answer": false}, "pears": {"answer": "yes"}}"#));
/// assert!(!parser.parse(r#"{"apple": "yes",}"#));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser with the default, permissive configuration.
    pub const fn new() -> Self {
        Self::with_config(ParserConfig::new())
    }

    pub const fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Creates a parser that validates string escapes.
    pub const fn strict() -> Self {
        Self::with_config(ParserConfig::new().with_strict(true))
    }

    pub const fn config(&self) -> ParserConfig {
        self.config
    }

    /// See [`eat`](crate::eat()).
    pub fn eat<'a>(&self, input: &'a str, token: &str) -> Match<'a> {
        eat(input, token)
    }

    /// See [`integer`](crate::integer()).
    pub fn integer<'a>(&self, input: &'a str) -> Match<'a> {
        integer(input)
    }

    /// Recognizes a string literal, validating escapes if the parser is strict.
    ///
    /// ```
    /// use eatjson::{Match, Parser};
    ///
    /// assert_eq!(Parser::new().string(r#""\q""#), Match::Matched(""));
    /// assert_eq!(Parser::strict().string(r#""\q""#), Match::NoMatch);
    /// ```
    pub fn string<'a>(&self, input: &'a str) -> Match<'a> {
        scan_string(input, self.config.strict).ok().into()
    }

    /// Returns `true` if `input` is exactly one well-formed JSON value with
    /// nothing but whitespace around it.
    pub fn parse(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }

    /// Checks `input` like [`parse`](Self::parse), reporting the first
    /// production that failed.
    pub fn validate(&self, input: &str) -> Result<(), ParseError> {
        let result = self.document(input).map_err(|rejection| rejection.locate(input));
        if let Err(err) = &result {
            log::debug!("Parser: rejected document: {}", err);
        }
        result
    }

    fn document<'a>(&self, input: &'a str) -> Result<(), Rejection<'a>> {
        let start = skip_whitespace(input);
        if start.is_empty() {
            return Err(Rejection::new(ParseErrorKind::EmptyInput, start));
        }

        let rest = skip_whitespace(self.value(start, 0)?);
        if !rest.is_empty() {
            return Err(Rejection::new(ParseErrorKind::TrailingCharacters, rest));
        }
        Ok(())
    }

    /// Recognizes one value. `depth` is the number of containers enclosing it.
    fn value<'a>(&self, input: &'a str, depth: usize) -> Step<'a> {
        let rest = skip_whitespace(input);
        let Some(&first) = rest.as_bytes().first() else {
            return Err(Rejection::new(ParseErrorKind::UnexpectedEnd, rest));
        };
        log::trace!("Parser: value at depth {}, next {:?}", depth, first as char);

        match first {
            b'{' => self.object(rest, depth + 1),
            b'[' => self.array(rest, depth + 1),
            b'"' => scan_string(rest, self.config.strict),
            b'-' | b'0'..=b'9' => integer(rest)
                .remainder()
                .ok_or(Rejection::new(ParseErrorKind::InvalidNumber, rest)),
            _ => ["true", "false", "null"]
                .iter()
                .find_map(|literal| eat(rest, literal).remainder())
                .ok_or(Rejection::new(ParseErrorKind::UnexpectedToken, rest)),
        }
    }

    /// `'{' (member (',' member)*)? '}'`
    fn object<'a>(&self, input: &'a str, depth: usize) -> Step<'a> {
        self.enter(input, depth)?;
        let mut rest = expect(input, "{")?;
        if let Match::Matched(after) = eat(rest, "}") {
            return Ok(after);
        }
        loop {
            rest = self.member(rest, depth)?;
            match eat(rest, ",") {
                Match::Matched(after) => rest = after,
                Match::NoMatch => return expect(rest, "}"),
            }
        }
    }

    /// `string ':' value`
    fn member<'a>(&self, input: &'a str, depth: usize) -> Step<'a> {
        let rest = scan_string(input, self.config.strict)?;
        let rest = expect(rest, ":")?;
        self.value(rest, depth)
    }

    /// `'[' (value (',' value)*)? ']'`
    fn array<'a>(&self, input: &'a str, depth: usize) -> Step<'a> {
        self.enter(input, depth)?;
        let mut rest = expect(input, "[")?;
        if let Match::Matched(after) = eat(rest, "]") {
            return Ok(after);
        }
        loop {
            rest = self.value(rest, depth)?;
            match eat(rest, ",") {
                Match::Matched(after) => rest = after,
                Match::NoMatch => return expect(rest, "]"),
            }
        }
    }

    fn enter<'a>(&self, input: &'a str, depth: usize) -> Result<(), Rejection<'a>> {
        if self.config.allows_depth(depth) {
            Ok(())
        } else {
            log::debug!("Parser: nesting depth {} exceeds limit", depth);
            Err(Rejection::new(ParseErrorKind::MaxDepthReached, input))
        }
    }
}

/// Eats a required structural token, turning a miss into a positioned rejection.
fn expect<'a>(input: &'a str, token: &str) -> Step<'a> {
    match eat(input, token) {
        Match::Matched(rest) => Ok(rest),
        Match::NoMatch => {
            let at = skip_whitespace(input);
            let kind = if at.is_empty() {
                ParseErrorKind::UnexpectedEnd
            } else {
                ParseErrorKind::UnexpectedToken
            };
            Err(Rejection::new(kind, at))
        }
    }
}
