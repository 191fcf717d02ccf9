// SPDX-License-Identifier: Apache-2.0

/// Construction-time options for a [`Parser`](crate::Parser).
///
/// The default is the permissive behavior: any character sequence is accepted
/// inside string literals, and nesting is limited only by the call stack.
///
/// ```
/// use eatjson::{Parser, ParserConfig};
///
/// let config = ParserConfig::new().with_strict(true).with_max_depth(64);
/// let parser = Parser::with_config(config);
/// assert!(!parser.parse(r#""\l""#));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Validate string escapes against the JSON escape alphabet and reject
    /// raw control characters in strings.
    pub strict: bool,
    /// Maximum array/object nesting depth. The outermost container is depth 1,
    /// so `Some(0)` only accepts scalar documents.
    pub max_depth: Option<usize>,
}

impl ParserConfig {
    pub const fn new() -> Self {
        Self {
            strict: false,
            max_depth: None,
        }
    }

    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Returns `true` if opening a container at `depth` stays within the limit.
    pub(crate) const fn allows_depth(&self, depth: usize) -> bool {
        match self.max_depth {
            Some(max) => depth <= max,
            None => true,
        }
    }
}
