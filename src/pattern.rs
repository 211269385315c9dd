use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::{QueryError, Result};

/// A regular-expression literal: pattern source plus option flags.
///
/// This is the equivalent of a `/source/flags` literal in a query shell.
/// The source is kept as text and is not compiled when a filter is built;
/// the server evaluates it. Call [`Pattern::compile`] to check it locally.
///
/// # Examples
///
/// ```
/// use mongo_query::Pattern;
///
/// let p = Pattern::with_options("^acme", "i");
/// assert_eq!(p.to_string(), "/^acme/i");
/// assert!(p.compile().unwrap().is_match("ACME corp"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    source: String,
    options: String,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        Pattern {
            source: source.into(),
            options: String::new(),
        }
    }

    pub fn with_options(source: impl Into<String>, options: impl Into<String>) -> Self {
        Pattern {
            source: source.into(),
            options: options.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn options(&self) -> &str {
        &self.options
    }

    /// Compile the pattern with the `regex` engine.
    ///
    /// Options map onto the engine's switches: `i` case-insensitive,
    /// `m` multi-line anchors, `s` dot matches newline, `x` extended
    /// whitespace. Any other flag is rejected.
    pub fn compile(&self) -> Result<Regex> {
        let mut builder = RegexBuilder::new(&self.source);
        for flag in self.options.chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'x' => builder.ignore_whitespace(true),
                other => return Err(QueryError::UnknownFlag(other)),
            };
        }
        Ok(builder.build()?)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", escape_literal(&self.source), self.options)
    }
}

/// Escape the source for a `/.../` literal: bare slashes and line breaks.
/// A slash the source already escapes is left alone.
fn escape_literal(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut escaped = false;
    for c in source.chars() {
        match c {
            '/' if !escaped => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
        escaped = c == '\\' && !escaped;
    }
    out
}

// Inline flags such as `(?i)` stay part of the source.
impl From<&Regex> for Pattern {
    fn from(regex: &Regex) -> Self {
        Pattern::new(regex.as_str())
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern::from(&regex)
    }
}
