use std::fmt::Display;

use regex::Regex;

use crate::{
    pattern::Pattern,
    query,
    value::{Document, Value},
};

/// Creates a fluent builder for the named field.
///
/// The returned [`Field`] produces comparison expressions with the field
/// name already filled in, so `field("name").ne("Colin")` reads the same
/// as the free-function form `query::ne("name", "Colin")`.
///
/// # Examples
///
/// ```
/// use mongo_query::{field, query};
///
/// assert_eq!(field("name").ne("Colin"), query::ne("name", "Colin"));
/// ```
pub fn field(name: impl Display) -> Field {
    Field {
        name: name.to_string(),
    }
}

/// A field name that can build comparison expressions on itself.
///
/// Every method consumes the builder and delegates to the matching free
/// function in [`query`] with this field as the first argument.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn eq(self, value: impl Into<Value>) -> Document {
        query::eq(self, value)
    }

    #[inline]
    pub fn ne(self, value: impl Into<Value>) -> Document {
        query::ne(self, value)
    }

    #[inline]
    pub fn gt(self, value: impl Into<Value>) -> Document {
        query::gt(self, value)
    }

    #[inline]
    pub fn ge(self, value: impl Into<Value>) -> Document {
        query::ge(self, value)
    }

    #[inline]
    pub fn lt(self, value: impl Into<Value>) -> Document {
        query::lt(self, value)
    }

    #[inline]
    pub fn le(self, value: impl Into<Value>) -> Document {
        query::le(self, value)
    }

    /// Array membership; see [`query::in_`].
    #[doc(alias = "in")]
    #[inline]
    pub fn in_<V: Into<Value>>(self, values: impl IntoIterator<Item = V>) -> Document {
        query::in_(self, values)
    }

    #[inline]
    pub fn nin<V: Into<Value>>(self, values: impl IntoIterator<Item = V>) -> Document {
        query::nin(self, values)
    }

    /// String containment; see [`query::in_s`].
    #[inline]
    pub fn in_s(self, s: impl Into<String>) -> Document {
        query::in_s(self, s)
    }

    #[inline]
    pub fn nin_s(self, s: impl Into<String>) -> Document {
        query::nin_s(self, s)
    }

    /// `{field: {$regex: pattern, ...qualifiers}}`
    pub fn rx(
        self,
        pattern: impl Into<Value>,
        qualifiers: impl IntoIterator<Item = Document>,
    ) -> Document {
        query::field_expr(self, query::rx(pattern, qualifiers))
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        field(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field { name }
    }
}

/// Turns a string into a [`Field`] builder: `"qty".field().lt(5)`.
///
/// `str` already has `eq`/`ne`/`gt`/... through `PartialEq` and
/// `PartialOrd`, so the comparisons hang off the returned [`Field`]
/// instead of the string itself.
pub trait AsField {
    fn field(&self) -> Field;
}

impl AsField for str {
    fn field(&self) -> Field {
        field(self)
    }
}

impl AsField for String {
    fn field(&self) -> Field {
        field(self)
    }
}

/// Operator expressions that use the string itself as the operand.
///
/// ```
/// use mongo_query::{Pattern, RegexExt, StrTarget};
///
/// let expr = Pattern::new(".*").rx(["i".rxo(), "abcdefg".nin_str()]);
/// assert_eq!(expr.len(), 3);
/// ```
pub trait StrTarget {
    /// `{$options: self}`
    fn rxo(&self) -> Document;

    /// `{$in: self}`
    fn in_str(&self) -> Document;

    /// `{$nin: self}`
    fn nin_str(&self) -> Document;
}

impl StrTarget for str {
    fn rxo(&self) -> Document {
        query::rxo(self)
    }

    fn in_str(&self) -> Document {
        query::in_str(self)
    }

    fn nin_str(&self) -> Document {
        query::nin_str(self)
    }
}

impl StrTarget for String {
    fn rxo(&self) -> Document {
        self.as_str().rxo()
    }

    fn in_str(&self) -> Document {
        self.as_str().in_str()
    }

    fn nin_str(&self) -> Document {
        self.as_str().nin_str()
    }
}

/// Builds a `$regex` expression with the receiver as the pattern.
pub trait RegexExt {
    fn rx(&self, qualifiers: impl IntoIterator<Item = Document>) -> Document;
}

impl RegexExt for Pattern {
    fn rx(&self, qualifiers: impl IntoIterator<Item = Document>) -> Document {
        query::rx(self.clone(), qualifiers)
    }
}

impl RegexExt for Regex {
    fn rx(&self, qualifiers: impl IntoIterator<Item = Document>) -> Document {
        query::rx(self, qualifiers)
    }
}
