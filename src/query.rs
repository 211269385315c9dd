//! Free-function builders for filter expressions.
//!
//! Each builder takes its operands by value and returns a fresh
//! [`Document`]. Nothing is validated: field names, operand types and
//! option flags are passed through as given, and the server that
//! receives the filter decides whether it is meaningful.
//!
//! Builders compose bottom-up, innermost comparisons first:
//!
//! ```
//! use mongo_query::query::{and, eq, lt, or};
//!
//! let filter = and([
//!     eq("price", 0.99),
//!     or([eq("qty", 20), lt("qty", 5)]),
//! ]);
//! assert_eq!(
//!     mongo_query::to_json(&filter.into()),
//!     r#"{"$and":[{"price":{"$eq":0.99}},{"$or":[{"qty":{"$eq":20}},{"qty":{"$lt":5}}]}]}"#
//! );
//! ```

use std::fmt::Display;

use crate::{
    operators::{AND, EQ, GT, GTE, IN, LT, LTE, NE, NIN, NOR, NOT, OPTIONS, OR, REGEX},
    value::{Document, Value},
};

/// A document holding exactly one `key: value` entry.
fn single(key: impl Into<String>, value: impl Into<Value>) -> Document {
    let mut doc = Document::with_capacity(1);
    doc.insert(key.into(), value.into());
    doc
}

/// Attach an operator expression to a field: `{field: expr}`.
///
/// The comparison builders go through this; it is also the way to put a
/// merged expression such as an [`rx`] result under a field name.
pub fn field_expr(field: impl Display, expr: Document) -> Document {
    single(field.to_string(), expr)
}

fn compare(field: impl Display, op: &str, value: Value) -> Document {
    field_expr(field, single(op, value))
}

fn sequence<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Value {
    Value::Array(values.into_iter().map(Into::into).collect())
}

fn combine(op: &str, exprs: impl IntoIterator<Item = Document>) -> Document {
    single(op, Value::Array(exprs.into_iter().map(Value::Object).collect()))
}

// ============================================================================
// Comparison
// ============================================================================

/// `{field: {$eq: value}}`
pub fn eq(field: impl Display, value: impl Into<Value>) -> Document {
    compare(field, EQ, value.into())
}

/// `{field: {$ne: value}}`
pub fn ne(field: impl Display, value: impl Into<Value>) -> Document {
    compare(field, NE, value.into())
}

/// `{field: {$gt: value}}`
pub fn gt(field: impl Display, value: impl Into<Value>) -> Document {
    compare(field, GT, value.into())
}

/// `{field: {$gte: value}}`
pub fn ge(field: impl Display, value: impl Into<Value>) -> Document {
    compare(field, GTE, value.into())
}

/// `{field: {$lt: value}}`
pub fn lt(field: impl Display, value: impl Into<Value>) -> Document {
    compare(field, LT, value.into())
}

/// `{field: {$lte: value}}`
pub fn le(field: impl Display, value: impl Into<Value>) -> Document {
    compare(field, LTE, value.into())
}

/// `{field: {$in: [values...]}}`
///
/// The values always land in an array, in iteration order. No values at
/// all gives `{$in: []}`, which matches nothing.
#[doc(alias = "in")]
pub fn in_<V: Into<Value>>(field: impl Display, values: impl IntoIterator<Item = V>) -> Document {
    compare(field, IN, sequence(values))
}

/// `{field: {$nin: [values...]}}`
pub fn nin<V: Into<Value>>(field: impl Display, values: impl IntoIterator<Item = V>) -> Document {
    compare(field, NIN, sequence(values))
}

/// `{field: {$in: s}}` with the string as a bare operand.
///
/// Differs from `in_(field, [s])`: the string is not wrapped in an array,
/// so the server reads it as a containment target rather than a member
/// list.
pub fn in_s(field: impl Display, s: impl Into<String>) -> Document {
    compare(field, IN, Value::String(s.into()))
}

/// `{field: {$nin: s}}` with the string as a bare operand.
pub fn nin_s(field: impl Display, s: impl Into<String>) -> Document {
    compare(field, NIN, Value::String(s.into()))
}

/// `{$in: s}` with no field, for use as an [`rx`] qualifier.
pub fn in_str(s: impl Into<String>) -> Document {
    single(IN, Value::String(s.into()))
}

/// `{$nin: s}` with no field, for use as an [`rx`] qualifier.
pub fn nin_str(s: impl Into<String>) -> Document {
    single(NIN, Value::String(s.into()))
}

// ============================================================================
// Logical
// ============================================================================

/// `{$and: [exprs...]}`, order preserved.
///
/// The clauses are always wrapped in an array, even when there is one.
pub fn and(exprs: impl IntoIterator<Item = Document>) -> Document {
    combine(AND, exprs)
}

/// `{$or: [exprs...]}`, order preserved.
pub fn or(exprs: impl IntoIterator<Item = Document>) -> Document {
    combine(OR, exprs)
}

/// `{$nor: [exprs...]}`, order preserved.
pub fn nor(exprs: impl IntoIterator<Item = Document>) -> Document {
    combine(NOR, exprs)
}

/// `{$not: expr}`. Takes exactly one expression, never an array.
pub fn not(expr: Document) -> Document {
    single(NOT, expr)
}

// ============================================================================
// Regex
// ============================================================================

/// `{$regex: pattern}` merged with each qualifier in turn.
///
/// Qualifiers are merged left to right and a later qualifier overwrites
/// an earlier key. They are taken by value, so a caller's document can
/// never be changed by the merge; pass a clone to keep using it. Any document may be a qualifier, so operators like
/// `$nin` can sit next to the pattern:
///
/// ```
/// use mongo_query::query::{rx, rxo};
/// use mongo_query::{Document, Value, operators::NIN};
///
/// let exclude = Document::from([(NIN.to_string(), Value::from(vec!["acmeblahcorp"]))]);
/// let expr = rx("acme.*corp", [rxo("i"), exclude]);
/// assert_eq!(expr.keys().collect::<Vec<_>>(), ["$regex", "$options", "$nin"]);
/// ```
pub fn rx(pattern: impl Into<Value>, qualifiers: impl IntoIterator<Item = Document>) -> Document {
    let mut expr = single(REGEX, pattern);
    for qualifier in qualifiers {
        for (key, value) in qualifier {
            if expr.contains_key(&key) {
                log::debug!("regex qualifier overrides existing key {}", key);
            }
            expr.insert(key, value);
        }
    }
    expr
}

/// `{$options: flags}`. The flags are not checked.
pub fn rxo(flags: impl Display) -> Document {
    single(OPTIONS, Value::String(flags.to_string()))
}
