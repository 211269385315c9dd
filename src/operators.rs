//! Reserved operator keys.
//!
//! Every key a builder emits, other than a caller's field name, is one of
//! the constants below. Callers and tests should refer to them by name
//! rather than spelling out the `$`-prefixed text.

use std::{fmt, str::FromStr};

use crate::error::QueryError;

/// Sentinel that starts every reserved key.
pub const SENTINEL: char = '$';

// Comparison
/// Equal to
pub const EQ: &str = "$eq";
/// Not equal to
pub const NE: &str = "$ne";
/// Greater than
pub const GT: &str = "$gt";
/// Greater than or equal to
pub const GTE: &str = "$gte";
/// Less than
pub const LT: &str = "$lt";
/// Less than or equal to
pub const LTE: &str = "$lte";
/// Member of an array, or string containment for the `_s` forms
pub const IN: &str = "$in";
/// Not a member of an array, or string non-containment for the `_s` forms
pub const NIN: &str = "$nin";

// Logical
/// All clauses match
pub const AND: &str = "$and";
/// Any clause matches
pub const OR: &str = "$or";
/// Inverts a single expression
pub const NOT: &str = "$not";
/// No clause matches
pub const NOR: &str = "$nor";

// Regex
/// Pattern source
pub const REGEX: &str = "$regex";
/// Pattern option flags
pub const OPTIONS: &str = "$options";

/// Broad grouping of the reserved operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Comparison,
    Logical,
    Regex,
}

/// The closed set of operators a filter document may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Comparison
    /// `$eq`
    Eq,
    /// `$ne`
    Ne,
    /// `$gt`
    Gt,
    /// `$gte`
    Gte,
    /// `$lt`
    Lt,
    /// `$lte`
    Lte,
    /// `$in`
    In,
    /// `$nin`
    Nin,

    // Logical
    /// `$and`
    And,
    /// `$or`
    Or,
    /// `$not`
    Not,
    /// `$nor`
    Nor,

    // Regex
    /// `$regex`
    Regex,
    /// `$options`
    Options,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 14] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::In,
        Operator::Nin,
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::Nor,
        Operator::Regex,
        Operator::Options,
    ];

    /// The reserved key this operator is written as.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => EQ,
            Operator::Ne => NE,
            Operator::Gt => GT,
            Operator::Gte => GTE,
            Operator::Lt => LT,
            Operator::Lte => LTE,
            Operator::In => IN,
            Operator::Nin => NIN,
            Operator::And => AND,
            Operator::Or => OR,
            Operator::Not => NOT,
            Operator::Nor => NOR,
            Operator::Regex => REGEX,
            Operator::Options => OPTIONS,
        }
    }

    pub const fn kind(self) -> OperatorKind {
        use Operator::*;
        match self {
            Eq | Ne | Gt | Gte | Lt | Lte | In | Nin => OperatorKind::Comparison,
            And | Or | Not | Nor => OperatorKind::Logical,
            Regex | Options => OperatorKind::Regex,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| QueryError::UnknownOperator(s.to_string()))
    }
}

/// Whether `key` is one of the reserved operator keys.
///
/// A field name that merely starts with [`SENTINEL`] is not an operator
/// key unless it names a known operator.
pub fn is_operator_key(key: &str) -> bool {
    key.starts_with(SENTINEL) && key.parse::<Operator>().is_ok()
}

