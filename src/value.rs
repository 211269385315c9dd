use indexmap::IndexMap;
use regex::Regex;
use rust_decimal::Decimal;

use crate::pattern::Pattern;

/// An insertion-ordered mapping with string keys.
///
/// Every expression a builder returns is a `Document`. Iteration follows
/// insertion order, so a driver receives `$regex` ahead of `$options`.
/// Equality ignores order, which makes two documents with the same
/// entries compare equal however they were assembled.
pub type Document = IndexMap<String, Value>;

/// An operand or sub-document inside a filter expression.
///
/// The variants cover what a document database accepts in a filter:
/// the JSON types, plus exact decimals and regular-expression literals.
/// Integers and floats stay distinct so `20` and `20.0` render as written.
///
/// Equality is structural, except that `NaN` equals `NaN`, so building
/// the same expression twice always yields equal documents.
///
/// # Examples
///
/// ```
/// use mongo_query::{Document, Value};
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::Boolean(true);
/// let integer = Value::from(42);
/// let float = Value::from(0.99);
/// let string = Value::from("hello");
///
/// // Collections
/// let array = Value::from(vec![1, 2]);
///
/// let mut doc = Document::new();
/// doc.insert("key".to_string(), Value::from("value"));
/// let object = Value::Object(doc);
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// Exact decimal, for prices and other money amounts
    Decimal(Decimal),

    /// UTF-8 string
    String(String),

    /// Regular-expression literal
    Regex(Pattern),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// Nested document
    Object(Document),
}

impl Value {
    /// Returns a human-readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Regex(_) => "regex",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as float, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Object(doc) => Some(doc),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Regex(a), Value::Regex(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

/// Integers wider than `i64` stay exact as decimals while they fit.
fn from_wide_integer(n: i128) -> Value {
    if let Ok(i) = i64::try_from(n) {
        return Value::Integer(i);
    }
    match Decimal::try_from_i128_with_scale(n, 0) {
        Ok(d) => Value::Decimal(d),
        Err(_) => {
            log::trace!("integer {} exceeds decimal range, stored as float", n);
            Value::Float(n as f64)
        }
    }
}

macro_rules! impl_from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    // lossless: every source type is at most 64 bits wide
                    from_wide_integer(n as i128)
                }
            }
        )*
    };
}

impl_from_wide_integer!(isize, u64, usize);

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        from_wide_integer(n)
    }
}

impl From<u128> for Value {
    fn from(n: u128) -> Self {
        match i128::try_from(n) {
            Ok(n) => from_wide_integer(n),
            Err(_) => {
                log::trace!("integer {} exceeds decimal range, stored as float", n);
                Value::Float(n as f64)
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<Pattern> for Value {
    fn from(p: Pattern) -> Self {
        Value::Regex(p)
    }
}

impl From<&Regex> for Value {
    fn from(r: &Regex) -> Self {
        Value::Regex(Pattern::from(r))
    }
}

impl From<Regex> for Value {
    fn from(r: Regex) -> Self {
        Value::Regex(Pattern::from(r))
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Array(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
