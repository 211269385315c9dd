//! Builders for document-database filter expressions.
//!
//! Filters are plain nested [`Document`]s: comparisons produce
//! `{field: {$op: value}}`, logical combinators wrap sub-expressions
//! under `$and`/`$or`/`$nor`/`$not`, and [`query::rx`] produces a
//! `$regex` expression merged with qualifiers such as `$options`.
//! Nothing here talks to a database; the result is handed to a driver.
//!
//! ```
//! use mongo_query::{field, query::{and, or, rx, rxo}, to_json};
//!
//! let filter = and([
//!     field("price").eq(0.99),
//!     or([field("qty").eq(20), field("qty").lt(5)]),
//!     field("name").rx("acme.*corp", [rxo("i")]),
//! ]);
//! assert_eq!(
//!     to_json(&filter.into()),
//!     concat!(
//!         r#"{"$and":[{"price":{"$eq":0.99}},"#,
//!         r#"{"$or":[{"qty":{"$eq":20}},{"qty":{"$lt":5}}]},"#,
//!         r#"{"name":{"$regex":"acme.*corp","$options":"i"}}]}"#,
//!     )
//! );
//! ```
pub mod error;
pub mod fluent;
pub mod json;
pub mod operators;
pub mod output;
pub mod pattern;
pub mod query;
pub mod value;

pub use error::{QueryError, Result};
pub use fluent::{AsField, Field, RegexExt, StrTarget, field};
pub use json::{document_to_json, parse_document};
pub use operators::Operator;
pub use output::{to_json, to_json_pretty, to_shell};
pub use pattern::Pattern;
pub use value::{Document, Value};
