/// Errors reported by the fallible helpers around the builders.
///
/// The builders in [`crate::query`] are total and never fail. Errors only
/// arise when validating patterns, parsing operator names, or converting
/// JSON into documents.
#[derive(Debug)]
pub enum QueryError {
    /// A key that is not one of the reserved operator strings
    UnknownOperator(String),

    /// A regex option flag outside `i`, `m`, `s`, `x`
    UnknownFlag(char),

    /// Pattern source rejected by the regex engine
    InvalidPattern(regex::Error),

    /// Malformed JSON text
    Json(serde_json::Error),

    /// A JSON value of the wrong shape where a document was expected
    NotADocument(&'static str),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::UnknownOperator(key) => write!(f, "Unknown operator: '{}'", key),
            QueryError::UnknownFlag(c) => write!(f, "Unknown regex option: '{}'", c),
            QueryError::InvalidPattern(e) => write!(f, "Invalid pattern: {}", e),
            QueryError::Json(e) => write!(f, "Invalid JSON: {}", e),
            QueryError::NotADocument(found) => {
                write!(f, "Expected a document, found {}", found)
            }
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::InvalidPattern(e) => Some(e),
            QueryError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<regex::Error> for QueryError {
    fn from(e: regex::Error) -> Self {
        QueryError::InvalidPattern(e)
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Json(e)
    }
}

/// Shorthand for results carrying a [`QueryError`].
pub type Result<T> = std::result::Result<T, QueryError>;
