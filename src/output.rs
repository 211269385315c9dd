//! Text rendering for filter documents.
//!
//! Two styles are supported:
//!
//! - **Json** - strict JSON through the [`crate::json`] bridge; decimals and
//!   regexes use their extended-JSON wrappers
//! - **Shell** - the literal syntax of a database shell; regexes print as
//!   `/source/flags` and decimals as `NumberDecimal("...")`
//!
//! Either style can be compact or pretty-printed with 2-space
//! indentation. Keys print in insertion order, so `$regex` comes before
//! its `$options`.
//!
//! # Examples
//!
//! ```
//! use mongo_query::{Pattern, query::rx};
//! use mongo_query::output::{to_json, to_shell};
//!
//! let expr = rx(Pattern::with_options("^acme", "i"), []).into();
//!
//! assert_eq!(to_shell(&expr), r#"{"$regex":/^acme/i}"#);
//! assert_eq!(
//!     to_json(&expr),
//!     r#"{"$regex":{"$regularExpression":{"pattern":"^acme","options":"i"}}}"#
//! );
//! ```

use crate::{
    json::to_json_value,
    value::{Document, Value},
};

/// Output syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Json,
    Shell,
}

/// Rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintOptions {
    /// One entry per line with 2-space indentation
    pub pretty: bool,
    pub style: OutputStyle,
}

pub struct Printer {
    options: PrintOptions,
}

impl Printer {
    pub fn new(options: PrintOptions) -> Self {
        Printer { options }
    }

    pub fn print(&self, value: &Value) -> String {
        match self.options.style {
            OutputStyle::Json => self.print_json(value),
            OutputStyle::Shell => self.print_value(value, 0),
        }
    }

    fn print_json(&self, value: &Value) -> String {
        let json = to_json_value(value);
        if self.options.pretty {
            // serializing a serde_json::Value cannot fail
            serde_json::to_string_pretty(&json).unwrap_or_default()
        } else {
            json.to_string()
        }
    }

    fn print_value(&self, value: &Value, indent: usize) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => self.print_float(*n),
            Value::Decimal(d) => format!("NumberDecimal({})", self.quote(&d.to_string())),
            Value::String(s) => self.quote(s),
            Value::Regex(p) => p.to_string(),
            Value::Array(arr) => self.print_array(arr, indent),
            Value::Object(doc) => self.print_object(doc, indent),
        }
    }

    fn print_float(&self, n: f64) -> String {
        if n.is_nan() {
            "NaN".to_string()
        } else if n.is_infinite() {
            let sign = if n > 0.0 { "" } else { "-" };
            format!("{}Infinity", sign)
        } else if n.fract() == 0.0 && n.abs() < 1e15 {
            // keep floats visibly distinct from integers
            format!("{:.1}", n)
        } else {
            n.to_string()
        }
    }

    fn print_array(&self, arr: &[Value], indent: usize) -> String {
        if arr.is_empty() {
            return "[]".to_string();
        }

        let items: Vec<String> = arr
            .iter()
            .map(|v| self.print_value(v, indent + 1))
            .collect();
        self.wrap('[', ']', items, indent)
    }

    fn print_object(&self, doc: &Document, indent: usize) -> String {
        if doc.is_empty() {
            return "{}".to_string();
        }

        let sep = if self.options.pretty { ": " } else { ":" };
        let items: Vec<String> = doc
            .iter()
            .map(|(k, v)| format!("{}{}{}", self.quote(k), sep, self.print_value(v, indent + 1)))
            .collect();
        self.wrap('{', '}', items, indent)
    }

    fn wrap(&self, open: char, close: char, items: Vec<String>, indent: usize) -> String {
        if self.options.pretty {
            let inner = self.indent(indent + 1);
            let mut result = format!("{}\n", open);
            let lines: Vec<String> = items.iter().map(|i| format!("{}{}", inner, i)).collect();
            result.push_str(&lines.join(",\n"));
            result.push('\n');
            result.push_str(&self.indent(indent));
            result.push(close);
            result
        } else {
            format!("{}{}{}", open, items.join(","), close)
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }

    fn quote(&self, s: &str) -> String {
        serde_json::Value::String(s.to_string()).to_string()
    }
}

// Convenience functions

/// Compact strict JSON.
///
/// ```
/// use mongo_query::{query::eq, output::to_json};
///
/// assert_eq!(to_json(&eq("qty", 20).into()), r#"{"qty":{"$eq":20}}"#);
/// ```
pub fn to_json(value: &Value) -> String {
    Printer::new(PrintOptions::default()).print(value)
}

/// Pretty-printed strict JSON.
pub fn to_json_pretty(value: &Value) -> String {
    Printer::new(PrintOptions {
        pretty: true,
        style: OutputStyle::Json,
    })
    .print(value)
}

/// Compact shell syntax.
pub fn to_shell(value: &Value) -> String {
    Printer::new(PrintOptions {
        pretty: false,
        style: OutputStyle::Shell,
    })
    .print(value)
}

/// Pretty-printed shell syntax.
///
/// ```
/// use mongo_query::{field, output::to_shell_pretty};
///
/// let out = to_shell_pretty(&field("qty").in_([5, 15]).into());
/// assert_eq!(out, "{\n  \"qty\": {\n    \"$in\": [\n      5,\n      15\n    ]\n  }\n}");
/// ```
pub fn to_shell_pretty(value: &Value) -> String {
    Printer::new(PrintOptions {
        pretty: true,
        style: OutputStyle::Shell,
    })
    .print(value)
}
