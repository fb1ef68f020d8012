//! Input abstraction for the entry points

use std::borrow::Cow;

/// A value handed to the pipeline
///
/// Callers holding dynamically typed data (for instance a field decoded from
/// a JSON payload) can pass it as-is; only string-like values are
/// transformed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Input {
    /// Direct text input
    Text(String),
    /// Dynamically typed value
    Value(serde_json::Value),
    /// No value at all
    #[default]
    Absent,
}

/// How an entry point treats input that is not string-like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Rejected input yields an empty string
    #[default]
    Checked,
    /// Rejected input is rendered as a string and returned unchanged
    Unchecked,
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// The text to transform, if this input is string-like
    ///
    /// String-like means textual, non-empty, and not the literal
    /// `"undefined"` placeholder.
    pub fn as_transformable(&self) -> Option<&str> {
        let text = match self {
            Input::Text(text) => text.as_str(),
            Input::Value(serde_json::Value::String(text)) => text.as_str(),
            Input::Value(_) | Input::Absent => return None,
        };

        if text.is_empty() || text == "undefined" {
            None
        } else {
            Some(text)
        }
    }

    /// Render the input as a string without transforming it
    pub fn to_display_string(&self) -> Cow<'_, str> {
        match self {
            Input::Text(text) => Cow::Borrowed(text),
            Input::Value(serde_json::Value::String(text)) => Cow::Borrowed(text),
            Input::Value(serde_json::Value::Null) | Input::Absent => Cow::Borrowed(""),
            Input::Value(value) => Cow::Owned(value.to_string()),
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&String> for Input {
    fn from(text: &String) -> Self {
        Input::Text(text.clone())
    }
}

impl From<serde_json::Value> for Input {
    fn from(value: serde_json::Value) -> Self {
        Input::Value(value)
    }
}

impl From<bool> for Input {
    fn from(value: bool) -> Self {
        Input::Value(value.into())
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Input::Value(value.into())
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Value(value.into())
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transformable_text() {
        assert_eq!(Input::from("abc").as_transformable(), Some("abc"));
        assert_eq!(Input::from(json!("abc")).as_transformable(), Some("abc"));
        assert_eq!(Input::from(" ").as_transformable(), Some(" "));
    }

    #[test]
    fn test_rejected_inputs() {
        assert_eq!(Input::from("").as_transformable(), None);
        assert_eq!(Input::from("undefined").as_transformable(), None);
        assert_eq!(Input::Absent.as_transformable(), None);
        assert_eq!(Input::from(None::<&str>).as_transformable(), None);
        assert_eq!(Input::from(42i64).as_transformable(), None);
        assert_eq!(Input::from(true).as_transformable(), None);
        assert_eq!(Input::from(json!({"a": 1})).as_transformable(), None);
    }

    #[test]
    fn test_display_string() {
        assert_eq!(Input::from(42i64).to_display_string(), "42");
        assert_eq!(Input::from(1.5f64).to_display_string(), "1.5");
        assert_eq!(Input::from(false).to_display_string(), "false");
        assert_eq!(Input::from(json!([1, 2])).to_display_string(), "[1,2]");
        assert_eq!(Input::from(json!(null)).to_display_string(), "");
        assert_eq!(Input::Absent.to_display_string(), "");
        assert_eq!(Input::from("undefined").to_display_string(), "undefined");
    }

    #[test]
    fn test_debug_format() {
        let debug_str = format!("{:?}", Input::from_text("hello"));
        assert!(debug_str.contains("Text"));
        assert!(debug_str.contains("hello"));
    }
}
