//! JSON Value Extension
//!
//! Lenient accessors for engine documents, where any field may be missing
//! or carry an unexpected type.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Extension trait for `serde_json::Value` with forgiving accessors
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use sift_providers::utils::JsonExt;
///
/// let doc = json!({"title": "Rust", "views": "42", "tags": "single"});
/// assert_eq!(doc.opt_string("title").as_deref(), Some("Rust"));
/// assert_eq!(doc.opt_u64_lenient("views"), Some(42));
/// assert_eq!(doc.string_list("tags"), vec!["single".to_string()]);
/// ```
pub trait JsonExt {
    /// Get an owned, non-empty string
    fn opt_string(&self, key: &str) -> Option<String>;

    /// Get the first present key among `keys` as a non-empty string
    fn first_string(&self, keys: &[&str]) -> Option<String>;

    /// Get a non-negative integer from a number or numeric string
    fn opt_u64_lenient(&self, key: &str) -> Option<u64>;

    /// Get a float
    fn opt_f64(&self, key: &str) -> Option<f64>;

    /// Get a list of strings from an array, a single string or nothing
    fn string_list(&self, key: &str) -> Vec<String>;

    /// Get a timestamp from RFC 3339 text, a naive date(time) taken as UTC,
    /// or epoch milliseconds
    fn opt_timestamp(&self, key: &str) -> Option<DateTime<Utc>>;
}

impl JsonExt for Value {
    fn opt_string(&self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    }

    fn first_string(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.opt_string(key))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn opt_u64_lenient(&self, key: &str) -> Option<u64> {
        match self.get(key)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn opt_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    fn opt_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.get(key)? {
            Value::String(s) => parse_timestamp(s.trim()),
            Value::Number(n) => n
                .as_i64()
                .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
            _ => None,
        }
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
