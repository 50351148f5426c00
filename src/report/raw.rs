//! Raw records as received from the GitHub API
//!
//! Nothing about the shape of these records is guaranteed: any field may be
//! missing, `null`, or of an unexpected type. The accessors here never fail;
//! they return `None` (or 0 for counts) and leave the defaulting policy to the
//! normalizer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single repository entry from `/users/{username}/repos`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProjectRecord(Value);

/// A profile document from `/users/{username}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProfileRecord(Value);

impl From<Value> for RawProjectRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Value> for RawProfileRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl RawProjectRecord {
    /// String field, `None` when absent, `null`, empty or not a string
    pub fn text(&self, field: &str) -> Option<&str> {
        text_field(&self.0, field)
    }

    /// Count field coerced to a non-negative integer
    pub fn count(&self, field: &str) -> u64 {
        count_field(&self.0, field)
    }

    /// `license.name` when `license` is an object carrying a usable name
    pub fn license_name(&self) -> Option<&str> {
        self.0.get("license").and_then(|license| text_field(license, "name"))
    }
}

impl RawProfileRecord {
    /// `true` unless the record is an object with at least one field
    pub fn is_empty(&self) -> bool {
        self.0.as_object().is_none_or(serde_json::Map::is_empty)
    }

    /// String field, `None` when absent, `null`, empty or not a string
    pub fn text(&self, field: &str) -> Option<&str> {
        text_field(&self.0, field)
    }

    /// Count field coerced to a non-negative integer
    pub fn count(&self, field: &str) -> u64 {
        count_field(&self.0, field)
    }
}

fn text_field<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Negative, fractional and non-numeric values all resolve to 0.
fn count_field(value: &Value, field: &str) -> u64 {
    value.get(field).and_then(Value::as_u64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_field_present() {
        let raw = RawProjectRecord::from(json!({"name": "ghreport"}));
        assert_eq!(raw.text("name"), Some("ghreport"));
    }

    #[test]
    fn test_text_field_null_empty_or_mistyped() {
        let raw = RawProjectRecord::from(json!({"a": null, "b": "", "c": 42}));
        assert_eq!(raw.text("a"), None);
        assert_eq!(raw.text("b"), None);
        assert_eq!(raw.text("c"), None);
        assert_eq!(raw.text("missing"), None);
    }

    #[test]
    fn test_count_coercion() {
        let raw = RawProjectRecord::from(json!({
            "ok": 12,
            "negative": -3,
            "fraction": 2.5,
            "text": "7",
            "null": null
        }));
        assert_eq!(raw.count("ok"), 12);
        assert_eq!(raw.count("negative"), 0);
        assert_eq!(raw.count("fraction"), 0);
        assert_eq!(raw.count("text"), 0);
        assert_eq!(raw.count("null"), 0);
        assert_eq!(raw.count("missing"), 0);
    }

    #[test]
    fn test_non_object_record_has_no_fields() {
        let raw = RawProjectRecord::from(json!(["not", "an", "object"]));
        assert_eq!(raw.text("name"), None);
        assert_eq!(raw.count("stargazers_count"), 0);
        assert_eq!(raw.license_name(), None);
    }

    #[test]
    fn test_license_name_variants() {
        let named = RawProjectRecord::from(json!({"license": {"name": "MIT License"}}));
        let null_name = RawProjectRecord::from(json!({"license": {"name": null}}));
        let no_name = RawProjectRecord::from(json!({"license": {"key": "mit"}}));
        let null_license = RawProjectRecord::from(json!({"license": null}));
        let string_license = RawProjectRecord::from(json!({"license": "MIT"}));

        assert_eq!(named.license_name(), Some("MIT License"));
        assert_eq!(null_name.license_name(), None);
        assert_eq!(no_name.license_name(), None);
        assert_eq!(null_license.license_name(), None);
        assert_eq!(string_license.license_name(), None);
    }

    #[test]
    fn test_profile_is_empty() {
        assert!(RawProfileRecord::default().is_empty());
        assert!(RawProfileRecord::from(json!({})).is_empty());
        assert!(RawProfileRecord::from(json!([1, 2])).is_empty());
        assert!(!RawProfileRecord::from(json!({"login": "octocat"})).is_empty());
    }

    #[test]
    fn test_deserialize_transparent() {
        let raw: RawProfileRecord =
            serde_json::from_str(r#"{"login": "octocat", "followers": 10}"#)
                .unwrap_or_default();
        assert_eq!(raw.text("login"), Some("octocat"));
        assert_eq!(raw.count("followers"), 10);
    }
}
