// ABOUTME: Lenient JSON value helpers shared by the normalizer and the models
// ABOUTME: Truthiness, first-present lookups, display stringification and lenient numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! Helpers for reading heterogeneous backend JSON.
//!
//! The backend has gone through several schema iterations, so the same concept can
//! arrive under different keys and with different JSON types. These helpers encode the
//! rules once: what counts as "present", how a scalar is rendered as text, and how a
//! number hidden in a string is recovered.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

/// Largest magnitude at which an integral `f64` is still rendered without a fraction
const MAX_INTEGRAL_RENDER: f64 = 1e15;

/// Truthiness of a JSON value as the web client evaluated it
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy; every array and object is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether a value carries no usable content
///
/// Stricter than falsiness: empty arrays, empty objects and whitespace-only strings are
/// also blank. Used when choosing between alternative sources for the same field.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        other => !is_truthy(other),
    }
}

/// First value among `keys` that is truthy
#[must_use]
pub fn first_truthy<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| is_truthy(value))
}

/// Render a number the way a JavaScript client prints it (`2.0` -> `"2"`)
#[must_use]
pub fn number_to_string(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    if let Some(u) = number.as_u64() {
        return u.to_string();
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < MAX_INTEGRAL_RENDER => {
            format!("{}", f as i64)
        }
        Some(f) => f.to_string(),
        None => number.to_string(),
    }
}

/// Render any JSON value as display text
///
/// Strings are returned as-is, numbers and booleans are printed, `null` becomes the
/// empty string and composite values become their compact JSON text.
#[must_use]
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Read a number that may have been sent as a numeric string
#[must_use]
pub fn lenient_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Read a non-negative integer that may have been sent as a float or string
#[must_use]
pub fn lenient_u32(value: &Value) -> Option<u32> {
    lenient_f64(value)
        .filter(|f| *f >= 0.0 && *f <= f64::from(u32::MAX))
        .map(|f| f.round() as u32)
}

/// Extract an identifier from a string, number, or document carrying `_id`/`id`
///
/// Documents exported in extended JSON (`{"$oid": "..."}`) are unwrapped as well.
#[must_use]
pub fn id_string(value: &Value) -> Option<String> {
    id_string_with(value, &["_id", "id", "$oid"])
}

/// Same as [`id_string`] with a caller-provided key list for documents
#[must_use]
pub fn id_string_with(value: &Value, keys: &[&str]) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(n) => Some(number_to_string(n)),
        Value::Object(map) => keys
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(|candidate| match candidate {
                Value::Object(_) => id_string(candidate),
                other => id_string_with(other, keys),
            }),
        _ => None,
    }
}

/// Read an array of display strings, skipping falsy entries
#[must_use]
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| is_truthy(item))
            .map(display_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Read a trimmed, non-empty display string
#[must_use]
pub fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .filter(|v| is_truthy(v))
        .map(|v| display_string(v).trim().to_owned())
        .filter(|s| !s.is_empty())
}

/// Serde helpers for lenient model fields
pub mod de {
    use super::{display_string, is_truthy, lenient_f64, lenient_u32, Deserialize, Deserializer, Value};

    /// Deserialize an optional number that may arrive as a string or be malformed
    ///
    /// # Errors
    ///
    /// Only fails if the input is not valid JSON at all
    pub fn lenient_f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(lenient_f64))
    }

    /// Deserialize an optional non-negative integer leniently
    ///
    /// # Errors
    ///
    /// Only fails if the input is not valid JSON at all
    pub fn lenient_u32_opt<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(lenient_u32))
    }

    /// Deserialize a non-negative integer leniently, defaulting to zero
    ///
    /// # Errors
    ///
    /// Only fails if the input is not valid JSON at all
    pub fn lenient_u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(lenient_u32_opt(deserializer)?.unwrap_or(0))
    }

    /// Deserialize an optional string, accepting numbers and dropping empty values
    ///
    /// # Errors
    ///
    /// Only fails if the input is not valid JSON at all
    pub fn lenient_string_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .filter(|v| is_truthy(v) && !v.is_array() && !v.is_object())
            .map(|v| display_string(&v)))
    }

    /// Deserialize an optional boolean using truthiness
    ///
    /// # Errors
    ///
    /// Only fails if the input is not valid JSON at all
    pub fn lenient_bool_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.filter(|v| !v.is_null()).map(|v| is_truthy(&v)))
    }

    /// Deserialize an optional nested value, treating a mismatched shape as absent
    ///
    /// # Errors
    ///
    /// Only fails if the input is not valid JSON at all
    pub fn lenient_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .filter(|v| !v.is_null())
            .and_then(|v| serde_json::from_value(v).ok()))
    }

    /// Deserialize a nested value, falling back to its default on any mismatch
    ///
    /// # Errors
    ///
    /// Only fails if the input is not valid JSON at all
    pub fn lenient_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned + Default,
    {
        Ok(lenient_opt(deserializer)?.unwrap_or_default())
    }

    /// Deserialize a list that may be missing, null, or not an array
    ///
    /// # Errors
    ///
    /// Only fails if the input is not valid JSON at all
    pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_matches_web_client() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!("false")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_blank_is_stricter_than_falsy() {
        assert!(is_blank(&json!([])));
        assert!(is_blank(&json!("   ")));
        assert!(is_blank(&json!({})));
        assert!(!is_blank(&json!(["a"])));
    }

    #[test]
    fn test_number_rendering() {
        assert_eq!(display_string(&json!(2.0)), "2");
        assert_eq!(display_string(&json!(1.5)), "1.5");
        assert_eq!(display_string(&json!(200)), "200");
        assert_eq!(display_string(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_id_extraction() {
        assert_eq!(id_string(&json!("  R1 ")), Some("R1".to_owned()));
        assert_eq!(id_string(&json!({"_id": "R2"})), Some("R2".to_owned()));
        assert_eq!(id_string(&json!({"id": 7})), Some("7".to_owned()));
        assert_eq!(
            id_string(&json!({"_id": {"$oid": "abc"}})),
            Some("abc".to_owned())
        );
        assert_eq!(id_string(&json!("")), None);
        assert_eq!(id_string(&json!({"title": "x"})), None);
    }

    #[test]
    fn test_lenient_numbers() {
        assert_eq!(lenient_f64(&json!("450")), Some(450.0));
        assert_eq!(lenient_f64(&json!("abc")), None);
        assert_eq!(lenient_u32(&json!(3.6)), Some(4));
        assert_eq!(lenient_u32(&json!(-1)), None);
    }
}
