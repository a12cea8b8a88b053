//! Tolerant field deserializers for catalog data
//!
//! Catalog entries come from hand-edited sources and are not guaranteed to
//! be well formed. These helpers turn shape mismatches into `None` instead
//! of failing the whole record, so a bad entry can still be ranked.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// A list field. Missing, `null` or non-array values become `None`;
/// array elements that do not parse as `T` are skipped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_from_value(value))
}

pub(crate) fn list_from_value<T: DeserializeOwned>(value: Value) -> Option<Vec<T>> {
    match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match serde_json::from_value(item) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        debug!("Skipping malformed list entry: {}", e);
                        None
                    }
                })
                .collect(),
        ),
        Value::Null => None,
        other => {
            debug!("Expected a list, found {}", kind(&other));
            None
        }
    }
}

/// A numeric field. Accepts finite numbers and numeric strings.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|n| n.is_finite()))
}

/// A tri-state boolean. Anything other than `true`/`false` is unknown.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

/// A nested record that falls back to its default when it cannot be parsed.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            debug!("Falling back to default record: {}", e);
            Ok(T::default())
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_skips_bad_elements() {
        let parsed: Option<Vec<String>> = list_from_value(json!(["gin", 3, "lime"]));
        assert_eq!(parsed, Some(vec!["gin".to_string(), "lime".to_string()]));
    }

    #[test]
    fn test_list_rejects_non_arrays() {
        assert_eq!(list_from_value::<String>(json!("gin, lime")), None);
        assert_eq!(list_from_value::<String>(json!({"gin": 1})), None);
        assert_eq!(list_from_value::<String>(Value::Null), None);
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "number")]
        n: Option<f64>,
        #[serde(default, deserialize_with = "flag")]
        b: Option<bool>,
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        let probe: Probe = serde_json::from_value(json!({"n": " 3.5 "})).unwrap();
        assert_eq!(probe.n, Some(3.5));

        let probe: Probe = serde_json::from_value(json!({"n": "strong"})).unwrap();
        assert_eq!(probe.n, None);

        let probe: Probe = serde_json::from_value(json!({})).unwrap();
        assert_eq!(probe.n, None);
    }

    #[test]
    fn test_flag_is_tri_state() {
        let probe: Probe = serde_json::from_value(json!({"b": true})).unwrap();
        assert_eq!(probe.b, Some(true));

        let probe: Probe = serde_json::from_value(json!({"b": null})).unwrap();
        assert_eq!(probe.b, None);

        let probe: Probe = serde_json::from_value(json!({"b": "yes"})).unwrap();
        assert_eq!(probe.b, None);
    }
}
