//! Lenient scalar decoding for resource properties
//!
//! Templates routinely write numbers and booleans as strings (`Port: "80"`,
//! `Enabled: "true"`) and numbers where strings are expected (`Value: 30`).
//! Generated resource structs route their scalar fields through these
//! functions via `#[serde(deserialize_with = ...)]`.
//!
//! A JSON `null` is what an unresolved intrinsic becomes under
//! [`UnresolvedPolicy::Null`](crate::intrinsics::UnresolvedPolicy), so
//! required fields read it as their default value. Under
//! [`UnresolvedPolicy::Encode`](crate::intrinsics::UnresolvedPolicy) numeric
//! and boolean fields read an encoded intrinsic the same way; the intrinsic
//! is dropped, and the loader warns about it.

use std::collections::BTreeMap;

use serde::de::{Deserialize, Deserializer, Error};
use serde_json::Value;

use crate::intrinsics;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn to_string<E: Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(E::custom(format!("expected a string, found {}", kind(&other)))),
    }
}

fn to_integer<E: Error>(value: Value) -> Result<Option<i64>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Some(i))
            } else if n.is_u64() {
                Err(E::custom(format!("integer {} out of range", n)))
            } else if let Some(f) = n.as_f64()
                && f.fract() == 0.0
            {
                if (i64::MIN as f64..i64::MAX as f64).contains(&f) {
                    Ok(Some(f as i64))
                } else {
                    Err(E::custom(format!("integer {} out of range", n)))
                }
            } else {
                Err(E::custom(format!("expected an integer, found {}", n)))
            }
        }
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(i) => Ok(Some(i)),
            Err(_) if intrinsics::is_encoded(&s) => Ok(None),
            Err(_) => Err(E::custom(format!("invalid integer '{}'", s))),
        },
        other => Err(E::custom(format!(
            "expected an integer, found {}",
            kind(&other)
        ))),
    }
}

fn to_double<E: Error>(value: Value) -> Result<Option<f64>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| E::custom(format!("invalid number {}", n))),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) => Ok(Some(f)),
            Err(_) if intrinsics::is_encoded(&s) => Ok(None),
            Err(_) => Err(E::custom(format!("invalid number '{}'", s))),
        },
        other => Err(E::custom(format!("expected a number, found {}", kind(&other)))),
    }
}

fn to_boolean<E: Error>(value: Value) -> Result<Option<bool>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ if intrinsics::is_encoded(&s) => Ok(None),
            _ => Err(E::custom(format!("invalid boolean '{}'", s))),
        },
        other => Err(E::custom(format!(
            "expected a boolean, found {}",
            kind(&other)
        ))),
    }
}

pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(to_string::<D::Error>(Value::deserialize(deserializer)?)?.unwrap_or_default())
}

pub fn option_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    to_string(Value::deserialize(deserializer)?)
}

pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(to_integer::<D::Error>(Value::deserialize(deserializer)?)?.unwrap_or_default())
}

pub fn option_integer<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    to_integer(Value::deserialize(deserializer)?)
}

pub fn double<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(to_double::<D::Error>(Value::deserialize(deserializer)?)?.unwrap_or_default())
}

pub fn option_double<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    to_double(Value::deserialize(deserializer)?)
}

pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(to_boolean::<D::Error>(Value::deserialize(deserializer)?)?.unwrap_or_default())
}

pub fn option_boolean<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    to_boolean(Value::deserialize(deserializer)?)
}

fn to_string_list<E: Error>(value: Value) -> Result<Option<Vec<String>>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .into_iter()
            .map(|item| to_string::<E>(item).map(Option::unwrap_or_default))
            .collect::<Result<Vec<_>, E>>()
            .map(Some),
        other => Err(E::custom(format!("expected a list, found {}", kind(&other)))),
    }
}

fn to_string_map<E: Error>(value: Value) -> Result<Option<BTreeMap<String, String>>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => map
            .into_iter()
            .map(|(key, item)| Ok::<_, E>((key, to_string::<E>(item)?.unwrap_or_default())))
            .collect::<Result<BTreeMap<_, _>, E>>()
            .map(Some),
        other => Err(E::custom(format!(
            "expected a mapping, found {}",
            kind(&other)
        ))),
    }
}

/// Lists of strings; unresolved (`null`) elements read as empty strings so
/// the list keeps its length
pub fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(to_string_list::<D::Error>(Value::deserialize(deserializer)?)?.unwrap_or_default())
}

pub fn option_string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    to_string_list(Value::deserialize(deserializer)?)
}

pub fn string_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    Ok(to_string_map::<D::Error>(Value::deserialize(deserializer)?)?.unwrap_or_default())
}

pub fn option_string_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, String>>, D::Error> {
    to_string_map(Value::deserialize(deserializer)?)
}

/// Required non-scalar fields: `null` reads as the type's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(rename = "Name", deserialize_with = "string")]
        name: String,
        #[serde(rename = "Port", default, deserialize_with = "option_integer")]
        port: Option<i64>,
        #[serde(rename = "Weight", default, deserialize_with = "option_double")]
        weight: Option<f64>,
        #[serde(rename = "Enabled", default, deserialize_with = "option_boolean")]
        enabled: Option<bool>,
        #[serde(rename = "Items", deserialize_with = "null_as_default")]
        items: Vec<String>,
        #[serde(rename = "Ids", default, deserialize_with = "option_string_list")]
        ids: Option<Vec<String>>,
        #[serde(rename = "Variables", default, deserialize_with = "option_string_map")]
        variables: Option<BTreeMap<String, String>>,
    }

    #[test]
    fn accepts_native_values() {
        let s: Sample = serde_json::from_value(json!({
            "Name": "web",
            "Port": 80,
            "Weight": 0.5,
            "Enabled": true,
            "Items": ["a"]
        }))
        .unwrap();
        assert_eq!(s.name, "web");
        assert_eq!(s.port, Some(80));
        assert_eq!(s.weight, Some(0.5));
        assert_eq!(s.enabled, Some(true));
        assert_eq!(s.items, vec!["a".to_string()]);
    }

    #[test]
    fn coerces_strings_and_numbers() {
        let s: Sample = serde_json::from_value(json!({
            "Name": 42,
            "Port": "8080",
            "Weight": "1.25",
            "Enabled": "False",
            "Items": []
        }))
        .unwrap();
        assert_eq!(s.name, "42");
        assert_eq!(s.port, Some(8080));
        assert_eq!(s.weight, Some(1.25));
        assert_eq!(s.enabled, Some(false));
    }

    #[test]
    fn missing_optional_fields_are_none() {
        let s: Sample = serde_json::from_value(json!({"Name": "x", "Items": null})).unwrap();
        assert_eq!(s.port, None);
        assert_eq!(s.enabled, None);
        assert!(s.items.is_empty());
    }

    #[test]
    fn null_required_scalar_reads_as_default() {
        let s: Sample = serde_json::from_value(json!({"Name": null, "Items": []})).unwrap();
        assert_eq!(s.name, "");
    }

    #[test]
    fn encoded_intrinsic_in_numeric_field_is_absent() {
        let encoded = intrinsics::build::reference("PortParameter");
        let s: Sample =
            serde_json::from_value(json!({"Name": "x", "Port": encoded, "Items": []})).unwrap();
        assert_eq!(s.port, None);
    }

    #[test]
    fn integers_outside_i64_are_rejected() {
        let port = |value: Value| {
            serde_json::from_value::<Sample>(json!({"Name": "x", "Port": value, "Items": []}))
                .map(|s| s.port)
        };

        assert_eq!(port(json!(i64::MAX)).unwrap(), Some(i64::MAX));
        assert_eq!(port(json!(i64::MIN)).unwrap(), Some(i64::MIN));
        assert_eq!(port(json!(3.0)).unwrap(), Some(3));

        let err = port(json!(u64::MAX)).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{}", err);
        assert!(port(json!(1.0e19)).is_err());
        assert!(port(json!(-1.0e19)).is_err());
        assert!(port(json!("18446744073709551615")).is_err());
    }

    #[test]
    fn rejects_garbage() {
        let result: Result<Sample, _> =
            serde_json::from_value(json!({"Name": "x", "Port": "eighty", "Items": []}));
        assert!(result.is_err());

        let result: Result<Sample, _> =
            serde_json::from_value(json!({"Name": ["x"], "Items": []}));
        assert!(result.is_err());
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let result: Result<Sample, _> = serde_json::from_value(json!({"Items": []}));
        assert!(result.is_err());
    }

    #[test]
    fn string_collections_keep_unresolved_entries() {
        let s: Sample = serde_json::from_value(json!({
            "Name": "x",
            "Items": [],
            "Ids": ["sg-1", null, 3],
            "Variables": {"TABLE": null, "SIZE": 10}
        }))
        .unwrap();
        assert_eq!(
            s.ids,
            Some(vec!["sg-1".to_string(), String::new(), "3".to_string()])
        );
        let variables = s.variables.unwrap();
        assert_eq!(variables["TABLE"], "");
        assert_eq!(variables["SIZE"], "10");
    }

    #[test]
    fn string_collections_reject_wrong_shapes() {
        let result: Result<Sample, _> =
            serde_json::from_value(json!({"Name": "x", "Items": [], "Ids": "sg-1"}));
        assert!(result.is_err());

        let result: Result<Sample, _> =
            serde_json::from_value(json!({"Name": "x", "Items": [], "Variables": [1]}));
        assert!(result.is_err());
    }
}
