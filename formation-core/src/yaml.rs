//! YAML templates
//!
//! Converts a YAML document into the JSON value model, rewriting the
//! short-form intrinsic tags (`!Ref`, `!GetAtt`, `!Sub`, ...) into their
//! long form so that YAML and JSON templates are processed identically.

use serde_json::{Map, Number, Value};
use serde_yaml::Value as Yaml;

use crate::error::{Error, Result};

/// Parses a YAML document into a JSON value
pub fn to_json(input: &str) -> Result<Value> {
    let yaml: Yaml = serde_yaml::from_str(input)?;
    convert(yaml)
}

fn convert(yaml: Yaml) -> Result<Value> {
    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => number(&n)?,
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(convert)
                .collect::<Result<Vec<_>>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                object.insert(key_string(key)?, convert(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            let name = tag.trim_start_matches('!');
            tagged_intrinsic(name, convert(tagged.value)?)
        }
    })
}

fn number(n: &serde_yaml::Number) -> Result<Value> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Number(i.into()))
    } else if let Some(u) = n.as_u64() {
        Ok(Value::Number(u.into()))
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| Error::invalid_template(format!("unsupported number {}", n)))
    }
}

/// Mapping keys become strings; templates only use scalar keys
fn key_string(key: Yaml) -> Result<String> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Null => Ok("null".to_string()),
        other => Err(Error::invalid_template(format!(
            "unsupported mapping key {:?}",
            other
        ))),
    }
}

fn tagged_intrinsic(name: &str, value: Value) -> Value {
    let (key, value) = match name {
        "Ref" | "Condition" => (name.to_string(), value),
        "GetAtt" => ("Fn::GetAtt".to_string(), get_att_argument(value)),
        other => (format!("Fn::{}", other), value),
    };
    let mut object = Map::new();
    object.insert(key, value);
    Value::Object(object)
}

/// `!GetAtt Resource.Attribute` splits at the first dot; attribute names
/// may contain further dots (`Endpoint.Address`)
fn get_att_argument(value: Value) -> Value {
    match value {
        Value::String(s) => match s.split_once('.') {
            Some((resource, attribute)) => Value::Array(vec![
                Value::String(resource.to_string()),
                Value::String(attribute.to_string()),
            ]),
            None => Value::String(s),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_yaml() {
        let value = to_json(
            "AWSTemplateFormatVersion: 2010-09-09\nCount: 3\nRatio: 0.5\nOn: true\nList: [a, b]\n",
        )
        .unwrap();
        assert_eq!(
            value,
            json!({
                "AWSTemplateFormatVersion": "2010-09-09",
                "Count": 3,
                "Ratio": 0.5,
                "On": true,
                "List": ["a", "b"]
            })
        );
    }

    #[test]
    fn short_form_tags() {
        let value = to_json(
            r#"
A: !Ref Env
B: !GetAtt Role.Arn
C: !GetAtt Db.Endpoint.Address
D: !Sub "${AWS::StackName}-logs"
E: !Join [",", [a, !Ref B]]
F: !If [IsProd, !Ref Big, !Ref "AWS::NoValue"]
G: !Condition IsProd
H: !GetAtt [Role, Arn]
I: !Base64 hello
"#,
        )
        .unwrap();
        assert_eq!(value["A"], json!({"Ref": "Env"}));
        assert_eq!(value["B"], json!({"Fn::GetAtt": ["Role", "Arn"]}));
        assert_eq!(value["C"], json!({"Fn::GetAtt": ["Db", "Endpoint.Address"]}));
        assert_eq!(value["D"], json!({"Fn::Sub": "${AWS::StackName}-logs"}));
        assert_eq!(value["E"], json!({"Fn::Join": [",", ["a", {"Ref": "B"}]]}));
        assert_eq!(
            value["F"],
            json!({"Fn::If": ["IsProd", {"Ref": "Big"}, {"Ref": "AWS::NoValue"}]})
        );
        assert_eq!(value["G"], json!({"Condition": "IsProd"}));
        assert_eq!(value["H"], json!({"Fn::GetAtt": ["Role", "Arn"]}));
        assert_eq!(value["I"], json!({"Fn::Base64": "hello"}));
    }

    #[test]
    fn numeric_keys_become_strings() {
        let value = to_json("Mappings:\n  Ports:\n    80: http\n").unwrap();
        assert_eq!(value["Mappings"]["Ports"]["80"], json!("http"));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(matches!(to_json("a: [unclosed"), Err(Error::Yaml(_))));
    }
}
