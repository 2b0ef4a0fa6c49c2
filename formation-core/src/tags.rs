//! Resource tags

use serde::{Deserialize, Serialize};

/// A resource tag, shared by every resource type that supports tagging
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "Key", deserialize_with = "crate::lenient::string")]
    pub key: String,

    #[serde(rename = "Value", deserialize_with = "crate::lenient::string")]
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_tag_values_are_strings() {
        let tag: Tag = serde_json::from_value(json!({"Key": "CostCenter", "Value": 1234})).unwrap();
        assert_eq!(tag, Tag::new("CostCenter", "1234"));
    }

    #[test]
    fn serializes_with_cloudformation_names() {
        let value = serde_json::to_value(Tag::new("env", "prod")).unwrap();
        assert_eq!(value, json!({"Key": "env", "Value": "prod"}));
    }
}
