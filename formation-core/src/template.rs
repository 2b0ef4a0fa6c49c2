//! Template - a parsed CloudFormation or SAM document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::intrinsics;
use crate::resource::CloudFormationResource;
use crate::resources::Resource;

/// Template format version written by [`Template::new`]
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// Transform that marks a template as SAM
pub const SAM_TRANSFORM: &str = "AWS::Serverless-2016-10-31";

/// `Transform` may be a single macro name or a list of names / macro objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Transform {
    Single(String),
    Multiple(Vec<Value>),
}

impl Transform {
    /// Names of the transforms, in declaration order
    pub fn names(&self) -> Vec<&str> {
        match self {
            Transform::Single(name) => vec![name.as_str()],
            Transform::Multiple(items) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(name) => Some(name.as_str()),
                    Value::Object(object) => object.get("Name").and_then(Value::as_str),
                    _ => None,
                })
                .collect(),
        }
    }
}

/// Template input parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "Type", deserialize_with = "crate::lenient::string")]
    pub parameter_type: String,

    #[serde(rename = "Default", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(
        rename = "AllowedValues",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_values: Option<Vec<Value>>,

    #[serde(
        rename = "AllowedPattern",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_pattern: Option<String>,

    #[serde(
        rename = "ConstraintDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub constraint_description: Option<String>,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        rename = "MaxLength",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub max_length: Option<i64>,

    #[serde(
        rename = "MaxValue",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_double"
    )]
    pub max_value: Option<f64>,

    #[serde(
        rename = "MinLength",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub min_length: Option<i64>,

    #[serde(
        rename = "MinValue",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_double"
    )]
    pub min_value: Option<f64>,

    #[serde(
        rename = "NoEcho",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub no_echo: Option<bool>,
}

/// `Export` block of an output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputExport {
    #[serde(rename = "Name")]
    pub name: Value,
}

/// Template output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    #[serde(rename = "Value", default)]
    pub value: Value,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Export", default, skip_serializing_if = "Option::is_none")]
    pub export: Option<OutputExport>,

    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// A CloudFormation or SAM template
///
/// Sections are ordered maps, so serialising a template is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub aws_template_format_version: Option<String>,

    #[serde(rename = "Transform", default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Metadata", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,

    #[serde(rename = "Parameters", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, Parameter>,

    #[serde(rename = "Mappings", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, Value>,

    #[serde(rename = "Conditions", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: BTreeMap<String, Value>,

    /// SAM `Globals` section
    #[serde(rename = "Globals", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub globals: BTreeMap<String, Value>,

    #[serde(rename = "Resources", default)]
    pub resources: BTreeMap<String, Resource>,

    #[serde(rename = "Outputs", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, Output>,
}

impl Template {
    /// An empty template with the current format version
    pub fn new() -> Self {
        Self {
            aws_template_format_version: Some(TEMPLATE_FORMAT_VERSION.to_string()),
            ..Default::default()
        }
    }

    /// An empty SAM template
    pub fn new_sam() -> Self {
        Self {
            transform: Some(Transform::Single(SAM_TRANSFORM.to_string())),
            ..Self::new()
        }
    }

    /// Returns true if the template declares the SAM transform
    pub fn is_sam(&self) -> bool {
        self.transform
            .as_ref()
            .is_some_and(|t| t.names().contains(&SAM_TRANSFORM))
    }

    /// Every resource of type `T`, keyed by logical name
    pub fn get_all<T: CloudFormationResource>(&self) -> BTreeMap<&str, &T> {
        self.resources
            .iter()
            .filter_map(|(name, resource)| {
                T::from_resource(resource).map(|typed| (name.as_str(), typed))
            })
            .collect()
    }

    /// The resource named `name`, if it has type `T`
    ///
    /// An absent name and a resource of another type are the same error.
    pub fn get_with_name<T: CloudFormationResource>(&self, name: &str) -> Result<&T> {
        self.resources
            .get(name)
            .and_then(T::from_resource)
            .ok_or_else(|| Error::not_found(name, T::DISPLAY_NAME))
    }

    pub fn get_with_name_mut<T: CloudFormationResource>(&mut self, name: &str) -> Result<&mut T> {
        self.resources
            .get_mut(name)
            .and_then(T::from_resource_mut)
            .ok_or_else(|| Error::not_found(name, T::DISPLAY_NAME))
    }

    /// Adds or replaces a resource, returning the previous one
    pub fn insert_resource(
        &mut self,
        name: impl Into<String>,
        resource: impl Into<Resource>,
    ) -> Option<Resource> {
        self.resources.insert(name.into(), resource.into())
    }

    pub fn remove_resource(&mut self, name: &str) -> Option<Resource> {
        self.resources.remove(name)
    }

    /// Resources whose CloudFormation type name is `type_name`
    pub fn resources_of_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a Resource)> + 'a {
        self.resources
            .iter()
            .filter(move |(_, resource)| resource.type_name() == type_name)
    }

    /// JSON value of the template with encoded intrinsics written as objects
    pub fn to_json_value(&self) -> Result<Value> {
        let mut value = serde_json::to_value(self)?;
        intrinsics::restore_encoded(&mut value);
        Ok(value)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json_value()?)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.to_json_value()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{s3, sns, sqs};
    use serde_json::json;

    fn sample() -> Template {
        let mut template = Template::new();
        template.insert_resource(
            "Logs",
            s3::Bucket {
                bucket_name: Some("logs".to_string()),
                ..Default::default()
            },
        );
        template.insert_resource("Assets", s3::Bucket::default());
        template.insert_resource("Jobs", sqs::Queue::default());
        template
    }

    #[test]
    fn get_all_filters_by_type() {
        let template = sample();

        let buckets = template.get_all::<s3::Bucket>();
        assert_eq!(buckets.keys().copied().collect::<Vec<_>>(), vec!["Assets", "Logs"]);

        let queues = template.get_all::<sqs::Queue>();
        assert_eq!(queues.len(), 1);
        assert!(queues.contains_key("Jobs"));

        assert!(template.get_all::<sns::Topic>().is_empty());
    }

    #[test]
    fn get_with_name_matches_filtering() {
        let template = sample();
        let by_name = template.get_with_name::<s3::Bucket>("Logs").unwrap();
        let filtered = template.get_all::<s3::Bucket>()["Logs"];
        assert!(std::ptr::eq(by_name, filtered));
        assert_eq!(by_name.bucket_name.as_deref(), Some("logs"));
    }

    #[test]
    fn get_with_name_fails_for_missing_or_mismatched() {
        let template = sample();

        let missing = template.get_with_name::<s3::Bucket>("Nope").unwrap_err();
        assert_eq!(
            missing.to_string(),
            "resource \"Nope\" of type s3.Bucket not found"
        );

        let mismatched = template.get_with_name::<s3::Bucket>("Jobs").unwrap_err();
        assert_eq!(
            mismatched.to_string(),
            "resource \"Jobs\" of type s3.Bucket not found"
        );
    }

    #[test]
    fn get_with_name_mut_edits_in_place() {
        let mut template = sample();
        template
            .get_with_name_mut::<sqs::Queue>("Jobs")
            .unwrap()
            .delay_seconds = Some(5);
        assert_eq!(
            template.get_sqs_queue_with_name("Jobs").unwrap().delay_seconds,
            Some(5)
        );
    }

    #[test]
    fn named_accessors_wrap_generic_lookup() {
        let template = sample();
        assert_eq!(template.get_all_s3_bucket_resources().len(), 2);
        assert!(template.get_s3_bucket_with_name("Assets").is_ok());
        assert!(template.get_sqs_queue_with_name("Assets").is_err());
    }

    #[test]
    fn resources_of_type_and_remove() {
        let mut template = sample();
        assert_eq!(template.resources_of_type("AWS::S3::Bucket").count(), 2);
        assert!(template.remove_resource("Logs").is_some());
        assert_eq!(template.resources_of_type("AWS::S3::Bucket").count(), 1);
    }

    #[test]
    fn sam_transform_detection() {
        assert!(Template::new_sam().is_sam());
        assert!(!Template::new().is_sam());

        let template = Template {
            transform: Some(Transform::Multiple(vec![
                json!({"Name": "AWS::Include", "Parameters": {"Location": "s3://x"}}),
                json!(SAM_TRANSFORM),
            ])),
            ..Default::default()
        };
        assert!(template.is_sam());
    }

    #[test]
    fn to_json_restores_encoded_intrinsics() {
        let mut template = Template::new();
        template.insert_resource(
            "Topic",
            sns::Topic {
                topic_name: Some(intrinsics::build::sub("${AWS::StackName}-alerts")),
                ..Default::default()
            },
        );
        let value = template.to_json_value().unwrap();
        assert_eq!(
            value,
            json!({
                "AWSTemplateFormatVersion": "2010-09-09",
                "Resources": {
                    "Topic": {
                        "Type": "AWS::SNS::Topic",
                        "Properties": {"TopicName": {"Fn::Sub": "${AWS::StackName}-alerts"}}
                    }
                }
            })
        );
        assert!(template.to_yaml().unwrap().contains("Fn::Sub"));
    }
}
