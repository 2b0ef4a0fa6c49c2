//! AWS::Events resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;

/// AWS::Events::Rule
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-events-rule.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub description: Option<String>,

    #[serde(
        rename = "EventBusName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub event_bus_name: Option<String>,

    #[serde(rename = "EventPattern", default, skip_serializing_if = "Option::is_none")]
    pub event_pattern: Option<serde_json::Value>,

    #[serde(
        rename = "Name",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub name: Option<String>,

    #[serde(
        rename = "RoleArn",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub role_arn: Option<String>,

    #[serde(
        rename = "ScheduleExpression",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub schedule_expression: Option<String>,

    #[serde(
        rename = "State",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub state: Option<String>,

    #[serde(rename = "Targets", default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<RuleTarget>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::Events::Rule.Target
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-events-rule-target.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleTarget {
    #[serde(rename = "Arn", deserialize_with = "crate::lenient::string")]
    pub arn: String,

    #[serde(rename = "Id", deserialize_with = "crate::lenient::string")]
    pub id: String,

    #[serde(
        rename = "Input",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub input: Option<String>,

    #[serde(
        rename = "InputPath",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub input_path: Option<String>,

    #[serde(
        rename = "RoleArn",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub role_arn: Option<String>,
}
