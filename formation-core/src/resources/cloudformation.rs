//! AWS::CloudFormation resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::CloudFormation::Stack
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudformation-stack.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    #[serde(
        rename = "NotificationARNs",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub notification_ar_ns: Option<Vec<String>>,

    #[serde(
        rename = "Parameters",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_map"
    )]
    pub parameters: Option<BTreeMap<String, String>>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(rename = "TemplateURL", deserialize_with = "crate::lenient::string")]
    pub template_url: String,

    #[serde(
        rename = "TimeoutInMinutes",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub timeout_in_minutes: Option<i64>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}
