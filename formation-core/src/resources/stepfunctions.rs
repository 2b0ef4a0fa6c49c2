//! AWS::StepFunctions resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;

/// AWS::StepFunctions::StateMachine
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-stepfunctions-statemachine.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateMachine {
    #[serde(rename = "Definition", default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<serde_json::Value>,

    #[serde(
        rename = "DefinitionString",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub definition_string: Option<String>,

    #[serde(rename = "RoleArn", deserialize_with = "crate::lenient::string")]
    pub role_arn: String,

    #[serde(
        rename = "StateMachineName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub state_machine_name: Option<String>,

    #[serde(
        rename = "StateMachineType",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub state_machine_type: Option<String>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<StateMachineTagsEntry>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::StepFunctions::StateMachine.TagsEntry
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-stepfunctions-statemachine-tagsentry.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateMachineTagsEntry {
    #[serde(rename = "Key", deserialize_with = "crate::lenient::string")]
    pub key: String,

    #[serde(rename = "Value", deserialize_with = "crate::lenient::string")]
    pub value: String,
}
