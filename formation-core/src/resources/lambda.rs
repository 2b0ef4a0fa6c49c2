//! AWS::Lambda resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::Lambda::EventSourceMapping
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lambda-eventsourcemapping.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSourceMapping {
    #[serde(
        rename = "BatchSize",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub batch_size: Option<i64>,

    #[serde(
        rename = "Enabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub enabled: Option<bool>,

    #[serde(
        rename = "EventSourceArn",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub event_source_arn: Option<String>,

    #[serde(rename = "FunctionName", deserialize_with = "crate::lenient::string")]
    pub function_name: String,

    #[serde(
        rename = "MaximumBatchingWindowInSeconds",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub maximum_batching_window_in_seconds: Option<i64>,

    #[serde(
        rename = "StartingPosition",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub starting_position: Option<String>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::Lambda::Function
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lambda-function.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Function {
    #[serde(
        rename = "Architectures",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub architectures: Option<Vec<String>>,

    #[serde(rename = "Code", deserialize_with = "crate::lenient::null_as_default")]
    pub code: FunctionCode,

    #[serde(rename = "DeadLetterConfig", default, skip_serializing_if = "Option::is_none")]
    pub dead_letter_config: Option<FunctionDeadLetterConfig>,

    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub description: Option<String>,

    #[serde(rename = "Environment", default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<FunctionEnvironment>,

    #[serde(
        rename = "FunctionName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub function_name: Option<String>,

    #[serde(
        rename = "Handler",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub handler: Option<String>,

    #[serde(
        rename = "Layers",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub layers: Option<Vec<String>>,

    #[serde(
        rename = "MemorySize",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub memory_size: Option<i64>,

    #[serde(
        rename = "PackageType",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub package_type: Option<String>,

    #[serde(
        rename = "ReservedConcurrentExecutions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub reserved_concurrent_executions: Option<i64>,

    #[serde(rename = "Role", deserialize_with = "crate::lenient::string")]
    pub role: String,

    #[serde(
        rename = "Runtime",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub runtime: Option<String>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(
        rename = "Timeout",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub timeout: Option<i64>,

    #[serde(rename = "TracingConfig", default, skip_serializing_if = "Option::is_none")]
    pub tracing_config: Option<FunctionTracingConfig>,

    #[serde(rename = "VpcConfig", default, skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<FunctionVpcConfig>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::Lambda::Permission
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lambda-permission.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(rename = "Action", deserialize_with = "crate::lenient::string")]
    pub action: String,

    #[serde(
        rename = "EventSourceToken",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub event_source_token: Option<String>,

    #[serde(rename = "FunctionName", deserialize_with = "crate::lenient::string")]
    pub function_name: String,

    #[serde(rename = "Principal", deserialize_with = "crate::lenient::string")]
    pub principal: String,

    #[serde(
        rename = "SourceAccount",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub source_account: Option<String>,

    #[serde(
        rename = "SourceArn",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub source_arn: Option<String>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::Lambda::Function.Code
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-code.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionCode {
    #[serde(
        rename = "ImageUri",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub image_uri: Option<String>,

    #[serde(
        rename = "S3Bucket",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub s3_bucket: Option<String>,

    #[serde(
        rename = "S3Key",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub s3_key: Option<String>,

    #[serde(
        rename = "S3ObjectVersion",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub s3_object_version: Option<String>,

    #[serde(
        rename = "ZipFile",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub zip_file: Option<String>,
}

/// AWS::Lambda::Function.DeadLetterConfig
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-deadletterconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeadLetterConfig {
    #[serde(
        rename = "TargetArn",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub target_arn: Option<String>,
}

/// AWS::Lambda::Function.Environment
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-environment.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionEnvironment {
    #[serde(
        rename = "Variables",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_map"
    )]
    pub variables: Option<BTreeMap<String, String>>,
}

/// AWS::Lambda::Function.TracingConfig
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-tracingconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionTracingConfig {
    #[serde(
        rename = "Mode",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub mode: Option<String>,
}

/// AWS::Lambda::Function.VpcConfig
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-vpcconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionVpcConfig {
    #[serde(
        rename = "SecurityGroupIds",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub security_group_ids: Option<Vec<String>>,

    #[serde(
        rename = "SubnetIds",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub subnet_ids: Option<Vec<String>>,
}
