//! AWS::ApiGateway resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::ApiGateway::RestApi
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigateway-restapi.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestApi {
    #[serde(
        rename = "ApiKeySourceType",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub api_key_source_type: Option<String>,

    #[serde(
        rename = "BinaryMediaTypes",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub binary_media_types: Option<Vec<String>>,

    #[serde(rename = "Body", default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,

    #[serde(rename = "BodyS3Location", default, skip_serializing_if = "Option::is_none")]
    pub body_s3_location: Option<RestApiS3Location>,

    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub description: Option<String>,

    #[serde(
        rename = "DisableExecuteApiEndpoint",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub disable_execute_api_endpoint: Option<bool>,

    #[serde(rename = "EndpointConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub endpoint_configuration: Option<RestApiEndpointConfiguration>,

    #[serde(
        rename = "MinimumCompressionSize",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub minimum_compression_size: Option<i64>,

    #[serde(
        rename = "Name",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub name: Option<String>,

    #[serde(
        rename = "Parameters",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_map"
    )]
    pub parameters: Option<BTreeMap<String, String>>,

    #[serde(rename = "Policy", default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<serde_json::Value>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::ApiGateway::Stage
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigateway-stage.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    #[serde(
        rename = "CacheClusterEnabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub cache_cluster_enabled: Option<bool>,

    #[serde(
        rename = "CacheClusterSize",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub cache_cluster_size: Option<String>,

    #[serde(
        rename = "DeploymentId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub deployment_id: Option<String>,

    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub description: Option<String>,

    #[serde(rename = "MethodSettings", default, skip_serializing_if = "Option::is_none")]
    pub method_settings: Option<Vec<StageMethodSetting>>,

    #[serde(rename = "RestApiId", deserialize_with = "crate::lenient::string")]
    pub rest_api_id: String,

    #[serde(
        rename = "StageName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub stage_name: Option<String>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(
        rename = "TracingEnabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub tracing_enabled: Option<bool>,

    #[serde(
        rename = "Variables",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_map"
    )]
    pub variables: Option<BTreeMap<String, String>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::ApiGateway::RestApi.EndpointConfiguration
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-apigateway-restapi-endpointconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestApiEndpointConfiguration {
    #[serde(
        rename = "Types",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub types: Option<Vec<String>>,

    #[serde(
        rename = "VpcEndpointIds",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub vpc_endpoint_ids: Option<Vec<String>>,
}

/// AWS::ApiGateway::RestApi.S3Location
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-apigateway-restapi-s3location.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestApiS3Location {
    #[serde(
        rename = "Bucket",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub bucket: Option<String>,

    #[serde(
        rename = "ETag",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub e_tag: Option<String>,

    #[serde(
        rename = "Key",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub key: Option<String>,

    #[serde(
        rename = "Version",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub version: Option<String>,
}

/// AWS::ApiGateway::Stage.MethodSetting
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-apigateway-stage-methodsetting.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageMethodSetting {
    #[serde(
        rename = "CachingEnabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub caching_enabled: Option<bool>,

    #[serde(
        rename = "DataTraceEnabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub data_trace_enabled: Option<bool>,

    #[serde(
        rename = "HttpMethod",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub http_method: Option<String>,

    #[serde(
        rename = "LoggingLevel",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub logging_level: Option<String>,

    #[serde(
        rename = "MetricsEnabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub metrics_enabled: Option<bool>,

    #[serde(
        rename = "ResourcePath",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub resource_path: Option<String>,

    #[serde(
        rename = "ThrottlingBurstLimit",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub throttling_burst_limit: Option<i64>,

    #[serde(
        rename = "ThrottlingRateLimit",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_double"
    )]
    pub throttling_rate_limit: Option<f64>,
}
