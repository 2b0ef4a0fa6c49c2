//! AWS::Serverless resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;

/// AWS::Serverless::Api
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-resource-api.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Api {
    #[serde(rename = "Auth", default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<ApiAuth>,

    #[serde(
        rename = "BinaryMediaTypes",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub binary_media_types: Option<Vec<String>>,

    #[serde(
        rename = "CacheClusterEnabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub cache_cluster_enabled: Option<bool>,

    #[serde(rename = "Cors", default, skip_serializing_if = "Option::is_none")]
    pub cors: Option<ApiCors>,

    #[serde(rename = "DefinitionBody", default, skip_serializing_if = "Option::is_none")]
    pub definition_body: Option<serde_json::Value>,

    #[serde(rename = "DefinitionUri", default, skip_serializing_if = "Option::is_none")]
    pub definition_uri: Option<ApiDefinitionUri>,

    #[serde(
        rename = "EndpointConfiguration",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub endpoint_configuration: Option<String>,

    #[serde(rename = "MethodSettings", default, skip_serializing_if = "Option::is_none")]
    pub method_settings: Option<Vec<serde_json::Value>>,

    #[serde(
        rename = "Name",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub name: Option<String>,

    #[serde(rename = "StageName", deserialize_with = "crate::lenient::string")]
    pub stage_name: String,

    #[serde(
        rename = "Tags",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_map"
    )]
    pub tags: Option<BTreeMap<String, String>>,

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

/// `Cors` of [`Api`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiCors {
    String(String),
    CorsConfiguration(ApiCorsConfiguration),
}

impl Default for ApiCors {
    fn default() -> Self {
        Self::String(Default::default())
    }
}

/// `DefinitionUri` of [`Api`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiDefinitionUri {
    String(String),
    S3Location(ApiS3Location),
}

impl Default for ApiDefinitionUri {
    fn default() -> Self {
        Self::String(Default::default())
    }
}

/// AWS::Serverless::Application
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-resource-application.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "Location", deserialize_with = "crate::lenient::null_as_default")]
    pub location: ApplicationLocation,

    #[serde(
        rename = "NotificationArns",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub notification_arns: Option<Vec<String>>,

    #[serde(
        rename = "Parameters",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_map"
    )]
    pub parameters: Option<BTreeMap<String, String>>,

    #[serde(
        rename = "Tags",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_map"
    )]
    pub tags: Option<BTreeMap<String, String>>,

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

/// `Location` of [`Application`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApplicationLocation {
    String(String),
    ApplicationLocation(ApplicationApplicationLocation),
}

impl Default for ApplicationLocation {
    fn default() -> Self {
        Self::String(Default::default())
    }
}

/// AWS::Serverless::Function
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-resource-function.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Function {
    #[serde(
        rename = "Architectures",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub architectures: Option<Vec<String>>,

    #[serde(
        rename = "AutoPublishAlias",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub auto_publish_alias: Option<String>,

    #[serde(rename = "CodeUri", default, skip_serializing_if = "Option::is_none")]
    pub code_uri: Option<FunctionCodeUri>,

    #[serde(rename = "DeadLetterQueue", default, skip_serializing_if = "Option::is_none")]
    pub dead_letter_queue: Option<FunctionDeadLetterQueue>,

    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub description: Option<String>,

    #[serde(rename = "Environment", default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<FunctionEnvironment>,

    #[serde(rename = "Events", default, skip_serializing_if = "Option::is_none")]
    pub events: Option<BTreeMap<String, FunctionEventSource>>,

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
        rename = "ImageUri",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub image_uri: Option<String>,

    #[serde(
        rename = "InlineCode",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub inline_code: Option<String>,

    #[serde(
        rename = "KmsKeyArn",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub kms_key_arn: Option<String>,

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

    #[serde(rename = "Policies", default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<FunctionPolicies>,

    #[serde(
        rename = "ReservedConcurrentExecutions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub reserved_concurrent_executions: Option<i64>,

    #[serde(
        rename = "Role",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub role: Option<String>,

    #[serde(
        rename = "Runtime",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub runtime: Option<String>,

    #[serde(
        rename = "Tags",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_map"
    )]
    pub tags: Option<BTreeMap<String, String>>,

    #[serde(
        rename = "Timeout",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub timeout: Option<i64>,

    #[serde(
        rename = "Tracing",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub tracing: Option<String>,

    #[serde(rename = "VpcConfig", default, skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<FunctionVpcConfig>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// `CodeUri` of [`Function`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FunctionCodeUri {
    String(String),
    S3Location(FunctionS3Location),
}

impl Default for FunctionCodeUri {
    fn default() -> Self {
        Self::String(Default::default())
    }
}

/// `Policies` of [`Function`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FunctionPolicies {
    String(String),
    StringList(Vec<String>),
    Json(serde_json::Value),
}

impl Default for FunctionPolicies {
    fn default() -> Self {
        Self::String(Default::default())
    }
}

/// AWS::Serverless::HttpApi
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-resource-httpapi.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpApi {
    #[serde(rename = "CorsConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub cors_configuration: Option<HttpApiCorsConfigurationValue>,

    #[serde(rename = "DefinitionBody", default, skip_serializing_if = "Option::is_none")]
    pub definition_body: Option<serde_json::Value>,

    #[serde(rename = "DefinitionUri", default, skip_serializing_if = "Option::is_none")]
    pub definition_uri: Option<HttpApiDefinitionUri>,

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

    #[serde(
        rename = "FailOnWarnings",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub fail_on_warnings: Option<bool>,

    #[serde(
        rename = "StageName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub stage_name: Option<String>,

    #[serde(
        rename = "Tags",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_map"
    )]
    pub tags: Option<BTreeMap<String, String>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// `CorsConfiguration` of [`HttpApi`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HttpApiCorsConfigurationValue {
    Boolean(bool),
    CorsConfiguration(HttpApiCorsConfiguration),
}

impl Default for HttpApiCorsConfigurationValue {
    fn default() -> Self {
        Self::Boolean(Default::default())
    }
}

/// `DefinitionUri` of [`HttpApi`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HttpApiDefinitionUri {
    String(String),
    S3Location(HttpApiS3Location),
}

impl Default for HttpApiDefinitionUri {
    fn default() -> Self {
        Self::String(Default::default())
    }
}

/// AWS::Serverless::LayerVersion
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-resource-layerversion.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerVersion {
    #[serde(
        rename = "CompatibleRuntimes",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub compatible_runtimes: Option<Vec<String>>,

    #[serde(rename = "ContentUri", deserialize_with = "crate::lenient::null_as_default")]
    pub content_uri: LayerVersionContentUri,

    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub description: Option<String>,

    #[serde(
        rename = "LayerName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub layer_name: Option<String>,

    #[serde(
        rename = "LicenseInfo",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub license_info: Option<String>,

    #[serde(
        rename = "RetentionPolicy",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub retention_policy: Option<String>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// `ContentUri` of [`LayerVersion`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerVersionContentUri {
    String(String),
    S3Location(LayerVersionS3Location),
}

impl Default for LayerVersionContentUri {
    fn default() -> Self {
        Self::String(Default::default())
    }
}

/// AWS::Serverless::SimpleTable
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-resource-simpletable.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleTable {
    #[serde(rename = "PrimaryKey", default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<SimpleTablePrimaryKey>,

    #[serde(rename = "ProvisionedThroughput", default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<SimpleTableProvisionedThroughput>,

    #[serde(
        rename = "TableName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub table_name: Option<String>,

    #[serde(
        rename = "Tags",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_map"
    )]
    pub tags: Option<BTreeMap<String, String>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::Serverless::StateMachine
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-resource-statemachine.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateMachine {
    #[serde(rename = "Definition", default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<serde_json::Value>,

    #[serde(rename = "DefinitionUri", default, skip_serializing_if = "Option::is_none")]
    pub definition_uri: Option<StateMachineDefinitionUri>,

    #[serde(rename = "Logging", default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<serde_json::Value>,

    #[serde(
        rename = "Name",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub name: Option<String>,

    #[serde(rename = "Policies", default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<StateMachinePolicies>,

    #[serde(
        rename = "Role",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub role: Option<String>,

    #[serde(
        rename = "Tags",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_map"
    )]
    pub tags: Option<BTreeMap<String, String>>,

    #[serde(
        rename = "Type",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub type_: Option<String>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// `DefinitionUri` of [`StateMachine`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateMachineDefinitionUri {
    String(String),
    S3Location(StateMachineS3Location),
}

impl Default for StateMachineDefinitionUri {
    fn default() -> Self {
        Self::String(Default::default())
    }
}

/// `Policies` of [`StateMachine`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateMachinePolicies {
    String(String),
    StringList(Vec<String>),
    Json(serde_json::Value),
}

impl Default for StateMachinePolicies {
    fn default() -> Self {
        Self::String(Default::default())
    }
}

/// AWS::Serverless::Api.Auth
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-api-auth.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiAuth {
    #[serde(
        rename = "AddDefaultAuthorizerToCorsPreflight",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub add_default_authorizer_to_cors_preflight: Option<bool>,

    #[serde(rename = "Authorizers", default, skip_serializing_if = "Option::is_none")]
    pub authorizers: Option<serde_json::Value>,

    #[serde(
        rename = "DefaultAuthorizer",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub default_authorizer: Option<String>,
}

/// AWS::Serverless::Api.CorsConfiguration
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-api-corsconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiCorsConfiguration {
    #[serde(
        rename = "AllowCredentials",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub allow_credentials: Option<bool>,

    #[serde(
        rename = "AllowHeaders",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub allow_headers: Option<String>,

    #[serde(
        rename = "AllowMethods",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub allow_methods: Option<String>,

    #[serde(rename = "AllowOrigin", deserialize_with = "crate::lenient::string")]
    pub allow_origin: String,

    #[serde(
        rename = "MaxAge",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub max_age: Option<String>,
}

/// AWS::Serverless::Api.S3Location
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-api-s3location.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiS3Location {
    #[serde(rename = "Bucket", deserialize_with = "crate::lenient::string")]
    pub bucket: String,

    #[serde(rename = "Key", deserialize_with = "crate::lenient::string")]
    pub key: String,

    #[serde(
        rename = "Version",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub version: Option<String>,
}

/// AWS::Serverless::Application.ApplicationLocation
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-application-applicationlocation.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationApplicationLocation {
    #[serde(rename = "ApplicationId", deserialize_with = "crate::lenient::string")]
    pub application_id: String,

    #[serde(rename = "SemanticVersion", deserialize_with = "crate::lenient::string")]
    pub semantic_version: String,
}

/// AWS::Serverless::Function.ApiEvent
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-apievent.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionApiEvent {
    #[serde(rename = "Auth", default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<serde_json::Value>,

    #[serde(rename = "Method", deserialize_with = "crate::lenient::string")]
    pub method: String,

    #[serde(rename = "Path", deserialize_with = "crate::lenient::string")]
    pub path: String,

    #[serde(
        rename = "RestApiId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub rest_api_id: Option<String>,
}

/// AWS::Serverless::Function.CloudWatchEventEvent
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-cloudwatcheventevent.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionCloudWatchEventEvent {
    #[serde(
        rename = "EventBusName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub event_bus_name: Option<String>,

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

    #[serde(rename = "Pattern", deserialize_with = "crate::lenient::null_as_default")]
    pub pattern: serde_json::Value,
}

/// AWS::Serverless::Function.CloudWatchLogsEvent
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-cloudwatchlogsevent.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionCloudWatchLogsEvent {
    #[serde(rename = "FilterPattern", deserialize_with = "crate::lenient::string")]
    pub filter_pattern: String,

    #[serde(rename = "LogGroupName", deserialize_with = "crate::lenient::string")]
    pub log_group_name: String,
}

/// AWS::Serverless::Function.DeadLetterQueue
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-deadletterqueue.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeadLetterQueue {
    #[serde(rename = "TargetArn", deserialize_with = "crate::lenient::string")]
    pub target_arn: String,

    #[serde(rename = "Type", deserialize_with = "crate::lenient::string")]
    pub type_: String,
}

/// AWS::Serverless::Function.DynamoDBEvent
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-dynamodbevent.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDynamoDbEvent {
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

    #[serde(rename = "StartingPosition", deserialize_with = "crate::lenient::string")]
    pub starting_position: String,

    #[serde(rename = "Stream", deserialize_with = "crate::lenient::string")]
    pub stream: String,
}

/// AWS::Serverless::Function.Environment
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-environment.html>
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

/// AWS::Serverless::Function.EventBridgeRuleEvent
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-eventbridgeruleevent.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionEventBridgeRuleEvent {
    #[serde(
        rename = "EventBusName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub event_bus_name: Option<String>,

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

    #[serde(rename = "Pattern", deserialize_with = "crate::lenient::null_as_default")]
    pub pattern: serde_json::Value,
}

/// AWS::Serverless::Function.EventSource
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-eventsource.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Type", content = "Properties")]
pub enum FunctionEventSource {
    #[serde(rename = "S3")]
    S3(FunctionS3Event),
    #[serde(rename = "SNS")]
    Sns(FunctionSnsEvent),
    #[serde(rename = "SQS")]
    Sqs(FunctionSqsEvent),
    #[serde(rename = "Kinesis")]
    Kinesis(FunctionKinesisEvent),
    #[serde(rename = "DynamoDB")]
    DynamoDb(FunctionDynamoDbEvent),
    #[serde(rename = "Api")]
    Api(FunctionApiEvent),
    #[serde(rename = "Schedule")]
    Schedule(FunctionScheduleEvent),
    #[serde(rename = "CloudWatchEvent")]
    CloudWatchEvent(FunctionCloudWatchEventEvent),
    #[serde(rename = "EventBridgeRule")]
    EventBridgeRule(FunctionEventBridgeRuleEvent),
    #[serde(rename = "CloudWatchLogs")]
    CloudWatchLogs(FunctionCloudWatchLogsEvent),
    #[serde(rename = "HttpApi")]
    HttpApi(FunctionHttpApiEvent),
}

impl Default for FunctionEventSource {
    fn default() -> Self {
        Self::S3(Default::default())
    }
}

/// AWS::Serverless::Function.HttpApiEvent
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-httpapievent.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionHttpApiEvent {
    #[serde(
        rename = "ApiId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub api_id: Option<String>,

    #[serde(
        rename = "Method",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub method: Option<String>,

    #[serde(
        rename = "Path",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub path: Option<String>,

    #[serde(
        rename = "PayloadFormatVersion",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub payload_format_version: Option<String>,

    #[serde(
        rename = "TimeoutInMillis",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub timeout_in_millis: Option<i64>,
}

/// AWS::Serverless::Function.KinesisEvent
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-kinesisevent.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionKinesisEvent {
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

    #[serde(rename = "StartingPosition", deserialize_with = "crate::lenient::string")]
    pub starting_position: String,

    #[serde(rename = "Stream", deserialize_with = "crate::lenient::string")]
    pub stream: String,
}

/// AWS::Serverless::Function.S3Event
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-s3event.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionS3Event {
    #[serde(rename = "Bucket", deserialize_with = "crate::lenient::string")]
    pub bucket: String,

    #[serde(rename = "Events", deserialize_with = "crate::lenient::null_as_default")]
    pub events: FunctionS3EventEvents,

    #[serde(rename = "Filter", default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
}

/// `Events` of [`FunctionS3Event`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FunctionS3EventEvents {
    String(String),
    StringList(Vec<String>),
}

impl Default for FunctionS3EventEvents {
    fn default() -> Self {
        Self::String(Default::default())
    }
}

/// AWS::Serverless::Function.S3Location
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-s3location.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionS3Location {
    #[serde(rename = "Bucket", deserialize_with = "crate::lenient::string")]
    pub bucket: String,

    #[serde(rename = "Key", deserialize_with = "crate::lenient::string")]
    pub key: String,

    #[serde(
        rename = "Version",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub version: Option<i64>,
}

/// AWS::Serverless::Function.SNSEvent
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-snsevent.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionSnsEvent {
    #[serde(rename = "FilterPolicy", default, skip_serializing_if = "Option::is_none")]
    pub filter_policy: Option<serde_json::Value>,

    #[serde(
        rename = "SqsSubscription",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub sqs_subscription: Option<bool>,

    #[serde(rename = "Topic", deserialize_with = "crate::lenient::string")]
    pub topic: String,
}

/// AWS::Serverless::Function.SQSEvent
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-sqsevent.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionSqsEvent {
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
        rename = "MaximumBatchingWindowInSeconds",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub maximum_batching_window_in_seconds: Option<i64>,

    #[serde(rename = "Queue", deserialize_with = "crate::lenient::string")]
    pub queue: String,
}

/// AWS::Serverless::Function.ScheduleEvent
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-scheduleevent.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionScheduleEvent {
    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub description: Option<String>,

    #[serde(
        rename = "Enabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub enabled: Option<bool>,

    #[serde(
        rename = "Input",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub input: Option<String>,

    #[serde(
        rename = "Name",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub name: Option<String>,

    #[serde(rename = "Schedule", deserialize_with = "crate::lenient::string")]
    pub schedule: String,
}

/// AWS::Serverless::Function.VpcConfig
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-function-vpcconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionVpcConfig {
    #[serde(rename = "SecurityGroupIds", deserialize_with = "crate::lenient::string_list")]
    pub security_group_ids: Vec<String>,

    #[serde(rename = "SubnetIds", deserialize_with = "crate::lenient::string_list")]
    pub subnet_ids: Vec<String>,
}

/// AWS::Serverless::HttpApi.CorsConfiguration
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-httpapi-corsconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpApiCorsConfiguration {
    #[serde(
        rename = "AllowCredentials",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub allow_credentials: Option<bool>,

    #[serde(
        rename = "AllowHeaders",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub allow_headers: Option<Vec<String>>,

    #[serde(
        rename = "AllowMethods",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub allow_methods: Option<Vec<String>>,

    #[serde(
        rename = "AllowOrigins",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub allow_origins: Option<Vec<String>>,

    #[serde(
        rename = "ExposeHeaders",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub expose_headers: Option<Vec<String>>,

    #[serde(
        rename = "MaxAge",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub max_age: Option<i64>,
}

/// AWS::Serverless::HttpApi.S3Location
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-httpapi-s3location.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpApiS3Location {
    #[serde(rename = "Bucket", deserialize_with = "crate::lenient::string")]
    pub bucket: String,

    #[serde(rename = "Key", deserialize_with = "crate::lenient::string")]
    pub key: String,

    #[serde(
        rename = "Version",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub version: Option<String>,
}

/// AWS::Serverless::LayerVersion.S3Location
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-layerversion-s3location.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerVersionS3Location {
    #[serde(rename = "Bucket", deserialize_with = "crate::lenient::string")]
    pub bucket: String,

    #[serde(rename = "Key", deserialize_with = "crate::lenient::string")]
    pub key: String,

    #[serde(
        rename = "Version",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub version: Option<String>,
}

/// AWS::Serverless::SimpleTable.PrimaryKey
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-simpletable-primarykey.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleTablePrimaryKey {
    #[serde(
        rename = "Name",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub name: Option<String>,

    #[serde(rename = "Type", deserialize_with = "crate::lenient::string")]
    pub type_: String,
}

/// AWS::Serverless::SimpleTable.ProvisionedThroughput
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-simpletable-provisionedthroughput.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleTableProvisionedThroughput {
    #[serde(
        rename = "ReadCapacityUnits",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub read_capacity_units: Option<i64>,

    #[serde(rename = "WriteCapacityUnits", deserialize_with = "crate::lenient::integer")]
    pub write_capacity_units: i64,
}

/// AWS::Serverless::StateMachine.S3Location
///
/// <https://docs.aws.amazon.com/serverless-application-model/latest/developerguide/sam-property-statemachine-s3location.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateMachineS3Location {
    #[serde(rename = "Bucket", deserialize_with = "crate::lenient::string")]
    pub bucket: String,

    #[serde(rename = "Key", deserialize_with = "crate::lenient::string")]
    pub key: String,

    #[serde(
        rename = "Version",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub version: Option<String>,
}
