//! AWS::DynamoDB resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::DynamoDB::Table
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-dynamodb-table.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(rename = "AttributeDefinitions", default, skip_serializing_if = "Option::is_none")]
    pub attribute_definitions: Option<Vec<TableAttributeDefinition>>,

    #[serde(
        rename = "BillingMode",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub billing_mode: Option<String>,

    #[serde(rename = "GlobalSecondaryIndexes", default, skip_serializing_if = "Option::is_none")]
    pub global_secondary_indexes: Option<Vec<TableGlobalSecondaryIndex>>,

    #[serde(rename = "KeySchema", deserialize_with = "crate::lenient::null_as_default")]
    pub key_schema: Vec<TableKeySchema>,

    #[serde(
        rename = "PointInTimeRecoverySpecification",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub point_in_time_recovery_specification: Option<TablePointInTimeRecoverySpecification>,

    #[serde(rename = "ProvisionedThroughput", default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<TableProvisionedThroughput>,

    #[serde(rename = "SSESpecification", default, skip_serializing_if = "Option::is_none")]
    pub sse_specification: Option<TableSseSpecification>,

    #[serde(rename = "StreamSpecification", default, skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<TableStreamSpecification>,

    #[serde(
        rename = "TableName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub table_name: Option<String>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(rename = "TimeToLiveSpecification", default, skip_serializing_if = "Option::is_none")]
    pub time_to_live_specification: Option<TableTimeToLiveSpecification>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::DynamoDB::Table.AttributeDefinition
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-attributedefinition.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableAttributeDefinition {
    #[serde(rename = "AttributeName", deserialize_with = "crate::lenient::string")]
    pub attribute_name: String,

    #[serde(rename = "AttributeType", deserialize_with = "crate::lenient::string")]
    pub attribute_type: String,
}

/// AWS::DynamoDB::Table.GlobalSecondaryIndex
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-globalsecondaryindex.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableGlobalSecondaryIndex {
    #[serde(rename = "IndexName", deserialize_with = "crate::lenient::string")]
    pub index_name: String,

    #[serde(rename = "KeySchema", deserialize_with = "crate::lenient::null_as_default")]
    pub key_schema: Vec<TableKeySchema>,

    #[serde(rename = "Projection", deserialize_with = "crate::lenient::null_as_default")]
    pub projection: TableProjection,

    #[serde(rename = "ProvisionedThroughput", default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<TableProvisionedThroughput>,
}

/// AWS::DynamoDB::Table.KeySchema
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-keyschema.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableKeySchema {
    #[serde(rename = "AttributeName", deserialize_with = "crate::lenient::string")]
    pub attribute_name: String,

    #[serde(rename = "KeyType", deserialize_with = "crate::lenient::string")]
    pub key_type: String,
}

/// AWS::DynamoDB::Table.PointInTimeRecoverySpecification
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-pointintimerecoveryspecification.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TablePointInTimeRecoverySpecification {
    #[serde(
        rename = "PointInTimeRecoveryEnabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub point_in_time_recovery_enabled: Option<bool>,
}

/// AWS::DynamoDB::Table.Projection
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-projection.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableProjection {
    #[serde(
        rename = "NonKeyAttributes",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub non_key_attributes: Option<Vec<String>>,

    #[serde(
        rename = "ProjectionType",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub projection_type: Option<String>,
}

/// AWS::DynamoDB::Table.ProvisionedThroughput
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-provisionedthroughput.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableProvisionedThroughput {
    #[serde(rename = "ReadCapacityUnits", deserialize_with = "crate::lenient::integer")]
    pub read_capacity_units: i64,

    #[serde(rename = "WriteCapacityUnits", deserialize_with = "crate::lenient::integer")]
    pub write_capacity_units: i64,
}

/// AWS::DynamoDB::Table.SSESpecification
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-ssespecification.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSseSpecification {
    #[serde(
        rename = "KMSMasterKeyId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub kms_master_key_id: Option<String>,

    #[serde(rename = "SSEEnabled", deserialize_with = "crate::lenient::boolean")]
    pub sse_enabled: bool,

    #[serde(
        rename = "SSEType",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub sse_type: Option<String>,
}

/// AWS::DynamoDB::Table.StreamSpecification
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-streamspecification.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableStreamSpecification {
    #[serde(rename = "StreamViewType", deserialize_with = "crate::lenient::string")]
    pub stream_view_type: String,
}

/// AWS::DynamoDB::Table.TimeToLiveSpecification
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-timetolivespecification.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableTimeToLiveSpecification {
    #[serde(rename = "AttributeName", deserialize_with = "crate::lenient::string")]
    pub attribute_name: String,

    #[serde(rename = "Enabled", deserialize_with = "crate::lenient::boolean")]
    pub enabled: bool,
}
