//! AWS::Kinesis resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::Kinesis::Stream
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-kinesis-stream.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    #[serde(
        rename = "Name",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub name: Option<String>,

    #[serde(
        rename = "RetentionPeriodHours",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub retention_period_hours: Option<i64>,

    #[serde(
        rename = "ShardCount",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub shard_count: Option<i64>,

    #[serde(rename = "StreamEncryption", default, skip_serializing_if = "Option::is_none")]
    pub stream_encryption: Option<StreamStreamEncryption>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::Kinesis::Stream.StreamEncryption
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kinesis-stream-streamencryption.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamStreamEncryption {
    #[serde(rename = "EncryptionType", deserialize_with = "crate::lenient::string")]
    pub encryption_type: String,

    #[serde(rename = "KeyId", deserialize_with = "crate::lenient::string")]
    pub key_id: String,
}
