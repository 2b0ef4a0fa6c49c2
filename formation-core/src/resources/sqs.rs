//! AWS::SQS resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::SQS::Queue
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sqs-queue.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    #[serde(
        rename = "ContentBasedDeduplication",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub content_based_deduplication: Option<bool>,

    #[serde(
        rename = "DelaySeconds",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub delay_seconds: Option<i64>,

    #[serde(
        rename = "FifoQueue",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub fifo_queue: Option<bool>,

    #[serde(
        rename = "KmsMasterKeyId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub kms_master_key_id: Option<String>,

    #[serde(
        rename = "MaximumMessageSize",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub maximum_message_size: Option<i64>,

    #[serde(
        rename = "MessageRetentionPeriod",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub message_retention_period: Option<i64>,

    #[serde(
        rename = "QueueName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub queue_name: Option<String>,

    #[serde(
        rename = "ReceiveMessageWaitTimeSeconds",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub receive_message_wait_time_seconds: Option<i64>,

    #[serde(rename = "RedrivePolicy", default, skip_serializing_if = "Option::is_none")]
    pub redrive_policy: Option<serde_json::Value>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(
        rename = "VisibilityTimeout",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub visibility_timeout: Option<i64>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::SQS::QueuePolicy
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sqs-queuepolicy.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueuePolicy {
    #[serde(rename = "PolicyDocument", deserialize_with = "crate::lenient::null_as_default")]
    pub policy_document: serde_json::Value,

    #[serde(rename = "Queues", deserialize_with = "crate::lenient::string_list")]
    pub queues: Vec<String>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}
