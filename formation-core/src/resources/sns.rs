//! AWS::SNS resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::SNS::Subscription
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sns-subscription.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(
        rename = "Endpoint",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub endpoint: Option<String>,

    #[serde(rename = "FilterPolicy", default, skip_serializing_if = "Option::is_none")]
    pub filter_policy: Option<serde_json::Value>,

    #[serde(rename = "Protocol", deserialize_with = "crate::lenient::string")]
    pub protocol: String,

    #[serde(
        rename = "RawMessageDelivery",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub raw_message_delivery: Option<bool>,

    #[serde(rename = "TopicArn", deserialize_with = "crate::lenient::string")]
    pub topic_arn: String,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::SNS::Topic
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sns-topic.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(
        rename = "DisplayName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub display_name: Option<String>,

    #[serde(
        rename = "FifoTopic",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub fifo_topic: Option<bool>,

    #[serde(
        rename = "KmsMasterKeyId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub kms_master_key_id: Option<String>,

    #[serde(rename = "Subscription", default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Vec<TopicSubscription>>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(
        rename = "TopicName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub topic_name: Option<String>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::SNS::Topic.Subscription
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sns-topic-subscription.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicSubscription {
    #[serde(rename = "Endpoint", deserialize_with = "crate::lenient::string")]
    pub endpoint: String,

    #[serde(rename = "Protocol", deserialize_with = "crate::lenient::string")]
    pub protocol: String,
}
