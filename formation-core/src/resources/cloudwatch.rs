//! AWS::CloudWatch resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;

/// AWS::CloudWatch::Alarm
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudwatch-alarm.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    #[serde(
        rename = "ActionsEnabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub actions_enabled: Option<bool>,

    #[serde(
        rename = "AlarmActions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub alarm_actions: Option<Vec<String>>,

    #[serde(
        rename = "AlarmDescription",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub alarm_description: Option<String>,

    #[serde(
        rename = "AlarmName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub alarm_name: Option<String>,

    #[serde(rename = "ComparisonOperator", deserialize_with = "crate::lenient::string")]
    pub comparison_operator: String,

    #[serde(
        rename = "DatapointsToAlarm",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub datapoints_to_alarm: Option<i64>,

    #[serde(rename = "Dimensions", default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<AlarmDimension>>,

    #[serde(rename = "EvaluationPeriods", deserialize_with = "crate::lenient::integer")]
    pub evaluation_periods: i64,

    #[serde(
        rename = "MetricName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub metric_name: Option<String>,

    #[serde(
        rename = "Namespace",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub namespace: Option<String>,

    #[serde(
        rename = "OKActions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub ok_actions: Option<Vec<String>>,

    #[serde(
        rename = "Period",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub period: Option<i64>,

    #[serde(
        rename = "Statistic",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub statistic: Option<String>,

    #[serde(
        rename = "Threshold",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_double"
    )]
    pub threshold: Option<f64>,

    #[serde(
        rename = "TreatMissingData",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub treat_missing_data: Option<String>,

    #[serde(
        rename = "Unit",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub unit: Option<String>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::CloudWatch::Alarm.Dimension
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudwatch-alarm-dimension.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlarmDimension {
    #[serde(rename = "Name", deserialize_with = "crate::lenient::string")]
    pub name: String,

    #[serde(rename = "Value", deserialize_with = "crate::lenient::string")]
    pub value: String,
}
