//! AWS::IAM resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::IAM::Policy
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-policy.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(
        rename = "Groups",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub groups: Option<Vec<String>>,

    #[serde(rename = "PolicyDocument", deserialize_with = "crate::lenient::null_as_default")]
    pub policy_document: serde_json::Value,

    #[serde(rename = "PolicyName", deserialize_with = "crate::lenient::string")]
    pub policy_name: String,

    #[serde(
        rename = "Roles",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub roles: Option<Vec<String>>,

    #[serde(
        rename = "Users",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub users: Option<Vec<String>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::IAM::Role
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-role.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(
        rename = "AssumeRolePolicyDocument",
        deserialize_with = "crate::lenient::null_as_default"
    )]
    pub assume_role_policy_document: serde_json::Value,

    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub description: Option<String>,

    #[serde(
        rename = "ManagedPolicyArns",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub managed_policy_arns: Option<Vec<String>>,

    #[serde(
        rename = "MaxSessionDuration",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub max_session_duration: Option<i64>,

    #[serde(
        rename = "Path",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub path: Option<String>,

    #[serde(
        rename = "PermissionsBoundary",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub permissions_boundary: Option<String>,

    #[serde(rename = "Policies", default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<RolePolicy>>,

    #[serde(
        rename = "RoleName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub role_name: Option<String>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::IAM::Role.Policy
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-iam-role-policy.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RolePolicy {
    #[serde(rename = "PolicyDocument", deserialize_with = "crate::lenient::null_as_default")]
    pub policy_document: serde_json::Value,

    #[serde(rename = "PolicyName", deserialize_with = "crate::lenient::string")]
    pub policy_name: String,
}
