//! AWS::ECR resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::ECR::Repository
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ecr-repository.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(
        rename = "ImageScanningConfiguration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_scanning_configuration: Option<RepositoryImageScanningConfiguration>,

    #[serde(
        rename = "ImageTagMutability",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub image_tag_mutability: Option<String>,

    #[serde(rename = "LifecyclePolicy", default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_policy: Option<RepositoryLifecyclePolicy>,

    #[serde(
        rename = "RepositoryName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub repository_name: Option<String>,

    #[serde(rename = "RepositoryPolicyText", default, skip_serializing_if = "Option::is_none")]
    pub repository_policy_text: Option<serde_json::Value>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::ECR::Repository.ImageScanningConfiguration
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ecr-repository-imagescanningconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryImageScanningConfiguration {
    #[serde(
        rename = "ScanOnPush",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub scan_on_push: Option<bool>,
}

/// AWS::ECR::Repository.LifecyclePolicy
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ecr-repository-lifecyclepolicy.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryLifecyclePolicy {
    #[serde(
        rename = "LifecyclePolicyText",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub lifecycle_policy_text: Option<String>,

    #[serde(
        rename = "RegistryId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub registry_id: Option<String>,
}
