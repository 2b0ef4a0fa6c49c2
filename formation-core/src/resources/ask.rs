//! Alexa::ASK resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;

/// Alexa::ASK::Skill
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/alexa-ask-skill.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(
        rename = "AuthenticationConfiguration",
        deserialize_with = "crate::lenient::null_as_default"
    )]
    pub authentication_configuration: SkillAuthenticationConfiguration,

    #[serde(rename = "SkillPackage", deserialize_with = "crate::lenient::null_as_default")]
    pub skill_package: SkillSkillPackage,

    #[serde(rename = "VendorId", deserialize_with = "crate::lenient::string")]
    pub vendor_id: String,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// Alexa::ASK::Skill.AuthenticationConfiguration
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/alexa-ask-skill-authenticationconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillAuthenticationConfiguration {
    #[serde(rename = "ClientId", deserialize_with = "crate::lenient::string")]
    pub client_id: String,

    #[serde(rename = "ClientSecret", deserialize_with = "crate::lenient::string")]
    pub client_secret: String,

    #[serde(rename = "RefreshToken", deserialize_with = "crate::lenient::string")]
    pub refresh_token: String,
}

/// Alexa::ASK::Skill.Overrides
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/alexa-ask-skill-overrides.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillOverrides {
    #[serde(rename = "Manifest", default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<serde_json::Value>,
}

/// Alexa::ASK::Skill.SkillPackage
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/alexa-ask-skill-skillpackage.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSkillPackage {
    #[serde(rename = "Overrides", default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<SkillOverrides>,

    #[serde(rename = "S3Bucket", deserialize_with = "crate::lenient::string")]
    pub s3_bucket: String,

    #[serde(
        rename = "S3BucketRole",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub s3_bucket_role: Option<String>,

    #[serde(rename = "S3Key", deserialize_with = "crate::lenient::string")]
    pub s3_key: String,

    #[serde(
        rename = "S3ObjectVersion",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub s3_object_version: Option<String>,
}
