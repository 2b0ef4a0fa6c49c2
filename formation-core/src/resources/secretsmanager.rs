//! AWS::SecretsManager resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::SecretsManager::Secret
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-secretsmanager-secret.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub description: Option<String>,

    #[serde(rename = "GenerateSecretString", default, skip_serializing_if = "Option::is_none")]
    pub generate_secret_string: Option<SecretGenerateSecretString>,

    #[serde(
        rename = "KmsKeyId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub kms_key_id: Option<String>,

    #[serde(
        rename = "Name",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub name: Option<String>,

    #[serde(
        rename = "SecretString",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub secret_string: Option<String>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::SecretsManager::Secret.GenerateSecretString
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-secretsmanager-secret-generatesecretstring.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretGenerateSecretString {
    #[serde(
        rename = "ExcludeCharacters",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub exclude_characters: Option<String>,

    #[serde(
        rename = "ExcludePunctuation",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub exclude_punctuation: Option<bool>,

    #[serde(
        rename = "GenerateStringKey",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub generate_string_key: Option<String>,

    #[serde(
        rename = "IncludeSpace",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub include_space: Option<bool>,

    #[serde(
        rename = "PasswordLength",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub password_length: Option<i64>,

    #[serde(
        rename = "SecretStringTemplate",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub secret_string_template: Option<String>,
}
