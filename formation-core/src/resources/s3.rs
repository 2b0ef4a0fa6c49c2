//! AWS::S3 resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::S3::Bucket
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-s3-bucket.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    #[serde(
        rename = "AccessControl",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub access_control: Option<String>,

    #[serde(rename = "BucketEncryption", default, skip_serializing_if = "Option::is_none")]
    pub bucket_encryption: Option<BucketBucketEncryption>,

    #[serde(
        rename = "BucketName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub bucket_name: Option<String>,

    #[serde(rename = "CorsConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub cors_configuration: Option<BucketCorsConfiguration>,

    #[serde(rename = "LifecycleConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_configuration: Option<BucketLifecycleConfiguration>,

    #[serde(rename = "LoggingConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub logging_configuration: Option<BucketLoggingConfiguration>,

    #[serde(
        rename = "ObjectLockEnabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub object_lock_enabled: Option<bool>,

    #[serde(
        rename = "PublicAccessBlockConfiguration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub public_access_block_configuration: Option<BucketPublicAccessBlockConfiguration>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(rename = "VersioningConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub versioning_configuration: Option<BucketVersioningConfiguration>,

    #[serde(rename = "WebsiteConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub website_configuration: Option<BucketWebsiteConfiguration>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::S3::BucketPolicy
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-s3-bucketpolicy.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketPolicy {
    #[serde(rename = "Bucket", deserialize_with = "crate::lenient::string")]
    pub bucket: String,

    #[serde(rename = "PolicyDocument", deserialize_with = "crate::lenient::null_as_default")]
    pub policy_document: serde_json::Value,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::S3::Bucket.BucketEncryption
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-bucketencryption.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketBucketEncryption {
    #[serde(
        rename = "ServerSideEncryptionConfiguration",
        deserialize_with = "crate::lenient::null_as_default"
    )]
    pub server_side_encryption_configuration: Vec<BucketServerSideEncryptionRule>,
}

/// AWS::S3::Bucket.CorsConfiguration
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-corsconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketCorsConfiguration {
    #[serde(rename = "CorsRules", deserialize_with = "crate::lenient::null_as_default")]
    pub cors_rules: Vec<BucketCorsRule>,
}

/// AWS::S3::Bucket.CorsRule
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-corsrule.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketCorsRule {
    #[serde(
        rename = "AllowedHeaders",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub allowed_headers: Option<Vec<String>>,

    #[serde(rename = "AllowedMethods", deserialize_with = "crate::lenient::string_list")]
    pub allowed_methods: Vec<String>,

    #[serde(rename = "AllowedOrigins", deserialize_with = "crate::lenient::string_list")]
    pub allowed_origins: Vec<String>,

    #[serde(
        rename = "ExposedHeaders",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub exposed_headers: Option<Vec<String>>,

    #[serde(
        rename = "Id",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub id: Option<String>,

    #[serde(
        rename = "MaxAge",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub max_age: Option<i64>,
}

/// AWS::S3::Bucket.LifecycleConfiguration
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-lifecycleconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketLifecycleConfiguration {
    #[serde(rename = "Rules", deserialize_with = "crate::lenient::null_as_default")]
    pub rules: Vec<BucketRule>,
}

/// AWS::S3::Bucket.LoggingConfiguration
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-loggingconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketLoggingConfiguration {
    #[serde(
        rename = "DestinationBucketName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub destination_bucket_name: Option<String>,

    #[serde(
        rename = "LogFilePrefix",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub log_file_prefix: Option<String>,
}

/// AWS::S3::Bucket.PublicAccessBlockConfiguration
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-publicaccessblockconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketPublicAccessBlockConfiguration {
    #[serde(
        rename = "BlockPublicAcls",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub block_public_acls: Option<bool>,

    #[serde(
        rename = "BlockPublicPolicy",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub block_public_policy: Option<bool>,

    #[serde(
        rename = "IgnorePublicAcls",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub ignore_public_acls: Option<bool>,

    #[serde(
        rename = "RestrictPublicBuckets",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub restrict_public_buckets: Option<bool>,
}

/// AWS::S3::Bucket.Rule
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-rule.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketRule {
    #[serde(
        rename = "ExpirationInDays",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub expiration_in_days: Option<i64>,

    #[serde(
        rename = "Id",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub id: Option<String>,

    #[serde(
        rename = "NoncurrentVersionExpirationInDays",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub noncurrent_version_expiration_in_days: Option<i64>,

    #[serde(
        rename = "Prefix",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub prefix: Option<String>,

    #[serde(rename = "Status", deserialize_with = "crate::lenient::string")]
    pub status: String,
}

/// AWS::S3::Bucket.ServerSideEncryptionByDefault
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-serversideencryptionbydefault.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketServerSideEncryptionByDefault {
    #[serde(
        rename = "KMSMasterKeyID",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub kms_master_key_id: Option<String>,

    #[serde(rename = "SSEAlgorithm", deserialize_with = "crate::lenient::string")]
    pub sse_algorithm: String,
}

/// AWS::S3::Bucket.ServerSideEncryptionRule
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-serversideencryptionrule.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketServerSideEncryptionRule {
    #[serde(
        rename = "BucketKeyEnabled",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub bucket_key_enabled: Option<bool>,

    #[serde(
        rename = "ServerSideEncryptionByDefault",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub server_side_encryption_by_default: Option<BucketServerSideEncryptionByDefault>,
}

/// AWS::S3::Bucket.VersioningConfiguration
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-versioningconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketVersioningConfiguration {
    #[serde(rename = "Status", deserialize_with = "crate::lenient::string")]
    pub status: String,
}

/// AWS::S3::Bucket.WebsiteConfiguration
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-websiteconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketWebsiteConfiguration {
    #[serde(
        rename = "ErrorDocument",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub error_document: Option<String>,

    #[serde(
        rename = "IndexDocument",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub index_document: Option<String>,
}
