//! AWS::EC2 resources
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use serde::{Deserialize, Serialize};

use crate::resource::ResourceAttributes;
use crate::tags::Tag;

/// AWS::EC2::Instance
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-instance.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    #[serde(
        rename = "AvailabilityZone",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub availability_zone: Option<String>,

    #[serde(rename = "BlockDeviceMappings", default, skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<InstanceBlockDeviceMapping>>,

    #[serde(
        rename = "IamInstanceProfile",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub iam_instance_profile: Option<String>,

    #[serde(
        rename = "ImageId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub image_id: Option<String>,

    #[serde(
        rename = "InstanceType",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub instance_type: Option<String>,

    #[serde(
        rename = "KeyName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub key_name: Option<String>,

    #[serde(
        rename = "SecurityGroupIds",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string_list"
    )]
    pub security_group_ids: Option<Vec<String>>,

    #[serde(
        rename = "SubnetId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub subnet_id: Option<String>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(
        rename = "UserData",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub user_data: Option<String>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::EC2::InternetGateway
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-internetgateway.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternetGateway {
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::EC2::SecurityGroup
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-securitygroup.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroup {
    #[serde(rename = "GroupDescription", deserialize_with = "crate::lenient::string")]
    pub group_description: String,

    #[serde(
        rename = "GroupName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub group_name: Option<String>,

    #[serde(rename = "SecurityGroupEgress", default, skip_serializing_if = "Option::is_none")]
    pub security_group_egress: Option<Vec<SecurityGroupEgress>>,

    #[serde(rename = "SecurityGroupIngress", default, skip_serializing_if = "Option::is_none")]
    pub security_group_ingress: Option<Vec<SecurityGroupIngress>>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(
        rename = "VpcId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub vpc_id: Option<String>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::EC2::Subnet
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-subnet.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subnet {
    #[serde(
        rename = "AvailabilityZone",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub availability_zone: Option<String>,

    #[serde(
        rename = "CidrBlock",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub cidr_block: Option<String>,

    #[serde(
        rename = "MapPublicIpOnLaunch",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub map_public_ip_on_launch: Option<bool>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(rename = "VpcId", deserialize_with = "crate::lenient::string")]
    pub vpc_id: String,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::EC2::VPC
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vpc {
    #[serde(
        rename = "CidrBlock",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub cidr_block: Option<String>,

    #[serde(
        rename = "EnableDnsHostnames",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub enable_dns_hostnames: Option<bool>,

    #[serde(
        rename = "EnableDnsSupport",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub enable_dns_support: Option<bool>,

    #[serde(
        rename = "InstanceTenancy",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub instance_tenancy: Option<String>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(skip)]
    pub resource_attributes: ResourceAttributes,
}

/// AWS::EC2::Instance.BlockDeviceMapping
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-instance-blockdevicemapping.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceBlockDeviceMapping {
    #[serde(rename = "DeviceName", deserialize_with = "crate::lenient::string")]
    pub device_name: String,

    #[serde(rename = "Ebs", default, skip_serializing_if = "Option::is_none")]
    pub ebs: Option<InstanceEbs>,

    #[serde(
        rename = "VirtualName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub virtual_name: Option<String>,
}

/// AWS::EC2::Instance.Ebs
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-instance-ebs.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceEbs {
    #[serde(
        rename = "DeleteOnTermination",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub delete_on_termination: Option<bool>,

    #[serde(
        rename = "Encrypted",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_boolean"
    )]
    pub encrypted: Option<bool>,

    #[serde(
        rename = "Iops",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub iops: Option<i64>,

    #[serde(
        rename = "VolumeSize",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub volume_size: Option<i64>,

    #[serde(
        rename = "VolumeType",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub volume_type: Option<String>,
}

/// AWS::EC2::SecurityGroup.Egress
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-securitygroup-egress.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroupEgress {
    #[serde(
        rename = "CidrIp",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub cidr_ip: Option<String>,

    #[serde(
        rename = "CidrIpv6",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub cidr_ipv6: Option<String>,

    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub description: Option<String>,

    #[serde(
        rename = "DestinationSecurityGroupId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub destination_security_group_id: Option<String>,

    #[serde(
        rename = "FromPort",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub from_port: Option<i64>,

    #[serde(rename = "IpProtocol", deserialize_with = "crate::lenient::string")]
    pub ip_protocol: String,

    #[serde(
        rename = "ToPort",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub to_port: Option<i64>,
}

/// AWS::EC2::SecurityGroup.Ingress
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-securitygroup-ingress.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroupIngress {
    #[serde(
        rename = "CidrIp",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub cidr_ip: Option<String>,

    #[serde(
        rename = "CidrIpv6",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub cidr_ipv6: Option<String>,

    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub description: Option<String>,

    #[serde(
        rename = "FromPort",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub from_port: Option<i64>,

    #[serde(rename = "IpProtocol", deserialize_with = "crate::lenient::string")]
    pub ip_protocol: String,

    #[serde(
        rename = "SourceSecurityGroupId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_string"
    )]
    pub source_security_group_id: Option<String>,

    #[serde(
        rename = "ToPort",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::option_integer"
    )]
    pub to_port: Option<i64>,
}
