//! Generated resource types, one module per service
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

pub mod apigateway;
pub mod ask;
pub mod cloudformation;
pub mod cloudwatch;
pub mod dynamodb;
pub mod ec2;
pub mod ecr;
pub mod events;
pub mod iam;
pub mod kinesis;
pub mod kms;
pub mod lambda;
pub mod logs;
pub mod s3;
pub mod secretsmanager;
pub mod serverless;
pub mod sns;
pub mod sqs;
pub mod ssm;
pub mod stepfunctions;

mod registry;

pub use registry::*;
