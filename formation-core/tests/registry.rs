use std::collections::BTreeSet;

use formation_core::resources::{dynamodb, lambda, s3, serverless, sqs};
use formation_core::{
    CloudFormationResource, Error, RESOURCE_TYPE_NAMES, Template, all_resources, is_registered,
};

#[test]
fn all_resources_are_keyed_by_their_type_name() {
    let resources = all_resources();
    assert_eq!(resources.len(), RESOURCE_TYPE_NAMES.len());

    for (type_name, resource) in &resources {
        assert_eq!(type_name, resource.type_name());
        assert!(resource.is_registered());
        assert!(is_registered(type_name));
    }
}

#[test]
fn type_names_are_sorted_and_unique() {
    let unique: BTreeSet<&str> = RESOURCE_TYPE_NAMES.iter().copied().collect();
    assert_eq!(unique.len(), RESOURCE_TYPE_NAMES.len());

    let mut sorted = RESOURCE_TYPE_NAMES.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, RESOURCE_TYPE_NAMES);
}

#[test]
fn unregistered_names_are_rejected() {
    assert!(!is_registered("AWS::Made::Up"));
    assert!(!is_registered("Custom::Thing"));
    assert!(!is_registered("aws::s3::bucket"));
    assert!(!is_registered(""));
}

#[test]
fn type_constants_match_the_registry() {
    assert_eq!(s3::Bucket::TYPE_NAME, "AWS::S3::Bucket");
    assert_eq!(s3::Bucket::DISPLAY_NAME, "s3.Bucket");
    assert_eq!(serverless::Function::TYPE_NAME, "AWS::Serverless::Function");
    assert_eq!(dynamodb::Table::DISPLAY_NAME, "dynamodb.Table");

    let resources = all_resources();
    assert!(s3::Bucket::from_resource(&resources["AWS::S3::Bucket"]).is_some());
    assert!(lambda::Function::from_resource(&resources["AWS::S3::Bucket"]).is_none());
}

#[test]
fn lookup_agrees_with_filtering() {
    let mut template = Template::new();
    template.insert_resource("Queue", sqs::Queue::default());
    template.insert_resource(
        "Bucket",
        s3::Bucket {
            bucket_name: Some("assets".to_string()),
            ..Default::default()
        },
    );
    template.insert_resource("Other", s3::Bucket::default());

    let buckets = template.get_all::<s3::Bucket>();
    for (name, bucket) in &buckets {
        let found = template.get_with_name::<s3::Bucket>(name).unwrap();
        assert!(std::ptr::eq(*bucket, found));
    }
    assert_eq!(buckets.len(), 2);
    assert_eq!(template.get_all::<sqs::Queue>().len(), 1);
    assert!(template.get_all::<dynamodb::Table>().is_empty());

    assert!(matches!(
        template.get_with_name::<s3::Bucket>("Queue"),
        Err(Error::ResourceNotFound { .. })
    ));
    assert!(matches!(
        template.get_with_name::<s3::Bucket>("Missing"),
        Err(Error::ResourceNotFound { .. })
    ));
}

#[test]
fn named_accessors_match_the_generic_ones() {
    let mut template = Template::new_sam();
    template.insert_resource(
        "Api",
        serverless::Function {
            handler: Some("index.handler".to_string()),
            ..Default::default()
        },
    );

    assert_eq!(
        template.get_all_serverless_function_resources(),
        template.get_all::<serverless::Function>()
    );
    let function = template.get_serverless_function_with_name("Api").unwrap();
    assert_eq!(function.handler.as_deref(), Some("index.handler"));
    assert!(template.get_lambda_function_with_name("Api").is_err());
}

#[test]
fn default_resources_serialize_their_type() {
    for (type_name, resource) in all_resources() {
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["Type"], type_name.as_str());
        assert!(value.get("DependsOn").is_none());
    }
}
