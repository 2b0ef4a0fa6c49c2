use std::path::PathBuf;

use formation_core::intrinsics::ProcessorOptions;
use formation_core::resources::serverless::{
    FunctionCodeUri, FunctionEventSource, FunctionPolicies, FunctionS3EventEvents,
};
use formation_core::resources::{dynamodb, ec2, iam, lambda, s3, serverless, sns};
use formation_core::{DeletionPolicy, ParseOptions, Resource, Template};
use serde_json::json;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn sam() -> Template {
    formation_core::open(fixture("sam.yaml")).unwrap()
}

fn stack() -> Template {
    formation_core::open(fixture("stack.json")).unwrap()
}

#[test]
fn sam_template_sections() {
    let template = sam();

    assert!(template.is_sam());
    assert_eq!(template.description.as_deref(), Some("Order processing"));
    assert_eq!(template.parameters["Stage"].parameter_type, "String");
    assert_eq!(
        template.conditions["IsProd"],
        json!({"Fn::Equals": [{"Ref": "Stage"}, "prod"]})
    );
    assert_eq!(template.globals["Function"]["Timeout"], json!(30));
    assert_eq!(template.outputs["QueueName"].value, json!("orders-dev"));
    assert_eq!(template.outputs["QueueArn"].value, serde_json::Value::Null);
    assert_eq!(template.resources.len(), 6);
}

#[test]
fn sam_resources_resolve_parameters_and_pseudo_parameters() {
    let template = sam();

    let queue = template.get_sqs_queue_with_name("OrdersQueue").unwrap();
    assert_eq!(queue.queue_name.as_deref(), Some("orders-dev"));
    assert_eq!(queue.visibility_timeout, Some(180));
    assert_eq!(queue.delay_seconds, Some(0));

    let bucket = template.get_with_name::<s3::Bucket>("ArchiveBucket").unwrap();
    assert_eq!(bucket.bucket_name.as_deref(), Some("archive-dev-123456789012"));
    assert_eq!(
        bucket.resource_attributes.deletion_policy,
        Some(DeletionPolicy::Retain)
    );

    let topic = template.get_with_name::<sns::Topic>("Notifications").unwrap();
    assert_eq!(topic.topic_name.as_deref(), Some("formation-stack-notifications"));
}

#[test]
fn sam_function_properties() {
    let template = sam();
    let functions = template.get_all::<serverless::Function>();
    assert_eq!(
        functions.keys().copied().collect::<Vec<_>>(),
        vec!["ProcessOrder", "Reporter"]
    );

    let function = functions["ProcessOrder"];
    assert_eq!(function.handler.as_deref(), Some("app.handler"));
    assert_eq!(function.memory_size, Some(512));
    assert_eq!(function.code_uri, Some(FunctionCodeUri::String("src/".to_string())));
    assert_eq!(function.resource_attributes.depends_on, vec!["OrdersQueue"]);

    let variables = function
        .environment
        .as_ref()
        .and_then(|environment| environment.variables.as_ref())
        .unwrap();
    assert_eq!(variables["STAGE"], "dev");
    assert_eq!(variables["QUEUE_URL"], "");

    assert!(matches!(function.policies, Some(FunctionPolicies::Json(_))));

    let reporter = functions["Reporter"];
    assert_eq!(
        reporter.policies,
        Some(FunctionPolicies::String("AWSLambdaReadOnlyAccess".to_string()))
    );
    match &reporter.code_uri {
        Some(FunctionCodeUri::S3Location(location)) => {
            assert_eq!(location.bucket, "artifacts");
            assert_eq!(location.key, "reporter.zip");
            assert_eq!(location.version, None);
        }
        other => panic!("unexpected CodeUri: {:?}", other),
    }
}

#[test]
fn sam_event_sources_are_typed() {
    let template = sam();
    let function = template.get_serverless_function_with_name("ProcessOrder").unwrap();
    let events = function.events.as_ref().unwrap();
    assert_eq!(events.len(), 3);

    match &events["Orders"] {
        FunctionEventSource::Sqs(event) => {
            assert_eq!(event.batch_size, Some(10));
            assert_eq!(event.queue, "");
        }
        other => panic!("unexpected event: {:?}", other),
    }
    match &events["Upload"] {
        FunctionEventSource::S3(event) => assert_eq!(
            event.events,
            FunctionS3EventEvents::String("s3:ObjectCreated:*".to_string())
        ),
        other => panic!("unexpected event: {:?}", other),
    }
    match &events["Nightly"] {
        FunctionEventSource::Schedule(event) => assert_eq!(event.schedule, "rate(1 day)"),
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn unknown_event_types_fail_decoding() {
    let result = formation_core::parse_yaml(
        r#"
Resources:
  Fn:
    Type: AWS::Serverless::Function
    Properties:
      Events:
        Mystery:
          Type: Carrier Pigeon
          Properties: {}
"#,
    );
    assert!(matches!(
        result,
        Err(formation_core::Error::Resource { ref name, .. }) if name == "Fn"
    ));
}

#[test]
fn custom_resources_keep_raw_properties() {
    let template = sam();
    match &template.resources["Seeder"] {
        Resource::Custom(resource) => {
            assert_eq!(resource.type_name, "Custom::Seeder");
            assert_eq!(resource.properties, json!({"ServiceToken": null}));
        }
        other => panic!("unexpected resource: {:?}", other),
    }
}

#[test]
fn parameter_overrides_change_conditions() {
    let options = ParseOptions {
        processor: ProcessorOptions {
            parameter_overrides: [("Stage".to_string(), json!("prod"))].into_iter().collect(),
            ..Default::default()
        },
        ..Default::default()
    };
    let template = formation_core::open_with_options(fixture("sam.yaml"), &options).unwrap();

    let queue = template.get_sqs_queue_with_name("OrdersQueue").unwrap();
    assert_eq!(queue.queue_name.as_deref(), Some("orders-prod"));
    assert_eq!(queue.delay_seconds, Some(5));
}

#[test]
fn json_stack_resources() {
    let template = stack();

    let vpc = template.get_with_name::<ec2::Vpc>("Network").unwrap();
    assert_eq!(vpc.cidr_block.as_deref(), Some("10.0.0.0/16"));
    assert_eq!(vpc.enable_dns_hostnames, Some(true));
    let tags = vpc.tags.as_ref().unwrap();
    assert_eq!(tags[0].key, "Name");
    assert_eq!(tags[0].value, "staging-vpc");

    let subnet = template.get_with_name::<ec2::Subnet>("PrivateSubnet").unwrap();
    assert_eq!(subnet.availability_zone.as_deref(), Some("us-east-1a"));
    assert_eq!(subnet.vpc_id, "");

    let group = template
        .get_with_name::<ec2::SecurityGroup>("WorkerSecurityGroup")
        .unwrap();
    let egress = &group.security_group_egress.as_ref().unwrap()[0];
    assert_eq!(egress.from_port, Some(443));
    assert_eq!(egress.to_port, Some(443));

    let role = template.get_with_name::<iam::Role>("WorkerRole").unwrap();
    assert_eq!(
        role.managed_policy_arns.as_ref().unwrap()[0],
        "arn:aws:iam::aws:policy/service-role/AWSLambdaVPCAccessExecutionRole"
    );
    assert_eq!(
        role.assume_role_policy_document["Statement"][0]["Action"],
        "sts:AssumeRole"
    );
}

#[test]
fn json_stack_lambda_function() {
    let template = stack();
    let worker = template.get_with_name::<lambda::Function>("Worker").unwrap();

    assert_eq!(worker.code.s3_bucket.as_deref(), Some("artifacts"));
    assert_eq!(worker.memory_size, Some(256));
    assert_eq!(worker.role, "");
    assert_eq!(
        worker.resource_attributes.depends_on,
        vec!["WorkerRole", "PrivateSubnet"]
    );

    let vpc_config = worker.vpc_config.as_ref().unwrap();
    assert_eq!(vpc_config.security_group_ids, Some(vec![String::new()]));
    assert_eq!(vpc_config.subnet_ids, Some(vec![String::new()]));

    let table = template.get_with_name::<dynamodb::Table>("Jobs").unwrap();
    assert_eq!(table.key_schema[0].key_type, "HASH");
    assert_eq!(
        table.resource_attributes.deletion_policy,
        Some(DeletionPolicy::Snapshot)
    );
    assert_eq!(
        table.resource_attributes.update_replace_policy,
        Some(DeletionPolicy::Retain)
    );
}

#[test]
fn resources_of_type_matches_typed_lookup() {
    let template = stack();
    let names: Vec<&String> = template
        .resources_of_type("AWS::EC2::Subnet")
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["PrivateSubnet"]);
    assert_eq!(template.get_all::<ec2::Subnet>().len(), names.len());
}

#[test]
fn yaml_round_trip_preserves_the_template() {
    let template = sam();
    let yaml = template.to_yaml().unwrap();
    let reparsed = formation_core::parse_yaml(&yaml).unwrap();
    assert_eq!(reparsed, template);
}

#[test]
fn json_round_trip_preserves_the_template() {
    let template = stack();
    let json = template.to_json().unwrap();
    let reparsed = formation_core::parse_json(&json).unwrap();
    assert_eq!(reparsed, template);

    let value = template.to_json_value().unwrap();
    assert_eq!(value["Resources"]["Jobs"]["DeletionPolicy"], "Snapshot");
    assert_eq!(value["Resources"]["Worker"]["DependsOn"], json!(["WorkerRole", "PrivateSubnet"]));
    assert_eq!(value["Outputs"]["VpcCidr"]["Export"]["Name"], "formation-stack-cidr");
}

#[test]
fn edited_templates_serialize_the_edit() {
    let mut template = stack();
    template
        .get_with_name_mut::<lambda::Function>("Worker")
        .unwrap()
        .memory_size = Some(2048);
    template.remove_resource("Jobs");
    template.insert_resource(
        "Archive",
        s3::Bucket {
            bucket_name: Some("archive".to_string()),
            ..Default::default()
        },
    );

    let value = template.to_json_value().unwrap();
    assert_eq!(value["Resources"]["Worker"]["Properties"]["MemorySize"], 2048);
    assert!(value["Resources"].get("Jobs").is_none());
    assert_eq!(
        value["Resources"]["Archive"],
        json!({"Type": "AWS::S3::Bucket", "Properties": {"BucketName": "archive"}})
    );
}
