//! Resource registry and named accessors
//!
//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen

use std::collections::BTreeMap;

use super::{
    apigateway, ask, cloudformation, cloudwatch, dynamodb, ec2, ecr, events, iam, kinesis, kms,
    lambda, logs, s3, secretsmanager, serverless, sns, sqs, ssm, stepfunctions,
};
use crate::error::Result;
use crate::resource::resource_registry;
use crate::template::Template;

resource_registry! {
    ApiGatewayRestApi("AWS::ApiGateway::RestApi", "apigateway.RestApi") => apigateway::RestApi,
    ApiGatewayStage("AWS::ApiGateway::Stage", "apigateway.Stage") => apigateway::Stage,
    CloudFormationStack("AWS::CloudFormation::Stack", "cloudformation.Stack") => cloudformation::Stack,
    CloudWatchAlarm("AWS::CloudWatch::Alarm", "cloudwatch.Alarm") => cloudwatch::Alarm,
    DynamoDbTable("AWS::DynamoDB::Table", "dynamodb.Table") => dynamodb::Table,
    Ec2Instance("AWS::EC2::Instance", "ec2.Instance") => ec2::Instance,
    Ec2InternetGateway("AWS::EC2::InternetGateway", "ec2.InternetGateway") => ec2::InternetGateway,
    Ec2SecurityGroup("AWS::EC2::SecurityGroup", "ec2.SecurityGroup") => ec2::SecurityGroup,
    Ec2Subnet("AWS::EC2::Subnet", "ec2.Subnet") => ec2::Subnet,
    Ec2Vpc("AWS::EC2::VPC", "ec2.Vpc") => ec2::Vpc,
    EcrRepository("AWS::ECR::Repository", "ecr.Repository") => ecr::Repository,
    EventsRule("AWS::Events::Rule", "events.Rule") => events::Rule,
    IamPolicy("AWS::IAM::Policy", "iam.Policy") => iam::Policy,
    IamRole("AWS::IAM::Role", "iam.Role") => iam::Role,
    KmsKey("AWS::KMS::Key", "kms.Key") => kms::Key,
    KinesisStream("AWS::Kinesis::Stream", "kinesis.Stream") => kinesis::Stream,
    LambdaEventSourceMapping("AWS::Lambda::EventSourceMapping", "lambda.EventSourceMapping") => lambda::EventSourceMapping,
    LambdaFunction("AWS::Lambda::Function", "lambda.Function") => lambda::Function,
    LambdaPermission("AWS::Lambda::Permission", "lambda.Permission") => lambda::Permission,
    LogsLogGroup("AWS::Logs::LogGroup", "logs.LogGroup") => logs::LogGroup,
    S3Bucket("AWS::S3::Bucket", "s3.Bucket") => s3::Bucket,
    S3BucketPolicy("AWS::S3::BucketPolicy", "s3.BucketPolicy") => s3::BucketPolicy,
    SnsSubscription("AWS::SNS::Subscription", "sns.Subscription") => sns::Subscription,
    SnsTopic("AWS::SNS::Topic", "sns.Topic") => sns::Topic,
    SqsQueue("AWS::SQS::Queue", "sqs.Queue") => sqs::Queue,
    SqsQueuePolicy("AWS::SQS::QueuePolicy", "sqs.QueuePolicy") => sqs::QueuePolicy,
    SsmParameter("AWS::SSM::Parameter", "ssm.Parameter") => ssm::Parameter,
    SecretsManagerSecret("AWS::SecretsManager::Secret", "secretsmanager.Secret") => secretsmanager::Secret,
    ServerlessApi("AWS::Serverless::Api", "serverless.Api") => serverless::Api,
    ServerlessApplication("AWS::Serverless::Application", "serverless.Application") => serverless::Application,
    ServerlessFunction("AWS::Serverless::Function", "serverless.Function") => serverless::Function,
    ServerlessHttpApi("AWS::Serverless::HttpApi", "serverless.HttpApi") => serverless::HttpApi,
    ServerlessLayerVersion("AWS::Serverless::LayerVersion", "serverless.LayerVersion") => serverless::LayerVersion,
    ServerlessSimpleTable("AWS::Serverless::SimpleTable", "serverless.SimpleTable") => serverless::SimpleTable,
    ServerlessStateMachine("AWS::Serverless::StateMachine", "serverless.StateMachine") => serverless::StateMachine,
    StepFunctionsStateMachine("AWS::StepFunctions::StateMachine", "stepfunctions.StateMachine") => stepfunctions::StateMachine,
    AskSkill("Alexa::ASK::Skill", "ask.Skill") => ask::Skill,
}

impl Template {
    /// Every `AWS::ApiGateway::RestApi` resource, keyed by logical name
    pub fn get_all_apigateway_rest_api_resources(&self) -> BTreeMap<&str, &apigateway::RestApi> {
        self.get_all()
    }

    /// The `AWS::ApiGateway::RestApi` resource named `name`
    pub fn get_apigateway_rest_api_with_name(&self, name: &str) -> Result<&apigateway::RestApi> {
        self.get_with_name(name)
    }

    /// Every `AWS::ApiGateway::Stage` resource, keyed by logical name
    pub fn get_all_apigateway_stage_resources(&self) -> BTreeMap<&str, &apigateway::Stage> {
        self.get_all()
    }

    /// The `AWS::ApiGateway::Stage` resource named `name`
    pub fn get_apigateway_stage_with_name(&self, name: &str) -> Result<&apigateway::Stage> {
        self.get_with_name(name)
    }

    /// Every `AWS::CloudFormation::Stack` resource, keyed by logical name
    pub fn get_all_cloudformation_stack_resources(&self) -> BTreeMap<&str, &cloudformation::Stack> {
        self.get_all()
    }

    /// The `AWS::CloudFormation::Stack` resource named `name`
    pub fn get_cloudformation_stack_with_name(&self, name: &str) -> Result<&cloudformation::Stack> {
        self.get_with_name(name)
    }

    /// Every `AWS::CloudWatch::Alarm` resource, keyed by logical name
    pub fn get_all_cloudwatch_alarm_resources(&self) -> BTreeMap<&str, &cloudwatch::Alarm> {
        self.get_all()
    }

    /// The `AWS::CloudWatch::Alarm` resource named `name`
    pub fn get_cloudwatch_alarm_with_name(&self, name: &str) -> Result<&cloudwatch::Alarm> {
        self.get_with_name(name)
    }

    /// Every `AWS::DynamoDB::Table` resource, keyed by logical name
    pub fn get_all_dynamodb_table_resources(&self) -> BTreeMap<&str, &dynamodb::Table> {
        self.get_all()
    }

    /// The `AWS::DynamoDB::Table` resource named `name`
    pub fn get_dynamodb_table_with_name(&self, name: &str) -> Result<&dynamodb::Table> {
        self.get_with_name(name)
    }

    /// Every `AWS::EC2::Instance` resource, keyed by logical name
    pub fn get_all_ec2_instance_resources(&self) -> BTreeMap<&str, &ec2::Instance> {
        self.get_all()
    }

    /// The `AWS::EC2::Instance` resource named `name`
    pub fn get_ec2_instance_with_name(&self, name: &str) -> Result<&ec2::Instance> {
        self.get_with_name(name)
    }

    /// Every `AWS::EC2::InternetGateway` resource, keyed by logical name
    pub fn get_all_ec2_internet_gateway_resources(&self) -> BTreeMap<&str, &ec2::InternetGateway> {
        self.get_all()
    }

    /// The `AWS::EC2::InternetGateway` resource named `name`
    pub fn get_ec2_internet_gateway_with_name(&self, name: &str) -> Result<&ec2::InternetGateway> {
        self.get_with_name(name)
    }

    /// Every `AWS::EC2::SecurityGroup` resource, keyed by logical name
    pub fn get_all_ec2_security_group_resources(&self) -> BTreeMap<&str, &ec2::SecurityGroup> {
        self.get_all()
    }

    /// The `AWS::EC2::SecurityGroup` resource named `name`
    pub fn get_ec2_security_group_with_name(&self, name: &str) -> Result<&ec2::SecurityGroup> {
        self.get_with_name(name)
    }

    /// Every `AWS::EC2::Subnet` resource, keyed by logical name
    pub fn get_all_ec2_subnet_resources(&self) -> BTreeMap<&str, &ec2::Subnet> {
        self.get_all()
    }

    /// The `AWS::EC2::Subnet` resource named `name`
    pub fn get_ec2_subnet_with_name(&self, name: &str) -> Result<&ec2::Subnet> {
        self.get_with_name(name)
    }

    /// Every `AWS::EC2::VPC` resource, keyed by logical name
    pub fn get_all_ec2_vpc_resources(&self) -> BTreeMap<&str, &ec2::Vpc> {
        self.get_all()
    }

    /// The `AWS::EC2::VPC` resource named `name`
    pub fn get_ec2_vpc_with_name(&self, name: &str) -> Result<&ec2::Vpc> {
        self.get_with_name(name)
    }

    /// Every `AWS::ECR::Repository` resource, keyed by logical name
    pub fn get_all_ecr_repository_resources(&self) -> BTreeMap<&str, &ecr::Repository> {
        self.get_all()
    }

    /// The `AWS::ECR::Repository` resource named `name`
    pub fn get_ecr_repository_with_name(&self, name: &str) -> Result<&ecr::Repository> {
        self.get_with_name(name)
    }

    /// Every `AWS::Events::Rule` resource, keyed by logical name
    pub fn get_all_events_rule_resources(&self) -> BTreeMap<&str, &events::Rule> {
        self.get_all()
    }

    /// The `AWS::Events::Rule` resource named `name`
    pub fn get_events_rule_with_name(&self, name: &str) -> Result<&events::Rule> {
        self.get_with_name(name)
    }

    /// Every `AWS::IAM::Policy` resource, keyed by logical name
    pub fn get_all_iam_policy_resources(&self) -> BTreeMap<&str, &iam::Policy> {
        self.get_all()
    }

    /// The `AWS::IAM::Policy` resource named `name`
    pub fn get_iam_policy_with_name(&self, name: &str) -> Result<&iam::Policy> {
        self.get_with_name(name)
    }

    /// Every `AWS::IAM::Role` resource, keyed by logical name
    pub fn get_all_iam_role_resources(&self) -> BTreeMap<&str, &iam::Role> {
        self.get_all()
    }

    /// The `AWS::IAM::Role` resource named `name`
    pub fn get_iam_role_with_name(&self, name: &str) -> Result<&iam::Role> {
        self.get_with_name(name)
    }

    /// Every `AWS::KMS::Key` resource, keyed by logical name
    pub fn get_all_kms_key_resources(&self) -> BTreeMap<&str, &kms::Key> {
        self.get_all()
    }

    /// The `AWS::KMS::Key` resource named `name`
    pub fn get_kms_key_with_name(&self, name: &str) -> Result<&kms::Key> {
        self.get_with_name(name)
    }

    /// Every `AWS::Kinesis::Stream` resource, keyed by logical name
    pub fn get_all_kinesis_stream_resources(&self) -> BTreeMap<&str, &kinesis::Stream> {
        self.get_all()
    }

    /// The `AWS::Kinesis::Stream` resource named `name`
    pub fn get_kinesis_stream_with_name(&self, name: &str) -> Result<&kinesis::Stream> {
        self.get_with_name(name)
    }

    /// Every `AWS::Lambda::EventSourceMapping` resource, keyed by logical name
    pub fn get_all_lambda_event_source_mapping_resources(
        &self,
    ) -> BTreeMap<&str, &lambda::EventSourceMapping> {
        self.get_all()
    }

    /// The `AWS::Lambda::EventSourceMapping` resource named `name`
    pub fn get_lambda_event_source_mapping_with_name(
        &self,
        name: &str,
    ) -> Result<&lambda::EventSourceMapping> {
        self.get_with_name(name)
    }

    /// Every `AWS::Lambda::Function` resource, keyed by logical name
    pub fn get_all_lambda_function_resources(&self) -> BTreeMap<&str, &lambda::Function> {
        self.get_all()
    }

    /// The `AWS::Lambda::Function` resource named `name`
    pub fn get_lambda_function_with_name(&self, name: &str) -> Result<&lambda::Function> {
        self.get_with_name(name)
    }

    /// Every `AWS::Lambda::Permission` resource, keyed by logical name
    pub fn get_all_lambda_permission_resources(&self) -> BTreeMap<&str, &lambda::Permission> {
        self.get_all()
    }

    /// The `AWS::Lambda::Permission` resource named `name`
    pub fn get_lambda_permission_with_name(&self, name: &str) -> Result<&lambda::Permission> {
        self.get_with_name(name)
    }

    /// Every `AWS::Logs::LogGroup` resource, keyed by logical name
    pub fn get_all_logs_log_group_resources(&self) -> BTreeMap<&str, &logs::LogGroup> {
        self.get_all()
    }

    /// The `AWS::Logs::LogGroup` resource named `name`
    pub fn get_logs_log_group_with_name(&self, name: &str) -> Result<&logs::LogGroup> {
        self.get_with_name(name)
    }

    /// Every `AWS::S3::Bucket` resource, keyed by logical name
    pub fn get_all_s3_bucket_resources(&self) -> BTreeMap<&str, &s3::Bucket> {
        self.get_all()
    }

    /// The `AWS::S3::Bucket` resource named `name`
    pub fn get_s3_bucket_with_name(&self, name: &str) -> Result<&s3::Bucket> {
        self.get_with_name(name)
    }

    /// Every `AWS::S3::BucketPolicy` resource, keyed by logical name
    pub fn get_all_s3_bucket_policy_resources(&self) -> BTreeMap<&str, &s3::BucketPolicy> {
        self.get_all()
    }

    /// The `AWS::S3::BucketPolicy` resource named `name`
    pub fn get_s3_bucket_policy_with_name(&self, name: &str) -> Result<&s3::BucketPolicy> {
        self.get_with_name(name)
    }

    /// Every `AWS::SNS::Subscription` resource, keyed by logical name
    pub fn get_all_sns_subscription_resources(&self) -> BTreeMap<&str, &sns::Subscription> {
        self.get_all()
    }

    /// The `AWS::SNS::Subscription` resource named `name`
    pub fn get_sns_subscription_with_name(&self, name: &str) -> Result<&sns::Subscription> {
        self.get_with_name(name)
    }

    /// Every `AWS::SNS::Topic` resource, keyed by logical name
    pub fn get_all_sns_topic_resources(&self) -> BTreeMap<&str, &sns::Topic> {
        self.get_all()
    }

    /// The `AWS::SNS::Topic` resource named `name`
    pub fn get_sns_topic_with_name(&self, name: &str) -> Result<&sns::Topic> {
        self.get_with_name(name)
    }

    /// Every `AWS::SQS::Queue` resource, keyed by logical name
    pub fn get_all_sqs_queue_resources(&self) -> BTreeMap<&str, &sqs::Queue> {
        self.get_all()
    }

    /// The `AWS::SQS::Queue` resource named `name`
    pub fn get_sqs_queue_with_name(&self, name: &str) -> Result<&sqs::Queue> {
        self.get_with_name(name)
    }

    /// Every `AWS::SQS::QueuePolicy` resource, keyed by logical name
    pub fn get_all_sqs_queue_policy_resources(&self) -> BTreeMap<&str, &sqs::QueuePolicy> {
        self.get_all()
    }

    /// The `AWS::SQS::QueuePolicy` resource named `name`
    pub fn get_sqs_queue_policy_with_name(&self, name: &str) -> Result<&sqs::QueuePolicy> {
        self.get_with_name(name)
    }

    /// Every `AWS::SSM::Parameter` resource, keyed by logical name
    pub fn get_all_ssm_parameter_resources(&self) -> BTreeMap<&str, &ssm::Parameter> {
        self.get_all()
    }

    /// The `AWS::SSM::Parameter` resource named `name`
    pub fn get_ssm_parameter_with_name(&self, name: &str) -> Result<&ssm::Parameter> {
        self.get_with_name(name)
    }

    /// Every `AWS::SecretsManager::Secret` resource, keyed by logical name
    pub fn get_all_secretsmanager_secret_resources(
        &self,
    ) -> BTreeMap<&str, &secretsmanager::Secret> {
        self.get_all()
    }

    /// The `AWS::SecretsManager::Secret` resource named `name`
    pub fn get_secretsmanager_secret_with_name(
        &self,
        name: &str,
    ) -> Result<&secretsmanager::Secret> {
        self.get_with_name(name)
    }

    /// Every `AWS::Serverless::Api` resource, keyed by logical name
    pub fn get_all_serverless_api_resources(&self) -> BTreeMap<&str, &serverless::Api> {
        self.get_all()
    }

    /// The `AWS::Serverless::Api` resource named `name`
    pub fn get_serverless_api_with_name(&self, name: &str) -> Result<&serverless::Api> {
        self.get_with_name(name)
    }

    /// Every `AWS::Serverless::Application` resource, keyed by logical name
    pub fn get_all_serverless_application_resources(
        &self,
    ) -> BTreeMap<&str, &serverless::Application> {
        self.get_all()
    }

    /// The `AWS::Serverless::Application` resource named `name`
    pub fn get_serverless_application_with_name(
        &self,
        name: &str,
    ) -> Result<&serverless::Application> {
        self.get_with_name(name)
    }

    /// Every `AWS::Serverless::Function` resource, keyed by logical name
    pub fn get_all_serverless_function_resources(&self) -> BTreeMap<&str, &serverless::Function> {
        self.get_all()
    }

    /// The `AWS::Serverless::Function` resource named `name`
    pub fn get_serverless_function_with_name(&self, name: &str) -> Result<&serverless::Function> {
        self.get_with_name(name)
    }

    /// Every `AWS::Serverless::HttpApi` resource, keyed by logical name
    pub fn get_all_serverless_http_api_resources(&self) -> BTreeMap<&str, &serverless::HttpApi> {
        self.get_all()
    }

    /// The `AWS::Serverless::HttpApi` resource named `name`
    pub fn get_serverless_http_api_with_name(&self, name: &str) -> Result<&serverless::HttpApi> {
        self.get_with_name(name)
    }

    /// Every `AWS::Serverless::LayerVersion` resource, keyed by logical name
    pub fn get_all_serverless_layer_version_resources(
        &self,
    ) -> BTreeMap<&str, &serverless::LayerVersion> {
        self.get_all()
    }

    /// The `AWS::Serverless::LayerVersion` resource named `name`
    pub fn get_serverless_layer_version_with_name(
        &self,
        name: &str,
    ) -> Result<&serverless::LayerVersion> {
        self.get_with_name(name)
    }

    /// Every `AWS::Serverless::SimpleTable` resource, keyed by logical name
    pub fn get_all_serverless_simple_table_resources(
        &self,
    ) -> BTreeMap<&str, &serverless::SimpleTable> {
        self.get_all()
    }

    /// The `AWS::Serverless::SimpleTable` resource named `name`
    pub fn get_serverless_simple_table_with_name(
        &self,
        name: &str,
    ) -> Result<&serverless::SimpleTable> {
        self.get_with_name(name)
    }

    /// Every `AWS::Serverless::StateMachine` resource, keyed by logical name
    pub fn get_all_serverless_state_machine_resources(
        &self,
    ) -> BTreeMap<&str, &serverless::StateMachine> {
        self.get_all()
    }

    /// The `AWS::Serverless::StateMachine` resource named `name`
    pub fn get_serverless_state_machine_with_name(
        &self,
        name: &str,
    ) -> Result<&serverless::StateMachine> {
        self.get_with_name(name)
    }

    /// Every `AWS::StepFunctions::StateMachine` resource, keyed by logical name
    pub fn get_all_stepfunctions_state_machine_resources(
        &self,
    ) -> BTreeMap<&str, &stepfunctions::StateMachine> {
        self.get_all()
    }

    /// The `AWS::StepFunctions::StateMachine` resource named `name`
    pub fn get_stepfunctions_state_machine_with_name(
        &self,
        name: &str,
    ) -> Result<&stepfunctions::StateMachine> {
        self.get_with_name(name)
    }

    /// Every `Alexa::ASK::Skill` resource, keyed by logical name
    pub fn get_all_ask_skill_resources(&self) -> BTreeMap<&str, &ask::Skill> {
        self.get_all()
    }

    /// The `Alexa::ASK::Skill` resource named `name`
    pub fn get_ask_skill_with_name(&self, name: &str) -> Result<&ask::Skill> {
        self.get_with_name(name)
    }
}
