//! Template loading from JSON and YAML
//!
//! # Example
//!
//! ```
//! use formation_core::resources::serverless;
//!
//! let template = formation_core::parse_yaml(r#"
//! Transform: AWS::Serverless-2016-10-31
//! Resources:
//!   Api:
//!     Type: AWS::Serverless::Function
//!     Properties:
//!       Handler: index.handler
//!       Runtime: nodejs20.x
//!       CodeUri: ./src
//! "#).unwrap();
//!
//! let function = template.get_with_name::<serverless::Function>("Api").unwrap();
//! assert_eq!(function.handler.as_deref(), Some("index.handler"));
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::intrinsics::{self, ProcessorOptions, UnresolvedPolicy};
use crate::resource::RawResource;
use crate::resources::{self, Resource};
use crate::template::Template;
use crate::yaml;

/// Template loading options
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub processor: ProcessorOptions,

    /// Reject resource types that are not in the registry instead of
    /// keeping them as [`Resource::Unknown`]
    pub strict: bool,
}

/// Parses a JSON or YAML template, sniffing the format
pub fn parse(input: &str) -> Result<Template> {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Template> {
    if looks_like_json(input) {
        parse_json_with_options(input, options)
    } else {
        parse_yaml_with_options(input, options)
    }
}

pub fn parse_json(input: &str) -> Result<Template> {
    parse_json_with_options(input, &ParseOptions::default())
}

pub fn parse_json_with_options(input: &str, options: &ParseOptions) -> Result<Template> {
    let document: Value = serde_json::from_str(input)?;
    from_document(document, options)
}

pub fn parse_yaml(input: &str) -> Result<Template> {
    parse_yaml_with_options(input, &ParseOptions::default())
}

pub fn parse_yaml_with_options(input: &str, options: &ParseOptions) -> Result<Template> {
    let document = yaml::to_json(input)?;
    from_document(document, options)
}

/// Reads a template file; `.json`, `.yaml` and `.yml` pick the format,
/// anything else is sniffed
pub fn open(path: impl AsRef<Path>) -> Result<Template> {
    open_with_options(path, &ParseOptions::default())
}

pub fn open_with_options(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Template> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    debug!("loading template {}", path.display());

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json_with_options(&content, options),
        Some("yaml") | Some("yml") => parse_yaml_with_options(&content, options),
        _ => parse_with_options(&content, options),
    }
}

fn looks_like_json(input: &str) -> bool {
    input.trim_start().starts_with('{')
}

/// Processes intrinsics, then decodes each resource on its own so that a
/// failure names the offending logical resource
pub fn from_document(mut document: Value, options: &ParseOptions) -> Result<Template> {
    if !document.is_object() {
        return Err(Error::invalid_template("document is not a mapping"));
    }

    intrinsics::process(&mut document, &options.processor);

    let raw_resources = match document
        .as_object_mut()
        .and_then(|root| root.remove("Resources"))
    {
        None | Some(Value::Null) => serde_json::Map::new(),
        Some(Value::Object(map)) => map,
        Some(_) => return Err(Error::invalid_template("Resources is not a mapping")),
    };

    let mut template: Template = serde_json::from_value(document)?;
    template.resources = decode_resources(raw_resources, options)?;
    Ok(template)
}

fn decode_resources(
    raw_resources: serde_json::Map<String, Value>,
    options: &ParseOptions,
) -> Result<BTreeMap<String, Resource>> {
    let mut resources = BTreeMap::new();

    for (name, raw) in raw_resources {
        let type_name = raw
            .get("Type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let resource_error = |source| Error::Resource {
            name: name.clone(),
            type_name: type_name.clone(),
            source,
        };

        let raw: RawResource = serde_json::from_value(raw).map_err(resource_error)?;

        if !resources::is_registered(&raw.type_name)
            && !crate::resource::is_custom_type(&raw.type_name)
        {
            if options.strict {
                return Err(Error::UnknownResourceType {
                    name,
                    type_name: raw.type_name,
                });
            }
            warn!(
                "resource {} has unknown type {}; keeping it untyped",
                name, raw.type_name
            );
        }

        let encoded_properties = (options.processor.unresolved == UnresolvedPolicy::Encode)
            .then(|| raw.properties.clone());

        let resource = raw.decode().map_err(resource_error)?;

        if let Some(before) = encoded_properties
            && let Ok(after) = resource.properties()
        {
            for path in dropped_intrinsics(&before, &after) {
                warn!(
                    "resource {}: dropped unresolved intrinsic in non-string property {}",
                    name, path
                );
            }
        }

        resources.insert(name, resource);
    }

    Ok(resources)
}

/// Paths of encoded intrinsics in `before` that did not survive into `after`
fn dropped_intrinsics(before: &Value, after: &Value) -> Vec<String> {
    let mut dropped = Vec::new();
    collect_dropped(before, Some(after), "", &mut dropped);
    dropped
}

fn collect_dropped(
    before: &Value,
    after: Option<&Value>,
    path: &str,
    dropped: &mut Vec<String>,
) {
    match before {
        Value::String(s) if intrinsics::is_encoded(s) => {
            if after != Some(before) {
                dropped.push(path.to_string());
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let child = format!("{}[{}]", path, index);
                collect_dropped(item, after.and_then(|a| a.get(index)), &child, dropped);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                collect_dropped(item, after.and_then(|a| a.get(key)), &child, dropped);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{lambda, s3};
    use std::io::Write;

    const JSON_TEMPLATE: &str = r#"{
        "AWSTemplateFormatVersion": "2010-09-09",
        "Parameters": {"Env": {"Type": "String", "Default": "dev"}},
        "Resources": {
            "Bucket": {
                "Type": "AWS::S3::Bucket",
                "Properties": {"BucketName": {"Fn::Sub": "data-${Env}"}}
            },
            "Thing": {"Type": "AWS::Made::Up", "Properties": {"X": 1}}
        },
        "Outputs": {"Name": {"Value": {"Ref": "Bucket"}}}
    }"#;

    #[test]
    fn parses_json_and_processes_intrinsics() {
        let template = parse(JSON_TEMPLATE).unwrap();
        assert_eq!(template.aws_template_format_version.as_deref(), Some("2010-09-09"));
        let bucket = template.get_with_name::<s3::Bucket>("Bucket").unwrap();
        assert_eq!(bucket.bucket_name.as_deref(), Some("data-dev"));
        assert!(matches!(template.resources["Thing"], Resource::Unknown(_)));
        assert_eq!(template.outputs["Name"].value, Value::Null);
    }

    #[test]
    fn strict_rejects_unknown_types() {
        let options = ParseOptions {
            strict: true,
            ..Default::default()
        };
        let err = parse_with_options(JSON_TEMPLATE, &options).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownResourceType { ref name, ref type_name }
                if name == "Thing" && type_name == "AWS::Made::Up"
        ));
    }

    #[test]
    fn strict_allows_custom_resources() {
        let options = ParseOptions {
            strict: true,
            ..Default::default()
        };
        let template = parse_with_options(
            r#"{"Resources": {"Seed": {"Type": "Custom::Seed", "Properties": {"ServiceToken": "arn"}}}}"#,
            &options,
        )
        .unwrap();
        assert!(matches!(template.resources["Seed"], Resource::Custom(_)));
    }

    #[test]
    fn decode_errors_name_the_resource() {
        let err = parse_yaml(
            "Resources:\n  Fn:\n    Type: AWS::Lambda::Function\n    Properties:\n      MemorySize: lots\n",
        )
        .unwrap_err();
        match err {
            Error::Resource {
                name, type_name, ..
            } => {
                assert_eq!(name, "Fn");
                assert_eq!(type_name, "AWS::Lambda::Function");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn missing_required_property_is_an_error() {
        let result = parse_yaml(
            "Resources:\n  Fn:\n    Type: AWS::Lambda::Function\n    Properties:\n      Handler: index.handler\n",
        );
        assert!(matches!(result, Err(Error::Resource { .. })));
    }

    #[test]
    fn unresolved_required_string_reads_as_empty() {
        let template = parse_yaml(
            r#"
Resources:
  Fn:
    Type: AWS::Lambda::Function
    Properties:
      Code:
        ZipFile: "exports.handler = async () => {}"
      Role: !GetAtt Role.Arn
"#,
        )
        .unwrap();
        let function = template.get_with_name::<lambda::Function>("Fn").unwrap();
        assert_eq!(function.role, "");
    }

    #[test]
    fn encode_policy_round_trips_intrinsics() {
        let options = ParseOptions {
            processor: ProcessorOptions {
                unresolved: UnresolvedPolicy::Encode,
                ..Default::default()
            },
            ..Default::default()
        };
        let template = parse_with_options(
            r#"
Resources:
  Fn:
    Type: AWS::Lambda::Function
    Properties:
      Code:
        ZipFile: "x"
      Role: !GetAtt Role.Arn
      MemorySize: !Ref MemoryParam
"#,
            &options,
        )
        .unwrap();

        let function = template.get_with_name::<lambda::Function>("Fn").unwrap();
        assert!(intrinsics::is_encoded(&function.role));
        assert_eq!(function.memory_size, None);

        let json = template.to_json_value().unwrap();
        assert_eq!(
            json["Resources"]["Fn"]["Properties"]["Role"],
            serde_json::json!({"Fn::GetAtt": ["Role", "Arn"]})
        );
    }

    #[test]
    fn encode_policy_drops_intrinsics_in_non_string_properties() {
        let options = ParseOptions {
            processor: ProcessorOptions {
                unresolved: UnresolvedPolicy::Encode,
                ..Default::default()
            },
            ..Default::default()
        };
        let template = parse_with_options(
            r#"
Resources:
  Fn:
    Type: AWS::Lambda::Function
    Properties:
      Code:
        ZipFile: "x"
      Role: !GetAtt R.Arn
      MemorySize: !Ref Mem
      Timeout: !GetAtt Cfg.Timeout
      Environment:
        Variables:
          BUCKET: !Ref Bucket
"#,
            &options,
        )
        .unwrap();

        let function = template.get_with_name::<lambda::Function>("Fn").unwrap();
        assert_eq!(function.memory_size, None);
        assert_eq!(function.timeout, None);

        let json = template.to_json_value().unwrap();
        let properties = &json["Resources"]["Fn"]["Properties"];
        assert_eq!(properties["Role"], serde_json::json!({"Fn::GetAtt": ["R", "Arn"]}));
        assert_eq!(
            properties["Environment"]["Variables"]["BUCKET"],
            serde_json::json!({"Ref": "Bucket"})
        );
        assert!(properties.get("MemorySize").is_none());
        assert!(properties.get("Timeout").is_none());
    }

    #[test]
    fn dropped_intrinsics_are_reported_by_path() {
        let role = intrinsics::build::get_att("R", "Arn");
        let memory = intrinsics::build::reference("Mem");
        let subnet = intrinsics::build::reference("Subnet");

        let before = serde_json::json!({
            "Role": role.clone(),
            "MemorySize": memory,
            "VpcConfig": {"SubnetIds": ["subnet-1", subnet]},
            "Handler": "index.handler"
        });
        let after = serde_json::json!({
            "Role": role,
            "VpcConfig": {"SubnetIds": ["subnet-1", ""]},
            "Handler": "index.handler"
        });

        assert_eq!(
            dropped_intrinsics(&before, &after),
            vec!["MemorySize".to_string(), "VpcConfig.SubnetIds[1]".to_string()]
        );
        assert!(dropped_intrinsics(&before, &before).is_empty());
    }

    #[test]
    fn rejects_non_template_documents() {
        assert!(matches!(parse("[1, 2]"), Err(Error::InvalidTemplate(_))));
        assert!(matches!(
            parse_yaml("Resources: [a]"),
            Err(Error::InvalidTemplate(_))
        ));
        assert!(matches!(parse_json("{not json"), Err(Error::Json(_))));
    }

    #[test]
    fn empty_resources_section() {
        let template = parse_yaml("Description: nothing here\n").unwrap();
        assert!(template.resources.is_empty());
        assert_eq!(template.description.as_deref(), Some("nothing here"));
    }

    #[test]
    fn open_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("template.yml");
        let mut file = fs::File::create(&yaml_path).unwrap();
        writeln!(file, "Resources:\n  B:\n    Type: AWS::S3::Bucket").unwrap();
        let template = open(&yaml_path).unwrap();
        assert!(template.get_with_name::<s3::Bucket>("B").is_ok());

        let json_path = dir.path().join("template.template");
        fs::write(&json_path, JSON_TEMPLATE).unwrap();
        let template = open(&json_path).unwrap();
        assert_eq!(template.resources.len(), 2);

        assert!(matches!(
            open(dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
    }
}
