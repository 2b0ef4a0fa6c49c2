//! Rust source emission
//!
//! One module per service (`AWS::S3` -> `s3.rs`), `mod.rs`, and
//! `registry.rs` holding the `resource_registry!` invocation and the named
//! per-type accessors on `Template`. Everything is emitted in sorted order so
//! that regenerating from the same specification is a no-op.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, bail};
use heck::{ToSnakeCase, ToUpperCamelCase};

use crate::spec::{Property, PropertyType, Specification};

const GENERATED_NOTE: &str = "//! Auto-generated from the CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with formation-codegen
";

/// rustfmt's default `max_width`
const MAX_WIDTH: usize = 100;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// A generated source file, relative to the output directory
#[derive(Debug, PartialEq)]
pub struct GeneratedFile {
    pub path: String,
    pub contents: String,
}

/// Names derived from a resource type name
#[derive(Debug, Clone, PartialEq)]
struct ResourceNames {
    /// `AWS::EC2::VPC`
    type_name: String,
    /// `AWS::EC2`
    namespace: String,
    /// `ec2`
    module: String,
    /// `Vpc`
    struct_name: String,
    /// `Ec2Vpc`
    variant: String,
    /// `ec2_vpc`, as in `get_ec2_vpc_with_name`
    stem: String,
}

impl ResourceNames {
    fn new(type_name: &str) -> Result<Self> {
        let parts: Vec<&str> = type_name.split("::").collect();
        if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
            bail!("Invalid type name format: {}", type_name);
        }

        let module = parts[1].to_lowercase();
        let struct_name = parts[2].to_upper_camel_case();
        Ok(Self {
            type_name: type_name.to_string(),
            namespace: format!("{}::{}", parts[0], parts[1]),
            variant: format!("{}{}", parts[1].to_upper_camel_case(), struct_name),
            stem: format!("{}_{}", module, parts[2].to_snake_case()),
            module,
            struct_name,
        })
    }

    fn property_type_prefix(&self) -> String {
        format!("{}.", self.type_name)
    }

    fn property_struct_name(&self, property_type: &str) -> String {
        format!("{}{}", self.struct_name, property_type.to_upper_camel_case())
    }

    fn display_name(&self) -> String {
        format!("{}.{}", self.module, self.struct_name)
    }
}

fn field_name(property: &str) -> String {
    let name = property.to_snake_case();
    if KEYWORDS.contains(&name.as_str()) {
        format!("{}_", name)
    } else {
        name
    }
}

/// Rust type of a primitive, and the `crate::lenient` deserializer stem for
/// scalars
fn primitive(name: &str) -> Result<(&'static str, Option<&'static str>)> {
    Ok(match name {
        "String" | "Timestamp" => ("String", Some("string")),
        "Integer" | "Long" => ("i64", Some("integer")),
        "Double" => ("f64", Some("double")),
        "Boolean" => ("bool", Some("boolean")),
        "Json" => ("serde_json::Value", None),
        other => bail!("Unsupported primitive type: {}", other),
    })
}

/// `#[serde(...)]` on one line when it fits, rustfmt's vertical layout
/// otherwise
fn serde_attribute(args: &[String]) -> String {
    let single = format!("    #[serde({})]", args.join(", "));
    if single.len() <= MAX_WIDTH {
        return single;
    }
    let lines: Vec<String> = args.iter().map(|arg| format!("        {}", arg)).collect();
    format!("    #[serde(\n{}\n    )]", lines.join(",\n"))
}

fn doc_comment(heading: &str, documentation: Option<&str>) -> String {
    match documentation {
        Some(url) => format!("/// {}\n///\n/// <{}>\n", heading, url),
        None => format!("/// {}\n", heading),
    }
}

/// The SAM event source shape: a `Type` string selecting which of the
/// `Properties` types applies
fn event_source_types(property_type: &PropertyType) -> Option<&[String]> {
    let properties = &property_type.properties;
    if properties.len() != 2 {
        return None;
    }
    let tag = properties.get("Type")?;
    let content = properties.get("Properties")?;

    let is_event_source = tag.primitive_type.as_deref() == Some("String")
        && !content.types.is_empty()
        && content.primitive_types.is_empty()
        && content.primitive_item_types.is_empty()
        && content.item_types.is_empty();
    is_event_source.then_some(content.types.as_slice())
}

/// `S3Event` is tagged `S3`, `CloudWatchEventEvent` is tagged `CloudWatchEvent`
fn event_tag(type_name: &str) -> &str {
    match type_name.strip_suffix("Event") {
        Some(tag) if !tag.is_empty() => tag,
        _ => type_name,
    }
}

struct FieldType {
    rust: String,
    /// `crate::lenient` deserializer stem
    lenient: Option<&'static str>,
}

/// Renders the items of one service module
struct ModuleWriter<'a> {
    spec: &'a Specification,
    /// Type names declared in the module
    taken: BTreeSet<String>,
    items: Vec<String>,
    uses_map: bool,
    uses_tag: bool,
}

impl<'a> ModuleWriter<'a> {
    fn new(spec: &'a Specification, resources: &[ResourceNames]) -> Self {
        let mut taken = BTreeSet::new();
        for resource in resources {
            taken.insert(resource.struct_name.clone());
            let prefix = resource.property_type_prefix();
            for key in spec.property_types.keys() {
                if let Some(name) = key.strip_prefix(&prefix) {
                    taken.insert(resource.property_struct_name(name));
                }
            }
        }

        Self {
            spec,
            taken,
            items: Vec::new(),
            uses_map: false,
            uses_tag: false,
        }
    }

    /// Property types are scoped to their resource; `Tag` is shared
    fn named_type(&mut self, owner: &ResourceNames, name: &str) -> Result<String> {
        let key = format!("{}{}", owner.property_type_prefix(), name);
        if self.spec.property_types.contains_key(&key) {
            Ok(owner.property_struct_name(name))
        } else if name == "Tag" {
            self.uses_tag = true;
            Ok("Tag".to_string())
        } else {
            bail!(
                "Unknown property type {} referenced from {}",
                name,
                owner.type_name
            )
        }
    }

    fn item_type(&mut self, owner: &ResourceNames, property: &Property) -> Result<String> {
        if let Some(item) = &property.primitive_item_type {
            return Ok(primitive(item)?.0.to_string());
        }
        match &property.item_type {
            Some(item) => self.named_type(owner, item),
            None => bail!("Collection property in {} has no item type", owner.type_name),
        }
    }

    fn field_type(&mut self, owner: &ResourceNames, property: &Property) -> Result<FieldType> {
        if let Some(name) = &property.primitive_type {
            let (rust, lenient) = primitive(name)?;
            return Ok(FieldType {
                rust: rust.to_string(),
                lenient,
            });
        }

        let string_items = property.primitive_item_type.as_deref() == Some("String");
        match property.type_name.as_deref() {
            Some("List") if string_items => Ok(FieldType {
                rust: "Vec<String>".to_string(),
                lenient: Some("string_list"),
            }),
            Some("List") => Ok(FieldType {
                rust: format!("Vec<{}>", self.item_type(owner, property)?),
                lenient: None,
            }),
            Some("Map") => {
                self.uses_map = true;
                if string_items {
                    Ok(FieldType {
                        rust: "BTreeMap<String, String>".to_string(),
                        lenient: Some("string_map"),
                    })
                } else {
                    Ok(FieldType {
                        rust: format!("BTreeMap<String, {}>", self.item_type(owner, property)?),
                        lenient: None,
                    })
                }
            }
            Some(name) => Ok(FieldType {
                rust: self.named_type(owner, name)?,
                lenient: None,
            }),
            None => bail!("Property in {} has no type", owner.type_name),
        }
    }

    /// Renders the untagged enum of a union property and returns its name
    fn union(
        &mut self,
        owner: &ResourceNames,
        container: &str,
        property_name: &str,
        property: &Property,
        pending: &mut Vec<String>,
    ) -> Result<String> {
        let mut name = format!("{}{}", container, property_name.to_upper_camel_case());
        if self.taken.contains(&name) {
            name.push_str("Value");
        }
        self.taken.insert(name.clone());

        let mut variants = Vec::new();
        let mut json = false;
        for primitive_name in &property.primitive_types {
            if primitive_name == "Json" {
                json = true;
                continue;
            }
            variants.push((
                primitive_name.to_upper_camel_case(),
                primitive(primitive_name)?.0.to_string(),
            ));
        }
        for type_name in &property.types {
            variants.push((
                type_name.to_upper_camel_case(),
                self.named_type(owner, type_name)?,
            ));
        }
        for item in &property.primitive_item_types {
            variants.push((
                format!("{}List", item.to_upper_camel_case()),
                format!("Vec<{}>", primitive(item)?.0),
            ));
        }
        for item in &property.item_types {
            variants.push((
                format!("{}List", item.to_upper_camel_case()),
                format!("Vec<{}>", self.named_type(owner, item)?),
            ));
        }
        // Json accepts anything, so it is tried last
        if json {
            variants.push(("Json".to_string(), "serde_json::Value".to_string()));
        }

        let Some((first, _)) = variants.first() else {
            bail!("Union property {} of {} has no types", property_name, container);
        };

        let mut code = format!(
            "/// `{}` of [`{}`]\n#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n#[serde(untagged)]\npub enum {} {{\n",
            property_name, container, name
        );
        for (variant, rust) in &variants {
            code.push_str(&format!("    {}({}),\n", variant, rust));
        }
        code.push_str("}\n\n");
        code.push_str(&default_impl(&name, first));
        pending.push(code);

        Ok(name)
    }

    fn field(
        &mut self,
        owner: &ResourceNames,
        container: &str,
        property_name: &str,
        property: &Property,
        pending: &mut Vec<String>,
    ) -> Result<String> {
        let field_type = if property.is_union() {
            FieldType {
                rust: self.union(owner, container, property_name, property, pending)?,
                lenient: None,
            }
        } else {
            self.field_type(owner, property)?
        };

        let mut args = vec![format!("rename = \"{}\"", property_name)];
        let rust = if property.required {
            let deserializer = field_type.lenient.unwrap_or("null_as_default");
            args.push(format!("deserialize_with = \"crate::lenient::{}\"", deserializer));
            field_type.rust
        } else {
            args.push("default".to_string());
            args.push("skip_serializing_if = \"Option::is_none\"".to_string());
            if let Some(stem) = field_type.lenient {
                args.push(format!("deserialize_with = \"crate::lenient::option_{}\"", stem));
            }
            format!("Option<{}>", field_type.rust)
        };

        Ok(format!(
            "{}\n    pub {}: {},\n",
            serde_attribute(&args),
            field_name(property_name),
            rust
        ))
    }

    fn write_struct(
        &mut self,
        owner: &ResourceNames,
        name: &str,
        heading: &str,
        documentation: Option<&str>,
        properties: &BTreeMap<String, Property>,
        with_attributes: bool,
    ) -> Result<()> {
        let mut pending = Vec::new();
        let mut fields = Vec::new();
        for (property_name, property) in properties {
            fields.push(self.field(owner, name, property_name, property, &mut pending)?);
        }
        if with_attributes {
            fields.push("    #[serde(skip)]\n    pub resource_attributes: ResourceAttributes,\n".to_string());
        }

        let mut code = doc_comment(heading, documentation);
        code.push_str("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n");
        if fields.is_empty() {
            code.push_str(&format!("pub struct {} {{}}\n", name));
        } else {
            code.push_str(&format!("pub struct {} {{\n{}}}\n", name, fields.join("\n")));
        }

        self.items.push(code);
        self.items.extend(pending);
        Ok(())
    }

    /// Adjacently tagged enum of a SAM event source
    fn write_event_source(
        &mut self,
        owner: &ResourceNames,
        name: &str,
        heading: &str,
        documentation: Option<&str>,
        types: &[String],
    ) -> Result<()> {
        let mut code = doc_comment(heading, documentation);
        code.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
        code.push_str("#[serde(tag = \"Type\", content = \"Properties\")]\n");
        code.push_str(&format!("pub enum {} {{\n", name));

        let mut first = None;
        for type_name in types {
            let tag = event_tag(type_name);
            let variant = tag.to_upper_camel_case();
            let rust = self.named_type(owner, type_name)?;
            code.push_str(&format!("    #[serde(rename = \"{}\")]\n", tag));
            code.push_str(&format!("    {}({}),\n", variant, rust));
            first.get_or_insert(variant);
        }
        code.push_str("}\n\n");

        let Some(first) = first else {
            bail!("Event source {} has no event types", heading);
        };
        code.push_str(&default_impl(name, &first));

        self.items.push(code);
        Ok(())
    }

    fn render(mut self, resources: &[ResourceNames]) -> Result<String> {
        let spec = self.spec;

        for resource in resources {
            let resource_type = &spec.resource_types[&resource.type_name];
            self.write_struct(
                resource,
                &resource.struct_name,
                &resource.type_name,
                resource_type.documentation.as_deref(),
                &resource_type.properties,
                true,
            )?;
        }

        for resource in resources {
            let prefix = resource.property_type_prefix();
            for (key, property_type) in &spec.property_types {
                let Some(short_name) = key.strip_prefix(&prefix) else {
                    continue;
                };
                let name = resource.property_struct_name(short_name);
                let documentation = property_type.documentation.as_deref();
                match event_source_types(property_type) {
                    Some(types) => {
                        self.write_event_source(resource, &name, key, documentation, types)?
                    }
                    None => self.write_struct(
                        resource,
                        &name,
                        key,
                        documentation,
                        &property_type.properties,
                        false,
                    )?,
                }
            }
        }

        let mut code = format!("//! {} resources\n//!\n{}\n", resources[0].namespace, GENERATED_NOTE);
        if self.uses_map {
            code.push_str("use std::collections::BTreeMap;\n\n");
        }
        code.push_str("use serde::{Deserialize, Serialize};\n\n");
        code.push_str("use crate::resource::ResourceAttributes;\n");
        if self.uses_tag {
            code.push_str("use crate::tags::Tag;\n");
        }
        code.push('\n');
        code.push_str(&self.items.join("\n"));
        Ok(code)
    }
}

fn default_impl(name: &str, variant: &str) -> String {
    format!(
        "impl Default for {} {{\n    fn default() -> Self {{\n        Self::{}(Default::default())\n    }}\n}}\n",
        name, variant
    )
}

fn render_mod(modules: &BTreeMap<String, Vec<ResourceNames>>) -> String {
    let mut code = String::from(
        "//! Generated resource types, one module per service\n//!\n//! DO NOT EDIT MANUALLY - regenerate with formation-codegen\n\n",
    );
    for module in modules.keys() {
        code.push_str(&format!("pub mod {};\n", module));
    }
    code.push_str("\nmod registry;\n\npub use registry::*;\n");
    code
}

/// A method signature, wrapped the way rustfmt wraps it when too long
fn signature(name: &str, params: &[&str], ret: &str) -> String {
    let single = format!("    pub fn {}({}) -> {} {{", name, params.join(", "), ret);
    if single.len() <= MAX_WIDTH {
        return single;
    }
    let params: Vec<String> = params.iter().map(|p| format!("        {},\n", p)).collect();
    format!("    pub fn {}(\n{}    ) -> {} {{", name, params.concat(), ret)
}

/// `use super::{...};`, packed the way rustfmt packs long import lists
fn use_modules(modules: &[&str]) -> String {
    let single = format!("use super::{{{}}};\n", modules.join(", "));
    if single.len() <= MAX_WIDTH {
        return single;
    }

    let mut lines = Vec::new();
    let mut line = String::from("   ");
    for module in modules {
        if line.len() + module.len() + 2 > MAX_WIDTH {
            lines.push(line);
            line = String::from("   ");
        }
        line.push(' ');
        line.push_str(module);
        line.push(',');
    }
    lines.push(line);
    format!("use super::{{\n{}\n}};\n", lines.join("\n"))
}

fn render_registry(resources: &[ResourceNames]) -> String {
    let mut code = format!(
        "//! Resource registry and named accessors\n//!\n{}\n",
        GENERATED_NOTE
    );
    code.push_str("use std::collections::BTreeMap;\n\n");
    let modules: BTreeSet<&str> = resources.iter().map(|r| r.module.as_str()).collect();
    code.push_str(&use_modules(&modules.into_iter().collect::<Vec<_>>()));
    code.push_str("use crate::error::Result;\n");
    code.push_str("use crate::resource::resource_registry;\n");
    code.push_str("use crate::template::Template;\n\n");

    code.push_str("resource_registry! {\n");
    for resource in resources {
        code.push_str(&format!(
            "    {}(\"{}\", \"{}\") => {}::{},\n",
            resource.variant,
            resource.type_name,
            resource.display_name(),
            resource.module,
            resource.struct_name
        ));
    }
    code.push_str("}\n\nimpl Template {\n");

    let methods: Vec<String> = resources
        .iter()
        .map(|resource| {
            let rust = format!("{}::{}", resource.module, resource.struct_name);
            let get_all = signature(
                &format!("get_all_{}_resources", resource.stem),
                &["&self"],
                &format!("BTreeMap<&str, &{}>", rust),
            );
            let with_name = signature(
                &format!("get_{}_with_name", resource.stem),
                &["&self", "name: &str"],
                &format!("Result<&{}>", rust),
            );
            format!(
                "    /// Every `{ty}` resource, keyed by logical name\n{}\n        self.get_all()\n    }}\n\n    /// The `{ty}` resource named `name`\n{}\n        self.get_with_name(name)\n    }}\n",
                get_all,
                with_name,
                ty = resource.type_name
            )
        })
        .collect();
    code.push_str(&methods.join("\n"));
    code.push_str("}\n");
    code
}

/// Generates every file for the resource types matching `prefixes` (all of
/// them when `prefixes` is empty)
pub fn generate(spec: &Specification, prefixes: &[String]) -> Result<Vec<GeneratedFile>> {
    let mut resources = Vec::new();
    let mut variants = BTreeSet::new();
    for type_name in spec.resource_types.keys() {
        if !prefixes.is_empty() && !prefixes.iter().any(|p| type_name.starts_with(p.as_str())) {
            continue;
        }
        let names = ResourceNames::new(type_name)?;
        if !variants.insert(names.variant.clone()) {
            bail!("Resource variant {} is generated twice", names.variant);
        }
        resources.push(names);
    }
    if resources.is_empty() {
        bail!("No resource types matched");
    }

    let mut modules: BTreeMap<String, Vec<ResourceNames>> = BTreeMap::new();
    for resource in &resources {
        modules
            .entry(resource.module.clone())
            .or_default()
            .push(resource.clone());
    }

    let mut files = Vec::new();
    for (module, members) in &modules {
        if members.iter().any(|m| m.namespace != members[0].namespace) {
            bail!("Module {} would mix several namespaces", module);
        }
        files.push(GeneratedFile {
            path: format!("{}.rs", module),
            contents: ModuleWriter::new(spec, members).render(members)?,
        });
    }
    files.push(GeneratedFile {
        path: "mod.rs".to_string(),
        contents: render_mod(&modules),
    });
    files.push(GeneratedFile {
        path: "registry.rs".to_string(),
        contents: render_registry(&resources),
    });

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(json: &str) -> Specification {
        serde_json::from_str(json).unwrap()
    }

    fn file<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
        &files.iter().find(|f| f.path == path).unwrap().contents
    }

    const SAMPLE: &str = r#"{
        "PropertyTypes": {
            "AWS::S3::Bucket.VersioningConfiguration": {
                "Documentation": "http://example.com/versioning",
                "Properties": {"Status": {"PrimitiveType": "String", "Required": true}}
            },
            "AWS::Serverless::Function.S3Location": {
                "Properties": {
                    "Bucket": {"PrimitiveType": "String", "Required": true},
                    "Key": {"PrimitiveType": "String", "Required": true}
                }
            },
            "AWS::Serverless::Function.EventSource": {
                "Properties": {
                    "Type": {"PrimitiveType": "String", "Required": true},
                    "Properties": {"Types": ["SQSEvent", "ScheduleEvent"], "Required": true}
                }
            },
            "AWS::Serverless::Function.SQSEvent": {
                "Properties": {"Queue": {"PrimitiveType": "String", "Required": true}}
            },
            "AWS::Serverless::Function.ScheduleEvent": {
                "Properties": {"Schedule": {"PrimitiveType": "String", "Required": true}}
            }
        },
        "ResourceTypes": {
            "AWS::S3::Bucket": {
                "Documentation": "http://example.com/bucket",
                "Properties": {
                    "BucketName": {"PrimitiveType": "String"},
                    "ObjectLockEnabled": {"PrimitiveType": "Boolean"},
                    "Tags": {"Type": "List", "ItemType": "Tag"},
                    "VersioningConfiguration": {"Type": "VersioningConfiguration"}
                }
            },
            "AWS::EC2::VPC": {
                "Properties": {"CidrBlock": {"PrimitiveType": "String"}}
            },
            "AWS::SSM::Parameter": {
                "Properties": {
                    "Type": {"PrimitiveType": "String", "Required": true},
                    "Value": {"PrimitiveType": "String", "Required": true}
                }
            },
            "AWS::Serverless::Function": {
                "Properties": {
                    "CodeUri": {"PrimitiveTypes": ["String"], "Types": ["S3Location"]},
                    "Policies": {"PrimitiveTypes": ["String", "Json"], "PrimitiveItemTypes": ["String"]},
                    "Environment": {"Type": "Map", "PrimitiveItemType": "String"},
                    "Events": {"Type": "Map", "ItemType": "EventSource"}
                }
            }
        }
    }"#;

    #[test]
    fn resource_names() {
        let vpc = ResourceNames::new("AWS::EC2::VPC").unwrap();
        assert_eq!(vpc.module, "ec2");
        assert_eq!(vpc.struct_name, "Vpc");
        assert_eq!(vpc.variant, "Ec2Vpc");
        assert_eq!(vpc.stem, "ec2_vpc");
        assert_eq!(vpc.display_name(), "ec2.Vpc");

        let table = ResourceNames::new("AWS::DynamoDB::Table").unwrap();
        assert_eq!(table.module, "dynamodb");
        assert_eq!(table.variant, "DynamoDbTable");
        assert_eq!(table.stem, "dynamodb_table");

        let skill = ResourceNames::new("Alexa::ASK::Skill").unwrap();
        assert_eq!(skill.namespace, "Alexa::ASK");
        assert_eq!(skill.variant, "AskSkill");
        assert_eq!(skill.stem, "ask_skill");

        let mapping = ResourceNames::new("AWS::Lambda::EventSourceMapping").unwrap();
        assert_eq!(mapping.stem, "lambda_event_source_mapping");

        assert!(ResourceNames::new("AWS::S3").is_err());
        assert!(ResourceNames::new("AWS::::Bucket").is_err());
    }

    #[test]
    fn field_names() {
        assert_eq!(field_name("BucketName"), "bucket_name");
        assert_eq!(field_name("SSEAlgorithm"), "sse_algorithm");
        assert_eq!(field_name("KMSMasterKeyID"), "kms_master_key_id");
        assert_eq!(field_name("Type"), "type_");
    }

    #[test]
    fn event_tags() {
        assert_eq!(event_tag("S3Event"), "S3");
        assert_eq!(event_tag("CloudWatchEventEvent"), "CloudWatchEvent");
        assert_eq!(event_tag("Event"), "Event");
    }

    #[test]
    fn serde_attribute_wraps_long_lines() {
        let short = serde_attribute(&["rename = \"Status\"".to_string()]);
        assert_eq!(short, "    #[serde(rename = \"Status\")]");

        let long = serde_attribute(&[
            "rename = \"BucketName\"".to_string(),
            "default".to_string(),
            "skip_serializing_if = \"Option::is_none\"".to_string(),
            "deserialize_with = \"crate::lenient::option_string\"".to_string(),
        ]);
        assert_eq!(
            long,
            "    #[serde(\n        rename = \"BucketName\",\n        default,\n        skip_serializing_if = \"Option::is_none\",\n        deserialize_with = \"crate::lenient::option_string\"\n    )]"
        );
    }

    #[test]
    fn generates_modules_mod_and_registry() {
        let files = generate(&spec(SAMPLE), &[]).unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["ec2.rs", "s3.rs", "serverless.rs", "ssm.rs", "mod.rs", "registry.rs"]
        );

        let module = file(&files, "mod.rs");
        assert!(module.contains("pub mod s3;\npub mod serverless;\npub mod ssm;\n"));
        assert!(module.ends_with("mod registry;\n\npub use registry::*;\n"));
    }

    #[test]
    fn resource_struct() {
        let files = generate(&spec(SAMPLE), &[]).unwrap();
        let s3 = file(&files, "s3.rs");

        assert!(s3.starts_with("//! AWS::S3 resources\n"));
        assert!(s3.contains("use crate::tags::Tag;\n"));
        assert!(!s3.contains("BTreeMap"));
        assert!(s3.contains("/// AWS::S3::Bucket\n///\n/// <http://example.com/bucket>\n"));
        assert!(s3.contains("pub struct Bucket {\n"));
        assert!(s3.contains("    pub bucket_name: Option<String>,\n"));
        assert!(s3.contains("deserialize_with = \"crate::lenient::option_boolean\""));
        assert!(s3.contains("    pub tags: Option<Vec<Tag>>,\n"));
        assert!(s3.contains(
            "    pub versioning_configuration: Option<BucketVersioningConfiguration>,\n"
        ));
        assert!(s3.contains("    #[serde(skip)]\n    pub resource_attributes: ResourceAttributes,\n"));
        assert!(s3.contains(
            "    #[serde(rename = \"Status\", deserialize_with = \"crate::lenient::string\")]\n    pub status: String,\n"
        ));
    }

    #[test]
    fn keyword_fields_get_a_suffix() {
        let files = generate(&spec(SAMPLE), &[]).unwrap();
        let ssm = file(&files, "ssm.rs");
        assert!(ssm.contains("    pub type_: String,\n"));
        assert!(!ssm.contains("use crate::tags::Tag;"));
    }

    #[test]
    fn unions_are_untagged_enums() {
        let files = generate(&spec(SAMPLE), &[]).unwrap();
        let serverless = file(&files, "serverless.rs");

        assert!(serverless.contains("use std::collections::BTreeMap;\n"));
        assert!(serverless.contains("    pub code_uri: Option<FunctionCodeUri>,\n"));
        assert!(serverless.contains(
            "#[serde(untagged)]\npub enum FunctionCodeUri {\n    String(String),\n    S3Location(FunctionS3Location),\n}\n"
        ));
        assert!(serverless.contains(
            "pub enum FunctionPolicies {\n    String(String),\n    StringList(Vec<String>),\n    Json(serde_json::Value),\n}\n"
        ));
        assert!(serverless.contains(
            "impl Default for FunctionCodeUri {\n    fn default() -> Self {\n        Self::String(Default::default())\n    }\n}\n"
        ));
        assert!(serverless.contains("deserialize_with = \"crate::lenient::option_string_map\""));
    }

    #[test]
    fn event_sources_are_adjacently_tagged() {
        let files = generate(&spec(SAMPLE), &[]).unwrap();
        let serverless = file(&files, "serverless.rs");

        assert!(serverless.contains(
            "    pub events: Option<BTreeMap<String, FunctionEventSource>>,\n"
        ));
        assert!(serverless.contains(
            "#[serde(tag = \"Type\", content = \"Properties\")]\npub enum FunctionEventSource {\n    #[serde(rename = \"SQS\")]\n    Sqs(FunctionSqsEvent),\n    #[serde(rename = \"Schedule\")]\n    Schedule(FunctionScheduleEvent),\n}\n"
        ));
        assert!(!serverless.contains("pub struct FunctionEventSource"));
    }

    #[test]
    fn registry_is_sorted_and_has_accessors() {
        let files = generate(&spec(SAMPLE), &[]).unwrap();
        let registry = file(&files, "registry.rs");

        assert!(registry.contains("use super::{ec2, s3, serverless, ssm};\n"));
        let ec2 = registry
            .find("    Ec2Vpc(\"AWS::EC2::VPC\", \"ec2.Vpc\") => ec2::Vpc,")
            .unwrap();
        let s3 = registry
            .find("    S3Bucket(\"AWS::S3::Bucket\", \"s3.Bucket\") => s3::Bucket,")
            .unwrap();
        assert!(ec2 < s3);

        assert!(registry.contains(
            "    pub fn get_all_s3_bucket_resources(&self) -> BTreeMap<&str, &s3::Bucket> {\n        self.get_all()\n    }\n"
        ));
        assert!(registry.contains(
            "    pub fn get_serverless_function_with_name(&self, name: &str) -> Result<&serverless::Function> {\n        self.get_with_name(name)\n    }\n"
        ));
    }

    #[test]
    fn module_imports_wrap() {
        assert_eq!(use_modules(&["ec2", "s3"]), "use super::{ec2, s3};\n");

        let many: Vec<String> = (0..20).map(|i| format!("service{:02}", i)).collect();
        let many: Vec<&str> = many.iter().map(String::as_str).collect();
        let wrapped = use_modules(&many);
        assert!(wrapped.starts_with("use super::{\n    service00, service01,"));
        assert!(wrapped.ends_with(" service19,\n};\n"));
        assert!(wrapped.lines().all(|line| line.len() <= MAX_WIDTH));
    }

    #[test]
    fn long_signatures_wrap() {
        let wrapped = signature(
            "get_all_stepfunctions_state_machine_resources",
            &["&self"],
            "BTreeMap<&str, &stepfunctions::StateMachine>",
        );
        assert_eq!(
            wrapped,
            "    pub fn get_all_stepfunctions_state_machine_resources(\n        &self,\n    ) -> BTreeMap<&str, &stepfunctions::StateMachine> {"
        );
    }

    #[test]
    fn type_prefix_filters_resources() {
        let files = generate(&spec(SAMPLE), &["AWS::S3::".to_string()]).unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["s3.rs", "mod.rs", "registry.rs"]);

        assert!(generate(&spec(SAMPLE), &["AWS::Nope::".to_string()]).is_err());
    }

    #[test]
    fn unknown_property_type_is_an_error() {
        let bad = spec(
            r#"{"ResourceTypes": {"AWS::S3::Bucket": {"Properties": {"X": {"Type": "Missing"}}}}}"#,
        );
        let err = generate(&bad, &[]).unwrap_err();
        assert!(err.to_string().contains("Unknown property type Missing"));
    }

    #[test]
    fn union_name_collision_gets_a_suffix() {
        let colliding = spec(
            r#"{
                "PropertyTypes": {
                    "AWS::Serverless::HttpApi.CorsConfiguration": {
                        "Properties": {"MaxAge": {"PrimitiveType": "Integer"}}
                    }
                },
                "ResourceTypes": {
                    "AWS::Serverless::HttpApi": {
                        "Properties": {
                            "CorsConfiguration": {"PrimitiveTypes": ["Boolean"], "Types": ["CorsConfiguration"]}
                        }
                    }
                }
            }"#,
        );
        let files = generate(&colliding, &[]).unwrap();
        let serverless = file(&files, "serverless.rs");
        assert!(serverless.contains(
            "pub enum HttpApiCorsConfigurationValue {\n    Boolean(bool),\n    CorsConfiguration(HttpApiCorsConfiguration),\n}\n"
        ));
        assert!(serverless.contains("pub struct HttpApiCorsConfiguration {\n"));
    }

    #[test]
    fn bundled_specification_generates() {
        let bundled = spec(include_str!(
            "../specification/CloudFormationResourceSpecification.json"
        ));
        let files = generate(&bundled, &[]).unwrap();
        let registry = file(&files, "registry.rs");
        assert!(registry.contains("S3Bucket(\"AWS::S3::Bucket\", \"s3.Bucket\") => s3::Bucket,"));
        assert!(registry.contains("AskSkill(\"Alexa::ASK::Skill\", \"ask.Skill\") => ask::Skill,"));
    }

    #[test]
    fn checked_in_resources_match_generated_output() {
        let bundled = spec(include_str!(
            "../specification/CloudFormationResourceSpecification.json"
        ));
        let files = generate(&bundled, &[]).unwrap();
        assert_eq!(files, generate(&bundled, &[]).unwrap());

        let resources_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../formation-core/src/resources");
        for generated in &files {
            let path = resources_dir.join(&generated.path);
            let checked_in = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
            assert!(
                checked_in == generated.contents,
                "{} differs from the generator's output",
                path.display()
            );
        }

        let generated_paths: BTreeSet<&str> = files.iter().map(|f| f.path.as_str()).collect();
        for entry in std::fs::read_dir(&resources_dir).unwrap() {
            let name = entry.unwrap().file_name().into_string().unwrap();
            assert!(
                generated_paths.contains(name.as_str()),
                "{} is not produced by the generator",
                name
            );
        }
    }
}
