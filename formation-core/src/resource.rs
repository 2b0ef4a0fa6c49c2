//! Resource - typed resources and the registry that narrows them
//!
//! Every generated resource struct implements [`CloudFormationResource`],
//! which ties it to its CloudFormation type name and to its variant of
//! [`Resource`]. Both are produced by [`resource_registry!`] from the
//! generated registry in `resources/registry.rs`.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::resources::Resource;

/// Narrowing from [`Resource`] to a concrete generated type
pub trait CloudFormationResource:
    Default + Clone + Serialize + DeserializeOwned + Into<Resource> + 'static
{
    /// CloudFormation type name (e.g., "AWS::S3::Bucket")
    const TYPE_NAME: &'static str;

    /// Module-qualified Rust name used in messages (e.g., "s3.Bucket")
    const DISPLAY_NAME: &'static str;

    fn from_resource(resource: &Resource) -> Option<&Self>;

    fn from_resource_mut(resource: &mut Resource) -> Option<&mut Self>;

    fn resource_attributes(&self) -> &ResourceAttributes;

    fn resource_attributes_mut(&mut self) -> &mut ResourceAttributes;
}

/// Returns true for custom resource type names
pub fn is_custom_type(type_name: &str) -> bool {
    type_name.starts_with("Custom::") || type_name == "AWS::CloudFormation::CustomResource"
}

/// Policy applied when a resource is deleted or replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    Snapshot,
    RetainExceptOnCreate,
}

/// Attributes declared next to `Type` and `Properties`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceAttributes {
    /// Always a list; a single string in the template becomes one element
    #[serde(
        rename = "DependsOn",
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "depends_on"
    )]
    pub depends_on: Vec<String>,

    #[serde(
        rename = "DeletionPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deletion_policy: Option<DeletionPolicy>,

    #[serde(
        rename = "UpdateReplacePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_replace_policy: Option<DeletionPolicy>,

    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(
        rename = "CreationPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_policy: Option<Value>,

    #[serde(rename = "UpdatePolicy", default, skip_serializing_if = "Option::is_none")]
    pub update_policy: Option<Value>,
}

fn depends_on<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(name)) => vec![name],
        Some(OneOrMany::Many(names)) => names,
    })
}

/// A resource whose properties are kept as raw JSON
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UntypedResource {
    pub type_name: String,
    pub properties: Value,
    pub attributes: ResourceAttributes,
}

/// A resource declaration as written in a template
#[derive(Debug, Deserialize)]
pub(crate) struct RawResource {
    #[serde(rename = "Type")]
    pub type_name: String,

    #[serde(rename = "Properties", default)]
    pub properties: Value,

    #[serde(flatten)]
    pub attributes: ResourceAttributes,
}

impl RawResource {
    pub fn decode(self) -> Result<Resource, serde_json::Error> {
        Resource::decode(&self.type_name, self.properties, self.attributes)
    }
}

#[derive(Serialize)]
struct RawResourceRef<'a> {
    #[serde(rename = "Type")]
    type_name: &'a str,

    #[serde(rename = "Properties", skip_serializing_if = "is_empty")]
    properties: Value,

    #[serde(flatten)]
    attributes: &'a ResourceAttributes,
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let properties = self.properties().map_err(S::Error::custom)?;
        RawResourceRef {
            type_name: self.type_name(),
            properties,
            attributes: self.attributes(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawResource::deserialize(deserializer)?
            .decode()
            .map_err(D::Error::custom)
    }
}

/// Declares the [`Resource`] enum and wires every generated type into it
///
/// Each entry is `Variant("Type::Name", "module.Struct") => module::Struct`.
/// Generates the enum, its decoding and inspection methods, the
/// [`CloudFormationResource`] and `From` impls, `RESOURCE_TYPE_NAMES` and
/// `all_resources()`.
macro_rules! resource_registry {
    ($($variant:ident($type_name:literal, $display:literal) => $ty:ty),* $(,)?) => {
        /// A resource declared in a template, narrowed to its concrete type
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $($variant(Box<$ty>),)*
            /// `Custom::*` or `AWS::CloudFormation::CustomResource`
            Custom($crate::resource::UntypedResource),
            /// A type missing from the registry
            Unknown($crate::resource::UntypedResource),
        }

        impl Resource {
            /// CloudFormation type name (e.g., "AWS::S3::Bucket")
            pub fn type_name(&self) -> &str {
                match self {
                    $(Resource::$variant(_) => $type_name,)*
                    Resource::Custom(r) | Resource::Unknown(r) => &r.type_name,
                }
            }

            pub fn attributes(&self) -> &$crate::resource::ResourceAttributes {
                match self {
                    $(Resource::$variant(r) => &r.resource_attributes,)*
                    Resource::Custom(r) | Resource::Unknown(r) => &r.attributes,
                }
            }

            pub fn attributes_mut(&mut self) -> &mut $crate::resource::ResourceAttributes {
                match self {
                    $(Resource::$variant(r) => &mut r.resource_attributes,)*
                    Resource::Custom(r) | Resource::Unknown(r) => &mut r.attributes,
                }
            }

            /// Returns true unless this is a custom or unknown resource
            pub fn is_registered(&self) -> bool {
                !matches!(self, Resource::Custom(_) | Resource::Unknown(_))
            }

            /// Decodes `properties` into the type registered for `type_name`
            ///
            /// Unregistered types are kept untyped rather than rejected.
            pub fn decode(
                type_name: &str,
                properties: ::serde_json::Value,
                attributes: $crate::resource::ResourceAttributes,
            ) -> ::std::result::Result<Self, ::serde_json::Error> {
                let properties = match properties {
                    ::serde_json::Value::Null => ::serde_json::Value::Object(Default::default()),
                    other => other,
                };
                match type_name {
                    $($type_name => {
                        let mut resource: $ty = ::serde_json::from_value(properties)?;
                        resource.resource_attributes = attributes;
                        Ok(Resource::$variant(Box::new(resource)))
                    })*
                    _ => {
                        let untyped = $crate::resource::UntypedResource {
                            type_name: type_name.to_string(),
                            properties,
                            attributes,
                        };
                        if $crate::resource::is_custom_type(type_name) {
                            Ok(Resource::Custom(untyped))
                        } else {
                            Ok(Resource::Unknown(untyped))
                        }
                    }
                }
            }

            /// The resource's properties as JSON
            pub fn properties(&self) -> ::std::result::Result<::serde_json::Value, ::serde_json::Error> {
                match self {
                    $(Resource::$variant(r) => ::serde_json::to_value(&**r),)*
                    Resource::Custom(r) | Resource::Unknown(r) => Ok(r.properties.clone()),
                }
            }
        }

        $(
            impl $crate::resource::CloudFormationResource for $ty {
                const TYPE_NAME: &'static str = $type_name;
                const DISPLAY_NAME: &'static str = $display;

                fn from_resource(resource: &Resource) -> Option<&Self> {
                    match resource {
                        Resource::$variant(r) => Some(&**r),
                        _ => None,
                    }
                }

                fn from_resource_mut(resource: &mut Resource) -> Option<&mut Self> {
                    match resource {
                        Resource::$variant(r) => Some(&mut **r),
                        _ => None,
                    }
                }

                fn resource_attributes(&self) -> &$crate::resource::ResourceAttributes {
                    &self.resource_attributes
                }

                fn resource_attributes_mut(&mut self) -> &mut $crate::resource::ResourceAttributes {
                    &mut self.resource_attributes
                }
            }

            impl From<$ty> for Resource {
                fn from(resource: $ty) -> Self {
                    Resource::$variant(Box::new(resource))
                }
            }
        )*

        /// Every registered resource type name, sorted
        pub const RESOURCE_TYPE_NAMES: &[&str] = &[$($type_name,)*];

        /// Maps every registered type name to a freshly built default resource
        pub fn all_resources() -> ::std::collections::BTreeMap<String, Resource> {
            let mut resources = ::std::collections::BTreeMap::new();
            $(resources.insert($type_name.to_string(), Resource::$variant(Box::default()));)*
            resources
        }

        /// Returns true if `type_name` has a generated type
        pub fn is_registered(type_name: &str) -> bool {
            RESOURCE_TYPE_NAMES.binary_search(&type_name).is_ok()
        }
    };
}

pub(crate) use resource_registry;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{s3, sqs};
    use serde_json::json;

    #[test]
    fn decode_registered_type() {
        let raw: RawResource = serde_json::from_value(json!({
            "Type": "AWS::S3::Bucket",
            "Properties": {"BucketName": "logs"},
            "DependsOn": "Key",
            "DeletionPolicy": "Retain"
        }))
        .unwrap();
        let resource = raw.decode().unwrap();

        assert_eq!(resource.type_name(), "AWS::S3::Bucket");
        assert!(resource.is_registered());
        let bucket = s3::Bucket::from_resource(&resource).unwrap();
        assert_eq!(bucket.bucket_name.as_deref(), Some("logs"));
        assert_eq!(bucket.resource_attributes.depends_on, vec!["Key".to_string()]);
        assert_eq!(
            bucket.resource_attributes.deletion_policy,
            Some(DeletionPolicy::Retain)
        );
        assert!(sqs::Queue::from_resource(&resource).is_none());
    }

    #[test]
    fn missing_properties_decode_as_default() {
        let resource = Resource::decode(
            "AWS::SQS::Queue",
            Value::Null,
            ResourceAttributes::default(),
        )
        .unwrap();
        assert_eq!(
            sqs::Queue::from_resource(&resource),
            Some(&sqs::Queue::default())
        );
    }

    #[test]
    fn custom_and_unknown_types_stay_untyped() {
        let custom = Resource::decode(
            "Custom::Seeder",
            json!({"ServiceToken": "arn"}),
            ResourceAttributes::default(),
        )
        .unwrap();
        assert!(matches!(custom, Resource::Custom(_)));
        assert_eq!(custom.type_name(), "Custom::Seeder");
        assert_eq!(custom.properties().unwrap(), json!({"ServiceToken": "arn"}));

        let unknown =
            Resource::decode("AWS::Foo::Bar", json!({}), ResourceAttributes::default()).unwrap();
        assert!(matches!(unknown, Resource::Unknown(_)));
        assert!(!unknown.is_registered());
    }

    #[test]
    fn serializes_type_properties_and_attributes() {
        let mut bucket = s3::Bucket {
            bucket_name: Some("logs".to_string()),
            ..Default::default()
        };
        bucket.resource_attributes.depends_on = vec!["A".to_string(), "B".to_string()];
        bucket.resource_attributes.condition = Some("IsProd".to_string());

        let value = serde_json::to_value(Resource::from(bucket)).unwrap();
        assert_eq!(
            value,
            json!({
                "Type": "AWS::S3::Bucket",
                "Properties": {"BucketName": "logs"},
                "DependsOn": ["A", "B"],
                "Condition": "IsProd"
            })
        );
    }

    #[test]
    fn empty_properties_are_omitted() {
        let value = serde_json::to_value(Resource::from(sqs::Queue::default())).unwrap();
        assert_eq!(value, json!({"Type": "AWS::SQS::Queue"}));
    }

    #[test]
    fn invalid_properties_fail_to_decode() {
        let result = Resource::decode(
            "AWS::SQS::Queue",
            json!({"DelaySeconds": "soon"}),
            ResourceAttributes::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn custom_type_names() {
        assert!(is_custom_type("Custom::Anything"));
        assert!(is_custom_type("AWS::CloudFormation::CustomResource"));
        assert!(!is_custom_type("AWS::S3::Bucket"));
    }
}
