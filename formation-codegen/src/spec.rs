//! CloudFormation resource specification document
//!
//! Only the parts the generator reads are modelled; resource attributes,
//! update types and the like are ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Specification {
    #[serde(default)]
    pub resource_specification_version: Option<String>,

    #[serde(default)]
    pub property_types: BTreeMap<String, PropertyType>,

    #[serde(default)]
    pub resource_types: BTreeMap<String, ResourceType>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceType {
    pub documentation: Option<String>,

    #[serde(default)]
    pub properties: BTreeMap<String, Property>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyType {
    pub documentation: Option<String>,

    #[serde(default)]
    pub properties: BTreeMap<String, Property>,
}

/// A property declaration
///
/// Exactly one shape is expected: `PrimitiveType`, `Type` (a property type
/// name, or `List` / `Map` with an item type), or the union forms used by the
/// SAM specification (`PrimitiveTypes`, `Types`, `PrimitiveItemTypes`,
/// `ItemTypes`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Property {
    pub primitive_type: Option<String>,

    #[serde(rename = "Type")]
    pub type_name: Option<String>,

    pub primitive_item_type: Option<String>,

    pub item_type: Option<String>,

    #[serde(default)]
    pub primitive_types: Vec<String>,

    #[serde(default)]
    pub types: Vec<String>,

    #[serde(default)]
    pub primitive_item_types: Vec<String>,

    #[serde(default)]
    pub item_types: Vec<String>,

    #[serde(default)]
    pub required: bool,
}

impl Property {
    pub fn is_union(&self) -> bool {
        !self.primitive_types.is_empty()
            || !self.types.is_empty()
            || !self.primitive_item_types.is_empty()
            || !self.item_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_specification_shapes() {
        let spec: Specification = serde_json::from_str(
            r#"{
                "ResourceSpecificationVersion": "1.0.0",
                "PropertyTypes": {
                    "AWS::S3::Bucket.VersioningConfiguration": {
                        "Documentation": "http://example.com",
                        "Properties": {
                            "Status": {"PrimitiveType": "String", "Required": true, "UpdateType": "Mutable"}
                        }
                    }
                },
                "ResourceTypes": {
                    "AWS::S3::Bucket": {
                        "Attributes": {"Arn": {"PrimitiveType": "String"}},
                        "Properties": {
                            "Tags": {"Type": "List", "ItemType": "Tag", "Required": false},
                            "CodeUri": {"PrimitiveTypes": ["String"], "Types": ["S3Location"]}
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(spec.resource_specification_version.as_deref(), Some("1.0.0"));
        let bucket = &spec.resource_types["AWS::S3::Bucket"];
        assert_eq!(bucket.properties["Tags"].type_name.as_deref(), Some("List"));
        assert_eq!(bucket.properties["Tags"].item_type.as_deref(), Some("Tag"));
        assert!(!bucket.properties["Tags"].required);
        assert!(bucket.properties["CodeUri"].is_union());

        let versioning = &spec.property_types["AWS::S3::Bucket.VersioningConfiguration"];
        assert!(versioning.properties["Status"].required);
        assert!(!versioning.properties["Status"].is_union());
    }
}
