//! Formation Core
//!
//! Typed CloudFormation and SAM templates: load a JSON or YAML template,
//! resolve the intrinsic functions that can be evaluated locally, and work
//! with its resources as generated Rust structs.

pub mod error;
pub mod intrinsics;
pub mod lenient;
pub mod loader;
pub mod resource;
pub mod resources;
pub mod tags;
pub mod template;
pub mod yaml;

pub use error::{Error, Result};
pub use loader::{
    ParseOptions, open, open_with_options, parse, parse_json, parse_json_with_options,
    parse_with_options, parse_yaml, parse_yaml_with_options,
};
pub use resource::{CloudFormationResource, DeletionPolicy, ResourceAttributes, UntypedResource};
pub use resources::{RESOURCE_TYPE_NAMES, Resource, all_resources, is_registered};
pub use tags::Tag;
pub use template::{Output, Parameter, Template, Transform};
