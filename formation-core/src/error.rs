//! Error types for template loading and resource lookup

use thiserror::Error;

/// Errors produced while loading templates or looking up resources
#[derive(Debug, Error)]
pub enum Error {
    /// The logical name is absent, or bound to a resource of another type
    #[error("resource \"{name}\" of type {type_name} not found")]
    ResourceNotFound {
        name: String,
        type_name: &'static str,
    },

    /// A resource declaration could not be decoded into its registered type
    #[error("resource \"{name}\" ({type_name}): {source}")]
    Resource {
        name: String,
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The resource type is not in the registry (strict parsing only)
    #[error("resource \"{name}\" has unknown type {type_name}")]
    UnknownResourceType { name: String, type_name: String },

    /// The document is well-formed but is not a template
    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(name: impl Into<String>, type_name: &'static str) -> Self {
        Self::ResourceNotFound {
            name: name.into(),
            type_name,
        }
    }

    pub fn invalid_template(message: impl Into<String>) -> Self {
        Self::InvalidTemplate(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
