//! CloudFormation Resource Specification to Formation Resource Code Generator
//!
//! This tool generates the typed resource modules and the resource registry
//! of formation-core from the CloudFormation resource specification.
//!
//! Usage:
//!   # Regenerate formation-core's resources
//!   formation-codegen --spec specification/CloudFormationResourceSpecification.json \
//!     --out-dir ../formation-core/src/resources
//!
//!   # Only some services
//!   formation-codegen --spec spec.json --out-dir out \
//!     --type-prefix AWS::S3:: --type-prefix AWS::Serverless::

mod emit;
mod spec;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::spec::Specification;

#[derive(Parser, Debug)]
#[command(name = "formation-codegen")]
#[command(about = "Generate Formation resource types from the CloudFormation resource specification")]
struct Args {
    /// Resource specification JSON file
    #[arg(long)]
    spec: PathBuf,

    /// Directory receiving the service modules, mod.rs and registry.rs
    #[arg(long)]
    out_dir: PathBuf,

    /// Only generate resource types starting with this prefix (repeatable)
    #[arg(long)]
    type_prefix: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let spec_json = fs::read_to_string(&args.spec)
        .with_context(|| format!("Failed to read file: {}", args.spec.display()))?;
    let spec: Specification =
        serde_json::from_str(&spec_json).context("Failed to parse resource specification")?;

    if let Some(version) = &spec.resource_specification_version {
        eprintln!("Specification version: {}", version);
    }

    let files = emit::generate(&spec, &args.type_prefix)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create directory: {}", args.out_dir.display()))?;
    for file in &files {
        let path = args.out_dir.join(&file.path);
        fs::write(&path, &file.contents)
            .with_context(|| format!("Failed to write to: {}", path.display()))?;
        eprintln!("Generated: {}", path.display());
    }

    Ok(())
}
