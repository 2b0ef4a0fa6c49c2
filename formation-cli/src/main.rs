use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::debug;
use serde_json::Value;

use formation_core::intrinsics::{self, ProcessorOptions, UnresolvedPolicy};
use formation_core::{ParseOptions, RESOURCE_TYPE_NAMES, Resource, Template};

#[derive(Parser)]
#[command(name = "formation")]
#[command(about = "Inspect CloudFormation and SAM templates", long_about = None)]
struct Cli {
    /// Override a template parameter (Key=Value, repeatable)
    #[arg(long = "parameter", short = 'p', global = true, value_parser = parse_parameter)]
    parameters: Vec<(String, String)>,

    /// Fail on resource types that have no generated type
    #[arg(long, global = true)]
    strict: bool,

    /// What unresolved intrinsics become: null, or kept and written back on
    /// output (default: encode for show and convert, null otherwise)
    #[arg(long, global = true, value_enum)]
    unresolved: Option<Unresolved>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the template and decode every resource
    Validate {
        /// Path to the template
        #[arg(default_value = "template.yaml")]
        file: PathBuf,
    },
    /// List the resources of a template
    Resources {
        /// Path to the template
        #[arg(default_value = "template.yaml")]
        file: PathBuf,

        /// Only list resources of this type (e.g., AWS::S3::Bucket)
        #[arg(long = "type", short)]
        type_name: Option<String>,
    },
    /// Print one resource as JSON, after intrinsic processing
    Show {
        /// Path to the template
        file: PathBuf,

        /// Logical name of the resource
        name: String,
    },
    /// Print the processed template as JSON or YAML
    Convert {
        /// Path to the template
        file: PathBuf,

        #[arg(long, short, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// List the resource types with a generated type
    Types {
        /// Only list types containing this text (case-insensitive)
        #[arg(long, short)]
        filter: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Unresolved {
    Null,
    Encode,
}

impl From<Unresolved> for UnresolvedPolicy {
    fn from(unresolved: Unresolved) -> Self {
        match unresolved {
            Unresolved::Null => UnresolvedPolicy::Null,
            Unresolved::Encode => UnresolvedPolicy::Encode,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let unresolved = unresolved_policy(&cli.command, cli.unresolved);
    let options = parse_options(&cli.parameters, cli.strict, unresolved);

    let result = match &cli.command {
        Commands::Validate { file } => run_validate(file, &options),
        Commands::Resources { file, type_name } => {
            run_resources(file, type_name.as_deref(), &options)
        }
        Commands::Show { file, name } => run_show(file, name, &options),
        Commands::Convert { file, format } => run_convert(file, *format, &options),
        Commands::Types { filter } => run_types(filter.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_parameter(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected Key=Value, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Commands that write the template back out keep unresolved intrinsics
fn unresolved_policy(command: &Commands, flag: Option<Unresolved>) -> UnresolvedPolicy {
    match (flag, command) {
        (Some(flag), _) => flag.into(),
        (None, Commands::Show { .. } | Commands::Convert { .. }) => UnresolvedPolicy::Encode,
        (None, _) => UnresolvedPolicy::Null,
    }
}

fn parse_options(
    parameters: &[(String, String)],
    strict: bool,
    unresolved: UnresolvedPolicy,
) -> ParseOptions {
    let parameter_overrides = parameters
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect();

    ParseOptions {
        processor: ProcessorOptions {
            parameter_overrides,
            unresolved,
            ..Default::default()
        },
        strict,
    }
}

fn load_template(file: &Path, options: &ParseOptions) -> Result<Template, String> {
    let template = formation_core::open_with_options(file, options)
        .map_err(|e| format!("Failed to load {}: {}", file.display(), e))?;
    debug!(
        "loaded {} resources from {}",
        template.resources.len(),
        file.display()
    );
    Ok(template)
}

fn resource_label(resource: &Resource) -> String {
    match resource {
        Resource::Custom(_) => format!("{} {}", resource.type_name(), "(custom)".yellow()),
        Resource::Unknown(_) => format!("{} {}", resource.type_name(), "(untyped)".yellow()),
        _ => resource.type_name().to_string(),
    }
}

fn run_validate(file: &Path, options: &ParseOptions) -> Result<(), String> {
    println!("{}", "Validating...".cyan());

    let template = load_template(file, options)?;

    let untyped = template
        .resources
        .values()
        .filter(|resource| !resource.is_registered())
        .count();

    println!(
        "{}",
        format!(
            "✓ {} resources validated successfully.",
            template.resources.len()
        )
        .green()
        .bold()
    );
    if untyped > 0 {
        println!(
            "{}",
            format!("  {} resources kept untyped.", untyped).yellow()
        );
    }

    for (name, resource) in &template.resources {
        println!("  • {}: {}", name, resource_label(resource));
    }

    Ok(())
}

fn run_resources(
    file: &Path,
    type_name: Option<&str>,
    options: &ParseOptions,
) -> Result<(), String> {
    let template = load_template(file, options)?;

    let resources: Vec<(&String, &Resource)> = match type_name {
        Some(type_name) => template.resources_of_type(type_name).collect(),
        None => template.resources.iter().collect(),
    };

    if resources.is_empty() {
        println!("{}", "No resources found.".yellow());
        return Ok(());
    }

    let width = resources.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, resource) in resources {
        let name = format!("{:width$}", name, width = width);
        println!("{}  {}", name.bold(), resource_label(resource));
    }

    Ok(())
}

/// JSON of a single resource with encoded intrinsics written back as objects
fn resource_json(resource: &Resource) -> Result<Value, String> {
    let mut value = serde_json::to_value(resource)
        .map_err(|e| format!("Failed to serialize resource: {}", e))?;
    intrinsics::restore_encoded(&mut value);
    Ok(value)
}

fn run_show(file: &Path, name: &str, options: &ParseOptions) -> Result<(), String> {
    let template = load_template(file, options)?;

    let resource = template
        .resources
        .get(name)
        .ok_or_else(|| format!("Resource '{}' not found in {}", name, file.display()))?;

    let json = serde_json::to_string_pretty(&resource_json(resource)?)
        .map_err(|e| format!("Failed to serialize resource: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn render_template(template: &Template, format: Format) -> Result<String, String> {
    match format {
        Format::Json => template.to_json(),
        Format::Yaml => template.to_yaml(),
    }
    .map_err(|e| format!("Failed to serialize template: {}", e))
}

fn run_convert(file: &Path, format: Format, options: &ParseOptions) -> Result<(), String> {
    let template = load_template(file, options)?;
    let output = render_template(&template, format)?;

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn matching_types(filter: Option<&str>) -> Vec<&'static str> {
    let filter = filter.map(str::to_lowercase);
    RESOURCE_TYPE_NAMES
        .iter()
        .copied()
        .filter(|name| {
            filter
                .as_deref()
                .is_none_or(|filter| name.to_lowercase().contains(filter))
        })
        .collect()
}

fn run_types(filter: Option<&str>) -> Result<(), String> {
    let types = matching_types(filter);
    if types.is_empty() {
        return Err(format!(
            "No resource types match '{}'",
            filter.unwrap_or_default()
        ));
    }

    for name in &types {
        println!("{}", name);
    }
    println!("{}", format!("{} resource types", types.len()).dimmed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TEMPLATE: &str = r#"
Transform: AWS::Serverless-2016-10-31
Parameters:
  Stage:
    Type: String
    Default: dev
Resources:
  Uploads:
    Type: AWS::S3::Bucket
    Properties:
      BucketName: !Sub "uploads-${Stage}"
  Handler:
    Type: AWS::Serverless::Function
    Properties:
      Handler: index.handler
      Runtime: nodejs20.x
      Role: !GetAtt HandlerRole.Arn
  Widget:
    Type: Vendor::Widget::Thing
"#;

    fn write_template(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("template.yaml");
        fs::write(&path, TEMPLATE).unwrap();
        path
    }

    #[test]
    fn parameters_split_on_the_first_equals() {
        assert_eq!(
            parse_parameter("Stage=prod").unwrap(),
            ("Stage".to_string(), "prod".to_string())
        );
        assert_eq!(
            parse_parameter("Query=a=b").unwrap(),
            ("Query".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_parameter("Empty=").unwrap(),
            ("Empty".to_string(), String::new())
        );
        assert!(parse_parameter("Stage").is_err());
        assert!(parse_parameter("=prod").is_err());
    }

    #[test]
    fn cli_accepts_global_flags_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "formation",
            "show",
            "template.yaml",
            "Uploads",
            "--parameter",
            "Stage=prod",
            "--strict",
        ])
        .unwrap();
        assert!(cli.strict);
        assert_eq!(cli.parameters, vec![("Stage".to_string(), "prod".to_string())]);
        assert!(matches!(cli.command, Commands::Show { ref name, .. } if name == "Uploads"));
    }

    #[test]
    fn convert_format_defaults_to_json() {
        let cli = Cli::try_parse_from(["formation", "convert", "t.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Convert { format: Format::Json, .. }));

        let cli = Cli::try_parse_from(["formation", "convert", "t.json", "--format", "yaml"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Convert { format: Format::Yaml, .. }));

        assert!(Cli::try_parse_from(["formation", "convert", "t.json", "-f", "toml"]).is_err());
    }

    #[test]
    fn parameter_overrides_reach_the_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(&dir);

        let options = parse_options(
            &[("Stage".to_string(), "prod".to_string())],
            false,
            UnresolvedPolicy::Null,
        );
        let template = load_template(&path, &options).unwrap();
        let bucket = resource_json(&template.resources["Uploads"]).unwrap();
        assert_eq!(bucket["Properties"]["BucketName"], "uploads-prod");
    }

    #[test]
    fn strict_loading_reports_the_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(&dir);

        let err = load_template(&path, &parse_options(&[], true, UnresolvedPolicy::Null))
            .unwrap_err();
        assert!(err.contains("Widget"), "{}", err);
        assert!(err.contains("Vendor::Widget::Thing"), "{}", err);

        assert!(run_validate(&path, &parse_options(&[], false, UnresolvedPolicy::Null)).is_ok());
    }

    #[test]
    fn output_commands_keep_unresolved_intrinsics_by_default() {
        let convert = Cli::try_parse_from(["formation", "convert", "t.yaml"]).unwrap();
        assert_eq!(
            unresolved_policy(&convert.command, convert.unresolved),
            UnresolvedPolicy::Encode
        );

        let show = Cli::try_parse_from(["formation", "show", "t.yaml", "Uploads"]).unwrap();
        assert_eq!(unresolved_policy(&show.command, show.unresolved), UnresolvedPolicy::Encode);

        let validate = Cli::try_parse_from(["formation", "validate", "t.yaml"]).unwrap();
        assert_eq!(
            unresolved_policy(&validate.command, validate.unresolved),
            UnresolvedPolicy::Null
        );

        let forced =
            Cli::try_parse_from(["formation", "convert", "t.yaml", "--unresolved", "null"])
                .unwrap();
        assert_eq!(
            unresolved_policy(&forced.command, forced.unresolved),
            UnresolvedPolicy::Null
        );
    }

    #[test]
    fn convert_writes_unresolved_intrinsics_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("function.yaml");
        fs::write(
            &path,
            r#"
Resources:
  Fn:
    Type: AWS::Lambda::Function
    Properties:
      Code:
        ZipFile: "x"
      Role: !GetAtt Role.Arn
      Environment:
        Variables:
          BUCKET: !Ref Uploads
"#,
        )
        .unwrap();

        let options = parse_options(&[], false, UnresolvedPolicy::Encode);
        let template = load_template(&path, &options).unwrap();

        let json: Value =
            serde_json::from_str(&render_template(&template, Format::Json).unwrap()).unwrap();
        let properties = &json["Resources"]["Fn"]["Properties"];
        assert_eq!(properties["Role"], serde_json::json!({"Fn::GetAtt": ["Role", "Arn"]}));
        assert_eq!(
            properties["Environment"]["Variables"]["BUCKET"],
            serde_json::json!({"Ref": "Uploads"})
        );

        let yaml = render_template(&template, Format::Yaml).unwrap();
        assert!(yaml.contains("Fn::GetAtt"), "{}", yaml);
        assert!(yaml.contains("Ref: Uploads"), "{}", yaml);

        let shown = resource_json(&template.resources["Fn"]).unwrap();
        assert_eq!(
            shown["Properties"]["Role"],
            serde_json::json!({"Fn::GetAtt": ["Role", "Arn"]})
        );

        let nulled = load_template(&path, &parse_options(&[], false, UnresolvedPolicy::Null))
            .unwrap();
        let json = nulled.to_json_value().unwrap();
        assert_eq!(json["Resources"]["Fn"]["Properties"]["Role"], "");
    }

    #[test]
    fn show_reports_missing_resources() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(&dir);
        let options = ParseOptions::default();

        assert!(run_show(&path, "Handler", &options).is_ok());
        let err = run_show(&path, "Nope", &options).unwrap_err();
        assert!(err.contains("Nope"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = run_validate(Path::new("/nonexistent/template.yaml"), &ParseOptions::default())
            .unwrap_err();
        assert!(err.starts_with("Failed to load"));
    }

    #[test]
    fn type_filter_is_case_insensitive() {
        let types = matching_types(Some("s3::bucket"));
        assert!(types.contains(&"AWS::S3::Bucket"));
        assert!(types.iter().all(|name| name.to_lowercase().contains("s3::bucket")));

        assert_eq!(matching_types(None).len(), RESOURCE_TYPE_NAMES.len());
        assert!(run_types(Some("no-such-type")).is_err());
    }
}
