//! Intrinsic function processing
//!
//! Resolves the intrinsic functions whose value is known before deployment
//! (parameter defaults, pseudo parameters, mappings, conditions, string
//! manipulation) so that resource properties can be decoded into typed
//! structs. Functions that only CloudFormation can evaluate (`Fn::GetAtt`,
//! `Fn::ImportValue`, `Ref` to a resource, ...) are left unresolved and
//! replaced according to [`UnresolvedPolicy`].
//!
//! # Example
//!
//! ```
//! use formation_core::intrinsics::{process, ProcessorOptions};
//! use serde_json::json;
//!
//! let mut doc = json!({
//!     "Parameters": {"Env": {"Type": "String", "Default": "dev"}},
//!     "Resources": {
//!         "Bucket": {
//!             "Type": "AWS::S3::Bucket",
//!             "Properties": {"BucketName": {"Fn::Sub": "logs-${Env}-${AWS::Region}"}}
//!         }
//!     }
//! });
//! process(&mut doc, &ProcessorOptions::default());
//!
//! assert_eq!(
//!     doc["Resources"]["Bucket"]["Properties"]["BucketName"],
//!     json!("logs-dev-us-east-1")
//! );
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use regex::Regex;
use serde_json::{Map, Value};

/// Template sections whose contents are processed
const PROCESSED_SECTIONS: &[&str] = &["Resources", "Outputs", "Globals"];

/// Intrinsic function names recognised by [`is_intrinsic_name`]
const INTRINSIC_NAMES: &[&str] = &[
    "Ref",
    "Condition",
    "Fn::And",
    "Fn::Base64",
    "Fn::Cidr",
    "Fn::Equals",
    "Fn::FindInMap",
    "Fn::GetAZs",
    "Fn::GetAtt",
    "Fn::If",
    "Fn::ImportValue",
    "Fn::Join",
    "Fn::Length",
    "Fn::Not",
    "Fn::Or",
    "Fn::Select",
    "Fn::Split",
    "Fn::Sub",
    "Fn::ToJsonString",
    "Fn::Transform",
];

static SUB_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]*)\}").expect("valid Fn::Sub pattern"));

/// Custom handler for an intrinsic function
///
/// Receives the function name, its already-processed argument and the whole
/// (unprocessed) template. Returning `None` leaves the function unresolved.
pub type IntrinsicHandler = fn(name: &str, input: &Value, template: &Value) -> Option<Value>;

/// What to put in place of an intrinsic that cannot be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPolicy {
    /// Replace with `null`, so optional properties decode as absent
    #[default]
    Null,
    /// Replace with a base64 string of the intrinsic's JSON
    ///
    /// The string survives typed decoding in string properties (including
    /// string lists and maps) and is turned back into the intrinsic object
    /// when the template is serialised. Integer, double and boolean
    /// properties cannot hold it: they read it as absent (or the zero value
    /// when required), so it is lost on serialisation. The loader logs a
    /// warning naming each such property.
    Encode,
}

/// Values returned for `Ref` to a pseudo parameter
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoParameters {
    pub account_id: String,
    pub region: String,
    pub partition: String,
    pub url_suffix: String,
    pub stack_name: String,
    pub stack_id: String,
    pub notification_arns: Vec<String>,
}

impl Default for PseudoParameters {
    fn default() -> Self {
        Self {
            account_id: "123456789012".to_string(),
            region: "us-east-1".to_string(),
            partition: "aws".to_string(),
            url_suffix: "amazonaws.com".to_string(),
            stack_name: "formation-stack".to_string(),
            stack_id: "arn:aws:cloudformation:us-east-1:123456789012:stack/formation-stack/51af3dc0-da77-11e4-872e-1234567db123".to_string(),
            notification_arns: vec!["arn:aws:sns:us-east-1:123456789012:notification".to_string()],
        }
    }
}

impl PseudoParameters {
    /// Value of `Ref` to `name`, or `None` if `name` is not a pseudo parameter
    ///
    /// `AWS::NoValue` is not a value and is handled by the processor.
    pub fn get(&self, name: &str) -> Option<Value> {
        let value = match name {
            "AWS::AccountId" => Value::String(self.account_id.clone()),
            "AWS::Region" => Value::String(self.region.clone()),
            "AWS::Partition" => Value::String(self.partition.clone()),
            "AWS::URLSuffix" => Value::String(self.url_suffix.clone()),
            "AWS::StackName" => Value::String(self.stack_name.clone()),
            "AWS::StackId" => Value::String(self.stack_id.clone()),
            "AWS::NotificationARNs" => Value::Array(
                self.notification_arns
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
            _ => return None,
        };
        Some(value)
    }
}

/// Intrinsic processing options
#[derive(Debug, Clone)]
pub struct ProcessorOptions {
    /// Values used for `Ref` to a parameter instead of its `Default`
    pub parameter_overrides: BTreeMap<String, Value>,

    /// Handlers replacing the built-in handling of a function (keyed by name)
    pub handler_overrides: HashMap<String, IntrinsicHandler>,

    pub pseudo_parameters: PseudoParameters,

    /// Skip processing entirely; intrinsics reach the decoder untouched
    pub no_process: bool,

    /// Evaluate the `Conditions` section to resolve `Fn::If`
    pub evaluate_conditions: bool,

    pub unresolved: UnresolvedPolicy,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            parameter_overrides: BTreeMap::new(),
            handler_overrides: HashMap::new(),
            pseudo_parameters: PseudoParameters::default(),
            no_process: false,
            evaluate_conditions: true,
            unresolved: UnresolvedPolicy::default(),
        }
    }
}

/// Returns true if `name` is an intrinsic function key
pub fn is_intrinsic_name(name: &str) -> bool {
    INTRINSIC_NAMES.contains(&name) || name.starts_with("Fn::")
}

/// Splits a single-key object into its intrinsic function name and argument
pub fn as_intrinsic(value: &Value) -> Option<(&str, &Value)> {
    let object = value.as_object()?;
    if object.len() != 1 {
        return None;
    }
    let (name, arg) = object.iter().next()?;
    is_intrinsic_name(name).then_some((name.as_str(), arg))
}

/// Encodes an intrinsic object as a base64 string
pub fn encode(intrinsic: &Value) -> String {
    STANDARD.encode(intrinsic.to_string())
}

/// Decodes a string produced by [`encode`] back into the intrinsic object
pub fn decode(s: &str) -> Option<Value> {
    // The shortest encodable intrinsic, {"Ref":""}, is 16 base64 characters
    if s.len() < 16 || s.len() % 4 != 0 {
        return None;
    }
    let bytes = STANDARD.decode(s).ok()?;
    let value: Value = serde_json::from_slice(&bytes).ok()?;
    as_intrinsic(&value)?;
    Some(value)
}

/// Returns true if `s` is an encoded intrinsic
pub fn is_encoded(s: &str) -> bool {
    decode(s).is_some()
}

/// Replaces every encoded intrinsic string in `value` with its object form
pub fn restore_encoded(value: &mut Value) {
    match value {
        Value::String(s) => {
            if let Some(mut decoded) = decode(s) {
                restore_encoded(&mut decoded);
                *value = decoded;
            }
        }
        Value::Array(items) => items.iter_mut().for_each(restore_encoded),
        Value::Object(map) => map.values_mut().for_each(restore_encoded),
        _ => {}
    }
}

/// Builders for encoded intrinsics, for use in programmatically built templates
///
/// Each returns a string that can be stored in any string property and is
/// written out as the intrinsic object by [`Template::to_json`](crate::Template::to_json).
pub mod build {
    use serde_json::{Value, json};

    use super::{decode, encode};

    /// Arguments that are themselves encoded intrinsics are nested as objects
    fn arg(s: &str) -> Value {
        decode(s).unwrap_or_else(|| Value::String(s.to_string()))
    }

    pub fn reference(name: &str) -> String {
        encode(&json!({"Ref": name}))
    }

    pub fn get_att(resource: &str, attribute: &str) -> String {
        encode(&json!({"Fn::GetAtt": [resource, attribute]}))
    }

    pub fn sub(template: &str) -> String {
        encode(&json!({"Fn::Sub": template}))
    }

    pub fn join(delimiter: &str, parts: &[String]) -> String {
        let parts: Vec<Value> = parts.iter().map(|p| arg(p)).collect();
        encode(&json!({"Fn::Join": [delimiter, parts]}))
    }

    pub fn select(index: usize, list: &str) -> String {
        encode(&json!({"Fn::Select": [index.to_string(), arg(list)]}))
    }

    pub fn split(delimiter: &str, source: &str) -> String {
        encode(&json!({"Fn::Split": [delimiter, arg(source)]}))
    }

    pub fn import_value(name: &str) -> String {
        encode(&json!({"Fn::ImportValue": arg(name)}))
    }

    pub fn base64(input: &str) -> String {
        encode(&json!({"Fn::Base64": arg(input)}))
    }

    pub fn find_in_map(map: &str, top_level_key: &str, second_level_key: &str) -> String {
        encode(&json!({
            "Fn::FindInMap": [arg(map), arg(top_level_key), arg(second_level_key)]
        }))
    }

    pub fn get_azs(region: &str) -> String {
        encode(&json!({"Fn::GetAZs": arg(region)}))
    }
}

/// Outcome of resolving a value
#[derive(Debug, Clone, PartialEq)]
enum Resolved {
    Value(Value),
    /// `Ref: AWS::NoValue`; the enclosing key or list element is removed
    NoValue,
    /// Carries the (partially processed) intrinsic form
    Unresolved(Value),
}

struct Processor<'a> {
    options: &'a ProcessorOptions,
    template: &'a Value,
    conditions: HashMap<String, Option<bool>>,
}

/// Processes intrinsic functions in the `Resources`, `Outputs` and `Globals`
/// sections of `document` in place
pub fn process(document: &mut Value, options: &ProcessorOptions) {
    if options.no_process {
        return;
    }

    let snapshot = document.clone();
    let mut processor = Processor {
        options,
        template: &snapshot,
        conditions: HashMap::new(),
    };

    let Some(root) = document.as_object_mut() else {
        return;
    };
    for section in PROCESSED_SECTIONS {
        if let Some(value) = root.get_mut(*section) {
            let taken = value.take();
            *value = match processor.walk(taken, false) {
                Resolved::Value(v) => v,
                Resolved::NoValue => Value::Null,
                Resolved::Unresolved(form) => processor.finalize(form),
            };
        }
    }
}

fn rebuild(name: &str, arg: Value) -> Value {
    let mut object = Map::new();
    object.insert(name.to_string(), arg);
    Value::Object(object)
}

/// Scalars as they appear when CloudFormation joins or substitutes them
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn index_value(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().map(|n| n as usize),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn is_list_parameter(parameter_type: Option<&str>) -> bool {
    parameter_type.is_some_and(|t| t == "CommaDelimitedList" || t.starts_with("List<"))
}

impl Processor<'_> {
    fn finalize(&self, form: Value) -> Value {
        debug!("leaving intrinsic unresolved: {}", form);
        match self.options.unresolved {
            UnresolvedPolicy::Null => Value::Null,
            UnresolvedPolicy::Encode => Value::String(encode(&form)),
        }
    }

    /// Resolves `value`. Inside an intrinsic argument (`in_intrinsic`)
    /// unresolved parts propagate up; elsewhere they are finalized in place.
    fn walk(&mut self, value: Value, in_intrinsic: bool) -> Resolved {
        if let Some((name, _)) = as_intrinsic(&value) {
            let name = name.to_string();
            let Value::Object(mut object) = value else {
                unreachable!("as_intrinsic only matches objects");
            };
            let arg = object.remove(&name).unwrap_or(Value::Null);
            return self.apply(&name, arg, in_intrinsic);
        }

        match value {
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                let mut unresolved = false;
                for item in items {
                    match self.walk(item, in_intrinsic) {
                        Resolved::Value(v) => out.push(v),
                        Resolved::NoValue => {}
                        Resolved::Unresolved(form) if in_intrinsic => {
                            unresolved = true;
                            out.push(form);
                        }
                        Resolved::Unresolved(form) => out.push(self.finalize(form)),
                    }
                }
                if unresolved {
                    Resolved::Unresolved(Value::Array(out))
                } else {
                    Resolved::Value(Value::Array(out))
                }
            }
            Value::Object(map) => {
                let mut out = Map::new();
                let mut unresolved = false;
                for (key, item) in map {
                    match self.walk(item, in_intrinsic) {
                        Resolved::Value(v) => {
                            out.insert(key, v);
                        }
                        Resolved::NoValue => {}
                        Resolved::Unresolved(form) if in_intrinsic => {
                            unresolved = true;
                            out.insert(key, form);
                        }
                        Resolved::Unresolved(form) => {
                            let finalized = self.finalize(form);
                            out.insert(key, finalized);
                        }
                    }
                }
                if unresolved {
                    Resolved::Unresolved(Value::Object(out))
                } else {
                    Resolved::Value(Value::Object(out))
                }
            }
            scalar => Resolved::Value(scalar),
        }
    }

    fn apply(&mut self, name: &str, arg: Value, in_intrinsic: bool) -> Resolved {
        if let Some(handler) = self.options.handler_overrides.get(name).copied() {
            return match self.walk(arg, true) {
                Resolved::Value(arg) => match handler(name, &arg, self.template) {
                    Some(v) => Resolved::Value(v),
                    None => Resolved::Unresolved(rebuild(name, arg)),
                },
                Resolved::NoValue => Resolved::Unresolved(rebuild(name, Value::Null)),
                Resolved::Unresolved(form) => Resolved::Unresolved(rebuild(name, form)),
            };
        }

        if name == "Fn::If" {
            return self.fn_if(arg, in_intrinsic);
        }

        match self.walk(arg, true) {
            Resolved::Value(arg) => self.builtin(name, arg),
            Resolved::NoValue => Resolved::Unresolved(rebuild(name, Value::Null)),
            Resolved::Unresolved(form) => Resolved::Unresolved(rebuild(name, form)),
        }
    }

    /// Only the chosen branch is processed, in the `Fn::If`'s own context
    fn fn_if(&mut self, arg: Value, in_intrinsic: bool) -> Resolved {
        let chosen = match &arg {
            Value::Array(items) if items.len() == 3 && self.options.evaluate_conditions => items[0]
                .as_str()
                .and_then(|condition| self.condition(condition))
                .map(|holds| if holds { 1 } else { 2 }),
            _ => None,
        };

        match (chosen, arg) {
            (Some(index), Value::Array(mut items)) => {
                let branch = items.swap_remove(index);
                self.walk(branch, in_intrinsic)
            }
            (_, Value::Array(items)) => {
                let items = items
                    .into_iter()
                    .map(|item| match self.walk(item, true) {
                        Resolved::Value(v) | Resolved::Unresolved(v) => v,
                        Resolved::NoValue => rebuild("Ref", Value::String("AWS::NoValue".into())),
                    })
                    .collect();
                Resolved::Unresolved(rebuild("Fn::If", Value::Array(items)))
            }
            (_, arg) => Resolved::Unresolved(rebuild("Fn::If", arg)),
        }
    }

    fn builtin(&mut self, name: &str, arg: Value) -> Resolved {
        let resolved = match name {
            "Ref" => return self.reference(arg),
            "Fn::Base64" => arg
                .as_str()
                .map(|s| Value::String(STANDARD.encode(s.as_bytes()))),
            "Fn::FindInMap" => self.find_in_map(&arg),
            "Fn::GetAZs" => self.get_azs(&arg),
            "Fn::Join" => join(&arg),
            "Fn::Select" => select(&arg),
            "Fn::Split" => split(&arg),
            "Fn::Sub" => self.sub(&arg),
            "Fn::Equals" => equals(&arg),
            "Fn::And" => all_bools(&arg).map(|b| Value::Bool(b.iter().all(|b| *b))),
            "Fn::Or" => all_bools(&arg).map(|b| Value::Bool(b.iter().any(|b| *b))),
            "Fn::Not" => all_bools(&arg)
                .filter(|b| b.len() == 1)
                .map(|b| Value::Bool(!b[0])),
            "Condition" => arg
                .as_str()
                .and_then(|c| self.condition(c))
                .map(Value::Bool),
            _ => None,
        };

        match resolved {
            Some(v) => Resolved::Value(v),
            None => Resolved::Unresolved(rebuild(name, arg)),
        }
    }

    fn reference(&self, arg: Value) -> Resolved {
        let Some(name) = arg.as_str() else {
            return Resolved::Unresolved(rebuild("Ref", arg));
        };
        if name == "AWS::NoValue" {
            return Resolved::NoValue;
        }
        match self.lookup(name) {
            Some(v) => Resolved::Value(v),
            None => Resolved::Unresolved(rebuild("Ref", arg)),
        }
    }

    /// Parameter override, parameter default, then pseudo parameter
    fn lookup(&self, name: &str) -> Option<Value> {
        let parameter = self.template.get("Parameters").and_then(|p| p.get(name));
        let parameter_type = parameter
            .and_then(|p| p.get("Type"))
            .and_then(Value::as_str);

        let value = self
            .options
            .parameter_overrides
            .get(name)
            .or_else(|| parameter.and_then(|p| p.get("Default")))
            .cloned();

        if let Some(value) = value {
            return Some(match value {
                Value::String(s) if is_list_parameter(parameter_type) => Value::Array(
                    s.split(',')
                        .map(|item| Value::String(item.trim().to_string()))
                        .collect(),
                ),
                other => other,
            });
        }

        self.options.pseudo_parameters.get(name)
    }

    fn find_in_map(&self, arg: &Value) -> Option<Value> {
        let keys = arg.as_array()?;
        if keys.len() < 3 {
            return None;
        }
        let map = scalar_string(&keys[0])?;
        let top = scalar_string(&keys[1])?;
        let second = scalar_string(&keys[2])?;
        self.template
            .get("Mappings")?
            .get(&map)?
            .get(&top)?
            .get(&second)
            .cloned()
    }

    fn get_azs(&self, arg: &Value) -> Option<Value> {
        let region = match arg.as_str()? {
            "" => self.options.pseudo_parameters.region.as_str(),
            region => region,
        };
        Some(Value::Array(
            ["a", "b", "c"]
                .iter()
                .map(|zone| Value::String(format!("{}{}", region, zone)))
                .collect(),
        ))
    }

    fn sub(&self, arg: &Value) -> Option<Value> {
        let (source, variables) = match arg {
            Value::String(s) => (s.as_str(), None),
            Value::Array(items) if items.len() == 2 => {
                (items[0].as_str()?, Some(items[1].as_object()?))
            }
            _ => return None,
        };

        let mut out = String::with_capacity(source.len());
        let mut last = 0;
        for captures in SUB_VARIABLE.captures_iter(source) {
            let whole = captures.get(0)?;
            let variable = captures.get(1)?.as_str();
            out.push_str(&source[last..whole.start()]);
            last = whole.end();

            if let Some(literal) = variable.strip_prefix('!') {
                out.push_str("${");
                out.push_str(literal);
                out.push('}');
                continue;
            }

            let variable = variable.trim();
            let value = match variables.and_then(|vars| vars.get(variable)) {
                Some(v) => v.clone(),
                None => self.lookup(variable)?,
            };
            out.push_str(&scalar_string(&value)?);
        }
        out.push_str(&source[last..]);

        Some(Value::String(out))
    }

    /// Evaluates a named condition, memoised; cycles evaluate to unknown
    fn condition(&mut self, name: &str) -> Option<bool> {
        if let Some(cached) = self.conditions.get(name) {
            return *cached;
        }
        self.conditions.insert(name.to_string(), None);

        let expression = self.template.get("Conditions")?.get(name)?.clone();
        let result = match self.walk(expression, true) {
            Resolved::Value(Value::Bool(b)) => Some(b),
            Resolved::Value(Value::String(s)) => s.parse().ok(),
            _ => None,
        };
        if result.is_none() {
            debug!("condition {} could not be evaluated", name);
        }
        self.conditions.insert(name.to_string(), result);
        result
    }
}

fn join(arg: &Value) -> Option<Value> {
    let items = arg.as_array()?;
    if items.len() != 2 {
        return None;
    }
    let delimiter = items[0].as_str()?;
    let parts = items[1]
        .as_array()?
        .iter()
        .map(scalar_string)
        .collect::<Option<Vec<_>>>()?;
    Some(Value::String(parts.join(delimiter)))
}

fn select(arg: &Value) -> Option<Value> {
    let items = arg.as_array()?;
    if items.len() != 2 {
        return None;
    }
    let index = index_value(&items[0])?;
    items[1].as_array()?.get(index).cloned()
}

fn split(arg: &Value) -> Option<Value> {
    let items = arg.as_array()?;
    if items.len() != 2 {
        return None;
    }
    let delimiter = items[0].as_str()?;
    let source = items[1].as_str()?;
    Some(Value::Array(
        source
            .split(delimiter)
            .map(|part| Value::String(part.to_string()))
            .collect(),
    ))
}

/// CloudFormation compares scalars by their string form
fn equals(arg: &Value) -> Option<Value> {
    let items = arg.as_array()?;
    if items.len() != 2 {
        return None;
    }
    let equal = match (scalar_string(&items[0]), scalar_string(&items[1])) {
        (Some(a), Some(b)) => a == b,
        _ => items[0] == items[1],
    };
    Some(Value::Bool(equal))
}

fn all_bools(arg: &Value) -> Option<Vec<bool>> {
    arg.as_array()?
        .iter()
        .map(|v| match v {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        })
        .collect()
}
