//! Template data derived from a contract IR
//!
//! Everything the templates print is computed here so the templates stay
//! free of logic beyond iteration. Values that land inside TypeScript or JSON
//! string literals are pre-quoted as JSON (`*_json` fields).

use std::collections::{HashMap, HashSet};

use convert_case::{Case, Casing};
use serde::Serialize;
use serde_json::{json, Value};

use mcpgen_core::{ContractIR, Event, Function, Parameter, ParameterType, Result};

use crate::type_map::{field_name, zod_type};
use crate::typescript::RenderOptions;

/// Root object handed to every template
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub contract: ContractView,
    pub package_name: String,
    pub package_name_json: String,
    pub package_description_json: String,
    pub server_name_json: String,
    pub server_version: String,
    pub server_version_json: String,
    pub default_rpc_url: String,
    pub rpc_url_json: String,
    pub address_json: String,
    pub include_tests: bool,
    pub has_tools: bool,
    pub tools: Vec<ToolView>,
    pub functions: Vec<FunctionView>,
    pub has_events: bool,
    pub events: Vec<EventView>,
    pub abi_json: String,
    pub abi_entry_count: usize,
}

/// Contract metadata as printed in generated files
#[derive(Debug, Clone, Serialize)]
pub struct ContractView {
    pub name: String,
    pub chain: String,
    pub address: String,
    pub has_address: bool,
    pub description: String,
}

/// One exposed tool (a read-only callable function)
#[derive(Debug, Clone, Serialize)]
pub struct ToolView {
    pub name: String,
    pub name_json: String,
    pub enum_key: String,
    pub schema_name: String,
    pub description: String,
    pub description_json: String,
    pub call_target_json: String,
    pub call_args: String,
    pub has_inputs: bool,
    pub fields: Vec<SchemaField>,
}

/// One field of a tool's input schema
#[derive(Debug, Clone, Serialize)]
pub struct SchemaField {
    pub name: String,
    pub zod: String,
    pub description_json: String,
}

/// Any function, exposed or not, for documentation
#[derive(Debug, Clone, Serialize)]
pub struct FunctionView {
    pub name: String,
    pub kind: String,
    pub signature: String,
    pub state_mutability: String,
    pub description: String,
    pub exposed: bool,
}

/// An event, for documentation
#[derive(Debug, Clone, Serialize)]
pub struct EventView {
    pub name: String,
    pub signature: String,
    pub description: String,
}

impl RenderContext {
    /// Build the template data for a contract
    pub fn build(contract: &ContractIR, options: &RenderOptions) -> Result<Self> {
        let metadata = &contract.metadata;
        let package_name = package_name(&metadata.name);
        let overloads = declared_name_counts(contract);
        let mut identifiers = ToolIdentifiers::default();

        let tools: Vec<ToolView> = contract
            .callable_functions()
            .filter(|f| f.is_read_only())
            .map(|f| tool_view(f, &overloads, &mut identifiers))
            .collect::<Result<_>>()?;

        let functions = contract
            .functions
            .iter()
            .map(|f| FunctionView {
                name: f.name.clone(),
                kind: function_kind(f).to_string(),
                signature: f.signature.clone(),
                state_mutability: f.state_mutability.to_string(),
                description: f.description.clone(),
                exposed: is_exposed(f),
            })
            .collect();

        let events: Vec<EventView> = contract
            .events
            .iter()
            .map(|e| EventView {
                name: e.name.clone(),
                signature: e.signature.clone(),
                description: e.description.clone(),
            })
            .collect();

        let abi = contract_abi(contract);
        let abi_entry_count = abi.len();

        Ok(Self {
            contract: ContractView {
                name: metadata.name.clone(),
                chain: metadata.chain.clone(),
                address: metadata.address_or_empty().to_string(),
                has_address: metadata.address.is_some(),
                description: metadata.description.clone(),
            },
            package_name_json: quote(&package_name)?,
            package_description_json: quote(&format!(
                "MCP server for {} smart contract",
                metadata.name
            ))?,
            server_name_json: quote(&package_name)?,
            package_name,
            server_version: options.server_version.clone(),
            server_version_json: quote(&options.server_version)?,
            default_rpc_url: options.default_rpc_url.clone(),
            rpc_url_json: quote(&options.default_rpc_url)?,
            address_json: quote(metadata.address_or_empty())?,
            include_tests: options.include_tests,
            has_tools: !tools.is_empty(),
            tools,
            functions,
            has_events: !events.is_empty(),
            events,
            abi_json: indent(&serde_json::to_string_pretty(&Value::Array(abi))?, "  "),
            abi_entry_count,
        })
    }
}

/// npm package name: lowercase contract name, spaces as dashes
pub fn package_name(contract_name: &str) -> String {
    format!(
        "{}-mcp-server",
        contract_name.trim().to_lowercase().replace(' ', "-")
    )
}

/// Only read-only regular functions are registered as tools
pub fn is_exposed(function: &Function) -> bool {
    !function.is_special() && function.is_read_only()
}

fn function_kind(function: &Function) -> &'static str {
    if function.is_constructor {
        "constructor"
    } else if function.is_fallback {
        "fallback"
    } else if function.is_receive {
        "receive"
    } else {
        "function"
    }
}

fn declared_name_counts(contract: &ContractIR) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for function in contract.callable_functions() {
        *counts.entry(function.declared_name()).or_insert(0) += 1;
    }
    counts
}

/// TypeScript identifiers already handed out to tools
#[derive(Debug, Default)]
struct ToolIdentifiers {
    enum_keys: HashSet<String>,
    schema_names: HashSet<String>,
}

impl ToolIdentifiers {
    /// Claim the enum key and schema name for a function.
    ///
    /// Case conversion is lossy (`getValue` and `get_value` both become
    /// `GET_VALUE`), so a name that lands on identifiers already taken gets a
    /// numeric suffix, starting at 2.
    fn claim(&mut self, function_name: &str) -> (String, String) {
        let mut key = function_name.to_case(Case::UpperSnake);
        let mut stem = function_name.to_case(Case::Pascal);
        if key.is_empty() || stem.is_empty() {
            key = "TOOL".to_string();
            stem = "Tool".to_string();
        }

        let mut enum_key = key.clone();
        let mut schema_name = format!("{}Schema", stem);
        let mut suffix = 2;
        while self.enum_keys.contains(&enum_key) || self.schema_names.contains(&schema_name) {
            enum_key = format!("{}_{}", key, suffix);
            schema_name = format!("{}{}Schema", stem, suffix);
            suffix += 1;
        }

        self.enum_keys.insert(enum_key.clone());
        self.schema_names.insert(schema_name.clone());
        (enum_key, schema_name)
    }
}

fn tool_view(
    function: &Function,
    overloads: &HashMap<&str, usize>,
    identifiers: &mut ToolIdentifiers,
) -> Result<ToolView> {
    let declared = function.declared_name();

    // Overloaded names are ambiguous to ethers; address them by full signature
    let call_target = if overloads.get(declared).copied().unwrap_or(0) > 1 {
        let types: Vec<String> = function.inputs.iter().map(|p| p.ty.abi_type()).collect();
        format!("{}({})", declared, types.join(","))
    } else {
        declared.to_string()
    };

    let fields = function
        .inputs
        .iter()
        .enumerate()
        .map(|(i, input)| schema_field(input, i))
        .collect::<Result<Vec<_>>>()?;

    let call_args = fields
        .iter()
        .map(|field| format!("parsed.{}", field.name))
        .collect::<Vec<_>>()
        .join(", ");

    let (enum_key, schema_name) = identifiers.claim(&function.name);

    Ok(ToolView {
        name: function.name.clone(),
        name_json: quote(&function.name)?,
        enum_key,
        schema_name,
        description: function.description.clone(),
        description_json: quote(&function.description)?,
        call_target_json: quote(&call_target)?,
        call_args,
        has_inputs: !fields.is_empty(),
        fields,
    })
}

fn schema_field(param: &Parameter, index: usize) -> Result<SchemaField> {
    let description = if param.description.trim().is_empty() {
        param.ty.display_type()
    } else {
        param.description.clone()
    };

    Ok(SchemaField {
        name: field_name(&param.name, index),
        zod: zod_type(&param.ty),
        description_json: quote(&description)?,
    })
}

/// ethers-compatible ABI covering every function and event
fn contract_abi(contract: &ContractIR) -> Vec<Value> {
    let functions = contract.functions.iter().map(function_abi);
    let events = contract.events.iter().map(event_abi);
    functions.chain(events).collect()
}

fn function_abi(function: &Function) -> Value {
    let kind = function_kind(function);
    let mut entry = json!({ "type": kind });

    if kind == "function" {
        entry["name"] = json!(function.declared_name());
        entry["outputs"] = Value::Array(function.outputs.iter().map(parameter_abi).collect());
    }
    if kind == "function" || kind == "constructor" {
        entry["inputs"] = Value::Array(function.inputs.iter().map(parameter_abi).collect());
    }
    entry["stateMutability"] = json!(function.state_mutability.as_str());

    entry
}

fn event_abi(event: &Event) -> Value {
    let inputs: Vec<Value> = event
        .parameters
        .iter()
        .map(|p| {
            let mut input = type_abi(&p.name, &p.ty);
            input["indexed"] = json!(p.indexed);
            input
        })
        .collect();

    json!({
        "type": "event",
        "name": event.name,
        "anonymous": event.chain_data.anonymous,
        "inputs": inputs,
    })
}

fn parameter_abi(param: &Parameter) -> Value {
    type_abi(&param.name, &param.ty)
}

fn type_abi(name: &str, ty: &ParameterType) -> Value {
    let mut value = json!({ "name": name, "type": ty.declared_type() });
    if ty.is_tuple() {
        value["components"] = Value::Array(ty.components.iter().map(parameter_abi).collect());
    }
    value
}

/// JSON string literal, valid in both JSON and TypeScript
fn quote(s: &str) -> Result<String> {
    Ok(serde_json::to_string(s)?)
}

/// Indent every line after the first
fn indent(text: &str, prefix: &str) -> String {
    text.replace('\n', &format!("\n{}", prefix))
}
