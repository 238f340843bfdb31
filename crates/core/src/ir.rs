//! Chain-agnostic intermediate representation of a smart contract
//!
//! Every importer produces a [`ContractIR`] and every renderer consumes one, so
//! renderers never see chain-specific artifact formats. The model serializes to
//! camelCase JSON with empty collections and unset options omitted.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

/// A smart contract in the intermediate representation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractIR {
    /// Metadata about the contract
    pub metadata: ContractMetadata,

    /// Functions defined in the contract, in declaration order
    #[serde(default)]
    pub functions: Vec<Function>,

    /// Events that can be emitted by the contract
    #[serde(default)]
    pub events: Vec<Event>,

    /// Errors that can be thrown by the contract
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ContractError>,

    /// Custom types defined in the contract
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<CustomType>,
}

impl ContractIR {
    /// Create an empty contract with the given metadata
    pub fn new(metadata: ContractMetadata) -> Self {
        Self {
            metadata,
            ..Default::default()
        }
    }

    /// Parse an IR document from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the IR as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Functions that are regular callable functions (not constructor/fallback/receive)
    pub fn callable_functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.iter().filter(|f| !f.is_special())
    }

    /// Look up a function by its (possibly disambiguated) name
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Look up an event by name
    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.name == name)
    }
}

/// Information about the contract itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractMetadata {
    /// Name of the contract
    #[serde(default)]
    pub name: String,

    /// Description of the contract's purpose
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Address where the contract is deployed (if known)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Chain identifier (e.g. "ethereum", "solana")
    #[serde(default)]
    pub chain: String,

    /// Opaque chain-specific attributes supplied by the caller
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub chain_data: BTreeMap<String, serde_json::Value>,

    /// Source code information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceInfo>,
}

impl ContractMetadata {
    /// Create metadata for a named contract on a chain
    pub fn new<N: Into<String>, C: Into<String>>(name: N, chain: C) -> Self {
        Self {
            name: name.into(),
            chain: chain.into(),
            ..Default::default()
        }
    }

    /// Set the deployed address
    pub fn with_address<A: Into<String>>(mut self, address: A) -> Self {
        let address = address.into();
        self.address = if address.is_empty() { None } else { Some(address) };
        self
    }

    /// Deployed address, or an empty string when unknown
    pub fn address_or_empty(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }
}

/// Information about the contract's source code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    /// Programming language
    #[serde(default)]
    pub language: String,

    /// Compiler version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,

    /// Source code URL or path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// A callable function in the contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    /// Function name, unique within the contract
    #[serde(default)]
    pub name: String,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Canonical signature (e.g. "transfer(address,uint256)")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub signature: String,

    /// Function selector, when the importer knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Input parameters
    #[serde(default)]
    pub inputs: Vec<Parameter>,

    /// Output parameters
    #[serde(default)]
    pub outputs: Vec<Parameter>,

    /// How the function interacts with contract state
    pub state_mutability: StateMutability,

    /// Function visibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    /// Whether this is a constructor
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_constructor: bool,

    /// Whether this is a fallback function
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_fallback: bool,

    /// Whether this is a receive function
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_receive: bool,

    /// Chain-specific function data
    #[serde(default, skip_serializing_if = "FunctionChainData::is_empty")]
    pub chain_data: FunctionChainData,
}

impl Function {
    /// Create a function with no parameters
    pub fn new<N: Into<String>>(name: N, state_mutability: StateMutability) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            signature: String::new(),
            selector: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
            state_mutability,
            visibility: None,
            is_constructor: false,
            is_fallback: false,
            is_receive: false,
            chain_data: FunctionChainData::default(),
        }
    }

    /// Constructor, fallback or receive
    pub fn is_special(&self) -> bool {
        self.is_constructor || self.is_fallback || self.is_receive
    }

    /// Pure or view
    pub fn is_read_only(&self) -> bool {
        matches!(
            self.state_mutability,
            StateMutability::Pure | StateMutability::View
        )
    }

    /// Name as declared in the artifact, before overload disambiguation
    pub fn declared_name(&self) -> &str {
        self.chain_data
            .original_name
            .as_deref()
            .unwrap_or(&self.name)
    }

    /// Whether overload disambiguation renamed this function
    pub fn is_renamed_overload(&self) -> bool {
        self.chain_data.original_name.is_some()
    }

    /// Build the derived description from the current parameters
    pub fn synthesize_description(&self) -> String {
        let mut description = self.declared_name().to_string();

        if !self.inputs.is_empty() {
            description.push_str(" - Parameters: ");
            let rendered: Vec<String> = self
                .inputs
                .iter()
                .map(|input| format!("{} ({})", input.name, input.ty.display_type()))
                .collect();
            description.push_str(&rendered.join(", "));
        }

        if !self.outputs.is_empty() {
            description.push_str(" - Returns: ");
            let rendered: Vec<String> = self
                .outputs
                .iter()
                .enumerate()
                .map(|(i, output)| {
                    let name = if output.name.is_empty() {
                        format!("output{}", i)
                    } else {
                        output.name.clone()
                    };
                    format!("{} ({})", name, output.ty.display_type())
                })
                .collect();
            description.push_str(&rendered.join(", "));
        }

        description
    }
}

/// Chain-specific attributes the importers attach to a function
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionChainData {
    /// Declared name when overload disambiguation renamed the function
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,

    /// Declared signature when overload disambiguation renamed the function
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_signature: Option<String>,

    /// Legacy `constant` flag from the artifact
    #[serde(default, skip_serializing_if = "is_false")]
    pub constant: bool,

    /// Legacy `payable` flag from the artifact
    #[serde(default, skip_serializing_if = "is_false")]
    pub payable: bool,
}

impl FunctionChainData {
    /// True when no attribute is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// An event that can be emitted by the contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event name
    #[serde(default)]
    pub name: String,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Canonical event signature
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub signature: String,

    /// Parameters included in the event
    #[serde(default)]
    pub parameters: Vec<EventParameter>,

    /// Chain-specific event data
    #[serde(default, skip_serializing_if = "EventChainData::is_empty")]
    pub chain_data: EventChainData,
}

impl Event {
    /// Build the derived description from the current parameters
    pub fn synthesize_description(&self) -> String {
        let mut description = format!("{} event", self.name);

        if !self.parameters.is_empty() {
            description.push_str(" - Parameters: ");
            let rendered: Vec<String> = self
                .parameters
                .iter()
                .map(|param| {
                    let indexed = if param.indexed { " (indexed)" } else { "" };
                    format!("{} ({}){}", param.name, param.ty.display_type(), indexed)
                })
                .collect();
            description.push_str(&rendered.join(", "));
        }

        description
    }
}

/// Chain-specific attributes the importers attach to an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventChainData {
    /// Anonymous events carry no signature topic
    #[serde(default, skip_serializing_if = "is_false")]
    pub anonymous: bool,

    /// Number of indexed parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_count: Option<usize>,
}

impl EventChainData {
    /// True when no attribute is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A parameter in an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParameter {
    /// Parameter name
    #[serde(default)]
    pub name: String,

    /// Parameter type
    #[serde(rename = "type")]
    pub ty: ParameterType,

    /// Whether the parameter is indexed
    #[serde(default)]
    pub indexed: bool,
}

/// A function, error or struct-field parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name, may be empty for unnamed outputs
    #[serde(default)]
    pub name: String,

    /// Parameter type
    #[serde(rename = "type")]
    pub ty: ParameterType,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Parameter {
    /// Create a parameter of the given type
    pub fn new<N: Into<String>>(name: N, ty: ParameterType) -> Self {
        Self {
            name: name.into(),
            ty,
            description: String::new(),
        }
    }
}

/// Recursive type descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterType {
    /// Base type (e.g. "uint256", "address", "tuple")
    #[serde(default)]
    pub base_type: String,

    /// Whether this is an array
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_array: bool,

    /// Array length; 0 means dynamic. Ignored unless `is_array`.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub array_size: i64,

    /// Whether this is a map
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_map: bool,

    /// Key type when `is_map`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub map_key_type: String,

    /// Struct fields when the base type is a tuple
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Parameter>,

    /// Chain-specific type data
    #[serde(default, skip_serializing_if = "TypeChainData::is_empty")]
    pub chain_data: TypeChainData,
}

impl ParameterType {
    /// A scalar type
    pub fn scalar<B: Into<String>>(base_type: B) -> Self {
        Self {
            base_type: base_type.into(),
            ..Default::default()
        }
    }

    /// A dynamic array of `base_type`
    pub fn dynamic_array<B: Into<String>>(base_type: B) -> Self {
        Self {
            base_type: base_type.into(),
            is_array: true,
            ..Default::default()
        }
    }

    /// A fixed-length array of `base_type`
    pub fn fixed_array<B: Into<String>>(base_type: B, size: i64) -> Self {
        Self {
            base_type: base_type.into(),
            is_array: true,
            array_size: size,
            ..Default::default()
        }
    }

    /// Whether this is a structured type with fields
    pub fn is_tuple(&self) -> bool {
        !self.components.is_empty()
    }

    /// Array suffix for the outer dimension, or an empty string
    fn outer_suffix(&self) -> String {
        if !self.is_array {
            String::new()
        } else if self.array_size > 0 {
            format!("[{}]", self.array_size)
        } else {
            "[]".to_string()
        }
    }

    /// Suffixes of the dimensions nested inside the outer one
    fn inner_suffix(&self) -> String {
        self.chain_data
            .inner_dimensions
            .iter()
            .map(|size| {
                if *size > 0 {
                    format!("[{}]", size)
                } else {
                    "[]".to_string()
                }
            })
            .collect()
    }

    /// Rendered type used in synthesized descriptions
    pub fn display_type(&self) -> String {
        if self.is_array {
            format!("{}{}{}", self.base_type, self.inner_suffix(), self.outer_suffix())
        } else if self.is_tuple() {
            "tuple".to_string()
        } else {
            self.base_type.clone()
        }
    }

    /// Canonical ABI type string, with tuples expanded to their component types
    pub fn abi_type(&self) -> String {
        let base = if self.is_tuple() {
            let inner: Vec<String> = self.components.iter().map(|c| c.ty.abi_type()).collect();
            format!("({})", inner.join(","))
        } else if self.is_map {
            format!("mapping({} => {})", self.map_key_type, self.base_type)
        } else {
            self.base_type.clone()
        };
        format!("{}{}{}", base, self.inner_suffix(), self.outer_suffix())
    }

    /// Declared ABI type string, keeping `tuple` as the base of structured types
    pub fn declared_type(&self) -> String {
        let base = if self.is_map {
            format!("mapping({} => {})", self.map_key_type, self.base_type)
        } else {
            self.base_type.clone()
        };
        format!("{}{}{}", base, self.inner_suffix(), self.outer_suffix())
    }
}

/// Structural metadata recorded during type resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeChainData {
    /// The declared type was an array
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_array: bool,

    /// The outer dimension has a fixed length
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_fixed_array: bool,

    /// The outer dimension is dynamic
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_dynamic_array: bool,

    /// Fixed length of the outer dimension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_size: Option<i64>,

    /// Lengths of nested dimensions, innermost first; 0 means dynamic
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner_dimensions: Vec<i64>,

    /// The base type is a tuple with resolved components
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_tuple: bool,

    /// Human-readable shape of a tuple, e.g. "{name: string, age: uint256}"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_description: Option<String>,
}

impl TypeChainData {
    /// True when no attribute is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A custom error that can be thrown by the contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractError {
    /// Error name
    #[serde(default)]
    pub name: String,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Error parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

/// A custom type defined in the contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomType {
    /// Type name
    #[serde(default)]
    pub name: String,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Fields in the custom type
    #[serde(default)]
    pub fields: Vec<Parameter>,
}

/// How a function interacts with contract state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StateMutability {
    /// Neither reads nor modifies state
    Pure,
    /// Reads but does not modify state
    View,
    /// Modifies state, does not accept value
    Nonpayable,
    /// Modifies state and accepts value
    Payable,
    /// Unrecognised value, kept so the validator can report it
    Other(String),
}

impl StateMutability {
    /// Lowercase wire name
    pub fn as_str(&self) -> &str {
        match self {
            StateMutability::Pure => "pure",
            StateMutability::View => "view",
            StateMutability::Nonpayable => "nonpayable",
            StateMutability::Payable => "payable",
            StateMutability::Other(s) => s,
        }
    }
}

impl From<&str> for StateMutability {
    fn from(s: &str) -> Self {
        match s {
            "pure" => StateMutability::Pure,
            "view" => StateMutability::View,
            "nonpayable" => StateMutability::Nonpayable,
            "payable" => StateMutability::Payable,
            other => StateMutability::Other(other.to_string()),
        }
    }
}

impl From<String> for StateMutability {
    fn from(s: String) -> Self {
        StateMutability::from(s.as_str())
    }
}

impl From<StateMutability> for String {
    fn from(m: StateMutability) -> Self {
        m.as_str().to_string()
    }
}

impl fmt::Display for StateMutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Function visibility
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Visibility {
    /// Callable only from outside the contract
    External,
    /// Callable from inside or outside
    Public,
    /// Callable from the contract and derived contracts
    Internal,
    /// Callable only from the contract
    Private,
    /// Unrecognised value, kept so the validator can report it
    Other(String),
}

impl Visibility {
    /// Lowercase wire name
    pub fn as_str(&self) -> &str {
        match self {
            Visibility::External => "external",
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
            Visibility::Other(s) => s,
        }
    }
}

impl From<&str> for Visibility {
    fn from(s: &str) -> Self {
        match s {
            "external" => Visibility::External,
            "public" => Visibility::Public,
            "internal" => Visibility::Internal,
            "private" => Visibility::Private,
            other => Visibility::Other(other.to_string()),
        }
    }
}

impl From<String> for Visibility {
    fn from(s: String) -> Self {
        Visibility::from(s.as_str())
    }
}

impl From<Visibility> for String {
    fn from(v: Visibility) -> Self {
        v.as_str().to_string()
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contract() -> ContractIR {
        let mut person = ParameterType::scalar("tuple");
        person.components = vec![
            Parameter::new("name", ParameterType::scalar("string")),
            Parameter::new("age", ParameterType::scalar("uint256")),
        ];
        person.chain_data.is_tuple = true;
        person.chain_data.type_description = Some("{name: string, age: uint256}".to_string());

        let mut balance_of = Function::new("balanceOf", StateMutability::View);
        balance_of.signature = "balanceOf(address)".to_string();
        balance_of.visibility = Some(Visibility::Public);
        balance_of.inputs = vec![Parameter::new("account", ParameterType::scalar("address"))];
        balance_of.outputs = vec![Parameter::new("", ParameterType::scalar("uint256"))];

        let mut overload = Function::new("balanceOf_1", StateMutability::View);
        overload.inputs = vec![Parameter::new("who", person)];
        overload.chain_data.original_name = Some("balanceOf".to_string());
        overload.chain_data.original_signature = Some("balanceOf(tuple)".to_string());

        let mut metadata = ContractMetadata::new("Token", "ethereum").with_address("0xabc");
        metadata
            .chain_data
            .insert("chainId".to_string(), serde_json::json!(1));

        ContractIR {
            metadata,
            functions: vec![balance_of, overload],
            events: vec![Event {
                name: "Transfer".to_string(),
                parameters: vec![EventParameter {
                    name: "from".to_string(),
                    ty: ParameterType::scalar("address"),
                    indexed: true,
                }],
                chain_data: EventChainData {
                    anonymous: false,
                    indexed_count: Some(1),
                },
                ..Default::default()
            }],
            errors: vec![ContractError {
                name: "Unauthorized".to_string(),
                ..Default::default()
            }],
            types: Vec::new(),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let contract = sample_contract();
        let json = contract.to_json_pretty().unwrap();
        let decoded = ContractIR::from_json(&json).unwrap();
        assert_eq!(decoded, contract);
    }

    #[test]
    fn test_json_uses_camel_case_and_omits_empty() {
        let contract = sample_contract();
        let value = serde_json::to_value(&contract).unwrap();

        let function = &value["functions"][0];
        assert_eq!(function["stateMutability"], "view");
        assert_eq!(function["visibility"], "public");
        assert!(function.get("isConstructor").is_none());
        assert!(function.get("chainData").is_none());
        assert!(function.get("selector").is_none());
        assert_eq!(function["inputs"][0]["type"]["baseType"], "address");
        assert!(function["inputs"][0]["type"].get("components").is_none());

        let overload = &value["functions"][1];
        assert_eq!(overload["chainData"]["originalName"], "balanceOf");
        assert_eq!(
            overload["inputs"][0]["type"]["chainData"]["typeDescription"],
            "{name: string, age: uint256}"
        );

        assert!(value.get("types").is_none());
        assert_eq!(value["metadata"]["chainData"]["chainId"], 1);
    }

    #[test]
    fn test_unknown_mutability_survives_decode() {
        let json = r#"{
            "metadata": {"name": "X", "chain": "ethereum"},
            "functions": [{"name": "f", "stateMutability": "mutable", "visibility": ""}]
        }"#;
        let contract = ContractIR::from_json(json).unwrap();
        assert_eq!(
            contract.functions[0].state_mutability,
            StateMutability::Other("mutable".to_string())
        );
        assert_eq!(
            contract.functions[0].visibility,
            Some(Visibility::Other(String::new()))
        );
    }

    #[test]
    fn test_missing_mutability_is_rejected() {
        let json = r#"{
            "metadata": {"name": "X", "chain": "ethereum"},
            "functions": [{"name": "f"}]
        }"#;
        assert!(ContractIR::from_json(json).is_err());
    }

    #[test]
    fn test_display_type() {
        assert_eq!(ParameterType::scalar("address").display_type(), "address");
        assert_eq!(ParameterType::dynamic_array("uint256").display_type(), "uint256[]");
        assert_eq!(ParameterType::fixed_array("uint8", 3).display_type(), "uint8[3]");

        let mut nested = ParameterType::dynamic_array("uint256");
        nested.chain_data.inner_dimensions = vec![2];
        assert_eq!(nested.display_type(), "uint256[2][]");

        let mut tuple = ParameterType::scalar("tuple");
        tuple.components = vec![Parameter::new("a", ParameterType::scalar("bool"))];
        assert_eq!(tuple.display_type(), "tuple");
        tuple.is_array = true;
        assert_eq!(tuple.display_type(), "tuple[]");
    }

    #[test]
    fn test_abi_type_expands_tuples() {
        let mut tuple = ParameterType::dynamic_array("tuple");
        tuple.components = vec![
            Parameter::new("name", ParameterType::scalar("string")),
            Parameter::new("scores", ParameterType::fixed_array("uint256", 3)),
        ];
        assert_eq!(tuple.abi_type(), "(string,uint256[3])[]");
        assert_eq!(tuple.declared_type(), "tuple[]");
    }

    #[test]
    fn test_function_description_uses_declared_name() {
        let contract = sample_contract();
        assert_eq!(
            contract.functions[0].synthesize_description(),
            "balanceOf - Parameters: account (address) - Returns: output0 (uint256)"
        );
        assert_eq!(
            contract.functions[1].synthesize_description(),
            "balanceOf - Parameters: who (tuple)"
        );
        assert_eq!(
            contract.events[0].synthesize_description(),
            "Transfer event - Parameters: from (address) (indexed)"
        );
    }
}
