//! Ethereum ABI artifact decoding
//!
//! Decodes ABI JSON into raw entries without interpreting them. The only
//! failure here is a payload that is not a JSON array of entry objects.

use serde::Deserialize;

use mcpgen_core::{Error, Result};

/// One entry of an ABI JSON array, as declared
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    /// Entry kind discriminator; Solidity treats a missing type as "function"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Entry name
    #[serde(default)]
    pub name: Option<String>,
    /// Input parameters
    #[serde(default)]
    pub inputs: Option<Vec<AbiParameter>>,
    /// Output parameters
    #[serde(default)]
    pub outputs: Option<Vec<AbiParameter>>,
    /// State mutability (pure, view, nonpayable, payable)
    #[serde(default)]
    pub state_mutability: Option<String>,
    /// Anonymous event flag
    #[serde(default)]
    pub anonymous: bool,
    /// Legacy read-only flag
    #[serde(default)]
    pub constant: bool,
    /// Legacy payable flag
    #[serde(default)]
    pub payable: bool,
}

impl AbiEntry {
    /// Classified entry kind
    pub fn entry_kind(&self) -> EntryKind {
        EntryKind::from(self.kind.as_deref().unwrap_or("function"))
    }

    /// Declared name, empty when absent
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Declared inputs
    pub fn inputs(&self) -> &[AbiParameter] {
        self.inputs.as_deref().unwrap_or(&[])
    }

    /// Declared outputs
    pub fn outputs(&self) -> &[AbiParameter] {
        self.outputs.as_deref().unwrap_or(&[])
    }

    /// Declared state mutability; an empty string counts as absent
    pub fn declared_mutability(&self) -> Option<&str> {
        self.state_mutability.as_deref().filter(|s| !s.is_empty())
    }
}

/// ABI parameter definition
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiParameter {
    /// Parameter name
    #[serde(default)]
    pub name: Option<String>,
    /// Parameter type (e.g. uint256, address[], tuple[2])
    #[serde(rename = "type", default)]
    pub param_type: String,
    /// Components (for tuples and structs)
    #[serde(default)]
    pub components: Option<Vec<AbiParameter>>,
    /// Whether parameter is indexed (for events)
    #[serde(default)]
    pub indexed: bool,
}

impl AbiParameter {
    /// Declared name, empty when absent
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Kind of an ABI entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular function
    Function,
    /// Event
    Event,
    /// Custom error
    Error,
    /// Constructor
    Constructor,
    /// Fallback function
    Fallback,
    /// Receive function
    Receive,
    /// Anything else; skipped by the normalizer
    Unknown(String),
}

impl EntryKind {
    /// Lowercase wire name
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::Function => "function",
            EntryKind::Event => "event",
            EntryKind::Error => "error",
            EntryKind::Constructor => "constructor",
            EntryKind::Fallback => "fallback",
            EntryKind::Receive => "receive",
            EntryKind::Unknown(kind) => kind,
        }
    }
}

impl From<&str> for EntryKind {
    fn from(s: &str) -> Self {
        match s {
            "function" => EntryKind::Function,
            "event" => EntryKind::Event,
            "error" => EntryKind::Error,
            "constructor" => EntryKind::Constructor,
            "fallback" => EntryKind::Fallback,
            "receive" => EntryKind::Receive,
            other => EntryKind::Unknown(other.to_string()),
        }
    }
}

/// Decode an ABI JSON payload into its entries
pub fn decode_entries(artifact: &[u8]) -> Result<Vec<AbiEntry>> {
    serde_json::from_slice(artifact).map_err(|e| Error::decode(e.to_string()))
}

/// Canonical signature `name(type1,type2,...)` built from declared types
pub fn canonical_signature(name: &str, params: &[AbiParameter]) -> String {
    let types: Vec<&str> = params.iter().map(|p| p.param_type.as_str()).collect();
    format!("{}({})", name, types.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_entries_defaults() {
        let entries = decode_entries(
            br#"[
                {"name": "legacy", "inputs": [], "constant": true},
                {"type": "event", "name": "Ping", "inputs": null, "anonymous": true},
                {"type": "function", "name": "f", "stateMutability": ""}
            ]"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].entry_kind(), EntryKind::Function);
        assert!(entries[0].constant);
        assert_eq!(entries[1].entry_kind(), EntryKind::Event);
        assert!(entries[1].inputs().is_empty());
        assert!(entries[1].anonymous);
        assert_eq!(entries[2].declared_mutability(), None);
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_entries(br#"{"type": "function"}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        let err = decode_entries(b"[{\"type\": ").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_unknown_entry_kind() {
        let entries = decode_entries(br#"[{"type": "modifier", "name": "onlyOwner"}]"#).unwrap();
        assert_eq!(
            entries[0].entry_kind(),
            EntryKind::Unknown("modifier".to_string())
        );
    }

    #[test]
    fn test_canonical_signature_uses_declared_types() {
        let params = vec![
            AbiParameter {
                param_type: "address".to_string(),
                ..Default::default()
            },
            AbiParameter {
                param_type: "tuple[]".to_string(),
                ..Default::default()
            },
        ];
        assert_eq!(canonical_signature("submit", &params), "submit(address,tuple[])");
        assert_eq!(canonical_signature("ping", &[]), "ping()");
    }
}
