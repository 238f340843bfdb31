//! Ethereum ABI to contract IR normalization

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use mcpgen_core::{
    ArtifactNormalizer, ContractError, ContractIR, ContractMetadata, Event, EventChainData,
    EventParameter, Function, FunctionChainData, Result, StateMutability, Visibility,
};

use super::parser::{canonical_signature, decode_entries, AbiEntry, EntryKind};
use super::types::{resolve_parameters, resolve_type};

/// Chain identifier used when the caller leaves metadata.chain blank
pub const DEFAULT_CHAIN: &str = "ethereum";

/// Record of declared function names within one contract, used to rename
/// overloads.
///
/// The first declaration of a name keeps it; the n-th repeat becomes
/// `name_n` (n starting at 1). A candidate that some earlier function already
/// received, such as a declared `foo_1` after two `foo` overloads, moves on to
/// the next free suffix.
#[derive(Debug, Default)]
pub struct OverloadTracker {
    seen: HashMap<String, usize>,
    assigned: HashSet<String>,
}

impl OverloadTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration and return the unique name to use for it
    pub fn assign(&mut self, declared: &str) -> String {
        let count = self.seen.entry(declared.to_string()).or_insert(0);
        let mut name = if *count == 0 {
            declared.to_string()
        } else {
            format!("{}_{}", declared, count)
        };
        *count += 1;

        while self.assigned.contains(&name) {
            name = format!("{}_{}", declared, count);
            *count += 1;
        }

        self.assigned.insert(name.clone());
        name
    }
}

/// Normalizer for Ethereum ABI JSON artifacts
///
/// Every call starts a fresh overload counter, so one instance can normalize
/// any number of artifacts.
#[derive(Debug, Default)]
pub struct AbiNormalizer;

impl AbiNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize ABI JSON held in a string
    pub fn normalize_str(&self, content: &str, metadata: ContractMetadata) -> Result<ContractIR> {
        self.normalize_entries(decode_entries(content.as_bytes())?, metadata)
    }

    /// Normalize already decoded ABI entries
    pub fn normalize_entries(
        &self,
        entries: Vec<AbiEntry>,
        mut metadata: ContractMetadata,
    ) -> Result<ContractIR> {
        if metadata.chain.trim().is_empty() {
            metadata.chain = DEFAULT_CHAIN.to_string();
        }

        let mut contract = ContractIR::new(metadata);
        let mut overloads = OverloadTracker::new();

        for entry in &entries {
            let kind = entry.entry_kind();
            debug!(kind = kind.as_str(), name = entry.name(), "Normalizing ABI entry");

            match kind {
                EntryKind::Function => {
                    contract.functions.push(parse_function(entry, &mut overloads)?)
                }
                EntryKind::Event => contract.events.push(parse_event(entry)?),
                EntryKind::Error => contract.errors.push(parse_error(entry)?),
                EntryKind::Constructor => contract.functions.push(parse_constructor(entry)?),
                EntryKind::Fallback => contract.functions.push(parse_fallback(entry)),
                EntryKind::Receive => contract.functions.push(parse_receive()),
                EntryKind::Unknown(other) => {
                    debug!(kind = %other, "Skipping unknown ABI entry kind");
                }
            }
        }

        info!(
            contract = %contract.metadata.name,
            functions = contract.functions.len(),
            events = contract.events.len(),
            errors = contract.errors.len(),
            "Normalized ABI"
        );

        Ok(contract)
    }
}

impl ArtifactNormalizer for AbiNormalizer {
    fn chain(&self) -> &'static str {
        DEFAULT_CHAIN
    }

    fn normalize(&mut self, artifact: &[u8], metadata: ContractMetadata) -> Result<ContractIR> {
        self.normalize_entries(decode_entries(artifact)?, metadata)
    }
}

/// Resolve declared mutability, falling back to the legacy boolean flags.
///
/// `constant` only counts for regular functions; constructors and fallbacks
/// predate it.
fn resolve_mutability(entry: &AbiEntry, honour_constant: bool) -> StateMutability {
    match entry.declared_mutability() {
        Some(declared) => StateMutability::from(declared),
        None if honour_constant && entry.constant => StateMutability::View,
        None if entry.payable => StateMutability::Payable,
        None => StateMutability::Nonpayable,
    }
}

/// Convert a function entry, renaming it when it overloads an earlier one
fn parse_function(entry: &AbiEntry, overloads: &mut OverloadTracker) -> Result<Function> {
    let declared = entry.name();
    let context = |e: mcpgen_core::Error| e.in_entry("function", declared);

    let inputs = resolve_parameters(entry.inputs()).map_err(context)?;
    let outputs = resolve_parameters(entry.outputs()).map_err(context)?;
    let signature = canonical_signature(declared, entry.inputs());

    let name = overloads.assign(declared);
    let mut chain_data = FunctionChainData {
        constant: entry.constant,
        payable: entry.payable,
        ..Default::default()
    };
    if name != declared {
        debug!(declared, renamed = %name, "Disambiguated overloaded function");
        chain_data.original_name = Some(declared.to_string());
        chain_data.original_signature = Some(signature.clone());
    }

    let mut function = Function::new(name, resolve_mutability(entry, true));
    function.signature = signature;
    function.inputs = inputs;
    function.outputs = outputs;
    function.visibility = Some(Visibility::Public);
    function.chain_data = chain_data;
    function.description = function.synthesize_description();

    Ok(function)
}

fn parse_event(entry: &AbiEntry) -> Result<Event> {
    let name = entry.name();

    let parameters = entry
        .inputs()
        .iter()
        .map(|input| -> Result<EventParameter> {
            Ok(EventParameter {
                name: input.name().to_string(),
                ty: resolve_type(&input.param_type, input.components.as_deref())?,
                indexed: input.indexed,
            })
        })
        .collect::<Result<Vec<_>>>()
        .map_err(|e| e.in_entry("event", name))?;

    let indexed_count = parameters.iter().filter(|p| p.indexed).count();

    let mut event = Event {
        name: name.to_string(),
        description: String::new(),
        signature: canonical_signature(name, entry.inputs()),
        parameters,
        chain_data: EventChainData {
            anonymous: entry.anonymous,
            indexed_count: Some(indexed_count),
        },
    };
    event.description = event.synthesize_description();

    Ok(event)
}

fn parse_error(entry: &AbiEntry) -> Result<ContractError> {
    let name = entry.name();
    let parameters = resolve_parameters(entry.inputs()).map_err(|e| e.in_entry("error", name))?;

    Ok(ContractError {
        name: name.to_string(),
        description: format!("{} error", name),
        parameters,
    })
}

fn parse_constructor(entry: &AbiEntry) -> Result<Function> {
    let inputs =
        resolve_parameters(entry.inputs()).map_err(|e| e.in_entry("constructor", "constructor"))?;

    let mut function = Function::new("constructor", resolve_mutability(entry, false));
    function.description = "Contract constructor".to_string();
    function.inputs = inputs;
    function.is_constructor = true;
    Ok(function)
}

fn parse_fallback(entry: &AbiEntry) -> Function {
    let mut function = Function::new("fallback", resolve_mutability(entry, false));
    function.description = "Fallback function".to_string();
    function.is_fallback = true;
    function
}

fn parse_receive() -> Function {
    // Receive functions are payable by construction
    let mut function = Function::new("receive", StateMutability::Payable);
    function.description = "Receive function".to_string();
    function.is_receive = true;
    function
}
