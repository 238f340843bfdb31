/// Ethereum support for the MCP server generator
pub mod abi;

pub use abi::{AbiNormalizer, DEFAULT_CHAIN};

use mcpgen_core::{ContractIR, ContractMetadata, Result};

/// Normalize an ABI JSON document into the contract IR
///
/// Uses a fresh normalizer, so overload numbering starts over for every call.
pub fn normalize_abi(content: &str, metadata: ContractMetadata) -> Result<ContractIR> {
    AbiNormalizer::new().normalize_str(content, metadata)
}
