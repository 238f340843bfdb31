//! Ethereum ABI import
//!
//! Decodes ABI JSON artifacts and normalizes them into the chain-agnostic
//! contract IR.

pub mod normalizer;
pub mod parser;
pub mod types;


pub use normalizer::{AbiNormalizer, OverloadTracker, DEFAULT_CHAIN};
pub use parser::{canonical_signature, decode_entries, AbiEntry, AbiParameter, EntryKind};
pub use types::{resolve_parameters, resolve_type};
