/// Seam between chain-specific importers and the rest of the pipeline
use crate::ir::{ContractIR, ContractMetadata};
use crate::Result;

/// Converts a chain-specific contract artifact into the IR
///
/// Per-contract state such as overload counters lives inside a single
/// `normalize` call; an instance can be reused across contracts.
pub trait ArtifactNormalizer {
    /// Chain family this normalizer understands
    fn chain(&self) -> &'static str;

    /// Normalize raw artifact bytes, filling in `metadata` where it is blank
    fn normalize(&mut self, artifact: &[u8], metadata: ContractMetadata) -> Result<ContractIR>;
}
