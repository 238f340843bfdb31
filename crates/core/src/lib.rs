/// MCP generator core: the contract IR, its validator and shared configuration
pub mod config;
pub mod ir;
pub mod normalizer;
pub mod validation;

pub use config::{ChainType, GeneratorConfig, TargetLanguage};
pub use ir::{
    ContractError, ContractIR, ContractMetadata, CustomType, Event, EventChainData,
    EventParameter, Function, FunctionChainData, Parameter, ParameterType, SourceInfo,
    StateMutability, TypeChainData, Visibility,
};
pub use normalizer::ArtifactNormalizer;
pub use validation::{Validate, ValidationError, ValidationReport};

/// Re-export common types from mcpgen-common
pub use mcpgen_common::{Error, Result};
