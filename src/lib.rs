//! Generate Model Context Protocol servers from smart contract artifacts
//!
//! The pipeline runs artifact normalization, IR validation and template
//! rendering in that order. Each stage lives in its own crate; this crate wires
//! them together according to a [`GeneratorConfig`] and writes the result.

pub mod output;
pub mod pipeline;

pub use mcpgen_codegen::{ContractRenderer, RenderOptions, RenderedFiles, TypeScriptRenderer};
pub use mcpgen_core::{
    ChainType, ContractIR, ContractMetadata, Error, GeneratorConfig, Result, TargetLanguage,
    ValidationReport,
};
pub use mcpgen_ethereum::AbiNormalizer;
pub use output::{write_files, write_ir};
pub use pipeline::{normalizer_for, render_options, renderer_for, Generation, Pipeline};
