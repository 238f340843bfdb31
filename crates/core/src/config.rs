//! Generator configuration
//!
//! Settings can come from a TOML or JSON file, then `MCPGEN_*` environment
//! variables, then command-line flags (applied by the binary).

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Blockchain family an artifact comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    /// EVM chains (Ethereum ABI JSON)
    #[default]
    Ethereum,
    /// Solana IDL, recognised but not implemented
    Solana,
}

impl ChainType {
    /// Identifier written into contract metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainType::Ethereum => "ethereum",
            ChainType::Solana => "solana",
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChainType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ethereum" | "evm" => Ok(ChainType::Ethereum),
            "solana" => Ok(ChainType::Solana),
            other => Err(Error::config(format!("unsupported chain type: {}", other))),
        }
    }
}

/// Language of the generated server project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// TypeScript project
    #[default]
    Typescript,
    /// Python project, recognised but not implemented
    Python,
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::Typescript => write!(f, "typescript"),
            TargetLanguage::Python => write!(f, "python"),
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ts" | "typescript" => Ok(TargetLanguage::Typescript),
            "py" | "python" => Ok(TargetLanguage::Python),
            other => Err(Error::config(format!("unsupported language: {}", other))),
        }
    }
}

/// Settings for one generator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the rendered project is written to
    pub output_dir: PathBuf,

    /// Target language of the generated project
    pub language: TargetLanguage,

    /// Chain family of the input artifact
    pub chain: ChainType,

    /// Directory holding `<template>.hbs` overrides
    pub template_dir: Option<PathBuf>,

    /// Also emit a vitest harness and its runner configuration
    pub include_tests: bool,

    /// Treat IR validation findings as fatal
    pub strict_validation: bool,

    /// Version stamped into the generated package
    pub server_version: String,

    /// RPC endpoint the generated server falls back to
    pub default_rpc_url: String,

    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./mcp-server"),
            language: TargetLanguage::Typescript,
            chain: ChainType::Ethereum,
            template_dir: None,
            include_tests: false,
            strict_validation: false,
            server_version: "1.0.0".to_string(),
            default_rpc_url: "https://eth.llamarpc.com".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a file and apply environment overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: GeneratorConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| {
                Error::config(format!(
                    "Failed to parse TOML configuration file {}: {}",
                    path.display(),
                    e
                ))
            })?,
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                Error::config(format!(
                    "Failed to parse JSON configuration file {}: {}",
                    path.display(),
                    e
                ))
            })?,
            _ => {
                return Err(Error::config(
                    "Unsupported configuration file format. Supported formats: .toml, .json",
                ))
            }
        };

        config.apply_environment_overrides()?;
        Ok(config)
    }

    /// Apply `MCPGEN_*` environment variable overrides
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        if let Ok(output_dir) = env::var("MCPGEN_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }
        if let Ok(language) = env::var("MCPGEN_LANGUAGE") {
            self.language = language.parse()?;
        }
        if let Ok(chain) = env::var("MCPGEN_CHAIN") {
            self.chain = chain.parse()?;
        }
        if let Ok(template_dir) = env::var("MCPGEN_TEMPLATE_DIR") {
            self.template_dir = Some(PathBuf::from(template_dir));
        }
        if let Ok(include_tests) = env::var("MCPGEN_INCLUDE_TESTS") {
            self.include_tests = parse_bool("MCPGEN_INCLUDE_TESTS", &include_tests)?;
        }
        if let Ok(strict) = env::var("MCPGEN_STRICT") {
            self.strict_validation = parse_bool("MCPGEN_STRICT", &strict)?;
        }
        if let Ok(rpc_url) = env::var("MCPGEN_RPC_URL") {
            self.default_rpc_url = rpc_url;
        }
        if let Ok(log_level) = env::var("MCPGEN_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::config("output directory cannot be empty"));
        }
        if self.server_version.trim().is_empty() {
            return Err(Error::config("server version cannot be empty"));
        }
        if !self.default_rpc_url.starts_with("http://")
            && !self.default_rpc_url.starts_with("https://")
        {
            return Err(Error::config(format!(
                "Invalid RPC URL: '{}'",
                self.default_rpc_url
            )));
        }
        Ok(())
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::config(format!("Invalid {} value: {}", var, value))),
    }
}
