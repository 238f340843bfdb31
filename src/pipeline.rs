//! Normalize, validate and render one contract

use tracing::{info, warn};

use mcpgen_codegen::{ContractRenderer, RenderOptions, RenderedFiles, TypeScriptRenderer};
use mcpgen_core::{
    ArtifactNormalizer, ChainType, ContractIR, ContractMetadata, Error, GeneratorConfig, Result,
    TargetLanguage, ValidationReport,
};
use mcpgen_ethereum::AbiNormalizer;

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct Generation {
    /// Normalized contract
    pub contract: ContractIR,
    /// Validation findings; empty unless validation was lenient
    pub report: ValidationReport,
    /// Rendered project files
    pub files: RenderedFiles,
}

/// Fresh normalizer for a chain family
pub fn normalizer_for(chain: ChainType) -> Result<Box<dyn ArtifactNormalizer>> {
    match chain {
        ChainType::Ethereum => Ok(Box::new(AbiNormalizer::new())),
        ChainType::Solana => Err(Error::unsupported(
            "solana artifacts are not supported yet",
        )),
    }
}

/// Render options derived from a generator configuration
pub fn render_options(config: &GeneratorConfig) -> RenderOptions {
    RenderOptions {
        include_tests: config.include_tests,
        server_version: config.server_version.clone(),
        default_rpc_url: config.default_rpc_url.clone(),
    }
}

/// Renderer for the configured target language
pub fn renderer_for(config: &GeneratorConfig) -> Result<Box<dyn ContractRenderer>> {
    match config.language {
        TargetLanguage::Typescript => {
            let mut renderer = TypeScriptRenderer::new().with_options(render_options(config));
            if let Some(dir) = &config.template_dir {
                renderer = renderer.with_template_dir(dir.clone());
            }
            Ok(Box::new(renderer))
        }
        TargetLanguage::Python => Err(Error::unsupported(
            "python output is not supported yet",
        )),
    }
}

/// Generator pipeline for one configuration
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: GeneratorConfig,
}

impl Pipeline {
    /// Create a pipeline
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Normalize an artifact with a normalizer private to this call
    pub fn normalize(&self, artifact: &[u8], metadata: ContractMetadata) -> Result<ContractIR> {
        let mut normalizer = normalizer_for(self.config.chain)?;
        normalizer.normalize(artifact, metadata)
    }

    /// Validate an IR, failing in strict mode
    pub fn check(&self, contract: &ContractIR) -> Result<ValidationReport> {
        let report = contract.validation_report();
        if report.is_valid() {
            return Ok(report);
        }

        if self.config.strict_validation {
            return Err(Error::validation(report.to_string()));
        }
        for finding in &report.errors {
            warn!(field = %finding.field, "{}", finding.message);
        }
        Ok(report)
    }

    /// Render an already validated IR
    pub fn render(&self, contract: &ContractIR) -> Result<RenderedFiles> {
        renderer_for(&self.config)?.render(contract)
    }

    /// Run every stage over one artifact
    pub fn run(&self, artifact: &[u8], metadata: ContractMetadata) -> Result<Generation> {
        let contract = self.normalize(artifact, metadata)?;
        let report = self.check(&contract)?;
        let files = self.render(&contract)?;

        info!(
            contract = %contract.metadata.name,
            functions = contract.functions.len(),
            findings = report.len(),
            files = files.len(),
            "Generated MCP server"
        );

        Ok(Generation {
            contract,
            report,
            files,
        })
    }
}
