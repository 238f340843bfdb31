/// mcpgen command line entry point
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mcpgen::{write_files, write_ir, ContractMetadata, GeneratorConfig, Pipeline};

#[derive(Parser, Debug)]
#[command(name = "mcpgen")]
#[command(author, version, about = "Generate MCP servers from smart contract ABIs", long_about = None)]
struct Cli {
    /// Path to the contract artifact (ABI JSON)
    #[arg(short, long)]
    artifact: PathBuf,

    /// Output directory for the generated project
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target language (ts, typescript)
    #[arg(short, long)]
    lang: Option<String>,

    /// Chain type of the artifact (ethereum, evm)
    #[arg(short, long)]
    chain: Option<String>,

    /// Contract name (defaults to the artifact file name)
    #[arg(short, long)]
    name: Option<String>,

    /// Deployed contract address
    #[arg(short = 'd', long)]
    address: Option<String>,

    /// Directory with <template>.hbs overrides
    #[arg(long)]
    template_dir: Option<PathBuf>,

    /// Also generate a vitest harness
    #[arg(long)]
    with_tests: bool,

    /// Configuration file (.toml or .json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail when the IR has validation findings
    #[arg(long)]
    strict: bool,

    /// Also write the normalized IR as JSON to this path
    #[arg(long)]
    emit_ir: Option<PathBuf>,

    /// Print the files that would be generated without writing them
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then config file, then MCPGEN_* variables, then flags
    fn resolve_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load_from_file(path)?,
            None => {
                let mut config = GeneratorConfig::default();
                config.apply_environment_overrides()?;
                config
            }
        };

        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(lang) = &self.lang {
            config.language = lang.parse()?;
        }
        if let Some(chain) = &self.chain {
            config.chain = chain.parse()?;
        }
        if let Some(dir) = &self.template_dir {
            config.template_dir = Some(dir.clone());
        }
        if self.with_tests {
            config.include_tests = true;
        }
        if self.strict {
            config.strict_validation = true;
        }
        if self.verbose {
            config.log_level = "debug".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    fn metadata(&self, config: &GeneratorConfig) -> ContractMetadata {
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| contract_name_from_path(&self.artifact));
        let metadata = ContractMetadata::new(name, config.chain.as_str());
        match &self.address {
            Some(address) => metadata.with_address(address.as_str()),
            None => metadata,
        }
    }
}

fn contract_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Contract")
        .to_string()
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config.log_level);

    let artifact = tokio::fs::read(&cli.artifact)
        .await
        .with_context(|| format!("failed to read artifact {}", cli.artifact.display()))?;

    let pipeline = Pipeline::new(config.clone());
    let generation = pipeline
        .run(&artifact, cli.metadata(&config))
        .context("failed to generate MCP server")?;
    let contract = &generation.contract;

    println!("Parsed contract: {}", contract.metadata.name);
    println!("Functions:");
    for function in &contract.functions {
        println!("  - {} ({})", function.name, function.state_mutability);
    }
    if !generation.report.is_valid() {
        println!("Validation findings:\n{}", generation.report);
    }

    if let Some(path) = &cli.emit_ir {
        write_ir(path, contract)
            .await
            .with_context(|| format!("failed to write IR to {}", path.display()))?;
        info!(path = %path.display(), "Wrote contract IR");
    }

    if cli.dry_run {
        println!("Dry run, files that would be written to {}:", config.output_dir.display());
        for (path, content) in &generation.files {
            println!("  {} ({} bytes)", path, content.len());
        }
        return Ok(());
    }

    write_files(&config.output_dir, &generation.files)
        .await
        .with_context(|| format!("failed to write files to {}", config.output_dir.display()))?;

    println!(
        "MCP server generated successfully in {}",
        config.output_dir.display()
    );
    println!(
        "Generated {} files for {} functions",
        generation.files.len(),
        contract.functions.len()
    );

    Ok(())
}
