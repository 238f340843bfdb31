//! TypeScript MCP server renderer

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, info};

use mcpgen_core::{ContractIR, Result, TargetLanguage};

use crate::context::RenderContext;
use crate::templates::TemplateManager;
use crate::ContractRenderer;

/// Rendered project: relative path to file content, ordered by path
pub type RenderedFiles = BTreeMap<String, Vec<u8>>;

/// Knobs that change what gets rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Also emit `tests/server.test.ts` and `vitest.config.ts`
    pub include_tests: bool,
    /// Version stamped into package.json and the server handshake
    pub server_version: String,
    /// RPC endpoint the server uses when `RPC_URL` is unset
    pub default_rpc_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_tests: false,
            server_version: "1.0.0".to_string(),
            default_rpc_url: "https://eth.llamarpc.com".to_string(),
        }
    }
}

/// One generated file and the template that produces it
#[derive(Debug, Clone, Copy)]
struct OutputFile {
    path: &'static str,
    template: &'static str,
    test_only: bool,
}

const OUTPUT_FILES: &[OutputFile] = &[
    OutputFile { path: "package.json", template: "package.json", test_only: false },
    OutputFile { path: "tsconfig.json", template: "tsconfig.json", test_only: false },
    OutputFile { path: "src/server.ts", template: "server.ts", test_only: false },
    OutputFile { path: "README.md", template: "README.md", test_only: false },
    OutputFile { path: "tests/server.test.ts", template: "server.test.ts", test_only: true },
    OutputFile { path: "vitest.config.ts", template: "vitest.config.ts", test_only: true },
];

/// Renders a contract IR into a TypeScript MCP server project
#[derive(Debug, Clone, Default)]
pub struct TypeScriptRenderer {
    template_dir: Option<PathBuf>,
    options: RenderOptions,
}

impl TypeScriptRenderer {
    /// Renderer using the built-in templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `<dir>/<template>.hbs` in place of built-in templates where present
    pub fn with_template_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    /// Replace the render options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Paths this renderer produces with the current options
    pub fn output_paths(&self) -> Vec<&'static str> {
        self.selected_outputs().map(|file| file.path).collect()
    }

    fn selected_outputs(&self) -> impl Iterator<Item = &'static OutputFile> + '_ {
        OUTPUT_FILES
            .iter()
            .filter(move |file| self.options.include_tests || !file.test_only)
    }

    fn templates(&self) -> Result<TemplateManager> {
        match &self.template_dir {
            Some(dir) => TemplateManager::with_overrides(dir),
            None => TemplateManager::new(),
        }
    }

    /// Render every output file, or fail without returning any
    pub fn render(&self, contract: &ContractIR) -> Result<RenderedFiles> {
        let templates = self.templates()?;
        let context = RenderContext::build(contract, &self.options)?;

        let mut files = RenderedFiles::new();
        for output in self.selected_outputs() {
            let content = templates.render(output.template, &context)?;
            debug!(path = output.path, bytes = content.len(), "Rendered file");
            files.insert(output.path.to_string(), content.into_bytes());
        }

        info!(
            contract = %contract.metadata.name,
            files = files.len(),
            tools = context.tools.len(),
            "Rendered TypeScript MCP server"
        );

        Ok(files)
    }
}

impl ContractRenderer for TypeScriptRenderer {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Typescript
    }

    fn render(&self, contract: &ContractIR) -> Result<RenderedFiles> {
        TypeScriptRenderer::render(self, contract)
    }
}
