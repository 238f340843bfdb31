//! Template rendering of contract IR into MCP server projects

pub mod context;
pub mod templates;
pub mod type_map;
pub mod typescript;

pub use context::RenderContext;
pub use templates::TemplateManager;
pub use type_map::{zod_type, TypeCategory};
pub use typescript::{RenderOptions, RenderedFiles, TypeScriptRenderer};

use mcpgen_core::{ContractIR, Result, TargetLanguage};

/// Turns a contract IR into a set of project files for one target language
pub trait ContractRenderer {
    /// Language of the generated project
    fn language(&self) -> TargetLanguage;

    /// Render all files; either every file succeeds or an error is returned
    fn render(&self, contract: &ContractIR) -> Result<RenderedFiles>;
}
