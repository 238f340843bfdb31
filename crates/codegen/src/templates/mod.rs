//! Template system for MCP server generation
//!
//! Contains the built-in Handlebars templates and optional per-file overrides
//! loaded from a custom template directory.

use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use mcpgen_core::{Error, Result};

/// Every template the TypeScript target knows about
pub const TEMPLATE_NAMES: &[&str] = &[
    "package.json",
    "tsconfig.json",
    "server.ts",
    "README.md",
    "server.test.ts",
    "vitest.config.ts",
];

/// File extension of override templates in a custom directory
pub const TEMPLATE_EXTENSION: &str = "hbs";

fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "package.json" => Some(include_str!("package.json.hbs")),
        "tsconfig.json" => Some(include_str!("tsconfig.json.hbs")),
        "server.ts" => Some(include_str!("server.ts.hbs")),
        "README.md" => Some(include_str!("README.md.hbs")),
        "server.test.ts" => Some(include_str!("server.test.ts.hbs")),
        "vitest.config.ts" => Some(include_str!("vitest.config.ts.hbs")),
        _ => None,
    }
}

/// Template manager for MCP server generation
pub struct TemplateManager {
    handlebars: Handlebars<'static>,
}

impl TemplateManager {
    /// Create a template manager with the built-in templates
    pub fn new() -> Result<Self> {
        Self::load(None)
    }

    /// Create a template manager where `<dir>/<name>.hbs` replaces the
    /// built-in template of the same name
    pub fn with_overrides(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::config(format!(
                "template directory not found: {}",
                dir.display()
            )));
        }
        Self::load(Some(dir))
    }

    fn load(overrides: Option<&Path>) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for name in TEMPLATE_NAMES {
            let source = match overrides.map(|dir| dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION))) {
                Some(path) if path.is_file() => {
                    debug!(template = *name, path = %path.display(), "Using custom template");
                    fs::read_to_string(&path).map_err(|e| Error::render(*name, e))?
                }
                _ => builtin(name)
                    .ok_or_else(|| Error::render(*name, "no built-in template"))?
                    .to_string(),
            };

            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::render(*name, e))?;
        }

        Ok(Self { handlebars })
    }

    /// Render a template with the given data
    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| Error::render(template_name, e))
    }

    /// Get list of available templates
    pub fn available_templates(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlebars.get_templates().keys().cloned().collect();
        names.sort();
        names
    }
}
