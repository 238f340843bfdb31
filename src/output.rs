//! Writing rendered projects to disk

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use mcpgen_codegen::RenderedFiles;
use mcpgen_core::{ContractIR, Error, Result};

/// Write rendered files beneath `output_dir`, creating directories as needed
///
/// Returns the written paths in the order of the file map.
pub async fn write_files(output_dir: &Path, files: &RenderedFiles) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for (relative, content) in files {
        let relative_path = Path::new(relative);
        if relative_path.is_absolute() || relative.split('/').any(|part| part == "..") {
            return Err(Error::generic(format!(
                "refusing to write outside the output directory: {}",
                relative
            )));
        }

        let target = output_dir.join(relative_path);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, content).await?;

        debug!(path = %target.display(), bytes = content.len(), "Wrote file");
        written.push(target);
    }

    info!(dir = %output_dir.display(), files = written.len(), "Wrote MCP server project");
    Ok(written)
}

/// Write the IR as pretty JSON
pub async fn write_ir(path: &Path, contract: &ContractIR) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contract.to_json_pretty()?).await?;
    Ok(())
}
