//! Output directory management and document persistence.

use std::path::{Path, PathBuf};

use anyhow::Context;
use luis_core::{LuisApp, Project};

/// Delete `dir` if it exists, then recreate it empty.
pub fn reset_output_dir(dir: &Path) -> anyhow::Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)
            .with_context(|| format!("failed to remove output directory {}", dir.display()))?;
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))
}

/// `<dir>/<project name>.json`.
#[must_use]
pub fn destination(dir: &Path, project: &Project) -> PathBuf {
    dir.join(format!("{}.json", project.name))
}

/// Serialize the document as pretty JSON with a trailing newline.
pub fn render(document: &LuisApp) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(document).context("failed to serialize document")?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write `document` to `path`.
pub fn write_document(path: &Path, document: &LuisApp) -> anyhow::Result<()> {
    let bytes = render(document)?;
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}
