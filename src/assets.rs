//! Static files the HTML pages reference.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Files copied from `--assets`.
pub const ASSET_FILES: &[&str] = &["style.css", "prism.css", "prism.js"];

/// Stylesheet written when no asset directory is given.
const DEFAULT_STYLESHEET: &str = include_str!("../assets/style.css");

/// Check that `assets_dir` holds every asset, so a bad `--assets` fails
/// before any output is written.
pub fn verify(assets_dir: &Path) -> Result<()> {
    for name in ASSET_FILES {
        let src = assets_dir.join(name);
        if !src.is_file() {
            bail!("asset not found: {}", src.display());
        }
    }
    Ok(())
}

/// Copy every asset from `assets_dir`, or write the built-in stylesheet.
pub fn install(assets_dir: Option<&Path>, output_dir: &Path) -> Result<()> {
    let Some(assets_dir) = assets_dir else {
        let dest = output_dir.join("style.css");
        fs::write(&dest, DEFAULT_STYLESHEET)
            .with_context(|| format!("failed to write {}", dest.display()))?;
        return Ok(());
    };

    for name in ASSET_FILES {
        let src = assets_dir.join(name);
        let dest = output_dir.join(name);
        fs::copy(&src, &dest).with_context(|| {
            format!("failed to copy {} to {}", src.display(), dest.display())
        })?;
        debug!("copied {}", src.display());
    }
    Ok(())
}
