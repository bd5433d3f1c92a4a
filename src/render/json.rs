//! JSON renderer. The whole catalog as one structured file.
//!
//! Useful for custom rendering pipelines.

use crate::catalog::Catalog;
use crate::render::{Page, Renderer};
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, catalog: &Catalog) -> Result<Vec<Page>> {
        Ok(vec![Page::new("catalog.json", to_json(catalog)?)])
    }
}

/// Pretty-printed catalog with a trailing newline.
pub fn to_json(catalog: &Catalog) -> Result<String> {
    let mut out = serde_json::to_string_pretty(catalog).context("failed to serialize catalog")?;
    out.push('\n');
    Ok(out)
}
