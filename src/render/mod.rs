//! Renderer module — trait-based format dispatch.

pub mod anchor;
pub mod html;
pub mod json;
pub mod markdown;

use crate::catalog::Catalog;
use anyhow::{anyhow, Result};

/// One output file, relative to the output directory.
#[derive(Debug)]
pub struct Page {
    pub path: String,
    pub contents: String,
}

impl Page {
    pub fn new(path: impl Into<String>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

/// Trait for rendering a Catalog into a specific output format.
pub trait Renderer {
    fn render(&self, catalog: &Catalog) -> Result<Vec<Page>>;

    /// Whether the pages reference the stylesheet and script assets.
    fn needs_assets(&self) -> bool {
        false
    }
}

/// Create a renderer for the given format name. `syntax_highlighting` links
/// the Prism assets into HTML pages.
pub fn create_renderer(format: &str, syntax_highlighting: bool) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer { syntax_highlighting })),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use html or json", format)),
    }
}
