//! HTML anchor and page-name generation.
//!
//! Anchors derive from each document's identity key so links stay stable
//! across runs: `(endpoint, method)` for REST, the command for RPC, the
//! name for broadcasts.

use crate::model::{BroadcastDoc, RestDoc, RpcDoc};
use std::collections::{BTreeMap, HashSet};

/// `/windows/{id}/zoom` + `PUT` → `windows_id_zoom_put`
pub fn rest_anchor(doc: &RestDoc) -> String {
    let parts: Vec<&str> = doc
        .endpoint
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect();
    format!("{}_{}", parts.join("_").to_lowercase(), doc.method.to_lowercase())
}

/// `set_zoom_factor` → `command_set_zoom_factor`
pub fn rpc_anchor(doc: &RpcDoc) -> String {
    format!("command_{}", slug(&doc.command))
}

/// `WindowClosed` → `broadcast_windowclosed`
pub fn broadcast_anchor(doc: &BroadcastDoc) -> String {
    format!("broadcast_{}", slug(&doc.name))
}

/// File name (without extension) for a package page. Package names are a
/// single token but may still contain path separators. `index` is reserved
/// for the landing page.
pub fn page_name(package: &str) -> String {
    let name: String = package
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    match name.trim_start_matches('.') {
        "" => "_".to_string(),
        "index" => "index_".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Page file for every package. Names that sanitize to the same file,
/// compared case-insensitively, get a numeric suffix in package-name order:
/// `net/http` → `net_http.html`, then `net_http` → `net_http-2.html`.
#[derive(Debug)]
pub struct PageFiles {
    files: BTreeMap<String, String>,
}

impl PageFiles {
    pub fn new(packages: &[String]) -> Self {
        let mut taken = HashSet::from(["index".to_string()]);
        let mut files = BTreeMap::new();
        for package in packages {
            let base = page_name(package);
            let mut stem = base.clone();
            let mut n = 1;
            while !taken.insert(stem.to_lowercase()) {
                n += 1;
                stem = format!("{}-{}", base, n);
            }
            files.insert(package.clone(), format!("{}.html", stem));
        }
        Self { files }
    }

    /// File for `package`; unknown packages point at the index.
    pub fn get(&self, package: &str) -> &str {
        self.files.get(package).map_or("index.html", String::as_str)
    }
}

/// Lowercase, keeping alphanumerics, `_` and `-`.
fn slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-'))
        .collect()
}
