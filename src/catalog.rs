//! Package aggregation: fold classified documents into one PackageDoc per
//! `@package` name.
//!
//! Documents are appended in discovery order. [`CatalogBuilder::finish`]
//! sorts commands and broadcasts and freezes the result into a [`Catalog`]
//! that renderers only read.

use crate::model::*;
use crate::parser;
use serde::Serialize;
use std::collections::BTreeMap;

/// In-progress aggregation. Owned by the scan loop, consumed by `finish`.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    packages: BTreeMap<String, PackageDoc>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document to its package, creating the package on first use.
    pub fn add(&mut self, doc: ApiDoc) {
        let package = self
            .packages
            .entry(doc.package_name().to_string())
            .or_insert_with_key(|name| PackageDoc::new(name.clone()));

        match doc {
            ApiDoc::Rest(rest) => package.rest_docs.push(rest),
            ApiDoc::Rpc(rpc) => package.rpc_docs.push(rpc),
            ApiDoc::Broadcast(broadcast) => package.broadcast_docs.push(broadcast),
        }
    }

    /// Classify a raw comment and record it. Returns whether a document was
    /// found.
    pub fn add_comment(&mut self, comment: &str) -> bool {
        match parser::classify(comment) {
            Some(doc) => {
                tracing::trace!(package = doc.package_name(), "classified comment");
                self.add(doc);
                true
            }
            None => false,
        }
    }

    /// Sort each package and freeze the catalog.
    pub fn finish(mut self) -> Catalog {
        for package in self.packages.values_mut() {
            sort_by_name(&mut package.rpc_docs, |doc| doc.command.as_str());
            sort_by_name(&mut package.broadcast_docs, |doc| doc.name.as_str());
        }

        Catalog {
            package_names: self.packages.keys().cloned().collect(),
            packages: self.packages,
        }
    }
}

/// Stable sort by a string key; equal keys keep encounter order.
fn sort_by_name<T>(docs: &mut [T], name: impl Fn(&T) -> &str) {
    docs.sort_by(|a, b| name(a).cmp(name(b)));
}

/// Finalized documentation, keyed by package name.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    package_names: Vec<String>,
    packages: BTreeMap<String, PackageDoc>,
}

impl Catalog {
    /// Every package name, sorted, for navigation.
    pub fn package_names(&self) -> &[String] {
        &self.package_names
    }

    /// Packages in name order.
    pub fn packages(&self) -> impl Iterator<Item = &PackageDoc> {
        self.packages.values()
    }

    pub fn package(&self, name: &str) -> Option<&PackageDoc> {
        self.packages.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
