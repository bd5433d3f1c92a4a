//! Data model for extracted API documentation, independent of output format.

use serde::Serialize;

/// Which half of an exchange a sample shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    /// `@sampleBody`
    Body,
    /// `@sampleResponse`
    Response,
}

/// A fenced code sample embedded in a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    /// Prose between the sample tag and the opening fence
    #[serde(rename = "text")]
    pub leading_text: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: SampleKind,
    /// Word after the opening fence, e.g. "json". May be empty.
    pub language: String,
}

/// A documented path parameter (`@pathArg <name> <description>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointArgument {
    pub name: String,
    pub description: String,
}

/// A REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestDoc {
    pub package_name: String,
    pub endpoint: String,
    /// One of DELETE, GET, POST, PUT
    pub method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub purpose: String,
    #[serde(rename = "path_arguments", skip_serializing_if = "Vec::is_empty")]
    pub path_args: Vec<EndpointArgument>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<Sample>,
}

/// An RPC command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcDoc {
    pub package_name: String,
    pub command: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<Sample>,
}

/// A broadcast event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BroadcastDoc {
    pub package_name: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<Sample>,
}

/// One classified comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiDoc {
    Rest(RestDoc),
    Rpc(RpcDoc),
    Broadcast(BroadcastDoc),
}

impl ApiDoc {
    pub fn package_name(&self) -> &str {
        match self {
            ApiDoc::Rest(doc) => &doc.package_name,
            ApiDoc::Rpc(doc) => &doc.package_name,
            ApiDoc::Broadcast(doc) => &doc.package_name,
        }
    }
}

/// Every document tagged with one `@package` name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageDoc {
    pub name: String,
    /// Source encounter order
    pub rest_docs: Vec<RestDoc>,
    /// Sorted by command once the catalog is finished
    pub rpc_docs: Vec<RpcDoc>,
    /// Sorted by name once the catalog is finished
    pub broadcast_docs: Vec<BroadcastDoc>,
}

impl PackageDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
