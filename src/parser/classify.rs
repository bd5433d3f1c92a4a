//! Decide which document shape a comment describes and build it.

use crate::model::*;
use crate::parser::annotation::{Annotations, DEFAULT_METHOD};
use crate::parser::sample;

type Shape = fn(&Annotations<'_>) -> Option<ApiDoc>;

/// Shapes in priority order; the first one that builds wins.
const SHAPES: [Shape; 3] = [rest_shape, rpc_shape, broadcast_shape];

/// Classify one comment. Ordinary comments without the minimal tag set of
/// any shape return `None`.
pub fn classify(comment: &str) -> Option<ApiDoc> {
    let annotations = Annotations::parse(comment);
    // Every shape needs @package; skip the rest of the work early.
    annotations.package()?;
    SHAPES.iter().find_map(|shape| shape(&annotations))
}

fn rest_shape(a: &Annotations<'_>) -> Option<ApiDoc> {
    rest_doc(a).map(ApiDoc::Rest)
}

fn rpc_shape(a: &Annotations<'_>) -> Option<ApiDoc> {
    rpc_doc(a).map(ApiDoc::Rpc)
}

fn broadcast_shape(a: &Annotations<'_>) -> Option<ApiDoc> {
    broadcast_doc(a).map(ApiDoc::Broadcast)
}

/// Requires `@package` and `@endpoint`.
pub fn rest_doc(a: &Annotations<'_>) -> Option<RestDoc> {
    let package_name = a.package()?;
    let endpoint = a.endpoint()?;

    Some(RestDoc {
        package_name: package_name.to_string(),
        endpoint: endpoint.to_string(),
        method: a.method().unwrap_or(DEFAULT_METHOD).to_string(),
        description: a.description().unwrap_or_default().to_string(),
        purpose: a.purpose().unwrap_or_default().to_string(),
        path_args: a.path_args(),
        samples: sample::extract(a),
    })
}

/// Requires `@package` and `@command`.
pub fn rpc_doc(a: &Annotations<'_>) -> Option<RpcDoc> {
    let package_name = a.package()?;
    let command = a.command()?;

    Some(RpcDoc {
        package_name: package_name.to_string(),
        command: command.to_string(),
        description: a.description().unwrap_or_default().to_string(),
        samples: sample::extract(a),
    })
}

/// Requires `@package` and `@broadcast`.
pub fn broadcast_doc(a: &Annotations<'_>) -> Option<BroadcastDoc> {
    let package_name = a.package()?;
    let name = a.broadcast()?;

    Some(BroadcastDoc {
        package_name: package_name.to_string(),
        name: name.to_string(),
        description: a.description().unwrap_or_default().to_string(),
        samples: sample::extract(a),
    })
}
