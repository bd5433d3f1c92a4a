//! Fenced sample extraction for `@sampleBody` and `@sampleResponse`.
//!
//! ````text
//! @sampleResponse
//! Returned when the window exists.
//! ``` json
//! {"id": 1}
//! ```
//! ````

use crate::model::{Sample, SampleKind};
use crate::parser::annotation::Annotations;

const FENCE: &str = "```";

/// Extract every complete sample, in the order its tag appears.
pub fn extract(annotations: &Annotations<'_>) -> Vec<Sample> {
    annotations
        .tags()
        .filter_map(|tag| {
            let kind = match tag.name {
                "sampleBody" => SampleKind::Body,
                "sampleResponse" => SampleKind::Response,
                _ => return None,
            };
            let sample = parse_region(kind, tag.body);
            if sample.is_none() {
                tracing::debug!(tag = tag.name, "dropping sample without a complete fence");
            }
            sample
        })
        .collect()
}

/// Parse the text governed by one sample tag.
///
/// Leading prose, then an opening fence with an optional language on the
/// same line, then the code up to the closing fence. Returns `None` when
/// either fence is missing.
fn parse_region(kind: SampleKind, region: &str) -> Option<Sample> {
    let open = region.find(FENCE)?;
    let leading_text = region[..open].trim();

    let after_open = &region[open + FENCE.len()..];
    let line_end = after_open.find('\n')?;
    let language = after_open[..line_end].trim();

    let rest = &after_open[line_end + 1..];
    let close = rest.find(FENCE)?;
    let code = rest[..close].trim();

    Some(Sample {
        leading_text: leading_text.to_string(),
        code: code.to_string(),
        kind,
        language: language.to_string(),
    })
}
