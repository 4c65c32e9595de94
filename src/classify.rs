use crate::fetch::RawResponse;
use crate::sources::SourceHint;

/// What kind of document a response actually looks like, deciding which
/// extraction strategies are applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    StructuredData,
    Markup,
    Unknown,
}

/// An explicit content-type header wins; otherwise fall back to what the
/// registry said to expect. `Unknown` still lets the heuristic tier run.
pub fn classify(response: &RawResponse, hint: SourceHint) -> ResponseKind {
    let content_type = response.content_type.to_ascii_lowercase();
    if content_type.contains("application/json") {
        return ResponseKind::StructuredData;
    }
    if content_type.contains("text/html") {
        return ResponseKind::Markup;
    }
    if content_type.is_empty() {
        return match hint {
            SourceHint::JsonApi => ResponseKind::StructuredData,
            SourceHint::Html => ResponseKind::Markup,
        };
    }
    ResponseKind::Unknown
}
