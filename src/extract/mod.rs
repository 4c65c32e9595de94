pub mod heuristic;
pub mod markup;
pub mod structured;

use tracing::debug;

use crate::classify::ResponseKind;
use crate::fetch::RawResponse;

/// Which strategy produced a result. Diagnostic only; never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Structured,
    Selector,
    Heuristic,
}

/// Tokens found by exactly one strategy, not yet normalized. Always exactly
/// six tokens; date and multiplier are best-effort and may be absent.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub tokens: [String; 6],
    pub draw_date: Option<String>,
    pub power_play: Option<String>,
    pub strategy: Strategy,
}

/// Why a strategy (or the whole cascade) came up empty. A miss is a value
/// driving continuation, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissReason {
    /// Body could not be parsed as the expected structured format.
    Parse(String),
    /// Strategies ran but none found six usable tokens.
    TooFewTokens,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Hit(ExtractionResult),
    Miss(MissReason),
}

/// Run the strategy cascade against one response, strictly in priority order:
/// structured fields, then markup selectors, then raw-text heuristics. First
/// hit wins; results are never merged across strategies.
pub fn run_cascade(response: &RawResponse, kind: ResponseKind) -> Outcome {
    let mut last_parse_error = None;

    if kind == ResponseKind::StructuredData {
        match structured::attempt(&response.body) {
            Ok(Some(result)) => return Outcome::Hit(result),
            Ok(None) => debug!("structured strategy: too few tokens"),
            Err(reason) => {
                debug!("structured strategy: {:?}", reason);
                last_parse_error = Some(reason);
            }
        }
    }

    if matches!(kind, ResponseKind::Markup | ResponseKind::Unknown) {
        if let Some(result) = markup::attempt(&response.body) {
            return Outcome::Hit(result);
        }
        debug!("selector strategy: no pattern matched six balls");
    }

    if let Some(result) = heuristic::attempt(&response.body) {
        return Outcome::Hit(result);
    }
    debug!("heuristic strategy: no usable run of numbers");

    Outcome::Miss(last_parse_error.unwrap_or(MissReason::TooFewTokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(content_type: &str, body: &str) -> RawResponse {
        RawResponse {
            status: 200,
            content_type: content_type.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn structured_outranks_heuristic_on_json() {
        // Body is valid JSON and also contains a heuristic-friendly phrase;
        // the structured tier must win.
        let body = r#"[{"field_winning_numbers": "05 12 19 33 41 07",
                        "note": "winning numbers 1 2 3 4 5 6"}]"#;
        let r = response("application/json", body);
        match run_cascade(&r, ResponseKind::StructuredData) {
            Outcome::Hit(result) => assert_eq!(result.strategy, Strategy::Structured),
            Outcome::Miss(reason) => panic!("expected hit, got {:?}", reason),
        }
    }

    #[test]
    fn malformed_json_falls_through_to_heuristic() {
        let body = "{not json, but Winning Numbers 12 34 56 67 68 21 appear here";
        let r = response("application/json", body);
        match run_cascade(&r, ResponseKind::StructuredData) {
            Outcome::Hit(result) => {
                assert_eq!(result.strategy, Strategy::Heuristic);
                assert_eq!(result.tokens[0], "12");
            }
            Outcome::Miss(reason) => panic!("expected hit, got {:?}", reason),
        }
    }

    #[test]
    fn selector_outranks_heuristic_on_markup() {
        let body = r#"<html><body>
            <p>Winning numbers 99 98 97 96 95 94</p>
            <ul class="winning-numbers">
              <li>1</li><li>2</li><li>3</li><li>4</li><li>5</li><li>6</li>
            </ul></body></html>"#;
        let r = response("text/html", body);
        match run_cascade(&r, ResponseKind::Markup) {
            Outcome::Hit(result) => {
                assert_eq!(result.strategy, Strategy::Selector);
                assert_eq!(result.tokens[0], "1");
            }
            Outcome::Miss(reason) => panic!("expected hit, got {:?}", reason),
        }
    }

    #[test]
    fn empty_body_is_a_miss() {
        let r = response("text/html", "");
        assert!(matches!(
            run_cascade(&r, ResponseKind::Markup),
            Outcome::Miss(MissReason::TooFewTokens)
        ));
    }

    #[test]
    fn parse_error_is_reported_when_nothing_else_hits() {
        let r = response("application/json", "{broken");
        match run_cascade(&r, ResponseKind::StructuredData) {
            Outcome::Miss(MissReason::Parse(_)) => {}
            other => panic!("expected parse miss, got {:?}", other),
        }
    }
}
