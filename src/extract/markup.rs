use scraper::{Html, Selector};
use tracing::debug;

use super::{ExtractionResult, Strategy};

/// Ball selectors, most site-proven first. The first pattern whose match set
/// has six non-empty text nodes wins; document order is kept.
const BALL_SELECTORS: &[&str] = &[
    ".powerball-results__ball",
    ".winning-number",
    ".white-ball",
    ".winning-numbers__balls span",
    "ul.winning-numbers li",
    ".result .result__ball",
    ".draw-result .ball",
    ".balls .ball",
    ".result .ball",
    ".winning-numbers span",
    "span.result",
];

const DATE_SELECTORS: &[&str] = &["time", "span.draw-date", ".powerball-results__date"];
const MULTIPLIER_SELECTORS: &[&str] = &[
    ".powerplay",
    ".multiplier",
    ".powerball-results__powerplay",
];

/// Try each ball selector against the parsed document. Returns the first six
/// matches of the first pattern that produces at least six.
pub fn attempt(body: &str) -> Option<ExtractionResult> {
    let document = Html::parse_document(body);

    for pattern in BALL_SELECTORS {
        let selector = match Selector::parse(pattern) {
            Ok(s) => s,
            Err(_) => continue,
        };

        let texts: Vec<String> = document
            .select(&selector)
            .map(element_text)
            .filter(|t| !t.is_empty())
            .take(6)
            .collect();

        if let Ok(tokens) = <[String; 6]>::try_from(texts) {
            debug!("selector {:?} matched six balls", pattern);
            return Some(ExtractionResult {
                tokens,
                draw_date: find_draw_date(&document),
                power_play: find_first_text(&document, MULTIPLIER_SELECTORS),
                strategy: Strategy::Selector,
            });
        }
    }

    None
}

fn element_text(element: scraper::ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// Best-effort: a <time> datetime attribute is preferred over its text.
fn find_draw_date(document: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse("time") {
        if let Some(el) = document.select(&selector).next() {
            if let Some(dt) = el.value().attr("datetime") {
                let dt = dt.trim();
                if !dt.is_empty() {
                    return Some(dt.to_string());
                }
            }
        }
    }
    find_first_text(document, DATE_SELECTORS)
}

fn find_first_text(document: &Html, selectors: &[&str]) -> Option<String> {
    selectors.iter().find_map(|pattern| {
        let selector = Selector::parse(pattern).ok()?;
        document
            .select(&selector)
            .map(element_text)
            .find(|t| !t.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
    }

    #[test]
    fn extracts_official_results_page() {
        let result = attempt(&fixture("powerball_page.html")).unwrap();
        assert_eq!(
            result.tokens,
            ["16", "30", "44", "45", "52", "14"].map(String::from)
        );
        assert_eq!(result.power_play.as_deref(), Some("2x"));
        assert_eq!(result.draw_date.as_deref(), Some("2024-06-15"));
        assert_eq!(result.strategy, Strategy::Selector);
    }

    #[test]
    fn extracts_aggregator_page() {
        let result = attempt(&fixture("lotteryusa.html")).unwrap();
        assert_eq!(
            result.tokens,
            ["3", "18", "27", "36", "59", "22"].map(String::from)
        );
    }

    #[test]
    fn six_elements_keep_document_order() {
        let body = r#"<div class="balls">
            <span class="ball">1</span><span class="ball">2</span>
            <span class="ball">3</span><span class="ball">4</span>
            <span class="ball">5</span><span class="ball">6</span>
        </div>"#;
        let result = attempt(body).unwrap();
        assert_eq!(result.tokens, ["1", "2", "3", "4", "5", "6"].map(String::from));
    }

    #[test]
    fn five_matches_is_not_enough() {
        let body = r#"<ul class="winning-numbers">
            <li>1</li><li>2</li><li>3</li><li>4</li><li>5</li>
        </ul>"#;
        assert!(attempt(body).is_none());
    }

    #[test]
    fn empty_text_nodes_do_not_count() {
        let body = r#"<div class="balls">
            <span class="ball"></span><span class="ball">1</span>
            <span class="ball">2</span><span class="ball">3</span>
            <span class="ball">4</span><span class="ball">5</span>
        </div>"#;
        assert!(attempt(body).is_none());
    }

    #[test]
    fn missing_date_and_multiplier_are_absent() {
        let body = r#"<div class="balls">
            <b class="ball">1</b><b class="ball">2</b><b class="ball">3</b>
            <b class="ball">4</b><b class="ball">5</b><b class="ball">6</b>
        </div>"#;
        let result = attempt(body).unwrap();
        assert!(result.draw_date.is_none());
        assert!(result.power_play.is_none());
    }
}
