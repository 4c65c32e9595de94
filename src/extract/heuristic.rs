use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{ExtractionResult, Strategy};

/// How far past the "winning numbers" marker to look for ball tokens.
const MARKER_WINDOW: usize = 1000;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)winning numbers").unwrap());
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{1,2}\b").unwrap());
static RUN6_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\b\d{1,2}\b\D{0,5}){5}\b\d{1,2}\b").unwrap());
static EMBEDDED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"(?:field_winning_numbers|winning_numbers|winningNumbers)"\s*:\s*"([^"]+)""#)
        .unwrap()
});
static SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D+").unwrap());
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:draw date|drawing date|date[:\s]*)[:\s]*([A-Za-z0-9,\s-]+)").unwrap()
});
static POWER_PLAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Power Play[:\s]*([0-9]x)").unwrap());

/// Last-resort extraction straight off the raw text, no document structure
/// assumed. Four sub-attempts, first success wins:
///
/// 1. tokens in a bounded window after a "winning numbers" marker
/// 2. a contiguous run of six 1-2 digit numbers
/// 3. an embedded `"winning_numbers": "..."` literal
/// 4. every 1-2 digit token in the text, filtered to the plausible 1-69 range
///
/// Deliberately loose: this tier exists to survive markup drift, at the cost
/// of occasionally accepting a coincidental run of numbers.
pub fn attempt(body: &str) -> Option<ExtractionResult> {
    let tokens = marker_window(body)
        .or_else(|| run_of_six(body))
        .or_else(|| embedded_field(body))
        .or_else(|| plausible_sweep(body))?;

    Some(ExtractionResult {
        tokens,
        draw_date: find_draw_date(body),
        power_play: POWER_PLAY_RE
            .captures(body)
            .map(|c| c[1].to_string()),
        strategy: Strategy::Heuristic,
    })
}

/// 1-2 digit tokens in the 1000 chars following a "winning numbers" phrase.
fn marker_window(text: &str) -> Option<[String; 6]> {
    let marker = MARKER_RE.find(text)?;
    let mut end = (marker.start() + MARKER_WINDOW).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let window = &text[marker.start()..end];

    let tokens = six_tokens(TOKEN_RE.find_iter(window).map(|m| m.as_str().to_string()));
    if tokens.is_some() {
        debug!("heuristic: marker window hit");
    }
    tokens
}

/// Six 1-2 digit numbers separated by short non-digit runs.
fn run_of_six(text: &str) -> Option<[String; 6]> {
    let run = RUN6_RE.find(text)?;
    let tokens = six_tokens(
        TOKEN_RE
            .find_iter(run.as_str())
            .map(|m| m.as_str().to_string()),
    );
    if tokens.is_some() {
        debug!("heuristic: run-of-six hit");
    }
    tokens
}

/// A winning-numbers field literal embedded in otherwise unparseable text.
fn embedded_field(text: &str) -> Option<[String; 6]> {
    let caps = EMBEDDED_RE.captures(text)?;
    let tokens = six_tokens(
        SPLIT_RE
            .split(caps[1].trim())
            .filter(|t| !t.is_empty())
            .map(String::from),
    );
    if tokens.is_some() {
        debug!("heuristic: embedded field hit");
    }
    tokens
}

/// Every 1-2 digit token in the text, kept only if it could be a white ball.
fn plausible_sweep(text: &str) -> Option<[String; 6]> {
    let tokens = six_tokens(
        TOKEN_RE
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .filter(|n| (1..=69).contains(n))
            .map(|n| n.to_string()),
    );
    if tokens.is_some() {
        debug!("heuristic: plausible-range sweep hit");
    }
    tokens
}

fn six_tokens(iter: impl Iterator<Item = String>) -> Option<[String; 6]> {
    let tokens: Vec<String> = iter.take(6).collect();
    tokens.try_into().ok()
}

fn find_draw_date(text: &str) -> Option<String> {
    let caps = DATE_RE.captures(text)?;
    let date = caps[1].trim().to_string();
    if date.is_empty() {
        None
    } else {
        Some(date)
    }
}
