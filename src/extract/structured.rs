use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{ExtractionResult, MissReason, Strategy};

/// Field names the various feed revisions have used for each value. Checked
/// in order; first present field wins.
const NUMBERS_ALIASES: &[&str] = &[
    "field_winning_numbers",
    "winning_numbers",
    "winningNumbers",
    "field_winning_numbers_text",
];
const DATE_ALIASES: &[&str] = &["field_draw_date", "draw_date", "draw", "date"];
const MULTIPLIER_ALIASES: &[&str] = &["field_multiplier", "multiplier"];

static NON_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D+").unwrap());

/// Parse the body as a JSON feed and read the draw out of its first record.
/// A malformed body is a parse miss; a well-formed body without six number
/// tokens is `Ok(None)`.
pub fn attempt(body: &str) -> Result<Option<ExtractionResult>, MissReason> {
    let data: Value =
        serde_json::from_str(body).map_err(|e| MissReason::Parse(e.to_string()))?;

    // The feed is usually an array of draws, newest first, but some
    // revisions return a bare object.
    let first = match &data {
        Value::Array(items) => match items.first() {
            Some(item) => item,
            None => return Ok(None),
        },
        Value::Object(_) => &data,
        _ => return Ok(None),
    };

    let winning = match lookup(first, NUMBERS_ALIASES) {
        Some(w) => w,
        None => return Ok(None),
    };

    let tokens: Vec<String> = NON_DIGIT_RE
        .split(winning.trim())
        .filter(|t| !t.is_empty())
        .take(6)
        .map(String::from)
        .collect();
    let tokens: [String; 6] = match tokens.try_into() {
        Ok(tokens) => tokens,
        Err(_) => return Ok(None),
    };

    Ok(Some(ExtractionResult {
        tokens,
        draw_date: lookup(first, DATE_ALIASES),
        power_play: lookup(first, MULTIPLIER_ALIASES),
        strategy: Strategy::Structured,
    }))
}

fn lookup(record: &Value, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|name| {
        let value = record.get(name)?;
        let text = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    })
}
