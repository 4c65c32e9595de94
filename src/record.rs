use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::extract::ExtractionResult;

/// Placeholder draw date when a strategy found numbers but no date. A literal
/// rather than the current timestamp, so "unknown" stays distinguishable from
/// fresh data downstream.
pub const DATE_UNKNOWN: &str = "Unknown draw date";

/// Fallback record fields, emitted only when every source missed.
pub const DATE_WAITING: &str = "Waiting for latest draw";
pub const SOURCE_NONE: &str = "none";
pub const SENTINEL: &str = "-";

/// The canonical draw record: the one shape every source funnels into and the
/// only thing callers ever see.
///
/// `numbers[0..5]` are the white balls, `numbers[5]` is the powerball, in
/// source order. Either all six are digit strings or all six are `"-"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRecord {
    pub draw_date: String,
    pub numbers: [String; 6],
    pub power_play: String,
    pub source: String,
    pub updated: String,
}

/// One line of the diagnostic trace: which source was tried and how it went.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub source_id: String,
    pub succeeded: bool,
}

/// Map an extraction onto the canonical shape. Token order is preserved as-is;
/// missing optional fields get their placeholders. `updated` is stamped here,
/// at normalization time, not at fetch time.
pub fn normalize(extraction: ExtractionResult, source_url: &str) -> DrawRecord {
    DrawRecord {
        draw_date: extraction
            .draw_date
            .filter(|d| !d.trim().is_empty())
            .map(|d| d.trim().to_string())
            .unwrap_or_else(|| DATE_UNKNOWN.to_string()),
        numbers: extraction.tokens,
        power_play: extraction
            .power_play
            .filter(|p| !p.trim().is_empty())
            .map(|p| p.trim().to_string())
            .unwrap_or_else(|| SENTINEL.to_string()),
        source: source_url.to_string(),
        updated: Utc::now().to_rfc3339(),
    }
}

/// Well-formed placeholder when the whole registry is exhausted.
pub fn fallback() -> DrawRecord {
    DrawRecord {
        draw_date: DATE_WAITING.to_string(),
        numbers: std::array::from_fn(|_| SENTINEL.to_string()),
        power_play: SENTINEL.to_string(),
        source: SOURCE_NONE.to_string(),
        updated: Utc::now().to_rfc3339(),
    }
}
