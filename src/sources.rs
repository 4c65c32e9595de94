/// What a source is expected to return, before we see the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceHint {
    JsonApi,
    Html,
}

/// One candidate source: a URL plus the response kind we expect from it.
#[derive(Debug, Clone)]
pub struct CandidateSource {
    pub id: &'static str,
    pub url: &'static str,
    pub hint: SourceHint,
}

/// Ordered list of sources to try. Position is trial priority: the
/// orchestrator walks this front to back and stops at the first hit.
pub fn registry() -> Vec<CandidateSource> {
    vec![
        CandidateSource {
            id: "powerball-api",
            url: "https://www.powerball.com/api/v1/numbers/powerball/recent?_format=json",
            hint: SourceHint::JsonApi,
        },
        CandidateSource {
            id: "powerball-game-page",
            url: "https://www.powerball.com/games/powerball",
            hint: SourceHint::Html,
        },
        CandidateSource {
            id: "powerball-home",
            url: "https://www.powerball.com/",
            hint: SourceHint::Html,
        },
        CandidateSource {
            id: "lotteryusa",
            url: "https://www.lotteryusa.com/powerball/",
            hint: SourceHint::Html,
        },
    ]
}
