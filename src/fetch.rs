use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::sources::CandidateSource;

/// Per-request deadline. Slow sources are abandoned and counted as a miss;
/// retry policy (if any) belongs to the caller, not here.
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
const ACCEPT: &str = "text/html,application/json;q=0.9,*/*;q=0.8";

/// Raw response from one fetch attempt, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("timeout fetching {0}")]
    Timeout(String),
    #[error("fetch failed for {url}: {message}")]
    Network { url: String, message: String },
}

/// Fetch capability the pipeline is polymorphic over, so tests can script
/// per-source outcomes without touching the network.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, source: &CandidateSource) -> Result<RawResponse, FetchError>;
}

/// Real fetcher: one shared reqwest client, bounded by `FETCH_TIMEOUT`.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, source: &CandidateSource) -> Result<RawResponse, FetchError> {
        let response = self
            .client
            .get(source.url)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .send()
            .await
            .map_err(|e| classify_error(source.url, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        // Non-2xx bodies are kept: an error page can still carry extractable
        // text for the heuristic tier.
        let body = response
            .text()
            .await
            .map_err(|e| classify_error(source.url, e))?;

        debug!(
            "fetched {} status={} content-type={:?} length={}",
            source.url,
            status,
            content_type,
            body.len()
        );

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

fn classify_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else {
        FetchError::Network {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}
