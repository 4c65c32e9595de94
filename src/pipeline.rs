use anyhow::{bail, Result};
use tracing::{info, warn};

use crate::classify::classify;
use crate::extract::{run_cascade, Outcome};
use crate::fetch::Fetch;
use crate::record::{fallback, normalize, Attempt, DrawRecord};
use crate::sources::CandidateSource;

/// Outcome of one full run: exactly one record, plus the trace of every
/// source tried.
pub struct RunOutcome {
    pub record: DrawRecord,
    pub attempts: Vec<Attempt>,
}

impl RunOutcome {
    pub fn is_fallback(&self) -> bool {
        self.attempts.iter().all(|a| !a.succeeded)
    }
}

/// Walk the registry in order, one source at a time, stopping at the first
/// one that yields a usable draw. Fetch failures, parse failures and empty
/// cascades all count as a miss and advance to the next source; nothing short
/// of an empty registry is an error. When every source misses, the fallback
/// record is emitted so callers always get a well-formed result.
pub async fn run(fetcher: &dyn Fetch, registry: &[CandidateSource]) -> Result<RunOutcome> {
    if registry.is_empty() {
        bail!("candidate source registry is empty");
    }

    let mut attempts = Vec::with_capacity(registry.len());

    for source in registry {
        info!("trying source {} ({})", source.id, source.url);

        let response = match fetcher.fetch(source).await {
            Ok(response) => response,
            Err(e) => {
                warn!("source {} miss: {}", source.id, e);
                attempts.push(miss(source));
                continue;
            }
        };

        let kind = classify(&response, source.hint);
        match run_cascade(&response, kind) {
            Outcome::Hit(extraction) => {
                info!(
                    "source {} hit via {:?} strategy",
                    source.id, extraction.strategy
                );
                attempts.push(Attempt {
                    source_id: source.id.to_string(),
                    succeeded: true,
                });
                return Ok(RunOutcome {
                    record: normalize(extraction, source.url),
                    attempts,
                });
            }
            Outcome::Miss(reason) => {
                warn!("source {} miss: {:?}", source.id, reason);
                attempts.push(miss(source));
            }
        }
    }

    info!("all {} sources exhausted, emitting fallback", registry.len());
    Ok(RunOutcome {
        record: fallback(),
        attempts,
    })
}

fn miss(source: &CandidateSource) -> Attempt {
    Attempt {
        source_id: source.id.to_string(),
        succeeded: false,
    }
}
