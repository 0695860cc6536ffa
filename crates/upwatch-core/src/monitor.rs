//! The batch orchestrator — probe, persist, aggregate, assemble.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
  check::CheckStatus,
  error::BatchError,
  probe::{ProbeWarning, Prober},
  store::MonitorStore,
  uptime,
};

// ─── Result type ─────────────────────────────────────────────────────────────

/// Per-URL result of a batch check.
#[derive(Debug, Clone, Serialize)]
pub struct UrlStatus {
  pub url:               String,
  pub status:            CheckStatus,
  pub response_time:     f64,
  pub uptime_percentage: f64,
  pub last_checked:      DateTime<Utc>,
  pub url_id:            i64,
  /// Present only when the probe fell back to unverified TLS.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub warning:           Option<ProbeWarning>,
}

// ─── Monitor ─────────────────────────────────────────────────────────────────

/// Drives the check-and-record pipeline over a prober and a store.
pub struct Monitor<P, S> {
  prober: P,
  store:  S,
}

impl<P, S> Monitor<P, S>
where
  P: Prober,
  S: MonitorStore,
{
  pub fn new(prober: P, store: S) -> Self { Self { prober, store } }

  /// Check every URL in `urls` in order and persist each outcome.
  ///
  /// Whitespace-only entries are skipped entirely (not probed, not
  /// persisted, absent from the output), so the output may be shorter than
  /// the input. A probe failure becomes a `DOWN` entry; a store failure
  /// aborts the whole batch.
  pub async fn check_batch(
    &self,
    urls: &[String],
  ) -> Result<Vec<UrlStatus>, BatchError<S::Error>> {
    if urls.is_empty() {
      return Err(BatchError::EmptyBatch);
    }

    let mut results = Vec::with_capacity(urls.len());

    for raw in urls {
      let url = raw.trim();
      if url.is_empty() {
        continue;
      }

      let outcome = self.prober.probe(url).await;
      // One captured instant serves the persisted record and the response
      // alike.
      let checked_at = Utc::now();

      let recorded = self
        .store
        .record_check(url, outcome.status, outcome.response_time, checked_at)
        .await
        .map_err(BatchError::Store)?;

      results.push(UrlStatus {
        url:               url.to_owned(),
        status:            outcome.status,
        response_time:     outcome.response_time,
        uptime_percentage: uptime::percentage(recorded.counts),
        last_checked:      checked_at,
        url_id:            recorded.url_id,
        warning:           outcome.warning,
      });
    }

    Ok(results)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
