//! URL record — the mutable current-state summary for a monitored URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::check::CheckStatus;

/// Latest known state of one monitored URL.
///
/// There is exactly one record per unique URL string; the identifier is
/// assigned on first insert and stable for the record's lifetime.
/// `uptime_percentage` is a cache of the last aggregate recompute over the
/// URL's check history, never an incrementally maintained counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlRecord {
  pub url_id:            i64,
  pub url:               String,
  pub status:            CheckStatus,
  pub response_time:     f64,
  pub uptime_percentage: f64,
  pub last_checked:      DateTime<Utc>,
}
