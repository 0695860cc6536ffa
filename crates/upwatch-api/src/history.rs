//! Handler for the check-history endpoint.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/history/{url_id}` | Newest first; 404 when no records exist |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use upwatch_core::{
  check::{CheckRecord, CheckStatus},
  probe::Prober,
  store::MonitorStore,
};

use crate::{AppState, error::ApiError};

/// One history entry as returned over the wire.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
  pub status:        CheckStatus,
  pub response_time: f64,
  pub timestamp:     DateTime<Utc>,
}

impl From<CheckRecord> for HistoryEntry {
  fn from(record: CheckRecord) -> Self {
    Self {
      status:        record.status,
      response_time: record.response_time,
      timestamp:     record.timestamp,
    }
  }
}

/// `GET /history/{url_id}` — all checks for one URL, newest first.
pub async fn list<P, S>(
  State(state): State<Arc<AppState<P, S>>>,
  Path(url_id): Path<i64>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError>
where
  P: Prober,
  S: MonitorStore,
{
  let checks = state
    .store
    .list_history(url_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("no history for url {url_id}")))?;

  Ok(Json(checks.into_iter().map(HistoryEntry::from).collect()))
}
