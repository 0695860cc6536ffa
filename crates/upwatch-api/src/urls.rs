//! Handler for the URL listing endpoint.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/all-urls/` | Current state of every known URL |

use std::sync::Arc;

use axum::{Json, extract::State};
use upwatch_core::{probe::Prober, store::MonitorStore, url::UrlRecord};

use crate::{AppState, error::ApiError};

/// `GET /all-urls/` — served straight from the store; no probes are issued.
pub async fn list<P, S>(
  State(state): State<Arc<AppState<P, S>>>,
) -> Result<Json<Vec<UrlRecord>>, ApiError>
where
  P: Prober,
  S: MonitorStore,
{
  let urls = state
    .store
    .list_urls()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(urls))
}
