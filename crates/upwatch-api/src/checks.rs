//! Handler for the batch check endpoint.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/check-urls/` | Body: `{"urls":[...]}`; 422 on an empty list |

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Deserialize;
use upwatch_core::{
  error::BatchError,
  monitor::UrlStatus,
  probe::Prober,
  store::MonitorStore,
};

use crate::{AppState, error::ApiError};

/// JSON body accepted by `POST /check-urls/`.
#[derive(Debug, Deserialize)]
pub struct CheckBatchBody {
  pub urls: Vec<String>,
}

/// `POST /check-urls/` — probe and persist every non-blank URL in the batch.
///
/// Returns one entry per non-blank input URL, in input order. A single
/// unreachable URL shows up as `DOWN`; only a storage failure aborts the
/// whole batch.
pub async fn check_batch<P, S>(
  State(state): State<Arc<AppState<P, S>>>,
  Json(body): Json<CheckBatchBody>,
) -> Result<Json<Vec<UrlStatus>>, ApiError>
where
  P: Prober,
  S: MonitorStore,
{
  let results = state
    .monitor
    .check_batch(&body.urls)
    .await
    .map_err(|e| match e {
      BatchError::EmptyBatch => {
        ApiError::Unprocessable("the 'urls' list cannot be empty".to_owned())
      }
      BatchError::Store(e) => ApiError::Store(Box::new(e)),
    })?;
  Ok(Json(results))
}
