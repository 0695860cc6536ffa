//! Check status and the immutable check record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of one probe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
  Up,
  Down,
}

impl CheckStatus {
  pub fn is_up(self) -> bool { matches!(self, CheckStatus::Up) }
}

/// One persisted probe outcome.
///
/// Check records are strictly append-only; once written they are never
/// mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRecord {
  pub check_id:      i64,
  pub url_id:        i64,
  pub status:        CheckStatus,
  /// Response time in seconds; 0.0 when the check was `DOWN`.
  pub response_time: f64,
  pub timestamp:     DateTime<Utc>,
}
