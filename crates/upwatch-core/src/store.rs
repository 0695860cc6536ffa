//! The `MonitorStore` trait and supporting types.
//!
//! The trait is implemented by storage backends (e.g.
//! `upwatch-store-sqlite`). Higher layers (the orchestrator, `upwatch-api`)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::{
  check::{CheckRecord, CheckStatus},
  url::UrlRecord,
};

// ─── Aggregates ──────────────────────────────────────────────────────────────

/// Aggregate over a URL's full check history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeCounts {
  pub total: u64,
  pub up:    u64,
}

/// What [`MonitorStore::record_check`] persisted for one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedCheck {
  pub url_id: i64,
  pub counts: OutcomeCounts,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an upwatch storage backend.
///
/// URL records are keyed by URL string and updated in place; check records
/// are strictly append-only. All methods return `Send` futures so the trait
/// can be used in multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait MonitorStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── URL records ───────────────────────────────────────────────────────

  /// Insert or update the current-state record for `url`, returning its
  /// stable identifier.
  ///
  /// A fresh insert seeds the uptime percentage from `status` (100.0 for
  /// `UP`, 0.0 for `DOWN`); an update changes status, response time and
  /// last-checked but leaves the cached percentage alone. The aggregate
  /// recompute is authoritative — the seed is a placeholder only.
  fn upsert_url<'a>(
    &'a self,
    url: &'a str,
    status: CheckStatus,
    response_time: f64,
    last_checked: DateTime<Utc>,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + 'a;

  // ── Check records — append-only writes ────────────────────────────────

  /// Append one immutable check record. Always creates a new row.
  fn append_check(
    &self,
    url_id: i64,
    status: CheckStatus,
    response_time: f64,
    timestamp: DateTime<Utc>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Count all check records for `url_id` and how many of them were `UP`.
  fn count_outcomes(
    &self,
    url_id: i64,
  ) -> impl Future<Output = Result<OutcomeCounts, Self::Error>> + Send + '_;

  /// Persist one probe outcome as a single unit of work: upsert the URL
  /// record, append the check record, count outcomes, and refresh the
  /// cached uptime percentage from the aggregate.
  ///
  /// Backends must not let a concurrent reader observe a partially applied
  /// sequence.
  fn record_check<'a>(
    &'a self,
    url: &'a str,
    status: CheckStatus,
    response_time: f64,
    checked_at: DateTime<Utc>,
  ) -> impl Future<Output = Result<RecordedCheck, Self::Error>> + Send + 'a;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// All URL records. No ordering guarantee.
  fn list_urls(
    &self,
  ) -> impl Future<Output = Result<Vec<UrlRecord>, Self::Error>> + Send + '_;

  /// All check records for `url_id`, newest first. Returns `None` when the
  /// identifier has no records.
  fn list_history(
    &self,
    url_id: i64,
  ) -> impl Future<Output = Result<Option<Vec<CheckRecord>>, Self::Error>> + Send + '_;
}
