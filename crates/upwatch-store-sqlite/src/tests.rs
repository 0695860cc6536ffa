//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{DateTime, TimeZone, Utc};
use upwatch_core::{
  check::CheckStatus,
  store::MonitorStore,
  uptime,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

/// Deterministic timestamp `secs` seconds past a fixed instant.
fn at(secs: u32) -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, secs).unwrap()
}

// ─── Upsert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_assigns_and_keeps_identifier() {
  let s = store().await;

  let first = s
    .upsert_url("example.com", CheckStatus::Up, 0.2, at(0))
    .await
    .unwrap();
  let second = s
    .upsert_url("example.com", CheckStatus::Down, 0.0, at(1))
    .await
    .unwrap();

  assert_eq!(first, second);
}

#[tokio::test]
async fn distinct_urls_get_distinct_identifiers() {
  let s = store().await;

  let a = s
    .upsert_url("a.example", CheckStatus::Up, 0.1, at(0))
    .await
    .unwrap();
  let b = s
    .upsert_url("b.example", CheckStatus::Up, 0.1, at(0))
    .await
    .unwrap();

  assert_ne!(a, b);
}

#[tokio::test]
async fn upsert_seeds_uptime_from_first_status() {
  let s = store().await;

  s.upsert_url("up.example", CheckStatus::Up, 0.1, at(0))
    .await
    .unwrap();
  s.upsert_url("down.example", CheckStatus::Down, 0.0, at(0))
    .await
    .unwrap();

  let urls = s.list_urls().await.unwrap();
  let up = urls.iter().find(|r| r.url == "up.example").unwrap();
  let down = urls.iter().find(|r| r.url == "down.example").unwrap();

  assert_eq!(up.uptime_percentage, 100.0);
  assert_eq!(down.uptime_percentage, 0.0);
}

#[tokio::test]
async fn upsert_updates_state_but_not_cached_uptime() {
  let s = store().await;

  s.upsert_url("x.example", CheckStatus::Up, 0.5, at(0))
    .await
    .unwrap();
  s.upsert_url("x.example", CheckStatus::Down, 0.0, at(7))
    .await
    .unwrap();

  let urls = s.list_urls().await.unwrap();
  assert_eq!(urls.len(), 1);

  let record = &urls[0];
  assert_eq!(record.status, CheckStatus::Down);
  assert_eq!(record.response_time, 0.0);
  assert_eq!(record.last_checked, at(7));
  // The cached percentage only moves when the aggregate is recomputed.
  assert_eq!(record.uptime_percentage, 100.0);
}

// ─── Append and count ────────────────────────────────────────────────────────

#[tokio::test]
async fn append_and_count_outcomes() {
  let s = store().await;
  let url_id = s
    .upsert_url("a.example", CheckStatus::Up, 0.1, at(0))
    .await
    .unwrap();

  s.append_check(url_id, CheckStatus::Up, 0.1, at(0))
    .await
    .unwrap();
  s.append_check(url_id, CheckStatus::Up, 0.2, at(1))
    .await
    .unwrap();
  s.append_check(url_id, CheckStatus::Down, 0.0, at(2))
    .await
    .unwrap();

  let counts = s.count_outcomes(url_id).await.unwrap();
  assert_eq!(counts.total, 3);
  assert_eq!(counts.up, 2);
}

#[tokio::test]
async fn count_outcomes_with_no_checks_is_zero() {
  let s = store().await;
  let url_id = s
    .upsert_url("quiet.example", CheckStatus::Up, 0.1, at(0))
    .await
    .unwrap();

  let counts = s.count_outcomes(url_id).await.unwrap();
  assert_eq!(counts.total, 0);
  assert_eq!(counts.up, 0);
  // Zero history counts as fully up by definition.
  assert_eq!(uptime::percentage(counts), 100.0);
}

// ─── record_check ────────────────────────────────────────────────────────────

#[tokio::test]
async fn record_check_assigns_stable_identifier() {
  let s = store().await;

  let first = s
    .record_check("stable.example", CheckStatus::Up, 0.1, at(0))
    .await
    .unwrap();
  let second = s
    .record_check("stable.example", CheckStatus::Up, 0.2, at(1))
    .await
    .unwrap();
  let third = s
    .record_check("stable.example", CheckStatus::Down, 0.0, at(2))
    .await
    .unwrap();

  assert_eq!(first.url_id, second.url_id);
  assert_eq!(second.url_id, third.url_id);

  assert_eq!(first.counts.total, 1);
  assert_eq!(second.counts.total, 2);
  assert_eq!(third.counts.total, 3);
  assert_eq!(third.counts.up, 2);
}

#[tokio::test]
async fn record_check_refreshes_cached_uptime() {
  let s = store().await;

  s.record_check("y.example", CheckStatus::Up, 0.2, at(0))
    .await
    .unwrap();
  s.record_check("y.example", CheckStatus::Down, 0.0, at(1))
    .await
    .unwrap();

  let urls = s.list_urls().await.unwrap();
  assert_eq!(urls.len(), 1);
  assert_eq!(urls[0].uptime_percentage, 50.0);
  assert_eq!(urls[0].status, CheckStatus::Down);
}

// ─── History ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn history_is_newest_first() {
  let s = store().await;
  let url_id = s
    .upsert_url("h.example", CheckStatus::Up, 0.1, at(0))
    .await
    .unwrap();

  // Appended out of chronological order on purpose.
  s.append_check(url_id, CheckStatus::Up, 0.2, at(5))
    .await
    .unwrap();
  s.append_check(url_id, CheckStatus::Down, 0.0, at(1))
    .await
    .unwrap();
  s.append_check(url_id, CheckStatus::Up, 0.3, at(9))
    .await
    .unwrap();

  let history = s.list_history(url_id).await.unwrap().unwrap();
  assert_eq!(history.len(), 3);
  assert_eq!(history[0].timestamp, at(9));
  assert_eq!(history[1].timestamp, at(5));
  assert_eq!(history[2].timestamp, at(1));
  assert_eq!(history[1].status, CheckStatus::Up);
  assert_eq!(history[2].status, CheckStatus::Down);
}

#[tokio::test]
async fn history_for_unknown_identifier_is_none() {
  let s = store().await;
  let history = s.list_history(42).await.unwrap();
  assert!(history.is_none());
}

#[tokio::test]
async fn history_round_trips_response_time() {
  let s = store().await;
  let recorded = s
    .record_check("rt.example", CheckStatus::Up, 0.125, at(0))
    .await
    .unwrap();

  let history = s.list_history(recorded.url_id).await.unwrap().unwrap();
  assert_eq!(history.len(), 1);
  assert_eq!(history[0].response_time, 0.125);
  assert_eq!(history[0].url_id, recorded.url_id);
}
