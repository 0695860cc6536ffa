//! [`SqliteStore`] — the SQLite implementation of [`MonitorStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::params;
use upwatch_core::{
  check::{CheckRecord, CheckStatus},
  store::{MonitorStore, OutcomeCounts, RecordedCheck},
  uptime,
  url::UrlRecord,
};

use crate::{
  Error, Result,
  encode::{RawCheckRecord, RawUrlRecord, encode_dt, encode_status},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An upwatch store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Row-level helpers ───────────────────────────────────────────────────────
// Shared between the fine-grained trait methods and the transactional
// `record_check`, so both paths issue identical SQL.

fn upsert_url_in(
  conn: &rusqlite::Connection,
  url: &str,
  status: CheckStatus,
  response_time: f64,
  last_checked: &str,
) -> rusqlite::Result<i64> {
  // The seeded percentage is a placeholder; `record_check` overwrites it
  // with the aggregate in the same transaction.
  let seeded_uptime = if status.is_up() { 100.0 } else { 0.0 };
  conn.query_row(
    "INSERT INTO urls (url, status, response_time, uptime_percentage, last_checked)
     VALUES (?1, ?2, ?3, ?4, ?5)
     ON CONFLICT(url) DO UPDATE SET
       status        = excluded.status,
       response_time = excluded.response_time,
       last_checked  = excluded.last_checked
     RETURNING id",
    params![
      url,
      encode_status(status),
      response_time,
      seeded_uptime,
      last_checked,
    ],
    |row| row.get(0),
  )
}

fn append_check_in(
  conn: &rusqlite::Connection,
  url_id: i64,
  status: CheckStatus,
  response_time: f64,
  timestamp: &str,
) -> rusqlite::Result<()> {
  conn.execute(
    "INSERT INTO url_checks (url_id, status, response_time, timestamp)
     VALUES (?1, ?2, ?3, ?4)",
    params![url_id, encode_status(status), response_time, timestamp],
  )?;
  Ok(())
}

fn count_outcomes_in(
  conn: &rusqlite::Connection,
  url_id: i64,
) -> rusqlite::Result<OutcomeCounts> {
  conn.query_row(
    "SELECT COUNT(*),
            COALESCE(SUM(CASE WHEN status = 'UP' THEN 1 ELSE 0 END), 0)
     FROM url_checks
     WHERE url_id = ?1",
    params![url_id],
    |row| {
      Ok(OutcomeCounts {
        total: row.get::<_, i64>(0)? as u64,
        up:    row.get::<_, i64>(1)? as u64,
      })
    },
  )
}

// ─── MonitorStore impl ───────────────────────────────────────────────────────

impl MonitorStore for SqliteStore {
  type Error = Error;

  async fn upsert_url(
    &self,
    url: &str,
    status: CheckStatus,
    response_time: f64,
    last_checked: DateTime<Utc>,
  ) -> Result<i64> {
    let url = url.to_owned();
    let at_str = encode_dt(last_checked);

    let url_id = self
      .conn
      .call(move |conn| {
        Ok(upsert_url_in(conn, &url, status, response_time, &at_str)?)
      })
      .await?;
    Ok(url_id)
  }

  async fn append_check(
    &self,
    url_id: i64,
    status: CheckStatus,
    response_time: f64,
    timestamp: DateTime<Utc>,
  ) -> Result<()> {
    let at_str = encode_dt(timestamp);

    self
      .conn
      .call(move |conn| {
        Ok(append_check_in(conn, url_id, status, response_time, &at_str)?)
      })
      .await?;
    Ok(())
  }

  async fn count_outcomes(&self, url_id: i64) -> Result<OutcomeCounts> {
    let counts = self
      .conn
      .call(move |conn| Ok(count_outcomes_in(conn, url_id)?))
      .await?;
    Ok(counts)
  }

  async fn record_check(
    &self,
    url: &str,
    status: CheckStatus,
    response_time: f64,
    checked_at: DateTime<Utc>,
  ) -> Result<RecordedCheck> {
    let url = url.to_owned();
    let at_str = encode_dt(checked_at);

    let recorded = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let url_id = upsert_url_in(&tx, &url, status, response_time, &at_str)?;
        append_check_in(&tx, url_id, status, response_time, &at_str)?;
        let counts = count_outcomes_in(&tx, url_id)?;
        // The aggregate is authoritative; refresh the cached column so reads
        // never serve the insert-time seed.
        tx.execute(
          "UPDATE urls SET uptime_percentage = ?1 WHERE id = ?2",
          params![uptime::percentage(counts), url_id],
        )?;
        tx.commit()?;
        Ok(RecordedCheck { url_id, counts })
      })
      .await?;
    Ok(recorded)
  }

  async fn list_urls(&self) -> Result<Vec<UrlRecord>> {
    let raws: Vec<RawUrlRecord> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, url, status, response_time, uptime_percentage, last_checked
           FROM urls",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawUrlRecord {
              url_id:            row.get(0)?,
              url:               row.get(1)?,
              status:            row.get(2)?,
              response_time:     row.get(3)?,
              uptime_percentage: row.get(4)?,
              last_checked:      row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawUrlRecord::into_record).collect()
  }

  async fn list_history(&self, url_id: i64) -> Result<Option<Vec<CheckRecord>>> {
    let raws: Vec<RawCheckRecord> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, url_id, status, response_time, timestamp
           FROM url_checks
           WHERE url_id = ?1
           ORDER BY timestamp DESC, id DESC",
        )?;
        let rows = stmt
          .query_map(params![url_id], |row| {
            Ok(RawCheckRecord {
              check_id:      row.get(0)?,
              url_id:        row.get(1)?,
              status:        row.get(2)?,
              response_time: row.get(3)?,
              timestamp:     row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    if raws.is_empty() {
      return Ok(None);
    }

    raws
      .into_iter()
      .map(RawCheckRecord::into_record)
      .collect::<Result<Vec<_>>>()
      .map(Some)
  }
}
