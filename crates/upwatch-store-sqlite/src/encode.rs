//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; statuses as `'UP'`/`'DOWN'`.

use chrono::{DateTime, Utc};
use upwatch_core::{
  check::{CheckRecord, CheckStatus},
  url::UrlRecord,
};

use crate::{Error, Result};

// ─── CheckStatus ─────────────────────────────────────────────────────────────

pub fn encode_status(status: CheckStatus) -> &'static str {
  match status {
    CheckStatus::Up => "UP",
    CheckStatus::Down => "DOWN",
  }
}

pub fn decode_status(s: &str) -> Result<CheckStatus> {
  match s {
    "UP" => Ok(CheckStatus::Up),
    "DOWN" => Ok(CheckStatus::Down),
    other => Err(Error::UnknownStatus(other.to_owned())),
  }
}

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `urls` row.
pub struct RawUrlRecord {
  pub url_id:            i64,
  pub url:               String,
  pub status:            String,
  pub response_time:     f64,
  pub uptime_percentage: f64,
  pub last_checked:      String,
}

impl RawUrlRecord {
  pub fn into_record(self) -> Result<UrlRecord> {
    Ok(UrlRecord {
      url_id:            self.url_id,
      url:               self.url,
      status:            decode_status(&self.status)?,
      response_time:     self.response_time,
      uptime_percentage: self.uptime_percentage,
      last_checked:      decode_dt(&self.last_checked)?,
    })
  }
}

/// Raw values read directly from a `url_checks` row.
pub struct RawCheckRecord {
  pub check_id:      i64,
  pub url_id:        i64,
  pub status:        String,
  pub response_time: f64,
  pub timestamp:     String,
}

impl RawCheckRecord {
  pub fn into_record(self) -> Result<CheckRecord> {
    Ok(CheckRecord {
      check_id:      self.check_id,
      url_id:        self.url_id,
      status:        decode_status(&self.status)?,
      response_time: self.response_time,
      timestamp:     decode_dt(&self.timestamp)?,
    })
  }
}
