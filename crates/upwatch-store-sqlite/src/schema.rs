//! SQL schema for the upwatch SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS urls (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    url               TEXT NOT NULL UNIQUE,
    status            TEXT NOT NULL,    -- 'UP' | 'DOWN'
    response_time     REAL NOT NULL,
    uptime_percentage REAL NOT NULL DEFAULT 100.0,
    last_checked      TEXT NOT NULL     -- RFC 3339 UTC
);

-- Check rows are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table; there is no
-- retention policy, so history grows without bound.
CREATE TABLE IF NOT EXISTS url_checks (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    url_id        INTEGER NOT NULL REFERENCES urls(id),
    status        TEXT NOT NULL,
    response_time REAL NOT NULL,
    timestamp     TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS url_checks_url_idx  ON url_checks(url_id);
CREATE INDEX IF NOT EXISTS url_checks_time_idx ON url_checks(timestamp);

PRAGMA user_version = 1;
";
