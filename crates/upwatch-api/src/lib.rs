//! JSON HTTP surface for upwatch.
//!
//! Exposes an axum [`Router`] over any [`Prober`] + [`MonitorStore`] pair.
//! Transport concerns (TLS, CORS policy, listeners) belong to the server
//! binary.

pub mod checks;
pub mod error;
pub mod history;
pub mod urls;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;
use upwatch_core::{monitor::Monitor, probe::Prober, store::MonitorStore};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
///
/// The store appears twice on purpose: the orchestrator owns one handle for
/// the write path, and the read-only endpoints query the other directly.
pub struct AppState<P, S> {
  pub monitor: Monitor<P, S>,
  pub store:   S,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for the monitor API.
pub fn router<P, S>(state: Arc<AppState<P, S>>) -> Router
where
  P: Prober + 'static,
  S: MonitorStore + 'static,
{
  Router::new()
    .route("/check-urls/", post(checks::check_batch::<P, S>))
    .route("/all-urls/", get(urls::list::<P, S>))
    .route("/history/{url_id}", get(history::list::<P, S>))
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────
