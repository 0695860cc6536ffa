//! [`HttpProber`] — reqwest-backed reachability checks.

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::debug;
use upwatch_core::probe::{ProbeOutcome, ProbeWarning, Prober};

use crate::Result;

/// Fixed per-attempt timeout in seconds.
const PROBE_TIMEOUT_SECS: u64 = 5;

/// Reachability prober backed by two pre-built [`reqwest::Client`]s: one that
/// verifies certificates and one that does not. The unverified client is only
/// ever used for the single TLS fallback attempt.
pub struct HttpProber {
  client:   Client,
  insecure: Client,
}

impl HttpProber {
  /// Build a prober with the standard 5-second per-attempt timeout.
  pub fn new() -> Result<Self> {
    Self::with_timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
  }

  /// Build a prober with a custom per-attempt timeout.
  pub fn with_timeout(timeout: Duration) -> Result<Self> {
    let client = Client::builder().timeout(timeout).build()?;
    let insecure = Client::builder()
      .timeout(timeout)
      .danger_accept_invalid_certs(true)
      .build()?;
    Ok(Self { client, insecure })
  }

  /// Issue one GET against `target` and return its wall-clock duration.
  ///
  /// Non-2xx/3xx responses are turned into errors, so a reachable but
  /// failing target classifies as down.
  async fn attempt(
    client: &Client,
    target: &str,
  ) -> Result<f64, reqwest::Error> {
    let start = Instant::now();
    let response = client.get(target).send().await?;
    response.error_for_status()?;
    Ok(start.elapsed().as_secs_f64())
  }
}

impl Prober for HttpProber {
  async fn probe(&self, url: &str) -> ProbeOutcome {
    let target = normalize_target(url);

    let error = match Self::attempt(&self.client, &target).await {
      Ok(elapsed) => return ProbeOutcome::up(elapsed),
      Err(e) => e,
    };

    if is_tls_error(&error) {
      // The only retry: once more without certificate verification, timed
      // on its own.
      return match Self::attempt(&self.insecure, &target).await {
        Ok(elapsed) => ProbeOutcome::up(elapsed)
          .with_warning(ProbeWarning::TlsVerificationDisabled),
        Err(e) => {
          debug!(url = %target, error = %e, "TLS fallback attempt failed");
          ProbeOutcome::down()
        }
      };
    }

    debug!(url = %target, error = %error, "probe failed");
    ProbeOutcome::down()
  }
}

/// Prepend `https://` when the input has no scheme.
fn normalize_target(url: &str) -> String {
  if url.starts_with("http://") || url.starts_with("https://") {
    url.to_owned()
  } else {
    format!("https://{url}")
  }
}

/// Whether `error` stems from TLS certificate verification, anywhere in its
/// source chain. reqwest exposes no dedicated predicate for this, so the
/// chain's messages are inspected.
fn is_tls_error(error: &reqwest::Error) -> bool {
  let mut source = std::error::Error::source(error);
  while let Some(cause) = source {
    let message = cause.to_string();
    if message.contains("certificate")
      || message.contains("TLS")
      || message.contains("SSL")
    {
      return true;
    }
    source = cause.source();
  }
  false
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use upwatch_core::check::CheckStatus;
  use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

  use super::*;

  #[test]
  fn normalize_prepends_https_when_scheme_missing() {
    assert_eq!(normalize_target("example.com"), "https://example.com");
  }

  #[test]
  fn normalize_keeps_explicit_schemes() {
    assert_eq!(normalize_target("http://example.com"), "http://example.com");
    assert_eq!(
      normalize_target("https://example.com"),
      "https://example.com"
    );
  }

  #[tokio::test]
  async fn reachable_server_is_up() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200))
      .mount(&server)
      .await;

    let prober = HttpProber::new().unwrap();
    let outcome = prober.probe(&server.uri()).await;

    assert_eq!(outcome.status, CheckStatus::Up);
    assert!(outcome.response_time > 0.0);
    assert!(outcome.warning.is_none());
  }

  #[tokio::test]
  async fn http_error_status_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&server)
      .await;

    let prober = HttpProber::new().unwrap();
    let outcome = prober.probe(&server.uri()).await;

    assert_eq!(outcome.status, CheckStatus::Down);
    assert_eq!(outcome.response_time, 0.0);
  }

  #[tokio::test]
  async fn client_error_status_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&server)
      .await;

    let prober = HttpProber::new().unwrap();
    let outcome = prober.probe(&server.uri()).await;

    assert_eq!(outcome.status, CheckStatus::Down);
  }

  #[tokio::test]
  async fn unreachable_port_is_down() {
    let prober = HttpProber::with_timeout(Duration::from_secs(1)).unwrap();
    // Port 9 (discard) is near-certain to refuse on loopback.
    let outcome = prober.probe("http://127.0.0.1:9").await;

    assert_eq!(outcome.status, CheckStatus::Down);
    assert_eq!(outcome.response_time, 0.0);
    assert!(outcome.warning.is_none());
  }
}
