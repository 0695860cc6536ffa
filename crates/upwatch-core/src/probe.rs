//! The `Prober` trait and probe outcome types.
//!
//! The trait is implemented by `upwatch-probe`. The orchestrator and the API
//! depend on this abstraction, which also lets tests drive the pipeline with
//! a scripted prober instead of the network.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::check::CheckStatus;

/// Warning attached to a successful probe that needed degraded transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeWarning {
  /// The primary attempt failed certificate verification and the single
  /// retry without verification succeeded.
  #[serde(rename = "SSL verification disabled")]
  TlsVerificationDisabled,
}

/// Result of one reachability check.
///
/// Probe failures are always encoded here as `DOWN` outcomes; a prober never
/// surfaces an error to its caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeOutcome {
  pub status:        CheckStatus,
  /// Wall-clock duration of the successful request in seconds; 0.0 when the
  /// target was down.
  pub response_time: f64,
  pub warning:       Option<ProbeWarning>,
}

impl ProbeOutcome {
  pub fn up(response_time: f64) -> Self {
    Self {
      status: CheckStatus::Up,
      response_time,
      warning: None,
    }
  }

  pub fn down() -> Self {
    Self {
      status: CheckStatus::Down,
      response_time: 0.0,
      warning: None,
    }
  }

  pub fn with_warning(mut self, warning: ProbeWarning) -> Self {
    self.warning = Some(warning);
    self
  }
}

/// Abstraction over a single-URL reachability check.
pub trait Prober: Send + Sync {
  /// Probe `url` once and classify the outcome.
  fn probe<'a>(
    &'a self,
    url: &'a str,
  ) -> impl Future<Output = ProbeOutcome> + Send + 'a;
}
