//! Error types for `upwatch-core`.

use thiserror::Error;

/// Error from a batch check run.
///
/// Probe failures never show up here — they are absorbed into `DOWN`
/// results. Only input validation and storage failures abort a batch.
#[derive(Debug, Error)]
pub enum BatchError<E>
where
  E: std::error::Error + Send + Sync + 'static,
{
  /// The caller submitted an empty list of URLs.
  #[error("the urls list cannot be empty")]
  EmptyBatch,

  /// The storage backend failed; the batch was aborted with no further
  /// writes.
  #[error("store error: {0}")]
  Store(#[source] E),
}
