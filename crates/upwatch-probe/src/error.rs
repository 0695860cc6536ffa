//! Error type for `upwatch-probe`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The underlying HTTP client could not be constructed.
  #[error("http client error: {0}")]
  Client(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
