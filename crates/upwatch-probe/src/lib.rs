//! HTTP(S) prober for upwatch.
//!
//! Implements [`upwatch_core::probe::Prober`] on top of [`reqwest`], with a
//! single certificate-verification fallback for TLS failures.

mod http;

pub mod error;

pub use error::{Error, Result};
pub use http::HttpProber;
