//! Core types and trait definitions for the upwatch URL monitor.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The prober and storage backends implement the traits defined here;
//! the API crate depends only on the abstractions.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod check;
pub mod error;
pub mod monitor;
pub mod probe;
pub mod store;
pub mod uptime;
pub mod url;

pub use error::BatchError;
