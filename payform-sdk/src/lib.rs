//! Shared types and HTTP client for the payform order service.
//!
//! The HTTP client is gated behind the `client` cargo feature so downstream
//! crates that only need the payload types do not pull in `reqwest`.

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
