//! Client for the VIAC web session API.
//!
//! Logging in is a small handshake: an unauthenticated GET to collect
//! initial session cookies, then a CSRF-protected POST of the credentials.
//! The resulting [`session::Session`] can fetch the account's
//! [`wealth::WealthSummary`].

pub mod config;
pub mod session;
pub mod wealth;
