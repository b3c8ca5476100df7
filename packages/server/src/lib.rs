//! Polling chat server library.
//!
//! This library provides an in-memory chat room (message log and presence
//! table) and the HTTP layer that exposes it. Clients poll for messages and
//! active users; there is no push channel.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
