//! Shared utilities for the Hiroba chat server.

pub mod logger;
pub mod time;
