//! HTTP API DTOs.
//!
//! Field names are camelCase on the wire: `username`, `message`, `timeSent`,
//! `lastPing`. Timestamps are serialized as RFC 3339 strings in UTC.

use serde::{Deserialize, Serialize};

/// Request body for `POST /messages`
///
/// A client-supplied `timeSent` is accepted but ignored; the server stamps the time.
/// A missing or `null` `message` is stored as an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostMessageRequest {
    pub username: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for `POST /ping`
///
/// A client-supplied `timeSent` is accepted but ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PingRequest {
    pub username: String,
}

/// Message in the `GET /messages` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub username: String,
    pub message: String,
    pub time_sent: String,
}

/// User in the `GET /users` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub username: String,
    pub last_ping: String,
}
