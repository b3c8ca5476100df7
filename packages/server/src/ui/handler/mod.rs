//! HTTP handlers.

mod http;

pub use http::{get_active_users, get_messages, health_check, post_message, record_ping};
