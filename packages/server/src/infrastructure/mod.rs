//! Infrastructure 層
//!
//! - `repository`: ドメイン層の Repository trait の具体的な実装
//! - `dto`: HTTP API で送受信する JSON の型と、ドメインモデルとの変換

pub mod dto;
pub mod repository;
