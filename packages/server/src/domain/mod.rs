//! ドメイン層
//!
//! チャットルームのドメインモデル（値オブジェクト・エンティティ）と、
//! Infrastructure 層が実装する Repository trait を定義します。

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{ACTIVITY_WINDOW, Message, User};
pub use error::ValueObjectError;
pub use repository::ChatRoomRepository;
pub use value_object::{MessageBody, Timestamp, Username};
