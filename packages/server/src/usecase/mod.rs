//! UseCase 層
//!
//! ChatRoom の 4 つの操作それぞれに対応するユースケースを定義します。
//! UseCase は `ChatRoomRepository` trait にのみ依存します。

mod get_active_users;
mod get_messages;
mod post_message;
mod record_ping;

pub use get_active_users::GetActiveUsersUseCase;
pub use get_messages::GetMessagesUseCase;
pub use post_message::PostMessageUseCase;
pub use record_ping::RecordPingUseCase;
