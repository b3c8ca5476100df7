//! Server state shared across handlers.

use std::sync::Arc;

use crate::usecase::{
    GetActiveUsersUseCase, GetMessagesUseCase, PostMessageUseCase, RecordPingUseCase,
};

/// Shared application state
pub struct AppState {
    /// PostMessageUseCase（メッセージ投稿のユースケース）
    pub post_message_usecase: Arc<PostMessageUseCase>,
    /// GetMessagesUseCase（メッセージ一覧取得のユースケース）
    pub get_messages_usecase: Arc<GetMessagesUseCase>,
    /// RecordPingUseCase（ping 記録のユースケース）
    pub record_ping_usecase: Arc<RecordPingUseCase>,
    /// GetActiveUsersUseCase（アクティブユーザー取得のユースケース）
    pub get_active_users_usecase: Arc<GetActiveUsersUseCase>,
}
