//! UseCase: メッセージ一覧取得処理

use std::sync::Arc;

use crate::domain::{ChatRoomRepository, Message};

/// メッセージ一覧取得のユースケース
pub struct GetMessagesUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRoomRepository>,
}

impl GetMessagesUseCase {
    /// 新しい GetMessagesUseCase を作成
    pub fn new(repository: Arc<dyn ChatRoomRepository>) -> Self {
        Self { repository }
    }

    /// 全メッセージを投稿順で取得
    pub async fn execute(&self) -> Vec<Message> {
        let messages = self.repository.get_messages().await;
        tracing::debug!(count = messages.len(), "Fetched messages");
        messages
    }
}
