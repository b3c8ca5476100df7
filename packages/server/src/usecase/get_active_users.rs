//! UseCase: アクティブユーザー一覧取得処理

use std::sync::Arc;

use crate::domain::{ChatRoomRepository, User};

/// アクティブユーザー一覧取得のユースケース
pub struct GetActiveUsersUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRoomRepository>,
}

impl GetActiveUsersUseCase {
    /// 新しい GetActiveUsersUseCase を作成
    pub fn new(repository: Arc<dyn ChatRoomRepository>) -> Self {
        Self { repository }
    }

    /// アクティブユーザーを取得
    ///
    /// 順序は保証しないが、レスポンスを安定させるためユーザー名順に並べて返す。
    pub async fn execute(&self) -> Vec<User> {
        let mut users = self.repository.get_active_users().await;
        users.sort_by(|a, b| a.username.cmp(&b.username));
        tracing::debug!(active = users.len(), "Fetched active users");
        users
    }
}
