//! UseCase: プレゼンス ping 記録処理

use std::sync::Arc;

use crate::domain::{ChatRoomRepository, Username};

/// ping 記録のユースケース
pub struct RecordPingUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRoomRepository>,
}

impl RecordPingUseCase {
    /// 新しい RecordPingUseCase を作成
    pub fn new(repository: Arc<dyn ChatRoomRepository>) -> Self {
        Self { repository }
    }

    /// ping を記録する
    ///
    /// クライアントが送ってきた時刻は使わず、Repository がサーバー時刻で記録する。
    pub async fn execute(&self, username: Username) {
        tracing::info!(username = %username, "Received a ping");
        self.repository.record_ping(username).await;
    }
}
