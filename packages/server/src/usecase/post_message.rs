//! UseCase: メッセージ投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 投稿内容がそのまま Repository に渡されることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージ投稿
//! - エッジケース：空の本文

use std::sync::Arc;

use crate::domain::{ChatRoomRepository, MessageBody, Username};

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRoomRepository>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(repository: Arc<dyn ChatRoomRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ投稿を実行
    ///
    /// 送信時刻は Repository が付与する。
    ///
    /// # Arguments
    ///
    /// * `author` - 送信者のユーザー名（Domain Model）
    /// * `body` - メッセージ本文（Domain Model）
    pub async fn execute(&self, author: Username, body: MessageBody) {
        tracing::debug!(author = %author, len = body.as_str().len(), "Posting message");
        self.repository.append_message(author, body).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::MockChatRoomRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_post_message_appends_to_repository() {
        // テスト項目: 投稿内容がそのまま Repository に追加される
        // given (前提条件):
        let mut repository = MockChatRoomRepository::new();
        repository
            .expect_append_message()
            .with(
                eq(Username::new("alice".to_string()).unwrap()),
                eq(MessageBody::new("Hello!".to_string())),
            )
            .times(1)
            .return_const(());
        let usecase = PostMessageUseCase::new(Arc::new(repository));

        // when (操作):
        usecase
            .execute(
                Username::new("alice".to_string()).unwrap(),
                MessageBody::new("Hello!".to_string()),
            )
            .await;

        // then (期待する結果): モックの expectation が drop 時に検証される
    }

    #[tokio::test]
    async fn test_post_message_with_empty_body() {
        // テスト項目: 空の本文も投稿できる
        // given (前提条件):
        let mut repository = MockChatRoomRepository::new();
        repository
            .expect_append_message()
            .withf(|_, body| body.as_str().is_empty())
            .times(1)
            .return_const(());
        let usecase = PostMessageUseCase::new(Arc::new(repository));

        // when (操作):
        usecase
            .execute(
                Username::new("alice".to_string()).unwrap(),
                MessageBody::default(),
            )
            .await;
    }
}
