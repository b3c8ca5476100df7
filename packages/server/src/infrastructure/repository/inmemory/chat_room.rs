//! InMemory ChatRoom 実装
//!
//! ドメイン層が定義する ChatRoomRepository trait の具体的な実装。
//! `Vec` をメッセージログ、`HashMap` をユーザーテーブルとしてメモリ上に保持します。
//!
//! ## 排他制御
//!
//! メッセージログとユーザーテーブルはそれぞれ独立した `Mutex` で保護します。
//! 1 つの操作の中で 2 つのロックを同時に保持することはありません。
//! 時刻はロック取得後に読むため、ログ上の順序と `sent_at` の順序は一致し、
//! 同じユーザーへの同時 ping では最後にロックを取得した呼び出しの時刻が残ります。

use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use hiroba_shared::time::{Clock, SystemClock};
use tokio::sync::Mutex;

use crate::domain::{
    ACTIVITY_WINDOW, ChatRoomRepository, Message, MessageBody, Timestamp, User, Username,
};

/// インメモリ ChatRoom 実装
///
/// サーバープロセスの起動時に 1 つ作成し、`Arc` で UseCase 層に注入する。
pub struct InMemoryChatRoom {
    /// メッセージログ（追加順 = 表示順）
    messages: Mutex<Vec<Message>>,
    /// ユーザー名 → ユーザー
    users: Mutex<HashMap<Username, User>>,
    clock: Arc<dyn Clock>,
    activity_window: Duration,
}

impl InMemoryChatRoom {
    /// システム時計を使う新しい InMemoryChatRoom を作成
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// 任意の時計を使う InMemoryChatRoom を作成（テスト用）
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            users: Mutex::new(HashMap::new()),
            clock,
            activity_window: ACTIVITY_WINDOW,
        }
    }

    /// ログ中のメッセージ数
    pub async fn message_count(&self) -> usize {
        self.messages.lock().await.len()
    }

    /// これまでに ping したことのあるユーザー数（非アクティブを含む）
    pub async fn user_count(&self) -> usize {
        self.users.lock().await.len()
    }

    fn now(&self) -> Timestamp {
        Timestamp::new(self.clock.now_millis())
    }
}

impl Default for InMemoryChatRoom {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatRoomRepository for InMemoryChatRoom {
    async fn append_message(&self, author: Username, body: MessageBody) {
        let mut messages = self.messages.lock().await;
        let message = Message::new(author, body, self.now());
        messages.push(message);
    }

    async fn get_messages(&self) -> Vec<Message> {
        let messages = self.messages.lock().await;
        messages.clone()
    }

    async fn record_ping(&self, username: Username) {
        let mut users = self.users.lock().await;
        let now = self.now();
        users
            .entry(username)
            .and_modify(|user| user.touch(now))
            .or_insert_with_key(|username| User::new(username.clone(), now));
    }

    async fn get_active_users(&self) -> Vec<User> {
        let users = self.users.lock().await;
        let now = self.now();
        users
            .values()
            .filter(|user| user.is_active_at(now, self.activity_window))
            .cloned()
            .collect()
    }
}
