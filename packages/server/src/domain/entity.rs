//! エンティティ
//!
//! - `Message`: 投稿されたメッセージ。追加後は変更されない
//! - `User`: ユーザー名をキーとするプレゼンス情報。ping のたびに `last_ping` が更新される

use std::time::Duration;

use super::value_object::{MessageBody, Timestamp, Username};

/// 最後の ping からこの時間内であればユーザーはアクティブとみなす
pub const ACTIVITY_WINDOW: Duration = Duration::from_secs(10);

/// チャットメッセージ
///
/// `sent_at` はサーバーが追加時に付与する。クライアントが送ってきた時刻は使わない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub author: Username,
    pub body: MessageBody,
    pub sent_at: Timestamp,
}

impl Message {
    pub fn new(author: Username, body: MessageBody, sent_at: Timestamp) -> Self {
        Self {
            author,
            body,
            sent_at,
        }
    }
}

/// ユーザー（プレゼンス情報）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: Username,
    pub last_ping: Timestamp,
}

impl User {
    pub fn new(username: Username, last_ping: Timestamp) -> Self {
        Self {
            username,
            last_ping,
        }
    }

    /// `now - last_ping <= window` のときアクティブ
    ///
    /// 保存された状態ではなく、問い合わせのたびに計算する派生プロパティ。
    pub fn is_active_at(&self, now: Timestamp, window: Duration) -> bool {
        let window_millis = i64::try_from(window.as_millis()).unwrap_or(i64::MAX);
        now.millis_since(self.last_ping) <= window_millis
    }

    /// ping を記録する。`last_ping` は後退しない
    pub fn touch(&mut self, now: Timestamp) {
        self.last_ping = self.last_ping.max(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice_pinged_at(millis: i64) -> User {
        User::new(
            Username::new("alice".to_string()).unwrap(),
            Timestamp::new(millis),
        )
    }

    #[test]
    fn test_user_is_active_right_after_ping() {
        // テスト項目: ping 直後のユーザーはアクティブ
        // given (前提条件):
        let user = alice_pinged_at(1_000);

        // when (操作):
        let active = user.is_active_at(Timestamp::new(1_000), ACTIVITY_WINDOW);

        // then (期待する結果):
        assert!(active);
    }

    #[test]
    fn test_user_is_active_at_window_boundary() {
        // テスト項目: ちょうどウィンドウ幅だけ経過した時点ではまだアクティブ
        // given (前提条件):
        let user = alice_pinged_at(1_000);

        // when (操作):
        let active = user.is_active_at(Timestamp::new(11_000), ACTIVITY_WINDOW);

        // then (期待する結果):
        assert!(active);
    }

    #[test]
    fn test_user_is_inactive_after_window() {
        // テスト項目: ウィンドウ幅を 1ms でも超えると非アクティブ
        // given (前提条件):
        let user = alice_pinged_at(1_000);

        // when (操作):
        let active = user.is_active_at(Timestamp::new(11_001), ACTIVITY_WINDOW);

        // then (期待する結果):
        assert!(!active);
    }

    #[test]
    fn test_touch_refreshes_last_ping() {
        // テスト項目: touch で last_ping が新しい時刻に更新される
        // given (前提条件):
        let mut user = alice_pinged_at(1_000);

        // when (操作):
        user.touch(Timestamp::new(5_000));

        // then (期待する結果):
        assert_eq!(user.last_ping, Timestamp::new(5_000));
    }

    #[test]
    fn test_touch_never_moves_last_ping_backwards() {
        // テスト項目: 時計が巻き戻っても last_ping は後退しない
        // given (前提条件):
        let mut user = alice_pinged_at(5_000);

        // when (操作):
        user.touch(Timestamp::new(3_000));

        // then (期待する結果):
        assert_eq!(user.last_ping, Timestamp::new(5_000));
    }
}
