//! Repository trait 定義
//!
//! ドメイン層が必要とするチャットルームへのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{Message, MessageBody, User, Username};

/// ChatRoom Repository trait
///
/// メッセージログとユーザー（プレゼンス）テーブルを所有するチャットルームへの
/// インターフェース。UseCase 層はこの trait に依存し、Infrastructure 層の具体的な
/// 実装には依存しない。
///
/// ## 並行性の契約
///
/// - 全ての操作は複数の呼び出し元から同時に呼ばれても安全でなければならない
/// - 1 回の操作呼び出しの単位で、同じリソースへの読み書きは排他される
/// - メッセージログとユーザーテーブルは独立しており、片方の操作がもう片方を待たせない
///
/// 全ての操作は失敗しない（入力の検証は値オブジェクトの生成時に済んでいる）。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRoomRepository: Send + Sync {
    /// メッセージをログの末尾に追加する。`sent_at` はリポジトリ側で付与する
    async fn append_message(&self, author: Username, body: MessageBody);

    /// メッセージログのスナップショットを追加順で取得
    async fn get_messages(&self) -> Vec<Message>;

    /// ping を記録する。未知のユーザー名であればユーザーを作成する
    async fn record_ping(&self, username: Username);

    /// 現在アクティブなユーザーのスナップショットを取得（順序は不定）
    async fn get_active_users(&self) -> Vec<User>;
}
