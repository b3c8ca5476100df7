//! 値オブジェクト
//!
//! ドメインモデルで使う不変の値を定義します。生成時にバリデーションを行い、
//! 不正な値がドメイン層に入り込まないようにします。

use std::fmt;

use super::error::ValueObjectError;

/// ユーザー名（メッセージの送信者、プレゼンスのキーとして使う）
///
/// 大文字・小文字を区別する。空文字列と空白のみの文字列は受け付けない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// 新しい Username を作成
    ///
    /// # Errors
    ///
    /// 空文字列または空白のみの場合は `ValueObjectError::EmptyUsername` を返す
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::EmptyUsername);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// メッセージ本文（内容・長さの制約なし）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Unix タイムスタンプ（UTC, ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// `earlier` からの経過時間（ミリ秒）。`earlier` の方が新しい場合は負になる
    pub fn millis_since(&self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}
