use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BookId, BookStatus, ValidationError};

/// 書籍 - カタログの1レコード
///
/// フィールドの宣言順がJSONへの書き出し順になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// 出版年。文字列のまま保持し、形式は検証しない
    pub year: String,
    #[serde(default)]
    pub status: BookStatus,
}

impl Book {
    /// 書籍を作成する
    ///
    /// ビジネスルール：
    /// - タイトルは空白を除いて1文字以上
    /// - 状態はAvailable
    ///
    /// # エラー
    /// タイトルが空の場合は`ValidationError::EmptyTitle`を返す
    pub fn create(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            author: author.into(),
            year: year.into(),
            status: BookStatus::Available,
        })
    }

    /// 貸出状態を反転し、新しい状態を返す
    pub fn toggle_status(&mut self) -> BookStatus {
        self.status = self.status.toggled();
        self.status
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}
