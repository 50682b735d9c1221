use serde::{Deserialize, Serialize};
use std::fmt;

/// 書籍ID - カタログ内で一意な整数
///
/// カタログが採番する。利用者から受け取ることはない。
/// 手で編集されたファイルの負のIDも読み込めるよう符号付き。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// 最初に採番されるID
    pub const FIRST: BookId = BookId(1);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// 次のID
    ///
    /// 最大値の次は存在しないため`None`を返す
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 書籍の貸出状態
///
/// 2状態のみ。`toggled`で相互に遷移する。
/// 旧データファイルのロシア語表記も読み込み時に受け付ける。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BookStatus {
    /// 在庫あり
    #[default]
    #[serde(alias = "В наличии")]
    Available,
    /// 貸出中
    #[serde(alias = "Выдана")]
    CheckedOut,
}

impl BookStatus {
    /// 反対の状態を返す
    pub fn toggled(self) -> Self {
        match self {
            BookStatus::Available => BookStatus::CheckedOut,
            BookStatus::CheckedOut => BookStatus::Available,
        }
    }

    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::CheckedOut => "CheckedOut",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
