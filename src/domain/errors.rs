use thiserror::Error;

use super::BookId;

/// 書籍作成時のバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// タイトルが空、または空白のみ
    #[error("Title must not be empty")]
    EmptyTitle,

    /// 既存の最大IDが上限に達しており、次のIDを採番できない
    #[error("No book IDs left to assign")]
    IdSpaceExhausted,
}

/// 指定IDの書籍が存在しない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Book with ID {0} not found")]
pub struct NotFoundError(pub BookId);
