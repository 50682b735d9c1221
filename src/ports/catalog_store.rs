use crate::domain::Catalog;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

/// カタログ保存時のエラー
#[derive(Debug, Error)]
pub enum StorageError {
    /// ファイルへの書き込み失敗（権限不足、ディスク容量不足など）
    #[error("Failed to write catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// JSONへの変換失敗
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// カタログストアポート
///
/// カタログの永続化を抽象化する。起動時に1回読み込み、終了時に1回書き込む。
pub trait CatalogStore {
    /// 保存済みのカタログを読み込む
    ///
    /// 保存先が存在しない、または内容が壊れている場合は空のカタログを返す。
    /// 初回起動と同じ扱いであり、エラーにはしない。
    fn load(&self) -> Catalog;

    /// カタログ全体を書き込む
    ///
    /// 既存の内容は上書きされる。カタログ自体は変更しない。
    fn save(&self, catalog: &Catalog) -> Result<()>;
}
