#![allow(dead_code)]

use book_catalog::domain::{Book, BookId, BookStatus, Catalog};
use tempfile::TempDir;

/// テスト用の一時ディレクトリとデータファイルのパスを作成
///
/// TempDirはドロップ時に削除されるため、テスト中は保持しておくこと。
pub fn temp_data_file() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("data.json");
    (dir, path)
}

/// ラテン文字以外を含むサンプルカタログ
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .add("The Lord of the Rings", "J. R. R. Tolkien", "1954")
        .unwrap();
    catalog.add("Мастер и Маргарита", "Михаил Булгаков", "1967").unwrap();
    catalog.add("ノルウェイの森", "村上春樹", "1987").unwrap();
    catalog.add("Anonymous", "", "").unwrap();
    catalog.toggle_status(BookId::new(2)).unwrap();
    catalog
}

pub fn book(id: i64, title: &str, status: BookStatus) -> Book {
    let mut book = Book::create(BookId::new(id), title, "", "").unwrap();
    book.status = status;
    book
}
