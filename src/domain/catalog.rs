use super::{Book, BookId, NotFoundError, ValidationError};

/// 検索条件
///
/// 指定された条件すべてに一致する書籍を対象とする（AND結合）。
/// 空文字の条件は未指定として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// タイトルの部分一致（大文字小文字を区別しない）
    pub title: Option<String>,
    /// 著者の部分一致（大文字小文字を区別しない）
    pub author: Option<String>,
    /// 出版年の完全一致
    pub year: Option<String>,
}

impl SearchQuery {
    pub fn new(title: &str, author: &str, year: &str) -> Self {
        Self {
            title: non_empty(title),
            author: non_empty(author),
            year: non_empty(year),
        }
    }

    /// 書籍が条件に一致するか
    pub fn matches(&self, book: &Book) -> bool {
        contains_ignore_case(&book.title, self.title.as_deref())
            && contains_ignore_case(&book.author, self.author.as_deref())
            && self.year.as_deref().is_none_or(|year| year == book.year)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

/// カタログ - 書籍の順序付きコレクション
///
/// 不変条件：
/// - 書籍IDは互いに異なる
/// - 新しいIDは既存の最大ID + 1（空なら1）
///
/// 書籍はカタログが唯一の所有者。外部には参照かコピーのみを渡す。
/// すべての更新操作は完全に適用されるか、何も変更しないかのどちらか。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 永続化済みの書籍からカタログを復元する
    ///
    /// 読み込んだデータは信頼し、ID重複の検証は行わない。
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// 次に採番されるID
    ///
    /// リストの順序ではなく最大IDから計算する。
    /// 最大IDが上限に達している場合は`None`。
    pub fn next_id(&self) -> Option<BookId> {
        match self.books.iter().map(|book| book.id).max() {
            Some(max) => max.next(),
            None => Some(BookId::FIRST),
        }
    }

    /// 書籍を追加する
    ///
    /// # エラー
    /// タイトルが空、またはIDを採番できない場合は`ValidationError`を返し、
    /// カタログは変更しない
    pub fn add(
        &mut self,
        title: &str,
        author: &str,
        year: &str,
    ) -> Result<&Book, ValidationError> {
        let id = self.next_id().ok_or(ValidationError::IdSpaceExhausted)?;
        let book = Book::create(id, title, author, year)?;
        tracing::debug!(book_id = %book.id, title = %book.title, "Book added");

        self.books.push(book);
        Ok(&self.books[self.books.len() - 1])
    }

    /// 書籍を削除する
    ///
    /// # エラー
    /// IDが存在しない場合は`NotFoundError`を返す
    pub fn remove(&mut self, id: BookId) -> Result<Book, NotFoundError> {
        let index = self.position(id).ok_or(NotFoundError(id))?;
        let book = self.books.remove(index);
        tracing::debug!(book_id = %id, "Book removed");
        Ok(book)
    }

    /// IDで書籍を取得する（副作用なし）
    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// 条件に一致する書籍をカタログ順で返す
    ///
    /// 一致なしは空のVecで、エラーではない。
    pub fn search(&self, query: &SearchQuery) -> Vec<&Book> {
        self.books.iter().filter(|book| query.matches(book)).collect()
    }

    /// 全書籍をカタログ順で返す
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// 貸出状態を反転し、更新後の書籍を返す
    ///
    /// # エラー
    /// IDが存在しない場合は`NotFoundError`を返す
    pub fn toggle_status(&mut self, id: BookId) -> Result<&Book, NotFoundError> {
        let index = self.position(id).ok_or(NotFoundError(id))?;
        let status = self.books[index].toggle_status();
        tracing::debug!(book_id = %id, %status, "Book status changed");
        Ok(&self.books[index])
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}
