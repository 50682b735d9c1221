use crate::domain::{Book, Catalog};
use crate::ports::catalog_store::{CatalogStore as CatalogStoreTrait, Result, StorageError};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Loads a catalog from a JSON file.
///
/// A missing file is a cold start and a file that does not parse as an array of
/// books is treated the same way: both yield an empty catalog. Stored records are
/// trusted as-is.
pub fn load(path: &Path) -> Catalog {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "Catalog file not found, starting with an empty catalog");
            return Catalog::new();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Catalog file could not be opened, starting with an empty catalog");
            return Catalog::new();
        }
    };

    match serde_json::from_reader::<_, Vec<Book>>(BufReader::new(file)) {
        Ok(books) => {
            tracing::info!(path = %path.display(), count = books.len(), "Catalog loaded");
            Catalog::from_books(books)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Catalog file is not valid, starting with an empty catalog");
            Catalog::new()
        }
    }
}

/// Writes every book to `path` as a pretty-printed JSON array, replacing any
/// previous content. Non-ASCII text is written as-is.
pub fn save(path: &Path, catalog: &Catalog) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    serde_json::to_writer_pretty(&mut writer, catalog.list()).map_err(|e| {
        if e.is_io() {
            StorageError::Io(e.into())
        } else {
            StorageError::Serialize(e)
        }
    })?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!(path = %path.display(), count = catalog.len(), "Catalog saved");
    Ok(())
}

/// File-backed CatalogStore
///
/// Holds only the path; the file is opened for the duration of each call.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStoreTrait for CatalogStore {
    fn load(&self) -> Catalog {
        load(&self.path)
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        save(&self.path, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookId, BookStatus};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_save_writes_stable_field_order_and_raw_unicode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        let mut catalog = Catalog::new();
        catalog.add("Война и мир", "Лев Толстой", "1869").unwrap();
        catalog.toggle_status(BookId::new(1)).unwrap();

        save(&path, &catalog).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            concat!(
                "[\n",
                "  {\n",
                "    \"id\": 1,\n",
                "    \"title\": \"Война и мир\",\n",
                "    \"author\": \"Лев Толстой\",\n",
                "    \"year\": \"1869\",\n",
                "    \"status\": \"CheckedOut\"\n",
                "  }\n",
                "]\n",
            )
        );
    }

    #[test]
    fn test_save_empty_catalog_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        save(&path, &Catalog::new()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_fails_with_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("data.json");

        let result = save(&path, &Catalog::new());

        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[test]
    fn test_load_accepts_legacy_status_labels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "title": "Идиот", "author": "Достоевский", "year": "1869", "status": "Выдана"},
                {"id": 2, "title": "Дар", "author": "Набоков", "year": "1938", "status": "В наличии"}
            ]"#,
        )
        .unwrap();

        let catalog = load(&path);
        let statuses: Vec<BookStatus> = catalog.list().iter().map(|book| book.status).collect();

        assert_eq!(statuses, vec![BookStatus::CheckedOut, BookStatus::Available]);
    }

    #[test]
    fn test_load_empty_file_returns_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "").unwrap();

        assert!(load(&path).is_empty());
    }
}
