use clap::Parser;
use std::path::PathBuf;

/// Personal book catalog manager
#[derive(Debug, Parser)]
#[command(name = "book-catalog", version)]
pub struct Args {
    /// JSON file the catalog is loaded from and saved to
    #[arg(short = 'f', long, env = "BOOK_CATALOG_FILE", default_value = "data.json")]
    pub data_file: PathBuf,
}
