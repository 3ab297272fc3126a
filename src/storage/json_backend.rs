use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::ledger::Book;

use super::{BookStorage, Result};

const SNAPSHOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores book snapshots as pretty-printed JSON files in one directory,
/// staged through a temporary file so a crash never truncates a
/// snapshot.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    books_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: PathBuf) -> Result<Self> {
        let books_dir = root.join("books");
        ensure_dir(&books_dir)?;
        Ok(Self { books_dir })
    }

    pub fn book_path(&self, name: &str) -> PathBuf {
        self.books_dir
            .join(format!("{}.{}", canonical_name(name), SNAPSHOT_EXTENSION))
    }
}

impl BookStorage for JsonStorage {
    fn save(&self, book: &Book, name: &str) -> Result<()> {
        let path = self.book_path(name);
        let json = serde_json::to_string_pretty(book)?;
        write_atomic(&path, &json)?;
        debug!(book = %book.id, path = %path.display(), "saved book snapshot");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Book> {
        let data = fs::read_to_string(self.book_path(name))?;
        Ok(serde_json::from_str(&data)?)
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.books_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNAPSHOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

fn canonical_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}
