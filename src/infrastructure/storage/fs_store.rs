use crate::domain::{Record, ResultSet, Storage};
use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for<R: Record>(&self) -> PathBuf {
        self.data_dir.join(R::OUTPUT_FILE)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// Pretty JSON with 2-space indent; non-ASCII text is written as-is.
    fn write_json_file<T: Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }
        let content = serde_json::to_string_pretty(data)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl Storage for FileSystemStore {
    fn save_records<R: Record>(&self, results: &ResultSet<R>) -> Result<PathBuf> {
        let path = self.path_for::<R>();
        self.write_json_file(&path, results.records())?;
        Ok(path)
    }
}
