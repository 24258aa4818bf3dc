use crate::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub const BYTES_PER_KB: f64 = 1024.0;
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub fn bytes_to_kb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_KB
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Snapshot of one regular file taken during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub name: String,
    /// Uppercased, without the leading dot. Empty when the name has none.
    pub extension: String,
    pub size: u64,
    /// Parent directory, kept as a path so names that are not valid
    /// UTF-8 still group apart.
    pub folder: PathBuf,
}

impl FileRecord {
    /// Stat `path` and build its record.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let metadata = fs::metadata(path).map_err(|e| Error::from_io(path, e))?;
        Ok(Self::new(path.to_path_buf(), metadata.len()))
    }

    pub fn new(path: PathBuf, size: u64) -> Self {
        let name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();

        let extension = normalize_extension(&path);

        let folder = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Self {
            path,
            name,
            extension,
            size,
            folder,
        }
    }

    pub fn size_kb(&self) -> f64 {
        bytes_to_kb(self.size)
    }

    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.size)
    }
}

pub fn normalize_extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}
