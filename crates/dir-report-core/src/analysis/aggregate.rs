//! Grouped size statistics.
//!
//! Groups are collected into a `BTreeMap`, so rows come out ordered by key
//! before any secondary sort is applied. Sizes are summed in bytes and only
//! converted to KB when a row is built.

use crate::model::{bytes_to_kb, FileRecord, BYTES_PER_KB};
use crate::table::{fmt_decimal, fmt_extension, TableRow};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Count and byte totals for one group of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSummary {
    pub file_count: usize,
    pub total_bytes: u64,
    pub min_bytes: u64,
    pub max_bytes: u64,
}

impl SizeSummary {
    fn first(size: u64) -> Self {
        Self {
            file_count: 1,
            total_bytes: size,
            min_bytes: size,
            max_bytes: size,
        }
    }

    fn add(&mut self, size: u64) {
        self.file_count += 1;
        self.total_bytes += size;
        self.min_bytes = self.min_bytes.min(size);
        self.max_bytes = self.max_bytes.max(size);
    }

    pub fn total_kb(&self) -> f64 {
        bytes_to_kb(self.total_bytes)
    }

    /// Mean of the byte sizes, converted afterwards.
    pub fn average_kb(&self) -> f64 {
        self.total_bytes as f64 / self.file_count as f64 / BYTES_PER_KB
    }

    pub fn min_kb(&self) -> f64 {
        bytes_to_kb(self.min_bytes)
    }

    pub fn max_kb(&self) -> f64 {
        bytes_to_kb(self.max_bytes)
    }
}

/// One summary per distinct key.
pub fn summarize_by<K, F>(records: &[FileRecord], key: F) -> BTreeMap<K, SizeSummary>
where
    K: Ord,
    F: Fn(&FileRecord) -> K,
{
    let mut groups: BTreeMap<K, SizeSummary> = BTreeMap::new();
    for record in records {
        groups
            .entry(key(record))
            .and_modify(|summary| summary.add(record.size))
            .or_insert_with(|| SizeSummary::first(record.size));
    }
    groups
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionStats {
    pub extension: String,
    pub file_count: usize,
    pub total_kb: f64,
    pub average_kb: f64,
    pub min_kb: f64,
    pub max_kb: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FolderExtensionStats {
    pub folder: PathBuf,
    pub extension: String,
    pub file_count: usize,
    pub total_bytes: u64,
    pub total_kb: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FolderTotal {
    pub folder: PathBuf,
    pub total_bytes: u64,
    pub total_kb: f64,
}

impl TableRow for ExtensionStats {
    fn headers() -> &'static [&'static str] {
        &[
            "Extension",
            "Files",
            "Total (KB)",
            "Average (KB)",
            "Smallest (KB)",
            "Largest (KB)",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            fmt_extension(&self.extension),
            self.file_count.to_string(),
            fmt_decimal(self.total_kb),
            fmt_decimal(self.average_kb),
            fmt_decimal(self.min_kb),
            fmt_decimal(self.max_kb),
        ]
    }
}

impl TableRow for FolderExtensionStats {
    fn headers() -> &'static [&'static str] {
        &["Folder", "Extension", "Files", "Size (KB)"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.folder.display().to_string(),
            fmt_extension(&self.extension),
            self.file_count.to_string(),
            fmt_decimal(self.total_kb),
        ]
    }
}

impl TableRow for FolderTotal {
    fn headers() -> &'static [&'static str] {
        &["Folder", "Total (KB)"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.folder.display().to_string(), fmt_decimal(self.total_kb)]
    }
}

/// Per-extension statistics, ordered by extension.
pub fn extension_stats(records: &[FileRecord]) -> Vec<ExtensionStats> {
    summarize_by(records, |r| r.extension.clone())
        .into_iter()
        .map(|(extension, summary)| ExtensionStats {
            extension,
            file_count: summary.file_count,
            total_kb: summary.total_kb(),
            average_kb: summary.average_kb(),
            min_kb: summary.min_kb(),
            max_kb: summary.max_kb(),
        })
        .collect()
}

/// Per-(folder, extension) totals, ordered by folder ascending and then by
/// size descending. Equal sizes fall back to extension order.
pub fn folder_extension_stats(records: &[FileRecord]) -> Vec<FolderExtensionStats> {
    let mut rows: Vec<FolderExtensionStats> =
        summarize_by(records, |r| (r.folder.clone(), r.extension.clone()))
            .into_iter()
            .map(|((folder, extension), summary)| FolderExtensionStats {
                folder,
                extension,
                file_count: summary.file_count,
                total_bytes: summary.total_bytes,
                total_kb: summary.total_kb(),
            })
            .collect();

    rows.sort_by(|a, b| folder_then_size_desc(&a.folder, a.total_bytes, &b.folder, b.total_bytes));
    rows
}

/// Total bytes per folder across all extensions, ordered by folder.
pub fn folder_totals(records: &[FileRecord]) -> Vec<FolderTotal> {
    summarize_by(records, |r| r.folder.clone())
        .into_iter()
        .map(|(folder, summary)| FolderTotal {
            folder,
            total_bytes: summary.total_bytes,
            total_kb: summary.total_kb(),
        })
        .collect()
}

pub(crate) fn folder_then_size_desc(
    a_folder: &Path,
    a_bytes: u64,
    b_folder: &Path,
    b_bytes: u64,
) -> Ordering {
    a_folder.cmp(b_folder).then_with(|| b_bytes.cmp(&a_bytes))
}
