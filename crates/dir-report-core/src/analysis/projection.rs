use crate::model::FileRecord;
use crate::table::{fmt_decimal, fmt_extension, TableRow};
use std::cmp::Ordering;

pub const EXECUTABLE_EXTENSION: &str = "EXE";
/// Executables must be strictly larger than this many MB (1 MB = 1024 * 1024 bytes).
pub const MIN_EXECUTABLE_MB: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameExtension {
    pub name: String,
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutableRow {
    pub name: String,
    pub size_mb: f64,
}

impl TableRow for ListingRow {
    fn headers() -> &'static [&'static str] {
        &["Path"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.path.clone()]
    }
}

impl TableRow for NameExtension {
    fn headers() -> &'static [&'static str] {
        &["Name", "Extension"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), fmt_extension(&self.extension)]
    }
}

impl TableRow for ExecutableRow {
    fn headers() -> &'static [&'static str] {
        &["Name", "Size (MB)"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), fmt_decimal(self.size_mb)]
    }
}

/// Full paths in scan order.
pub fn listing(records: &[FileRecord]) -> Vec<ListingRow> {
    records
        .iter()
        .map(|r| ListingRow {
            path: r.path.to_string_lossy().into_owned(),
        })
        .collect()
}

/// (name, extension) per record, in scan order.
pub fn names_and_extensions(records: &[FileRecord]) -> Vec<NameExtension> {
    records
        .iter()
        .map(|r| NameExtension {
            name: r.name.clone(),
            extension: r.extension.clone(),
        })
        .collect()
}

/// (name, extension) ordered by extension ascending, then name descending.
pub fn sorted_by_extension(records: &[FileRecord]) -> Vec<NameExtension> {
    let mut rows = names_and_extensions(records);
    rows.sort_by(|a, b| {
        a.extension
            .cmp(&b.extension)
            .then_with(|| b.name.cmp(&a.name))
    });
    rows
}

/// `EXE` files above [`MIN_EXECUTABLE_MB`], smallest first.
pub fn large_executables(records: &[FileRecord]) -> Vec<ExecutableRow> {
    let mut rows: Vec<ExecutableRow> = records
        .iter()
        .filter(|r| r.extension.eq_ignore_ascii_case(EXECUTABLE_EXTENSION))
        .map(|r| ExecutableRow {
            name: r.name.clone(),
            size_mb: r.size_mb(),
        })
        .filter(|row| row.size_mb > MIN_EXECUTABLE_MB)
        .collect();

    rows.sort_by(|a, b| match a.size_mb.total_cmp(&b.size_mb) {
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    });
    rows
}
