use crate::config;
use crate::error::Error;
use crate::model::FileRecord;
use crate::progress::ScanReporter;
use glob::Pattern;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

pub fn compile_ignore_patterns(globs: &[String]) -> Result<Vec<Pattern>, Error> {
    globs
        .iter()
        .map(|glob| {
            Pattern::new(glob).map_err(|source| Error::Pattern {
                pattern: glob.clone(),
                source,
            })
        })
        .collect()
}

/// Absolute paths of the regular files under `root`, sorted by file name
/// within each directory. Only direct children unless `recursive`.
/// Symlinks are neither followed nor listed.
pub fn enumerate_files(
    root: &Path,
    recursive: bool,
    ignore_patterns: &[Pattern],
) -> Result<Vec<PathBuf>, Error> {
    let root = fs::canonicalize(root).map_err(|e| Error::from_io(root, e))?;
    let max_depth = if recursive { usize::MAX } else { 1 };

    let walker = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored(entry.path(), ignore_patterns));

    let mut paths = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let err = walk_error(&root, err);
                if let Error::NotFound { path } = &err {
                    warn!("Skipping {} (removed during scan)", path.display());
                    continue;
                }
                return Err(err);
            }
        };

        if entry.file_type().is_file() {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

/// Enumerate `root` and stat every file.
pub fn scan_root(
    root: &Path,
    recursive: bool,
    ignore_patterns: &[Pattern],
    reporter: &dyn ScanReporter,
) -> Result<Vec<FileRecord>, Error> {
    info!(
        "Scanning {} ({})",
        root.display(),
        if recursive { "recursive" } else { "top level" }
    );
    reporter.on_scan_start(root, recursive);
    let start = Instant::now();

    let paths = enumerate_files(root, recursive, ignore_patterns)?;
    let records = records_from_paths(&paths, reporter)?;

    let elapsed = start.elapsed().as_secs_f64();
    reporter.on_scan_complete(root, records.len(), elapsed);
    debug!(
        "Scanned {} in {:.2}s ({} files)",
        root.display(),
        elapsed,
        records.len()
    );

    Ok(records)
}

/// Stat each path into a record. Files that disappear between listing
/// and stat are skipped; any other failure stops the scan.
pub fn records_from_paths(
    paths: &[PathBuf],
    reporter: &dyn ScanReporter,
) -> Result<Vec<FileRecord>, Error> {
    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        match FileRecord::from_path(path) {
            Ok(record) => {
                trace!("{} ({} bytes)", record.path.display(), record.size);
                records.push(record);
                reporter.on_scan_progress(records.len(), path);
            }
            Err(Error::NotFound { path }) => {
                warn!("Skipping {} (removed during scan)", path.display());
            }
            Err(err) => return Err(err),
        }
    }
    Ok(records)
}

/// Scan several roots into one record list.
///
/// Roots are canonicalized before comparison, so `.` and the absolute
/// working directory count as the same root. Recursive roots nested inside
/// another root are dropped so no file is counted twice.
pub fn scan_roots(
    roots: &[String],
    recursive: bool,
    ignore_patterns: &[Pattern],
    reporter: &dyn ScanReporter,
) -> Result<Vec<FileRecord>, Error> {
    let canonical = roots
        .iter()
        .map(|root| fs::canonicalize(root).map_err(|e| Error::from_io(root, e)))
        .collect::<Result<Vec<PathBuf>, Error>>()?;

    let roots = if recursive {
        config::non_overlapping_directories(canonical)
    } else {
        config::distinct_directories(canonical)
    };

    let mut records = Vec::new();
    for root in &roots {
        records.extend(scan_root(root, recursive, ignore_patterns, reporter)?);
    }
    Ok(records)
}

fn is_ignored(path: &Path, ignore_patterns: &[Pattern]) -> bool {
    ignore_patterns
        .iter()
        .any(|pattern| pattern.matches_path(path))
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());

    match err.into_io_error() {
        Some(io_err) => Error::from_io(path, io_err),
        None => Error::Io {
            path,
            source: io::Error::new(io::ErrorKind::Other, "filesystem loop detected"),
        },
    }
}
