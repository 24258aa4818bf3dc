mod walk;

pub use walk::{compile_ignore_patterns, enumerate_files, records_from_paths, scan_root, scan_roots};
