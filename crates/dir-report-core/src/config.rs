use crate::error::Error;
use config::{Config, File as ConfigFile};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directories listed one level deep for the listing, projection,
    /// executable and extension views.
    pub listing_roots: Vec<String>,
    /// Directories walked recursively for the folder views.
    pub tree_roots: Vec<String>,
    pub ignore_patterns: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listing_roots: vec![".".to_string()],
            tree_roots: vec![".".to_string()],
            ignore_patterns: Vec::new(),
        }
    }
}

/// Load configuration from `name` (extension optional). A missing file
/// yields the defaults.
pub fn load_configuration_from(name: &str) -> Result<AppConfig, Error> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name(name).required(false))
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}

/// Remove directories that are subdirectories of other directories in the list.
/// Paths are compared as given, so callers canonicalize first.
pub fn non_overlapping_directories<P: AsRef<Path>>(dirs: Vec<P>) -> Vec<P> {
    let mut result: Vec<P> = Vec::new();

    for dir in dirs {
        let dir_path = dir.as_ref();

        if result
            .iter()
            .any(|res_dir| dir_path.starts_with(res_dir.as_ref()))
        {
            continue;
        }

        result.retain(|res_dir| !res_dir.as_ref().starts_with(dir_path));
        result.push(dir);
    }

    result
}

/// Drop repeated entries, keeping first occurrence order.
pub fn distinct_directories<P: AsRef<Path>>(dirs: Vec<P>) -> Vec<P> {
    let mut result: Vec<P> = Vec::new();
    for dir in dirs {
        if !result.iter().any(|d| d.as_ref() == dir.as_ref()) {
            result.push(dir);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_non_overlapping_no_overlap() {
        let dirs = vec![
            "/home/user/photos".to_string(),
            "/home/user/docs".to_string(),
            "/var/data".to_string(),
        ];
        let result = non_overlapping_directories(dirs);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_non_overlapping_with_subdirectory() {
        let dirs = vec![
            "/home/user".to_string(),
            "/home/user/docs".to_string(),
            "/var/data".to_string(),
        ];
        let result = non_overlapping_directories(dirs);
        assert_eq!(result, vec!["/home/user".to_string(), "/var/data".to_string()]);
    }

    #[test]
    fn test_non_overlapping_parent_after_child() {
        let dirs = vec![
            "/home/user/docs".to_string(),
            "/home/user/music".to_string(),
            "/home/user".to_string(),
        ];
        let result = non_overlapping_directories(dirs);
        assert_eq!(result, vec!["/home/user".to_string()]);
    }

    #[test]
    fn test_distinct_directories() {
        let dirs = vec!["/a".to_string(), "/b".to_string(), "/a".to_string()];
        assert_eq!(distinct_directories(dirs), vec!["/a".to_string(), "/b".to_string()]);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = tempdir().unwrap();
        let name = tmp.path().join("absent");
        let config = load_configuration_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config.listing_roots, vec![".".to_string()]);
        assert_eq!(config.tree_roots, vec![".".to_string()]);
        assert!(config.ignore_patterns.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("report.toml");
        fs::write(&path, "tree_roots = [\"/srv\"]\nignore_patterns = [\"**/.git\"]\n").unwrap();

        let config = load_configuration_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.listing_roots, vec![".".to_string()]);
        assert_eq!(config.tree_roots, vec!["/srv".to_string()]);
        assert_eq!(config.ignore_patterns, vec!["**/.git".to_string()]);
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "tree_roots = 42\n").unwrap();

        let err = load_configuration_from(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
