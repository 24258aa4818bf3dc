use std::path::PathBuf;

use thiserror::Error;

use crate::report::View;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Access denied: {}", path.display())]
    AccessDenied { path: PathBuf },

    #[error("Not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("IO error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Folder '{}' matched {matches} folder totals, expected exactly one",
        folder.display()
    )]
    JoinCardinality { folder: PathBuf, matches: usize },

    #[error("Configuration error")]
    Config(#[from] config::ConfigError),

    #[error("Invalid ignore pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("{view} report failed")]
    View {
        view: View,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Classify an I/O failure on `path` into the report's error kinds.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Error::AccessDenied { path },
            std::io::ErrorKind::NotFound => Error::NotFound { path },
            _ => Error::Io { path, source: err },
        }
    }

    pub fn in_view(self, view: View) -> Self {
        Error::View {
            view,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_from_io_classifies_kinds() {
        let denied = Error::from_io("/x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, Error::AccessDenied { .. }));

        let missing = Error::from_io("/x", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(missing, Error::NotFound { .. }));

        let other = Error::from_io("/x", io::Error::from(io::ErrorKind::InvalidData));
        assert!(matches!(other, Error::Io { .. }));
    }

    #[test]
    fn test_view_error_names_view_and_path() {
        use std::error::Error as _;

        let err = Error::AccessDenied {
            path: PathBuf::from("/locked"),
        }
        .in_view(View::Folders);
        assert_eq!(err.to_string(), "folders report failed");

        let source = err.source().map(ToString::to_string).unwrap_or_default();
        assert!(source.contains("/locked"), "got: {source}");
    }
}
