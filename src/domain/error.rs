// src/domain/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No destination path: the note has never been saved and no path was given")]
    NoDestination,
    #[error("Invalid search pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl DomainError {
    /// Classify an I/O failure on `path`, keeping missing files distinct.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DomainError::NotFound(path)
        } else {
            DomainError::Io { path, source }
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DomainError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn given_not_found_io_error_when_classifying_then_returns_not_found() {
        let err = DomainError::from_io("notes/a.md", io::Error::from(io::ErrorKind::NotFound));

        assert!(matches!(err, DomainError::NotFound(ref p) if p == &PathBuf::from("notes/a.md")));
    }

    #[test]
    fn given_permission_error_when_classifying_then_returns_io() {
        let err = DomainError::from_io(
            "notes/a.md",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );

        assert!(matches!(err, DomainError::Io { .. }));
        assert!(err.to_string().contains("notes/a.md"));
    }

    #[test]
    fn given_io_error_when_formatting_chain_then_cause_appears_once() {
        let err = DomainError::io("notes/a.md", io::Error::other("disk on fire"));

        let chain = format!("{:#}", anyhow::Error::from(err));

        assert_eq!(chain.matches("disk on fire").count(), 1);
        assert!(chain.starts_with("I/O error on notes/a.md"));
    }
}
