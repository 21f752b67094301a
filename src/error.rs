//! Error types shared by the registry, the backup manager and the probe.
//!
//! Only [`Error::UnknownSet`] is fatal.  Everything else is scoped to one
//! directory (or one file inside it) and ends up as a line in the final
//! report instead of aborting the run.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures raised while resolving path sets or operating on a directory.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested set name is not in the configuration.
    #[error("unknown set: {name}. Try 'html-backup help'.")]
    UnknownSet { name: String },

    /// A configured directory does not exist.
    #[error("folder is missing: {}", path.display())]
    DirectoryMissing { path: PathBuf },

    /// The directory exists but has no `index.html`.
    #[error("index.html is missing in {}", path.display())]
    SourceMissing { path: PathBuf },

    /// `index.html` exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backup copy could not be created.  No partial file is left behind.
    #[error("copy failed for {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory listing could not be read.
    #[error("could not list {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One backup file that could not be removed.
#[derive(Error, Debug)]
#[error("delete failed for {name}: {source}")]
pub struct DeleteError {
    pub name: String,
    #[source]
    pub source: io::Error,
}

/// Why a revision lookup produced no number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The client executable could not be found on `PATH`.
    #[error("{binary} not found in PATH")]
    ClientMissing { binary: String },

    /// The client could not be started for another reason.
    #[error("failed to run {binary}: {message}")]
    Spawn { binary: String, message: String },

    /// The client ran and exited non-zero.
    #[error("{message}")]
    Failed { message: String },

    /// The client succeeded but did not print a revision number.
    #[error("could not parse svn info output: {output:?}")]
    Unparseable { output: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_set_names_the_identifier() {
        let err = Error::UnknownSet {
            name: "branch-99".into(),
        };
        assert!(err.to_string().contains("branch-99"));
    }

    #[test]
    fn directory_errors_include_the_path() {
        let err = Error::SourceMissing {
            path: PathBuf::from("/srv/phone"),
        };
        assert!(err.to_string().contains("/srv/phone"));

        let err = Error::Write {
            path: PathBuf::from("/srv/phone/__index_240501-1432_r001234.bak.html"),
            source: io::Error::other("disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("__index_240501-1432_r001234.bak.html"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn client_missing_mentions_binary() {
        let err = ProbeError::ClientMissing {
            binary: "svn".into(),
        };
        assert_eq!(err.to_string(), "svn not found in PATH");
    }
}
