//! Revision lookups and local-vs-remote comparison.
//!
//! The version-control client sits behind [`RevisionSource`] so the backup
//! and check commands never talk to `svn` directly.  [`crate::svn::SvnClient`]
//! is the real implementation; tests plug in fakes.
//!
//! A failed lookup never aborts a run.  It degrades to [`Revision::Unknown`]
//! and the reason is kept in [`RevisionInfo::failure`] for display.

use std::{fmt, path::Path};

use crate::error::ProbeError;

// ─── Revision ─────────────────────────────────────────────────────────────────

/// A revision number, or the sentinel used when the client could not tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Revision {
    Unknown,
    Known(u64),
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(n) => write!(f, "{n}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

// ─── Queries ──────────────────────────────────────────────────────────────────

/// Which number to ask the client for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevisionQuery {
    /// Revision the working copy is checked out at.  Used to tag backups.
    Working,
    /// Last revision in which the local file changed.
    LastChanged,
    /// Last revision in which the file changed in the repository (`-r HEAD`).
    Head,
}

/// Anything that can answer revision queries for a file.
pub trait RevisionSource {
    fn query(&self, target: &Path, query: RevisionQuery) -> Result<u64, ProbeError>;

    /// Working revision of `target`, or [`Revision::Unknown`] on any failure.
    fn working_revision(&self, target: &Path) -> (Revision, Option<ProbeError>) {
        match self.query(target, RevisionQuery::Working) {
            Ok(n) => (Revision::Known(n), None),
            Err(e) => (Revision::Unknown, Some(e)),
        }
    }

    /// Local and remote last-changed revisions of `target`.
    ///
    /// Both sides become unknown if either lookup fails.
    fn probe(&self, target: &Path) -> RevisionInfo {
        let both = self
            .query(target, RevisionQuery::LastChanged)
            .and_then(|local| Ok((local, self.query(target, RevisionQuery::Head)?)));

        match both {
            Ok((local, remote)) => RevisionInfo {
                local: Revision::Known(local),
                remote: Revision::Known(remote),
                failure: None,
            },
            Err(e) => RevisionInfo::unknown(e),
        }
    }
}

// ─── RevisionInfo ─────────────────────────────────────────────────────────────

/// Result of probing one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionInfo {
    pub local: Revision,
    pub remote: Revision,
    pub failure: Option<ProbeError>,
}

/// How a working copy relates to the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    UpToDate { revision: u64 },
    Behind { local: u64, remote: u64 },
    Unknown,
}

impl RevisionInfo {
    pub fn unknown(reason: ProbeError) -> Self {
        Self {
            local: Revision::Unknown,
            remote: Revision::Unknown,
            failure: Some(reason),
        }
    }

    pub const fn drift(&self) -> Drift {
        match (self.local, self.remote) {
            (Revision::Known(local), Revision::Known(remote)) if remote > local => {
                Drift::Behind { local, remote }
            },
            (Revision::Known(local), Revision::Known(_)) => Drift::UpToDate { revision: local },
            _ => Drift::Unknown,
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
