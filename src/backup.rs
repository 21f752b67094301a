//! Creating, listing and deleting backups in one directory.
//!
//! A backup is written to a temporary file in the target directory first and
//! then renamed into place, so a failed copy never leaves a half-written file
//! that matches the backup pattern.  Permissions and modification time are
//! carried over from `index.html`.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use filetime::FileTime;
use tempfile::NamedTempFile;

use crate::{
    error::{DeleteError, Error, ProbeError, Result},
    naming::{SOURCE_FILE, is_backup_name, make_name},
    probe::RevisionSource,
};

/// A freshly written backup.
#[derive(Debug)]
pub struct CreatedBackup {
    pub path: PathBuf,
    pub name: String,
    /// Why the revision is unknown, when it is.
    pub probe_failure: Option<ProbeError>,
}

/// Outcome of [`delete`] for one directory.
#[derive(Debug, Default)]
pub struct DeleteReport {
    pub removed: Vec<String>,
    pub failures: Vec<DeleteError>,
}

/// Check the directory invariant and return the path of its `index.html`.
pub fn source_file(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(Error::DirectoryMissing { path: dir.into() });
    }
    let src = dir.join(SOURCE_FILE);
    if !src.is_file() {
        return Err(Error::SourceMissing { path: dir.into() });
    }
    Ok(src)
}

/// Copy `dir/index.html` to a backup named for `now` and its working revision.
pub fn create(
    dir: &Path,
    revisions: &dyn RevisionSource,
    now: NaiveDateTime,
) -> Result<CreatedBackup> {
    let src = source_file(dir)?;
    let read_err = |source| Error::Read {
        path: src.clone(),
        source,
    };
    let bytes = fs::read(&src).map_err(read_err)?;
    let meta = fs::metadata(&src).map_err(read_err)?;

    let (revision, probe_failure) = revisions.working_revision(&src);
    if let Some(ref e) = probe_failure {
        log::warn!("{}: revision unknown ({e}), tagging backup r000000", src.display());
    }

    let name = make_name(now, revision);
    let path = dir.join(&name);
    let write_err = |source| Error::Write {
        path: path.clone(),
        source,
    };

    // Dropping `tmp` on any early return removes it.
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(&bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    fs::set_permissions(tmp.path(), meta.permissions()).map_err(write_err)?;
    filetime::set_file_mtime(tmp.path(), FileTime::from_last_modification_time(&meta))
        .map_err(write_err)?;
    tmp.persist(&path).map_err(|e| write_err(e.error))?;

    log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());

    Ok(CreatedBackup {
        path,
        name,
        probe_failure,
    })
}

/// Backup file names in `dir`, oldest first.
pub fn list_backups(dir: &Path) -> Result<Vec<String>> {
    let list_err = |source| Error::List {
        path: dir.into(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        if let Some(name) = entry.file_name().to_str() {
            if is_backup_name(name) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Remove every backup in `dir`.
///
/// A file that cannot be removed is recorded in
/// [`DeleteReport::failures`] and the remaining files are still attempted.
pub fn delete(dir: &Path) -> Result<DeleteReport> {
    source_file(dir)?;

    let mut report = DeleteReport::default();
    for name in list_backups(dir)? {
        match fs::remove_file(dir.join(&name)) {
            Ok(()) => {
                log::debug!("removed {}", dir.join(&name).display());
                report.removed.push(name);
            },
            Err(source) => report.failures.push(DeleteError { name, source }),
        }
    }
    Ok(report)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
