//! Backup file names.
//!
//! Every backup lives next to the `index.html` it was copied from and is
//! named
//!
//! ```text
//! __index_YYMMDD-HHMM_r######.bak.html
//! ```
//!
//! The timestamp is local time truncated to the minute and the revision is
//! zero-padded to six digits, so plain string ordering is chronological.
//! When the revision could not be determined the tag is `r000000`.  Two
//! backups taken in the same minute at the same revision share a name and
//! the later one replaces the earlier.
//!
//! Only names [`make_name`] could have produced count as backups.  A name
//! with a seven-digit or longer tag must not start with `0`, and a name whose
//! timestamp is not a real date (`240230`, `241301`) is an ordinary file that
//! listing and deleting leave alone.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use regex::Regex;

use crate::probe::Revision;

/// The file every configured directory must contain.
pub const SOURCE_FILE: &str = "index.html";

/// Revision tag written when the revision is unknown.
pub const UNKNOWN_REVISION_TAG: &str = "000000";

static BACKUP_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^__index_(\d{2})(\d{2})(\d{2})-(\d{2})(\d{2})",
        r"_r(\d{6}|[1-9]\d{6,})\.bak\.html$",
    ))
    .expect("backup name pattern is valid")
});

/// The components encoded in a backup file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupName {
    /// Capture time, seconds always zero.
    pub taken_at: NaiveDateTime,
    pub revision: Revision,
}

/// Build the backup file name for a copy taken at `now`.
pub fn make_name(now: NaiveDateTime, revision: Revision) -> String {
    let tag = match revision {
        Revision::Known(n) => format!("{n:06}"),
        Revision::Unknown => UNKNOWN_REVISION_TAG.to_string(),
    };
    format!("__index_{}_r{tag}.bak.html", now.format("%y%m%d-%H%M"))
}

/// Parse a file name produced by [`make_name`].
///
/// Returns `None` for anything that does not match the pattern exactly or
/// encodes an impossible date.  Two-digit years are read as 20YY and the
/// all-zero revision tag as [`Revision::Unknown`].
pub fn parse_name(name: &str) -> Option<BackupName> {
    let caps = BACKUP_NAME.captures(name)?;
    let field = |i: usize| caps[i].parse::<u32>().ok();

    let year = 2000 + i32::try_from(field(1)?).ok()?;
    let taken_at = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)?
        .and_hms_opt(field(4)?, field(5)?, 0)?;

    let revision = match caps[6].parse::<u64>().ok()? {
        0 => Revision::Unknown,
        n => Revision::Known(n),
    };

    Some(BackupName { taken_at, revision })
}

/// `true` when `name` is a backup file name.
pub fn is_backup_name(name: &str) -> bool {
    parse_name(name).is_some()
}

/// Drop seconds and below, matching the resolution stored in names.
pub fn truncate_to_minute(t: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(t.year(), t.month(), t.day())
        .and_then(|d| d.and_hms_opt(t.hour(), t.minute(), 0))
        .unwrap_or(t)
}
