//! `html-backup check [set]`: compare each working copy's `index.html` with
//! the repository.
//!
//! A directory whose revision cannot be determined (not a working copy, no
//! network, no `svn`) is shown as unknown and does not fail the run.  A
//! missing directory or `index.html` does.

use crate::{
    backup::source_file,
    probe::{Drift, RevisionSource},
    registry::Target,
    ui::{DirOutcome, Report, Status},
};

pub fn run(targets: &[Target], revisions: &dyn RevisionSource) -> Report {
    let mut report = Report::new("Revision Check:");

    for t in targets {
        let src = match source_file(&t.dir) {
            Ok(src) => src,
            Err(e) => {
                report.push(DirOutcome::new(&t.set, &t.entry, Status::Failed, e.to_string()));
                continue;
            },
        };

        let info = revisions.probe(&src);
        let (status, message) = match info.drift() {
            Drift::UpToDate { revision } => (Status::Ok, format!("up-to-date (r{revision})")),
            Drift::Behind { local, remote } => (
                Status::Attention,
                format!("update available for index.html (local {local} -> latest {remote})"),
            ),
            Drift::Unknown => {
                let reason = info
                    .failure
                    .as_ref()
                    .map(|e| format!(": {e}"))
                    .unwrap_or_default();
                (
                    Status::Attention,
                    format!("local {}, remote {}{reason}", info.local, info.remote),
                )
            },
        };
        report.push(DirOutcome::new(&t.set, &t.entry, status, message));
    }

    report
}
