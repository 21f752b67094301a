//! `html-backup delete [set]`: remove every backup in each directory.

use crate::{
    backup,
    registry::Target,
    ui::{DirOutcome, Report, Status},
};

pub fn run(targets: &[Target]) -> Report {
    let mut report = Report::new("Deleted Backups:");

    for t in targets {
        match backup::delete(&t.dir) {
            Ok(deleted) => {
                if !deleted.removed.is_empty() {
                    let message = format!(
                        "deleted {} file(s): {}",
                        deleted.removed.len(),
                        deleted.removed.join(", ")
                    );
                    report.push(DirOutcome::new(&t.set, &t.entry, Status::Ok, message));
                } else if deleted.failures.is_empty() {
                    report.push(DirOutcome::new(
                        &t.set,
                        &t.entry,
                        Status::Ok,
                        "no backup files found",
                    ));
                }
                for failure in deleted.failures {
                    report.push(DirOutcome::new(
                        &t.set,
                        &t.entry,
                        Status::Failed,
                        failure.to_string(),
                    ));
                }
            },
            Err(e) => report.push(DirOutcome::new(&t.set, &t.entry, Status::Failed, e.to_string())),
        }
    }

    report
}
