//! `html-backup [set]`: copy each directory's `index.html` to a new backup.

use chrono::NaiveDateTime;

use crate::{
    backup,
    probe::RevisionSource,
    registry::Target,
    ui::{DirOutcome, Report, Status},
};

pub fn run(targets: &[Target], revisions: &dyn RevisionSource, now: NaiveDateTime) -> Report {
    let mut report = Report::new("Backed Up:");

    for t in targets {
        let created = backup::create(&t.dir, revisions, now);
        if let Ok(ref c) = created {
            log::info!("created {}", c.path.display());
        }
        let outcome = match created {
            Ok(created) if created.probe_failure.is_some() => DirOutcome::new(
                &t.set,
                &t.entry,
                Status::Attention,
                format!("created {} (revision unknown)", created.name),
            ),
            Ok(created) => {
                DirOutcome::new(&t.set, &t.entry, Status::Ok, format!("created {}", created.name))
            },
            Err(e) => DirOutcome::new(&t.set, &t.entry, Status::Failed, e.to_string()),
        };
        report.push(outcome);
    }

    report
}
