//! Command argument construction helpers.
//!
//! This module is responsible for *building* the argument lists passed to
//! the version-control client.  It does **not** execute anything; execution
//! lives in [`crate::ui::run_captured`] so the spinner can own the terminal
//! while commands run.
//!
//! Every function here is pure and unit-testable without `svn` installed.

use std::path::Path;

use crate::probe::RevisionQuery;

/// The `--show-item` value for `query`.
pub const fn show_item(query: RevisionQuery) -> &'static str {
    match query {
        RevisionQuery::Working => "revision",
        RevisionQuery::LastChanged | RevisionQuery::Head => "last-changed-revision",
    }
}

/// Builds a single-value `svn info` invocation:
///
/// ```text
/// svn  info  --non-interactive  --show-item <item>  [-r HEAD]  <target>
/// ```
///
/// `--non-interactive` turns a credential prompt into a failure instead of a
/// hang.
pub fn svn_info_args(binary: &str, query: RevisionQuery, target: &Path) -> Vec<String> {
    let mut cmd: Vec<String> = vec![
        binary.into(),
        "info".into(),
        "--non-interactive".into(),
        "--show-item".into(),
        show_item(query).into(),
    ];
    if query == RevisionQuery::Head {
        cmd.extend(["-r".into(), "HEAD".into()]);
    }
    cmd.push(target.to_string_lossy().into_owned());
    cmd
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> &'static Path {
        Path::new("/srv/www/phone/index.html")
    }

    #[test]
    fn working_query_asks_for_revision() {
        let args = svn_info_args("svn", RevisionQuery::Working, target());
        let idx = args.iter().position(|a| a == "--show-item").unwrap();
        assert_eq!(args[idx + 1], "revision");
        assert!(!args.contains(&"HEAD".to_string()));
    }

    #[test]
    fn target_is_last() {
        for query in [
            RevisionQuery::Working,
            RevisionQuery::LastChanged,
            RevisionQuery::Head,
        ] {
            let args = svn_info_args("svn", query, target());
            assert_eq!(args.last().unwrap(), "/srv/www/phone/index.html");
        }
    }

    #[test]
    fn custom_binary_comes_first() {
        let args = svn_info_args("/opt/svn/bin/svn", RevisionQuery::LastChanged, target());
        assert_eq!(args[0], "/opt/svn/bin/svn");
    }

    #[test]
    fn paths_with_spaces_stay_one_argument() {
        let args = svn_info_args("svn", RevisionQuery::Head, Path::new("/srv/my site/index.html"));
        assert_eq!(args.last().unwrap(), "/srv/my site/index.html");
    }

    // ── insta snapshots ───────────────────────────────────────────────────────

    #[test]
    fn snapshot_last_changed_args() {
        insta::assert_debug_snapshot!(svn_info_args("svn", RevisionQuery::LastChanged, target()), @r#"
        [
            "svn",
            "info",
            "--non-interactive",
            "--show-item",
            "last-changed-revision",
            "/srv/www/phone/index.html",
        ]
        "#);
    }

    #[test]
    fn snapshot_head_args() {
        insta::assert_debug_snapshot!(svn_info_args("svn", RevisionQuery::Head, target()), @r#"
        [
            "svn",
            "info",
            "--non-interactive",
            "--show-item",
            "last-changed-revision",
            "-r",
            "HEAD",
            "/srv/www/phone/index.html",
        ]
        "#);
    }
}
