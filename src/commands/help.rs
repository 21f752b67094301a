//! `html-backup help`: usage and the configured set names.

use std::fmt::Write;

use crate::registry::PathSetRegistry;

const USAGE: &[(&str, &str)] = &[
    ("html-backup", "backup all sets"),
    ("html-backup <set>", "backup a specific set"),
    ("html-backup delete", "delete backups in all sets"),
    ("html-backup delete <set>", "delete backups in a specific set"),
    ("html-backup check", "check updates for all sets"),
    ("html-backup check <set>", "check updates for a specific set"),
    ("html-backup help", "show this help"),
];

pub fn usage(registry: &PathSetRegistry) -> String {
    let mut text = String::from("Usage:\n");
    for (invocation, what) in USAGE {
        let _ = writeln!(text, "  {invocation:<28}# {what}");
    }

    text.push_str("\nAvailable sets:\n");
    let names: Vec<&str> = registry.names().collect();
    if names.is_empty() {
        text.push_str("  (none configured)\n");
    } else {
        let _ = writeln!(text, "  {}", names.join(", "));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathSetConfig;

    fn set(name: &str) -> PathSetConfig {
        PathSetConfig {
            name: name.into(),
            paths: vec!["/x".into()],
        }
    }

    #[test]
    fn lists_set_names_in_order() {
        let registry = PathSetRegistry::new("/", vec![set("branch-02"), set("branch-01")]);
        let text = usage(&registry);
        assert!(text.contains("  branch-02, branch-01\n"));
    }

    #[test]
    fn mentions_every_command() {
        let text = usage(&PathSetRegistry::new("/", vec![]));
        for word in ["delete", "check", "help"] {
            assert!(text.contains(&format!("html-backup {word}")), "{word}");
        }
        assert!(text.contains("(none configured)"));
    }

    #[test]
    fn snapshot_usage() {
        let registry = PathSetRegistry::new("/", vec![set("branch-01"), set("branch-02")]);
        insta::assert_snapshot!(usage(&registry), @r"
        Usage:
          html-backup                 # backup all sets
          html-backup <set>           # backup a specific set
          html-backup delete          # delete backups in all sets
          html-backup delete <set>    # delete backups in a specific set
          html-backup check           # check updates for all sets
          html-backup check <set>     # check updates for a specific set
          html-backup help            # show this help

        Available sets:
          branch-01, branch-02
        ");
    }
}
