//! Configuration types and loading logic.
//!
//! `Config` is a direct 1-to-1 mapping of `html-backup.toml`.  It is read
//! once at startup and never changes afterwards; the path sets it declares
//! are handed to [`crate::registry::PathSetRegistry`].
//!
//! # File format
//!
//! ```toml
//! root = "/srv/www"   # optional; defaults to the current directory
//!
//! [svn]
//! binary = "svn"      # optional
//!
//! [[set]]
//! name  = "branch-01"
//! paths = ["/phone", "/phone/specs", "/phone/compare"]
//!
//! [[set]]
//! name  = "branch-02"
//! paths = ["/watch", "/watch/compare"]
//! ```
//!
//! Sets are an array of tables so their declared order survives parsing.
//! Paths are relative to `root`; a leading `/` is ignored.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Words the dispatcher claims before looking up set names.
pub const RESERVED_NAMES: [&str; 4] = ["delete", "check", "help", "all"];

// ─── Top-level ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// Base directory configured paths are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub svn: SvnConfig,

    /// Path sets in declared order.
    #[serde(default, rename = "set")]
    pub sets: Vec<PathSetConfig>,
}

// ─── [svn] ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
pub struct SvnConfig {
    /// Client executable, looked up on `PATH` unless it contains a slash.
    #[serde(default = "default_svn_binary")]
    pub binary: String,
}

impl Default for SvnConfig {
    fn default() -> Self {
        Self {
            binary: default_svn_binary(),
        }
    }
}

pub fn default_svn_binary() -> String {
    "svn".into()
}

// ─── [[set]] ──────────────────────────────────────────────────────────────────

/// One named group of directories.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PathSetConfig {
    pub name: String,
    pub paths: Vec<String>,
}

// ─── Validation ───────────────────────────────────────────────────────────────

impl Config {
    /// Reject configurations the dispatcher could not address unambiguously.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for set in &self.sets {
            let name = set.name.trim();
            if name.is_empty() {
                bail!("a [[set]] entry has an empty name");
            }
            if name != set.name {
                bail!("set name '{}' has surrounding whitespace", set.name);
            }
            if RESERVED_NAMES.contains(&name.to_lowercase().as_str()) {
                bail!("set name '{name}' is reserved for a command");
            }
            if !seen.insert(name) {
                bail!("set '{name}' is defined more than once");
            }
            if set.paths.is_empty() {
                bail!("set '{name}' has no paths");
            }
        }
        Ok(())
    }
}

// ─── Loader ───────────────────────────────────────────────────────────────────

/// Read, parse and validate a `Config` from `path`.
///
/// Returns `Ok(None)` when the file does not exist.  Returns an error if the
/// file exists but cannot be read, is not valid TOML, or fails validation.
pub fn parse_config(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validating {}", path.display()))?;

    Ok(Some(cfg))
}

/// Load configuration from `local_path`, falling back to the per-user file.
///
/// 1. `local_path` (default: `./html-backup.toml`)
/// 2. `~/.config/html-backup/config.toml`
///
/// When neither exists a warning is printed and an empty configuration is
/// returned, so `help` still works on a fresh machine.
pub fn load_config(local_path: &Path) -> Result<Config> {
    if let Some(cfg) = parse_config(local_path)? {
        return Ok(cfg);
    }

    if let Some(global) = global_config_path() {
        if let Some(cfg) = parse_config(&global)? {
            log::debug!("using {}", global.display());
            return Ok(cfg);
        }
    }

    eprintln!(
        "Warning: config file '{}' not found, no path sets are configured.",
        local_path.display()
    );
    Ok(Config::default())
}

fn global_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|d| d.join("html-backup").join("config.toml"))
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn set(name: &str, paths: &[&str]) -> PathSetConfig {
        PathSetConfig {
            name: name.into(),
            paths: paths.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    // ── Defaults ─────────────────────────────────────────────────────────────

    #[test]
    fn default_config_has_no_sets() {
        let cfg = Config::default();
        assert!(cfg.sets.is_empty());
        assert!(cfg.root.is_none());
        assert_eq!(cfg.svn.binary, "svn");
    }

    #[test]
    fn empty_toml_deserialises_to_defaults() {
        let cfg: Config = toml::from_str("").expect("empty toml should parse");
        assert!(cfg.sets.is_empty());
        assert_eq!(cfg.svn.binary, default_svn_binary());
    }

    // ── Parsing ──────────────────────────────────────────────────────────────

    #[test]
    fn sets_keep_declared_order() {
        let cfg: Config = toml::from_str(
            r#"
            [[set]]
            name  = "branch-03"
            paths = ["/os"]

            [[set]]
            name  = "branch-01"
            paths = ["/phone", "/phone/specs"]
            "#,
        )
        .expect("parse failed");

        let names: Vec<_> = cfg.sets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["branch-03", "branch-01"]);
        assert_eq!(cfg.sets[1].paths, ["/phone", "/phone/specs"]);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let original = Config {
            root: Some("/srv/www".into()),
            svn: SvnConfig {
                binary: "/usr/local/bin/svn".into(),
            },
            sets: vec![set("branch-01", &["/phone"]), set("branch-02", &["/watch"])],
        };

        let toml_str = toml::to_string(&original).expect("serialisation failed");
        let recovered: Config = toml::from_str(&toml_str).expect("deserialisation failed");

        assert_eq!(recovered.root, original.root);
        assert_eq!(recovered.svn.binary, original.svn.binary);
        assert_eq!(recovered.sets, original.sets);
    }

    // ── Validation ───────────────────────────────────────────────────────────

    #[test]
    fn duplicate_set_names_are_rejected() {
        let cfg = Config {
            sets: vec![set("branch-01", &["/a"]), set("branch-01", &["/b"])],
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn command_words_cannot_be_set_names() {
        for word in ["delete", "Check", "HELP", "all"] {
            let cfg = Config {
                sets: vec![set(word, &["/a"])],
                ..Config::default()
            };
            assert!(cfg.validate().is_err(), "{word} should be reserved");
        }
    }

    #[test]
    fn padded_set_names_are_rejected() {
        let cfg = Config {
            sets: vec![set(" branch-01", &["/phone"]), set("branch-01", &["/watch"])],
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("whitespace"));

        let cfg = Config {
            sets: vec![set("branch-02\t", &["/watch"])],
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn sets_need_paths_and_names() {
        let cfg = Config {
            sets: vec![set("branch-01", &[])],
            ..Config::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = Config {
            sets: vec![set("  ", &["/a"])],
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    // ── parse_config / load_config ───────────────────────────────────────────

    #[test]
    fn parse_config_returns_none_for_missing_file() {
        let path = Path::new("/tmp/this-file-should-never-exist-html-backup.toml");
        assert!(!path.exists(), "test precondition: file must not exist");
        assert!(parse_config(path).unwrap().is_none());
    }

    #[test]
    fn load_config_parses_valid_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"
            root = "/srv/www"

            [[set]]
            name  = "branch-01"
            paths = ["/phone"]
            "#
        )
        .unwrap();

        let cfg = load_config(f.path()).expect("should parse valid toml");
        assert_eq!(cfg.root.as_deref(), Some(Path::new("/srv/www")));
        assert_eq!(cfg.sets, [set("branch-01", &["/phone"])]);
    }

    #[test]
    fn load_config_errors_on_invalid_toml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "not valid toml ][[[").unwrap();
        assert!(load_config(f.path()).is_err());
    }

    #[test]
    fn load_config_errors_on_invalid_sets() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"
            [[set]]
            name  = "help"
            paths = ["/phone"]
            "#
        )
        .unwrap();
        let err = load_config(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("reserved"));
    }
}
