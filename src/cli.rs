//! Command-line interface definition.
//!
//! All argument parsing lives here so the rest of the codebase can stay
//! agnostic to `clap`.  The positional tokens are deliberately plain strings:
//! whether the first one is a command word or a set name depends on the
//! configuration, so [`crate::dispatch::Action::parse`] decides.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name    = "html-backup",
    about   = "Timestamped, revision-tagged index.html backups across configured path sets",
    version,
    help_template = "\
{before-help}{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}",
    after_help = "Run 'html-backup help' to list the configured sets."
)]
pub struct Cli {
    /// Path to the configuration file.
    ///
    /// When the file does not exist, `~/.config/html-backup/config.toml` is
    /// tried next.
    #[arg(short, long, default_value = "html-backup.toml")]
    pub config: PathBuf,

    /// Directory the configured paths are relative to.
    ///
    /// Overrides `root` from the configuration file.  Defaults to the
    /// current working directory.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Print the parsed configuration and exit without touching any files.
    #[arg(long)]
    pub print_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// `delete`, `check`, `help`, or a set name to back up.
    #[arg(value_name = "COMMAND|SET")]
    pub command: Option<String>,

    /// Set name for `delete` and `check`.
    #[arg(value_name = "SET")]
    pub set: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("html-backup").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.config, PathBuf::from("html-backup.toml"));
        assert!(cli.command.is_none());
        assert!(cli.set.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn positional_tokens() {
        let cli = parse(&["check", "branch-01"]);
        assert_eq!(cli.command.as_deref(), Some("check"));
        assert_eq!(cli.set.as_deref(), Some("branch-01"));
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }

    #[test]
    fn help_word_is_a_plain_token() {
        assert_eq!(parse(&["help"]).command.as_deref(), Some("help"));
    }

    #[test]
    fn too_many_tokens_is_an_error() {
        assert!(Cli::try_parse_from(["html-backup", "delete", "a", "b"]).is_err());
    }
}
