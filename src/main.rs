//! `html-backup` keeps timestamped, revision-tagged copies of `index.html`
//! next to the original, across named groups of directories.
//!
//! # Usage
//!
//! ```text
//! html-backup                 # backup all sets
//! html-backup <set>           # backup a specific set
//! html-backup delete [set]    # delete backups
//! html-backup check [set]     # compare working copy with the repository
//! html-backup help            # usage and configured sets
//! ```
//!
//! # Module layout
//!
//! | Module                   | Responsibility                                  |
//! |--------------------------|-------------------------------------------------|
//! | [`cli`]                  | Argument types parsed by clap                   |
//! | [`config`]               | `Config` struct + TOML loader                   |
//! | [`registry`]             | Set name → directories                          |
//! | [`naming`]               | Backup file name format                         |
//! | [`backup`]               | Create / list / delete backups in a directory   |
//! | [`probe`]                | Revision types and the `RevisionSource` trait   |
//! | [`svn`]                  | `RevisionSource` over the `svn` client          |
//! | [`runner`]               | `svn` argument construction                     |
//! | [`dispatch`]             | Token → action, action → command                |
//! | [`commands`]             | One handler per command                         |
//! | [`ui`]                   | Spinner, captured execution, report output      |

mod backup;
mod cli;
mod commands;
mod config;
mod dispatch;
mod error;
mod naming;
mod probe;
mod registry;
mod runner;
mod svn;
mod ui;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use chrono::Local;
use clap::Parser;
use cli::Cli;
use dispatch::{Action, Context};
use log::LevelFilter;
use registry::PathSetRegistry;
use svn::SvnClient;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = config::load_config(&cli.config)?;
    if cli.print_config {
        println!("{cfg:#?}");
        return Ok(ExitCode::SUCCESS);
    }

    let root = match cli.root.clone().or_else(|| cfg.root.clone()) {
        Some(root) => root,
        None => std::env::current_dir().context("resolving the current directory")?,
    };
    log::debug!("resolving paths against {}", root.display());

    let registry = PathSetRegistry::from_config(&cfg, root);
    let svn = SvnClient::new(&cfg.svn.binary);
    let ctx = Context {
        registry: &registry,
        revisions: &svn,
        now: naming::truncate_to_minute(Local::now().naive_local()),
    };

    let action = Action::parse(cli.command.as_deref(), cli.set.as_deref(), &registry);
    log::debug!("action: {action:?}");

    let done = dispatch::execute(&action, &ctx)?;
    done.print();
    Ok(done.exit_code())
}

/// `-v` info, `-vv` debug, `-vvv` trace; warnings otherwise.  `RUST_LOG`
/// is applied on top.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
