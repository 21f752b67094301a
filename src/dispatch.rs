//! Maps the positional tokens to an [`Action`] and runs it.
//!
//! ```text
//! (none) | all | <set>    → backup
//! delete [set]            → delete
//! check  [set]            → check
//! help                    → usage
//! anything else           → usage + error, nonzero exit
//! ```
//!
//! Command words are matched case-insensitively; set names are not.  The set
//! is resolved before any directory is touched, so an unknown name aborts
//! the whole run with no I/O.

use std::process::ExitCode;

use chrono::NaiveDateTime;

use crate::{
    commands,
    error::Result,
    probe::RevisionSource,
    registry::PathSetRegistry,
    ui::Report,
};

/// Exit status for a token that is neither a command nor a set.
pub const USAGE_EXIT: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Backup { set: Option<String> },
    Delete { set: Option<String> },
    Check { set: Option<String> },
    Help,
    Unrecognized { token: String },
}

impl Action {
    pub fn parse(command: Option<&str>, set: Option<&str>, registry: &PathSetRegistry) -> Self {
        let set = set.filter(|s| !s.eq_ignore_ascii_case("all")).map(String::from);

        let Some(token) = command else {
            return Self::Backup { set: None };
        };

        match token.to_lowercase().as_str() {
            "help" => Self::Help,
            "delete" => Self::Delete { set },
            "check" => Self::Check { set },
            "all" if set.is_none() => Self::Backup { set: None },
            _ if registry.contains(token) && set.is_none() => Self::Backup {
                set: Some(token.into()),
            },
            _ => Self::Unrecognized {
                token: token.into(),
            },
        }
    }
}

/// Everything a run needs besides the action itself.
pub struct Context<'a> {
    pub registry: &'a PathSetRegistry,
    pub revisions: &'a dyn RevisionSource,
    /// Timestamp shared by every backup taken in this run.
    pub now: NaiveDateTime,
}

/// What [`execute`] produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Completion {
    Usage { error: Option<String>, text: String },
    Report(Report),
}

impl Completion {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage { error: None, .. } => ExitCode::SUCCESS,
            Self::Usage { error: Some(_), .. } => ExitCode::from(USAGE_EXIT),
            Self::Report(r) if r.has_failures() => ExitCode::FAILURE,
            Self::Report(_) => ExitCode::SUCCESS,
        }
    }

    pub fn print(&self) {
        match self {
            Self::Usage { error, text } => {
                if let Some(e) = error {
                    eprintln!("[error] {e}\n");
                }
                print!("{text}");
            },
            Self::Report(r) => r.print(),
        }
    }
}

/// Resolve the action's set and run the matching command.
///
/// Only [`crate::error::Error::UnknownSet`] is returned as an error;
/// directory-level problems are inside the report.
pub fn execute(action: &Action, ctx: &Context<'_>) -> Result<Completion> {
    let report = match action {
        Action::Help => {
            return Ok(Completion::Usage {
                error: None,
                text: commands::help::usage(ctx.registry),
            });
        },
        Action::Unrecognized { token } => {
            return Ok(Completion::Usage {
                error: Some(format!("unknown set or command: {token}")),
                text: commands::help::usage(ctx.registry),
            });
        },
        Action::Backup { set } => {
            let targets = ctx.registry.resolve(set.as_deref())?;
            log::debug!("backing up {} director(ies)", targets.len());
            commands::backup::run(&targets, ctx.revisions, ctx.now)
        },
        Action::Delete { set } => {
            let targets = ctx.registry.resolve(set.as_deref())?;
            commands::delete::run(&targets)
        },
        Action::Check { set } => {
            let targets = ctx.registry.resolve(set.as_deref())?;
            commands::check::run(&targets, ctx.revisions)
        },
    };
    Ok(Completion::Report(report))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
