//! Terminal UI: spinners, per-directory outcome lines, and captured command
//! output.
//!
//! # Design goals
//!
//! - **One line per directory.** Each processed directory produces a [`DirOutcome`]; the report
//!   prints them under a heading and repeats the failures in a final section on stderr.
//! - **Quiet client calls.** `svn` runs behind a spinner with its output captured; only the parsed
//!   number or the error message reaches the report.
//! - **Testable without a terminal.** [`Report::render`] writes to any `io::Write`.

use std::{
    io::{self, Write},
    process::{Command, Output, Stdio},
    time::Duration,
};

use anyhow::{Context, Result};
use console::{StyledObject, style};
use indicatif::{ProgressBar, ProgressStyle};

// ─── Icons ───────────────────────────────────────────────────────────────────

static SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

fn icon(status: Status) -> StyledObject<&'static str> {
    match status {
        Status::Ok => style("✓").green().bold(),
        Status::Attention => style("!").yellow().bold(),
        Status::Failed => style("✗").red().bold(),
    }
}

// ─── Directory outcome ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// Worth a look but not an error: an available update or an unknown revision.
    Attention,
    Failed,
}

/// What happened to one directory (or one file inside it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirOutcome {
    pub set: String,
    /// The directory as written in the configuration.
    pub label: String,
    pub status: Status,
    pub message: String,
}

impl DirOutcome {
    pub fn new(set: &str, label: &str, status: Status, message: impl Into<String>) -> Self {
        Self {
            set: set.into(),
            label: label.into(),
            status,
            message: message.into(),
        }
    }

    pub fn failed(&self) -> bool {
        self.status == Status::Failed
    }
}

// ─── Report ───────────────────────────────────────────────────────────────────

/// Everything one command produced, printed once at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub heading: String,
    pub outcomes: Vec<DirOutcome>,
}

impl Report {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: DirOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(DirOutcome::failed)
    }

    pub fn count(&self, status: Status) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    /// Successes and notices go to `out`; the failure section goes to `err`.
    pub fn render(&self, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", style(&self.heading).bold())?;
        let shown: Vec<&DirOutcome> = self.outcomes.iter().filter(|o| !o.failed()).collect();
        if shown.is_empty() {
            writeln!(out, "  none")?;
        }
        for o in shown {
            writeln!(
                out,
                "  {}  {} {}: {}",
                icon(o.status),
                style(&o.set).dim(),
                o.label,
                o.message
            )?;
        }

        if self.has_failures() {
            writeln!(err)?;
            let heading = format!("Failed ({}):", self.count(Status::Failed));
            writeln!(err, "{}", style(heading).red().bold())?;
            for o in self.outcomes.iter().filter(|o| o.failed()) {
                writeln!(
                    err,
                    "  {}  {} {}: {}",
                    icon(o.status),
                    style(&o.set).dim(),
                    o.label,
                    o.message
                )?;
            }
        }
        Ok(())
    }

    pub fn print(&self) {
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        if let Err(e) = self.render(&mut out, &mut err) {
            log::error!("could not write report: {e}");
        }
    }
}

// ─── Spinner ──────────────────────────────────────────────────────────────────

/// Create and start an indeterminate spinner for `label`.
///
/// indicatif draws to stderr and stays hidden when stderr is not a terminal.
fn make_spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("  {spinner:.cyan}  {msg}") {
        pb.set_style(spinner_style.tick_chars(SPINNER_CHARS));
    }
    pb.set_message(format!("{}", style(label).dim()));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Run `f` behind a spinner labelled `label`.
pub fn with_spinner<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let spinner = make_spinner(label);
    let result = f();
    spinner.finish_and_clear();
    result
}

// ─── Captured execution ───────────────────────────────────────────────────────

/// Run a command, capturing both stdout and stderr.
///
/// Returns `(success, stdout_text, stderr_text)`.
pub fn run_captured(args: &[String]) -> Result<(bool, String, String)> {
    let (prog, rest) = args.split_first().context("cannot run an empty command")?;

    let output: Output = Command::new(prog)
        .args(rest)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("failed to spawn: {}", args.join(" ")))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    Ok((output.status.success(), stdout, stderr))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
