//! [`RevisionSource`] backed by the `svn` command-line client.
//!
//! Each query is one `svn info --show-item …` call whose stdout is a single
//! integer.  Every way that can go wrong maps to a [`ProbeError`]; nothing
//! here panics or aborts the run.

use std::{io, path::Path};

use crate::{
    error::ProbeError,
    probe::{RevisionQuery, RevisionSource},
    runner::{show_item, svn_info_args},
    ui::{run_captured, with_spinner},
};

#[derive(Debug, Clone)]
pub struct SvnClient {
    binary: String,
}

impl SvnClient {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl RevisionSource for SvnClient {
    fn query(&self, target: &Path, query: RevisionQuery) -> Result<u64, ProbeError> {
        let args = svn_info_args(&self.binary, query, target);
        log::debug!("running {}", args.join(" "));

        let label = format!("svn info {} {}", show_item(query), target.display());
        let (ok, stdout, stderr) = with_spinner(&label, || run_captured(&args)).map_err(|e| {
            let missing = e
                .chain()
                .filter_map(|c| c.downcast_ref::<io::Error>())
                .any(|io| io.kind() == io::ErrorKind::NotFound);
            if missing {
                ProbeError::ClientMissing {
                    binary: self.binary.clone(),
                }
            } else {
                ProbeError::Spawn {
                    binary: self.binary.clone(),
                    message: format!("{e:#}"),
                }
            }
        })?;

        if !ok {
            let message = [stderr.trim(), stdout.trim()]
                .into_iter()
                .find(|s| !s.is_empty())
                .unwrap_or("svn info failed")
                .to_string();
            log::debug!("svn info failed for {}: {message}", target.display());
            return Err(ProbeError::Failed { message });
        }

        parse_revision(&stdout)
    }
}

/// Parse the single integer `svn info --show-item` prints.
pub fn parse_revision(stdout: &str) -> Result<u64, ProbeError> {
    stdout
        .trim()
        .parse()
        .map_err(|_| ProbeError::Unparseable {
            output: stdout.to_string(),
        })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
