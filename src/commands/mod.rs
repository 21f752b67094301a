//! Command handlers.
//!
//! Each file in this module corresponds to one user-facing command:
//!
//! | File          | Invocation                   | Description                          |
//! |---------------|------------------------------|--------------------------------------|
//! | `backup.rs`   | `html-backup [set]`          | Copy `index.html` to a new backup    |
//! | `delete.rs`   | `html-backup delete [set]`   | Remove existing backups              |
//! | `check.rs`    | `html-backup check [set]`    | Compare local and remote revisions   |
//! | `help.rs`     | `html-backup help`           | Usage and configured set names       |
//!
//! The first three take already-resolved targets and return a
//! [`crate::ui::Report`]; they never stop early on a directory failure.

pub mod backup;
pub mod check;
pub mod delete;
pub mod help;
