//! unrar-wrapper — backwards compatibility between unar/lsar and unrar.
//!
//! Translates a subset of the legacy unrar command syntax to The
//! Unarchiver's `unar` (extraction) and `lsar` (listing, testing) tools
//! and executes the result.
//!
//! Supported commands: `l[t[a],b]`, `t`, `v[t[a],b]`, `x`.
//! Supported options: `-o+`, `-o-`, `-or`, `-p`.
//! Return codes: 0 (success), 1 (error), 2 (invalid argument).

pub mod args;
pub mod cli;
pub mod exec;
pub mod listfile;
pub mod trace;
