//! CLI surface — parses the legacy unrar synopsis into the argument model.
//!
//! The unrar synopsis is:
//!
//! ```text
//! unrar command [option1] [optionN] archive [files...] [@list-files...] [path_to_extract/]
//! ```
//!
//! This is a thin adapter around clap; every decision lives in the
//! [`args`](crate::args) pipeline. An invalid command or flag is rejected
//! by clap itself, which exits with status 2 before the pipeline runs.

use clap::{Parser, ValueEnum};

/// Legacy unrar command tokens. Closed enumeration; clap rejects
/// anything else before the pipeline sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnrarCommand {
    /// List archive contents
    L,
    /// List archive contents with technical information
    Lt,
    /// List archive contents with full technical information
    Lta,
    /// List archive contents, bare format
    Lb,
    /// Test archive files
    T,
    /// Verbosely list archive contents
    V,
    /// Verbosely list, technical information
    Vt,
    /// Verbosely list, full technical information
    Vta,
    /// Verbosely list, bare format
    Vb,
    /// Extract files with full path
    X,
}

/// Overwrite mode for extraction. Mirrors unrar's `-o+`, `-o-`, `-or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverwriteMode {
    /// `-o+` — overwrite existing files
    #[value(name = "+")]
    Force,
    /// `-o-` — skip existing files
    #[value(name = "-")]
    Skip,
    /// `-or` — rename extracted files automatically
    #[value(name = "r")]
    Rename,
}

/// Parsed unrar invocation — the argument model the pipeline consumes.
/// Built once per run, never mutated.
#[derive(Parser, Debug)]
#[command(name = "unrar-wrapper")]
#[command(version)]
#[command(
    about = "Transforms the basic unrar commands to unar and lsar calling \
             in order to provide a backwards compatibility"
)]
pub struct Cli {
    /// unrar command
    #[arg(value_enum)]
    pub command: UnrarCommand,

    /// '-o+' Set the overwrite mode, '-o-' Unset the overwrite mode,
    /// '-or' Rename files automatically
    #[arg(short = 'o', value_name = "MODE", allow_hyphen_values = true)]
    pub overwrite: Option<OverwriteMode>,

    /// Set password
    #[arg(short = 'p', value_name = "PASSWORD")]
    pub password: Option<String>,

    /// The path to the archive
    pub archive: String,

    /// [files...] [@list-files...] [path_to_extract/]
    #[arg(value_name = "REST")]
    pub rest: Vec<String>,
}
