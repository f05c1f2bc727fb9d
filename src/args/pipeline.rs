//! Pipeline — ties all argument processing stages together.

use crate::args::assembler::ArgAssembler;
use crate::args::classifier::classify;
use crate::args::translator::{translate, Program};
use crate::cli::Cli;
use crate::listfile::{expand_list_files, ListFileError};

/// Warning printed when trailing arguments accompany a listing or
/// testing command. lsar takes no file arguments, so the wrapper drops
/// them instead of forwarding tokens lsar would misread.
pub const LSAR_REST_WARNING: &str = "Warning: [files...], [@list_files...] and \
     [path_to_extract/] are not supported for listing and testing. \
     These parameters are ignored.";

/// Ready-to-use parameters for spawning the translated process.
#[derive(Debug, Clone)]
pub struct SpawnParams {
    /// Command to execute ("unar" or "lsar").
    pub command: &'static str,
    /// CLI arguments for the command.
    pub args: Vec<String>,
    /// Non-fatal warnings produced during argument processing.
    pub warnings: Vec<String>,
}

/// Build spawn parameters from the parsed unrar invocation.
///
/// This is the main entry point for the argument pipeline. The only
/// fallible stage is list-file expansion; everything else is a pure
/// mapping.
pub fn build_spawn_params(cli: &Cli) -> Result<SpawnParams, ListFileError> {
    // Stage 1: Translate command and options to the Unarchiver syntax
    let translation = translate(cli.command, cli.overwrite, cli.password.as_deref());

    let mut warnings = Vec::new();
    let mut files = Vec::new();
    let mut dest_dir = None;

    match translation.program {
        Program::Lsar => {
            // files, @list_files and path are not supported for lsar
            if !cli.rest.is_empty() {
                warnings.push(LSAR_REST_WARNING.to_string());
            }
        }
        Program::Unar => {
            if !cli.rest.is_empty() {
                // Stage 2: Classify the trailing arguments
                let classified = classify(&cli.rest);
                files = classified.files;
                dest_dir = classified.dest_dir;

                // Stage 3: unar can't process @list_files as is, so
                // flatten them into explicit file arguments
                if !classified.list_files.is_empty() {
                    files.extend(expand_list_files(&classified.list_files)?);
                }
            }
        }
    }

    // Stage 4: Assemble the child argv
    let assembler = match translation.program {
        Program::Unar => ArgAssembler::from_options(translation.options)
            .with_auto_dir_suppressed()
            .with_dest_dir(dest_dir.as_deref()),
        Program::Lsar => ArgAssembler::from_options(translation.options),
    };
    let args = assembler.with_archive(&cli.archive).with_files(files).build();

    Ok(SpawnParams {
        command: translation.program.name(),
        args,
        warnings,
    })
}
