//! Syntax translator — legacy unrar command → unar/lsar invocation.

use crate::cli::{OverwriteMode, UnrarCommand};

/// Which replacement tool handles the translated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// `unar` — extraction.
    Unar,
    /// `lsar` — listing and testing.
    Lsar,
}

impl Program {
    /// Executable name as invoked on PATH.
    pub fn name(self) -> &'static str {
        match self {
            Program::Unar => "unar",
            Program::Lsar => "lsar",
        }
    }
}

/// Result of translating a legacy command: the target program and its
/// base option list, in final order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub program: Program,
    pub options: Vec<String>,
}

/// Translate the unrar command and options to the Unarchiver syntax.
///
/// Infallible: the command enumeration is closed and every variant has a
/// mapping. Option order is significant; a password always comes after
/// all command-derived options, for either program.
pub fn translate(
    command: UnrarCommand,
    overwrite: Option<OverwriteMode>,
    password: Option<&str>,
) -> Translation {
    let mut options = Vec::new();

    let program = match command {
        UnrarCommand::X => {
            match overwrite {
                // '-o+' means force-overwrite
                Some(OverwriteMode::Force) => options.push("-f".to_string()),
                // '-o-' means force-skip
                Some(OverwriteMode::Skip) => options.push("-s".to_string()),
                // '-or' means force-rename
                Some(OverwriteMode::Rename) => options.push("-r".to_string()),
                None => {}
            }
            Program::Unar
        }
        // 'lb' and 'vb' are translated to a plain lsar call
        UnrarCommand::Lb | UnrarCommand::Vb => Program::Lsar,
        UnrarCommand::L | UnrarCommand::V => {
            options.push("-l".to_string());
            Program::Lsar
        }
        UnrarCommand::Lt | UnrarCommand::Lta | UnrarCommand::Vt | UnrarCommand::Vta => {
            options.push("-L".to_string());
            Program::Lsar
        }
        UnrarCommand::T => {
            options.push("-t".to_string());
            Program::Lsar
        }
    };

    // '-p' makes sense for both programs
    if let Some(password) = password {
        options.push("-p".to_string());
        options.push(password.to_string());
    }

    Translation { program, options }
}
